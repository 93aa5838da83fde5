//! Constants used throughout the pwaforge application

/// Default minimum length of a sanitized project name
pub const MIN_PROJECT_NAME_LENGTH: usize = 1;

/// Default maximum length of a sanitized project name
pub const MAX_PROJECT_NAME_LENGTH: usize = 50;

/// Generator version embedded into generated files
pub const GENERATOR_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const VALIDATION_FAILURE: i32 = 1;
    pub const GENERATION_FAILURE: i32 = 2;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
