use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

use crate::constants::verbosity;

/// CLI arguments for pwaforge.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Project name; prompted interactively when omitted.
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Destination directory (defaults to ./<sanitized-name>).
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Force overwrite of an existing output directory.
    #[arg(short, long)]
    pub force: bool,

    /// Preview the planned files without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse command line arguments.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        use crate::constants::verbosity;
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_minimal_args() {
        let args = Args::parse_from(["pwaforge", "my-game"]);
        assert_eq!(args.name.as_deref(), Some("my-game"));
        assert_eq!(args.output_dir, None);
        assert!(!args.force);
        assert!(!args.dry_run);
    }

    #[test]
    fn name_is_optional() {
        let args = Args::parse_from(["pwaforge"]);
        assert_eq!(args.name, None);
    }

    #[test]
    fn parses_full_feature_flags() {
        let args = Args::parse_from([
            "pwaforge",
            "Space Shooter 2024",
            "--output-dir",
            "out/shooter",
            "--force",
            "--dry-run",
            "-vvv",
        ]);
        assert_eq!(args.name.as_deref(), Some("Space Shooter 2024"));
        assert_eq!(args.output_dir, Some(PathBuf::from("out/shooter")));
        assert!(args.force);
        assert!(args.dry_run);
        assert_eq!(args.verbose, 3);
    }
}
