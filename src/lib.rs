/// Handles argument parsing and workflow orchestration.
pub mod cli;

/// Constants used throughout the application.
pub mod constants;

/// Interactive user input handling.
pub mod dialoguer;

/// Defines custom error types.
pub mod error;

/// Materializes a file tree on the filesystem.
pub mod generator;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Template rendering functionality.
pub mod renderer;

/// Formats generation results and maps them to exit codes.
pub mod report;

/// The embedded template catalogue and file tree types.
pub mod template;

/// Project name sanitization.
pub mod validation;
