use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Scripts can tell a missing package apart from a broken setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Resolution finished and reports were written
    Success = 0,
    /// The root package (or one reached during traversal) is not in the index
    PackageNotFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config, network, file I/O, decoding, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code matching an error returned from the application
    pub fn from_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<DepGraphError>() {
            Some(DepGraphError::PackageNotFound { .. }) => ExitCode::PackageNotFound,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::PackageNotFound => write!(f, "Package Not Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Renders the optional version part of a `PackageNotFound` message
fn version_suffix(version: &Option<String>) -> String {
    match version {
        Some(v) => format!(" (version {})", v),
        None => String::new(),
    }
}

/// Application-specific errors for dependency resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DepGraphError {
    #[error("Package not found in index: {name}{}\n\n💡 Hint: Check the package name and version in the configuration file", version_suffix(.version))]
    PackageNotFound {
        name: String,
        version: Option<String>,
    },

    #[error("Failed to read config file: {path}\nDetails: {details}\n\n💡 Hint: Check that the file exists and is readable")]
    ConfigReadError { path: PathBuf, details: String },

    #[error("Failed to parse config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file contains a single JSON object with the expected keys")]
    ConfigParseError { path: PathBuf, details: String },

    #[error("Invalid configuration value for '{field}'\nReason: {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Failed to read package index: {location}\nDetails: {details}\n\n💡 Hint: In test repository mode, repository_url must point to a local index file")]
    IndexReadError { location: String, details: String },

    #[error("Failed to download package index: {url}\nDetails: {details}\n\n💡 Hint: Verify the repository URL and your network connection")]
    IndexFetchError { url: String, details: String },

    #[error("Failed to decode package index: {location}\nDetails: {details}")]
    IndexDecodeError { location: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
