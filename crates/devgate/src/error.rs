//! Error handling for the devgate CLI.
//!
//! Errors are grouped the same way users hit them:
//! - **Top-level errors** (`CliError`) cover every command
//! - **Configuration errors** (`ConfigError`) carry the field and a hint
//! - **Context helpers** (`ResultExt`) attach paths and hints at call sites
//!
//! The binary converts `CliError` into a `miette` report right before exit.
//!
//! # Example
//!
//! ```rust,no_run
//! use devgate::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_index(root: &Path) -> Result<String> {
//!     let path = root.join("index.html");
//!     std::fs::read_to_string(&path)
//!         .with_path(&path)
//!         .with_hint("Run your front-end build first")
//! }
//! ```

mod report;

pub use report::cli_error_to_miette;

use std::path::PathBuf;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (file not found, invalid values, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Port is taken and `strictPort` forbids falling back
    #[error("Port {port} is already in use\n\nHint: Free the port, pick another with --port, or set server.strictPort = false")]
    PortInUse {
        /// The requested port
        port: u16,
    },

    /// I/O errors from file system or socket operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP server errors
    #[error("Server error: {0}")]
    Server(String),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with custom messages
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Explicitly requested config file doesn't exist
    #[error("Config file not found: {}\n\nHint: Run 'devgate init' to create devgate.toml or fix the --config path", .0.display())]
    NotFound(PathBuf),

    /// A `.env` file could not be parsed
    #[error("Invalid env file {}: {message}\n\nHint: Lines must look like KEY=value", .path.display())]
    InvalidEnvFile {
        /// The offending file
        path: PathBuf,
        /// Parser message
        message: String,
    },

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },

    /// Config file could not be serialized (e.g. for `devgate init`)
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Extension trait for adding context to `Result` types.
pub trait ResultExt<T> {
    /// Turn a not-found I/O error into [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T>;

    /// Append a hint to the error message.
    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T>;

    /// Prefix the error message.
    fn context(self, msg: impl std::fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<std::path::Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }

    fn with_hint(self, hint: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}\n\nHint: {}", err, hint))
        })
    }

    fn context(self, msg: impl std::fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{}: {}", msg, err))
        })
    }
}
