//! devgate - local development server for browser front-ends.
//!
//! Serves a client build directory during development, exposes prefixed
//! environment variables to the browser, and keeps Chrome 129 (which can't
//! load ES modules from unbundled dev servers) off the dev server with a
//! notice page.
//!
//! # Architecture
//!
//! - [`guard`] - The Chrome 129 request guard and its axum middleware
//! - [`env`] - `.env` loading and the `/@env` client module
//! - [`config`] - Layered configuration (devgate.toml, `DEVGATE_*`, CLI)
//! - [`dev`] - Router, port binding and the serve loop
//! - [`commands`] - CLI command implementations
//! - [`error`] - Error types with actionable hints
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Terminal status output
//!
//! # Example
//!
//! ```rust
//! use devgate::guard::{evaluate, Verdict};
//!
//! assert_eq!(
//!     evaluate(Some("Mozilla/5.0 Chrome/129.0.6668.59 Safari/537.36")),
//!     Verdict::Intercept { version: 129 }
//! );
//! assert_eq!(evaluate(None), Verdict::Forward);
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod dev;
pub mod env;
pub mod error;
pub mod guard;
pub mod logger;
pub mod ui;

// Re-export commonly used types
pub use error::{CliError, ConfigError, Result, ResultExt};
