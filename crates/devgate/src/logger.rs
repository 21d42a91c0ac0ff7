//! Logging setup for the devgate CLI.
//!
//! Built on `tracing`. Verbosity comes from the global flags, falling back to
//! `RUST_LOG`, falling back to `info` for devgate and `warn` for the HTTP
//! stack.
//!
//! # Example
//!
//! ```rust,no_run
//! use devgate::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("Starting dev server");
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const VERBOSE_FILTER: &str = "devgate=debug,tower_http=debug";
const QUIET_FILTER: &str = "devgate=error";
const DEFAULT_FILTER: &str = "devgate=info,tower_http=warn";

/// Initialize the tracing subscriber.
///
/// Call once at startup, before any logging occurs.
///
/// 1. `--verbose`: debug for devgate and request traces
/// 2. `--quiet`: errors only
/// 3. `RUST_LOG` when set
/// 4. otherwise info for devgate
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(build_filter(verbose, quiet), no_color);
}

/// Initialize logger with a custom environment filter.
///
/// Logs go to stderr; stdout is reserved for command output.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn build_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}
