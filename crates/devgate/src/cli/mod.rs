//! Command-line interface definition.
//!
//! # Command Structure
//!
//! - `devgate dev` - Development server with the request guard
//! - `devgate preview` - Serve production output, no guard
//! - `devgate check` - Validate and print the resolved configuration
//! - `devgate probe` - Show what the guard does with a user agent
//! - `devgate init` - Write an example devgate.toml

mod commands;
pub mod enums;

use clap::Parser;

pub use commands::{CheckArgs, Command, DevArgs, InitArgs, PreviewArgs, ProbeArgs, ServerArgs};
pub use enums::*;

/// devgate - local dev server for browser front-ends
#[derive(Parser, Debug)]
#[command(
    name = "devgate",
    version,
    about = "Local development server for browser front-ends",
    long_about = "devgate serves a front-end build directory for local development.\n\
                  It exposes prefixed environment variables to the browser at /@env and\n\
                  shows a notice page to Chrome 129, which cannot load ES modules from\n\
                  unbundled dev servers."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Includes one line per HTTP request and every guard decision.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
