//! devgate CLI entry point.
//!
//! Parses arguments, sets up logging and dispatches to the command.

use clap::Parser;
use devgate::{cli, commands, error, logger, ui};
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Dev(dev_args) => commands::dev_execute(dev_args).await,
        cli::Command::Preview(preview_args) => commands::preview_execute(preview_args).await,
        cli::Command::Check(check_args) => commands::check_execute(check_args).await,
        cli::Command::Probe(probe_args) => commands::probe_execute(probe_args).await,
        cli::Command::Init(init_args) => commands::init_execute(init_args).await,
    };

    result.map_err(error::cli_error_to_miette)
}
