//! Development server command.

use crate::cli::DevArgs;
use crate::commands::serve;
use crate::config::Mode;
use crate::dev::ServerKind;
use crate::error::Result;

/// Execute the dev command.
///
/// Runs in development mode unless `--mode` says otherwise. The request
/// guard is on unless `--no-guard` or `guard.enabled = false`.
pub async fn execute(args: DevArgs) -> Result<()> {
    let overrides = args.overrides();
    serve::run(&args.server, overrides, ServerKind::Dev, Mode::Development).await
}
