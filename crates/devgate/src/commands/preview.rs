//! Preview command: serve production output without dev-only behavior.

use crate::cli::PreviewArgs;
use crate::commands::serve;
use crate::config::Mode;
use crate::dev::ServerKind;
use crate::error::Result;

/// Execute the preview command.
pub async fn execute(args: PreviewArgs) -> Result<()> {
    let overrides = args.server.overrides();
    serve::run(&args.server, overrides, ServerKind::Preview, Mode::Production).await
}
