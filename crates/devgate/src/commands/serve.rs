//! Startup sequence shared by `dev` and `preview`.

use crate::cli::ServerArgs;
use crate::config::{ConfigOverrides, DevgateConfig, Mode};
use crate::dev::{self, DevServer, ServerKind};
use crate::env::{self, ClientEnv};
use crate::error::{CliError, Result, ResultExt};
use crate::ui;
use std::time::Instant;

/// Load config, prepare the client environment, bind and serve until Ctrl+C.
///
/// # Errors
///
/// Returns errors for:
/// - Invalid configuration or `.env` files
/// - A missing root directory
/// - Port binding failures
pub(crate) async fn run(
    args: &ServerArgs,
    overrides: ConfigOverrides,
    kind: ServerKind,
    default_mode: Mode,
) -> Result<()> {
    let started = Instant::now();

    let config = DevgateConfig::load(&overrides, args.config.as_deref())?;
    config.validate()?;

    if !config.root.is_dir() {
        return Err::<(), _>(CliError::FileNotFound(config.root.clone())).with_hint(
            "Build the front-end first or pass the directory to serve, e.g. `devgate dev build/client`",
        );
    }

    let mode = args.mode.unwrap_or(default_mode);
    let vars = env::load_env(&config.env_dir, mode).context(format!(
        "Failed to load .env files from {}",
        config.env_dir.display()
    ))?;
    let client_env = ClientEnv::resolve(&config.env_prefix, mode, &vars);
    tracing::debug!(
        count = client_env.len(),
        names = ?client_env.names().collect::<Vec<_>>(),
        "client environment"
    );

    let server = DevServer::new(config, kind, client_env.to_module()?);
    let listener = server.bind().await?;
    let addr = listener.local_addr()?;
    let router = server.router();

    ui::print_server_banner(&ui::ServerBanner {
        kind: kind.as_str(),
        addr,
        root: &server.config().root,
        mode,
        guard: server.guard_enabled(),
        startup: started.elapsed(),
    });

    if args.open {
        open_browser(&ui::server_url(addr));
    }

    ui::info("Press Ctrl+C to stop");
    dev::serve(listener, router).await?;

    ui::success("Server stopped");
    Ok(())
}

/// Open the server URL in the default browser.
///
/// Uses platform-specific commands:
/// - macOS: `open`
/// - Windows: `start`
/// - Linux: `xdg-open`
fn open_browser(url: &str) {
    use std::process::Command;

    let result = if cfg!(target_os = "macos") {
        Command::new("open").arg(url).spawn()
    } else if cfg!(target_os = "windows") {
        Command::new("cmd").args(["/C", "start", url]).spawn()
    } else {
        Command::new("xdg-open").arg(url).spawn()
    };

    match result {
        Ok(_) => ui::info(&format!("Opened browser at {}", url)),
        Err(e) => ui::warning(&format!("Failed to open browser: {}", e)),
    }
}
