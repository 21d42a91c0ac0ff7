use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::Mode;
use crate::config::{ConfigOverrides, GuardOverrides, ServerOverrides};

/// Available devgate subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the development server
    ///
    /// Serves the root directory, the /@env module, and runs the Chrome 129
    /// request guard.
    Dev(DevArgs),

    /// Serve production output locally
    ///
    /// Same as `dev` but in production mode and without the request guard.
    Preview(PreviewArgs),

    /// Validate configuration
    ///
    /// Loads devgate.toml, DEVGATE_* variables and defaults, validates the
    /// result and prints it as JSON.
    Check(CheckArgs),

    /// Show the guard decision for a user agent string
    ///
    /// Prints "intercept" or "forward" followed by the detected
    /// Chrome/Chromium major version, if any.
    Probe(ProbeArgs),

    /// Write an example devgate.toml
    Init(InitArgs),
}

/// Flags shared by `dev` and `preview`
#[derive(Args, Debug, Clone, Default)]
pub struct ServerArgs {
    /// Directory to serve (overrides `root` in devgate.toml)
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Port to listen on
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,

    /// Host to bind ("localhost" or an IP address)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Exit if the port is busy (true) or try the next ports (false)
    #[arg(long, value_name = "BOOL")]
    pub strict_port: Option<bool>,

    /// Mode exposed to the browser and used to pick .env.<mode> files
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Path to the config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Open the browser once the server is listening
    #[arg(long)]
    pub open: bool,
}

impl ServerArgs {
    /// Config overrides from these flags.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            root: self.root.clone(),
            server: ServerOverrides {
                host: self.host.clone(),
                port: self.port,
                strict_port: self.strict_port,
            },
            guard: GuardOverrides::default(),
        }
    }
}

/// Arguments for the dev command
#[derive(Args, Debug, Clone, Default)]
pub struct DevArgs {
    #[command(flatten)]
    pub server: ServerArgs,

    /// Disable the Chrome 129 request guard
    #[arg(long)]
    pub no_guard: bool,
}

impl DevArgs {
    pub fn overrides(&self) -> ConfigOverrides {
        let mut overrides = self.server.overrides();
        if self.no_guard {
            overrides.guard.enabled = Some(false);
        }
        overrides
    }
}

/// Arguments for the preview command
#[derive(Args, Debug, Clone, Default)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub server: ServerArgs,
}

/// Arguments for the check command
#[derive(Args, Debug, Clone, Default)]
pub struct CheckArgs {
    /// Path to the config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the JSON schema for devgate.toml instead
    #[arg(long)]
    pub schema: bool,
}

/// Arguments for the probe command
#[derive(Args, Debug, Clone)]
pub struct ProbeArgs {
    /// User agent string to test
    #[arg(value_name = "USER_AGENT")]
    pub user_agent: String,
}

/// Arguments for the init command
#[derive(Args, Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite an existing devgate.toml
    #[arg(short, long)]
    pub force: bool,
}
