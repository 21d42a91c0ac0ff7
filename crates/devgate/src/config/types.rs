use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::config::defaults::*;

// Mode comes from `--mode` only; it is not a devgate.toml key
pub use crate::cli::Mode;

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServerConfig {
    /// Host to bind ("localhost" or an IP address)
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Fail when the port is busy instead of trying the next ones
    #[serde(default = "default_strict_port")]
    pub strict_port: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            strict_port: default_strict_port(),
        }
    }
}

/// Request guard settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GuardConfig {
    /// Show the Chrome 129 notice page on the dev server
    #[serde(default = "default_guard_enabled")]
    pub enabled: bool,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            enabled: default_guard_enabled(),
        }
    }
}
