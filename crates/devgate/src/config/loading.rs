use crate::config::DevgateConfig;
use crate::error::{ConfigError, Result};
use figment::{
    providers::{Env, Format as _, Serialized, Toml},
    value::{Uncased, UncasedStr},
    Figment,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "devgate.toml";

const ENV_PREFIX: &str = "DEVGATE_";

/// Values given on the command line. Unset fields leave lower layers alone.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,

    #[serde(skip_serializing_if = "ServerOverrides::is_empty")]
    pub server: ServerOverrides,

    #[serde(skip_serializing_if = "GuardOverrides::is_empty")]
    pub guard: GuardOverrides,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub strict_port: Option<bool>,
}

impl ServerOverrides {
    fn is_empty(&self) -> bool {
        self.host.is_none() && self.port.is_none() && self.strict_port.is_none()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl GuardOverrides {
    fn is_empty(&self) -> bool {
        self.enabled.is_none()
    }
}

impl DevgateConfig {
    /// Load configuration from multiple sources.
    /// Priority: CLI args > environment variables > config file > defaults
    ///
    /// An explicit `config_path` must exist; the default `devgate.toml` is
    /// optional.
    pub fn load(overrides: &ConfigOverrides, config_path: Option<&Path>) -> Result<Self> {
        let config_file = match config_path {
            Some(path) if !path.is_file() => {
                return Err(ConfigError::NotFound(path.to_path_buf()).into());
            }
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default_path = Path::new(CONFIG_FILE);
                default_path.is_file().then(|| default_path.to_path_buf())
            }
        };

        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = config_file {
            tracing::debug!(path = %path.display(), "loading config file");
            figment = figment.merge(Toml::file(path));
        }

        // DEVGATE_SERVER__PORT=3000 -> server.port
        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .map(|key| Uncased::from(env_key_to_path(key)))
                .lowercase(false),
        );

        figment = figment.merge(Serialized::defaults(overrides));

        figment.extract().map_err(|e| {
            ConfigError::InvalidValue {
                field: "configuration".to_string(),
                value: e.to_string(),
                hint: "Check devgate.toml syntax and DEVGATE_* environment variables".to_string(),
            }
            .into()
        })
    }
}

/// Map an environment key (prefix already stripped) to a config path.
///
/// Sections are separated by `__`, words by `_`:
/// `SERVER__STRICT_PORT` becomes `server.strictPort`.
pub fn env_key_to_path(key: &UncasedStr) -> String {
    key.as_str()
        .split("__")
        .map(snake_to_camel)
        .collect::<Vec<_>>()
        .join(".")
}

fn snake_to_camel(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for (i, word) in segment
        .split('_')
        .filter(|word| !word.is_empty())
        .enumerate()
    {
        let word = word.to_ascii_lowercase();
        if i == 0 {
            out.push_str(&word);
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}
