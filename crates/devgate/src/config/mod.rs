//! Configuration for the dev and preview servers.
//!
//! Merges settings from CLI args, environment variables and `devgate.toml`.
//! Priority: CLI > Environment > File > Defaults

mod defaults;
mod loading;
mod tests;
mod types;
mod validation;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

pub use defaults::*;
pub use loading::{env_key_to_path, ConfigOverrides, GuardOverrides, ServerOverrides, CONFIG_FILE};
pub use types::*;

/// devgate configuration, loaded from devgate.toml, `DEVGATE_*` variables and CLI flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DevgateConfig {
    /// Directory served to the browser
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Serve root/index.html for paths that don't match a file
    #[serde(default = "default_spa_fallback")]
    pub spa_fallback: bool,

    /// HTTP listener settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Environment variable prefixes exposed to the browser
    #[serde(default = "default_env_prefix", deserialize_with = "string_or_list")]
    #[schemars(with = "Vec<String>")]
    pub env_prefix: Vec<String>,

    /// Directory holding the .env files
    #[serde(default = "default_env_dir")]
    pub env_dir: PathBuf,

    /// Request guard settings
    #[serde(default)]
    pub guard: GuardConfig,
}

impl Default for DevgateConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            spa_fallback: default_spa_fallback(),
            server: ServerConfig::default(),
            env_prefix: default_env_prefix(),
            env_dir: default_env_dir(),
            guard: GuardConfig::default(),
        }
    }
}

impl DevgateConfig {
    /// Generate JSON Schema for devgate.toml.
    pub fn json_schema() -> serde_json::Value {
        let schema = schemars::schema_for!(DevgateConfig);
        serde_json::to_value(schema).expect("Schema serialization should never fail")
    }

    /// Generate example devgate.toml content.
    pub fn example_config() -> crate::error::Result<String> {
        let example = Self {
            root: PathBuf::from("build/client"),
            env_prefix: vec![
                "VITE_".to_string(),
                "OPENAI_LIKE_API_BASE_URL".to_string(),
                "OLLAMA_API_BASE_URL".to_string(),
                "LMSTUDIO_API_BASE_URL".to_string(),
                "TOGETHER_API_BASE_URL".to_string(),
            ],
            ..Self::default()
        };

        let body = toml::to_string_pretty(&example).map_err(crate::error::ConfigError::from)?;
        Ok(format!(
            "# devgate configuration\n# Environment overrides use DEVGATE_<SECTION>__<FIELD>, e.g. DEVGATE_SERVER__PORT=3000\n\n{}",
            body
        ))
    }
}

/// Accept either a single prefix or a list of prefixes.
fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(prefix) => vec![prefix],
        OneOrMany::Many(prefixes) => prefixes,
    })
}
