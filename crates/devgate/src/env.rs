//! Environment variables exposed to the browser.
//!
//! Variables come from `.env` files in the configured env directory and from
//! the process environment. Only names starting with one of the configured
//! prefixes reach the browser. The result is served as a JS module at
//! [`ENV_MODULE_PATH`]:
//!
//! ```js
//! import env from "/@env";
//! console.log(env.VITE_API_URL, env.MODE);
//! ```

use crate::config::Mode;
use crate::error::{ConfigError, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Route serving the client environment module.
pub const ENV_MODULE_PATH: &str = "/@env";

/// `.env` files for `mode`, lowest priority first.
pub fn env_files(env_dir: &Path, mode: Mode) -> Vec<PathBuf> {
    vec![
        env_dir.join(".env"),
        env_dir.join(".env.local"),
        env_dir.join(format!(".env.{}", mode)),
        env_dir.join(format!(".env.{}.local", mode)),
    ]
}

/// Read the `.env` files for `mode`. Later files override earlier ones and
/// missing files are skipped. The process environment is not touched.
pub fn load_env_files(env_dir: &Path, mode: Mode) -> Result<BTreeMap<String, String>> {
    let mut vars = BTreeMap::new();

    for path in env_files(env_dir, mode) {
        if !path.is_file() {
            continue;
        }

        let iter = dotenvy::from_path_iter(&path).map_err(|e| invalid_env_file(&path, e))?;
        let mut count = 0usize;
        for item in iter {
            let (key, value) = item.map_err(|e| invalid_env_file(&path, e))?;
            vars.insert(key, value);
            count += 1;
        }
        tracing::debug!(path = %path.display(), count, "loaded env file");
    }

    Ok(vars)
}

fn invalid_env_file(path: &Path, err: dotenvy::Error) -> ConfigError {
    ConfigError::InvalidEnvFile {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Overlay process variables on file variables; the process always wins.
pub fn merge_process_env(
    mut file_vars: BTreeMap<String, String>,
    process_vars: impl IntoIterator<Item = (String, String)>,
) -> BTreeMap<String, String> {
    file_vars.extend(process_vars);
    file_vars
}

/// Load `.env` files and the current process environment.
pub fn load_env(env_dir: &Path, mode: Mode) -> Result<BTreeMap<String, String>> {
    let file_vars = load_env_files(env_dir, mode)?;
    Ok(merge_process_env(file_vars, std::env::vars()))
}

/// Variables visible to client code.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientEnv {
    values: BTreeMap<String, Value>,
}

impl ClientEnv {
    /// Keep variables matching `prefixes` and add the built-in entries.
    ///
    /// Built-ins: `MODE`, `DEV`, `PROD`, and `NODE_ENV` (taken from the
    /// variables when present, otherwise the mode name). Built-ins win over
    /// prefixed variables of the same name.
    pub fn resolve(prefixes: &[String], mode: Mode, vars: &BTreeMap<String, String>) -> Self {
        let mut values: BTreeMap<String, Value> = vars
            .iter()
            .filter(|(name, _)| prefixes.iter().any(|prefix| name.starts_with(prefix.as_str())))
            .map(|(name, value)| (name.clone(), Value::String(value.clone())))
            .collect();

        let node_env = vars
            .get("NODE_ENV")
            .cloned()
            .unwrap_or_else(|| mode.to_string());

        values.insert("MODE".to_string(), Value::String(mode.to_string()));
        values.insert("DEV".to_string(), Value::Bool(!mode.is_production()));
        values.insert("PROD".to_string(), Value::Bool(mode.is_production()));
        values.insert("NODE_ENV".to_string(), Value::String(node_env));

        Self { values }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Names of the variables, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Render as an ES module exporting `env` (named and default).
    pub fn to_module(&self) -> Result<String> {
        let object = serde_json::to_string_pretty(&self.values)?;
        Ok(format!(
            "export const env = {};\nexport default env;\n",
            object
        ))
    }
}
