use std::path::PathBuf;

pub fn default_root() -> PathBuf {
    PathBuf::from("public")
}

pub fn default_spa_fallback() -> bool {
    true
}

pub fn default_host() -> String {
    "localhost".to_string()
}

pub fn default_port() -> u16 {
    5173
}

pub fn default_strict_port() -> bool {
    true
}

pub fn default_env_prefix() -> Vec<String> {
    vec!["VITE_".to_string()]
}

pub fn default_env_dir() -> PathBuf {
    PathBuf::from(".")
}

pub fn default_guard_enabled() -> bool {
    true
}
