#[cfg(test)]
mod tests {
    use crate::config::*;
    use figment::value::UncasedStr;
    use serial_test::serial;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_dev_server_conventions() {
        let config = DevgateConfig::default();
        assert_eq!(config.server.port, 5173);
        assert!(config.server.strict_port);
        assert_eq!(config.server.host, "localhost");
        assert_eq!(config.env_prefix, vec!["VITE_".to_string()]);
        assert!(config.guard.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let json = serde_json::to_value(DevgateConfig::default()).unwrap();
        assert!(json.get("envPrefix").is_some());
        assert!(json.get("spaFallback").is_some());
        assert!(json["server"].get("strictPort").is_some());
        assert!(json.get("env_prefix").is_none());
    }

    #[test]
    fn test_env_prefix_accepts_single_string() {
        let config: DevgateConfig = toml::from_str(r#"envPrefix = "APP_""#).unwrap();
        assert_eq!(config.env_prefix, vec!["APP_".to_string()]);

        let config: DevgateConfig = toml::from_str(r#"envPrefix = ["APP_", "VITE_"]"#).unwrap();
        assert_eq!(config.env_prefix.len(), 2);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(toml::from_str::<DevgateConfig>("prot = 3000").is_err());
        assert!(toml::from_str::<DevgateConfig>("[server]\nprot = 3000").is_err());
    }

    #[test]
    fn test_mode_is_not_a_config_key() {
        assert!(toml::from_str::<DevgateConfig>("mode = \"production\"").is_err());

        let schema = DevgateConfig::json_schema();
        assert!(schema["properties"].get("mode").is_none());
    }

    #[test]
    fn test_mode_names() {
        assert_eq!(Mode::default(), Mode::Development);
        assert_eq!(Mode::Production.to_string(), "production");
        assert!(Mode::Production.is_production());
        assert!(!Mode::Test.is_production());
    }

    #[test]
    fn test_validation() {
        assert!(DevgateConfig {
            env_prefix: vec![],
            ..DevgateConfig::default()
        }
        .validate()
        .is_err());

        assert!(DevgateConfig {
            env_prefix: vec!["VITE_".to_string(), "".to_string()],
            ..DevgateConfig::default()
        }
        .validate()
        .is_err());

        let mut config = DevgateConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());

        let mut config = DevgateConfig::default();
        config.server.host = "my host".to_string();
        assert!(config.validate().is_err());

        let mut config = DevgateConfig::default();
        config.server.host = "0.0.0.0".to_string();
        assert!(config.validate().is_ok());

        assert!(DevgateConfig {
            root: PathBuf::new(),
            ..DevgateConfig::default()
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_socket_addr() {
        let server = ServerConfig::default();
        assert_eq!(
            server.socket_addr(5173).unwrap(),
            "127.0.0.1:5173".parse().unwrap()
        );

        let server = ServerConfig {
            host: "::1".to_string(),
            ..ServerConfig::default()
        };
        assert_eq!(server.socket_addr(80).unwrap(), "[::1]:80".parse().unwrap());
    }

    #[test]
    fn test_env_key_to_path() {
        assert_eq!(env_key_to_path(UncasedStr::new("ROOT")), "root");
        assert_eq!(env_key_to_path(UncasedStr::new("ENV_PREFIX")), "envPrefix");
        assert_eq!(
            env_key_to_path(UncasedStr::new("SERVER__STRICT_PORT")),
            "server.strictPort"
        );
        assert_eq!(
            env_key_to_path(UncasedStr::new("guard__enabled")),
            "guard.enabled"
        );
    }

    #[test]
    #[serial]
    fn test_load_layers() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("devgate.toml");
        fs::write(
            &path,
            r#"
root = "build/client"
envPrefix = ["VITE_", "OLLAMA_API_BASE_URL"]

[server]
port = 3000
strictPort = false
"#,
        )
        .unwrap();

        unsafe { std::env::set_var("DEVGATE_SERVER__PORT", "4000") };

        let overrides = ConfigOverrides {
            guard: GuardOverrides {
                enabled: Some(false),
            },
            ..ConfigOverrides::default()
        };
        let result = DevgateConfig::load(&overrides, Some(&path));
        unsafe { std::env::remove_var("DEVGATE_SERVER__PORT") };
        let config = result.unwrap();

        assert_eq!(config.root, PathBuf::from("build/client"));
        assert_eq!(config.env_prefix.len(), 2);
        // Environment beats the file
        assert_eq!(config.server.port, 4000);
        assert!(!config.server.strict_port);
        // CLI beats everything
        assert!(!config.guard.enabled);
        // Untouched values keep their defaults
        assert_eq!(config.server.host, "localhost");
    }

    #[test]
    #[serial]
    fn test_cli_port_beats_environment() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("devgate.toml");
        fs::write(&path, "[server]\nport = 3000\n").unwrap();

        unsafe { std::env::set_var("DEVGATE_SERVER__PORT", "4000") };
        let overrides = ConfigOverrides {
            server: ServerOverrides {
                port: Some(8080),
                ..ServerOverrides::default()
            },
            ..ConfigOverrides::default()
        };
        let result = DevgateConfig::load(&overrides, Some(&path));
        unsafe { std::env::remove_var("DEVGATE_SERVER__PORT") };

        assert_eq!(result.unwrap().server.port, 8080);
    }

    #[test]
    #[serial]
    fn test_load_missing_explicit_file() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");
        let err = DevgateConfig::load(&ConfigOverrides::default(), Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    #[serial]
    fn test_load_rejects_bad_types() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("devgate.toml");
        fs::write(&path, "[server]\nport = \"fast\"\n").unwrap();

        let err = DevgateConfig::load(&ConfigOverrides::default(), Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Invalid value for 'configuration'"));
    }

    #[test]
    fn test_schema_and_example() {
        let schema = DevgateConfig::json_schema();
        assert!(schema.is_object());
        assert!(schema["properties"].get("envPrefix").is_some());

        let example = DevgateConfig::example_config().unwrap();
        let body: String = example
            .lines()
            .filter(|line| !line.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");
        let config: DevgateConfig = toml::from_str(&body).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.env_prefix.len(), 5);
        assert_eq!(config.root, PathBuf::from("build/client"));
    }
}
