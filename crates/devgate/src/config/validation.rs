use crate::config::{DevgateConfig, ServerConfig};
use crate::error::{ConfigError, Result};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

impl ServerConfig {
    /// Resolve the bind address for `port`.
    ///
    /// `localhost` maps to 127.0.0.1; anything else must be an IP literal.
    pub fn socket_addr(&self, port: u16) -> Result<SocketAddr> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            self.host.parse::<IpAddr>().map_err(|_| ConfigError::InvalidValue {
                field: "server.host".to_string(),
                value: self.host.clone(),
                hint: "Use 'localhost' or an IP address such as 0.0.0.0".to_string(),
            })?
        };

        Ok(SocketAddr::new(ip, port))
    }
}

impl DevgateConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.env_prefix.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "envPrefix".to_string(),
                value: "[]".to_string(),
                hint: "Provide at least one prefix, e.g. [\"VITE_\"]".to_string(),
            }
            .into());
        }

        if self.env_prefix.iter().any(|prefix| prefix.is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "envPrefix".to_string(),
                value: "\"\"".to_string(),
                hint: "An empty prefix would expose every environment variable to the browser"
                    .to_string(),
            }
            .into());
        }

        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".to_string(),
                value: "0".to_string(),
                hint: "Port must be between 1 and 65535".to_string(),
            }
            .into());
        }

        if self.server.host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "server.host".to_string(),
                value: "".to_string(),
                hint: "Use 'localhost' or an IP address".to_string(),
            }
            .into());
        }

        self.server.socket_addr(self.server.port)?;

        if self.root.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "root".to_string(),
                value: "".to_string(),
                hint: "Point root at the directory holding index.html".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
