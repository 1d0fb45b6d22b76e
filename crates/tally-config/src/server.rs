//! HTTP listener configuration.

use std::net::{IpAddr, SocketAddr};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default listen port.
const fn default_port() -> u16 {
    3000
}

const fn default_cors() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    /// Interface to bind (IP literal).
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Whether to answer cross-origin requests permissively.
    #[serde(default = "default_cors")]
    pub cors: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors: default_cors(),
        }
    }
}

impl ServerSettings {
    /// Resolve the configured host and port into a socket address.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `host` is not an IP literal.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.host.parse().map_err(|e| ConfigError::InvalidValue {
            field: "server.host".into(),
            reason: format!("{e}: {:?}", self.host),
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ServerSettings::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert!(config.cors);
        assert_eq!(
            config.socket_addr().unwrap(),
            "0.0.0.0:3000".parse().unwrap()
        );
    }

    #[test]
    fn ipv6_host_resolves() {
        let config = ServerSettings {
            host: "::1".into(),
            port: 8080,
            cors: false,
        };
        assert_eq!(config.socket_addr().unwrap(), "[::1]:8080".parse().unwrap());
    }

    #[test]
    fn hostname_is_rejected() {
        let config = ServerSettings {
            host: "localhost".into(),
            ..ServerSettings::default()
        };
        let err = config.socket_addr().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "server.host"));
    }
}
