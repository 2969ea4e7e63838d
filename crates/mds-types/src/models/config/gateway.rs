//! Process-wide gateway configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::service::MdsServiceConfig;

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ServerConfig {
    /// Port to listen on
    #[validate(range(min = 1024_u16, max = 65535_u16))]
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allow LAN access (bind to 0.0.0.0)
    #[serde(default)]
    pub allow_lan_access: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: default_port(), allow_lan_access: false }
    }
}

impl ServerConfig {
    /// Get the bind address based on LAN access setting.
    pub fn get_bind_address(&self) -> String {
        if self.allow_lan_access {
            "0.0.0.0".to_string()
        } else {
            "127.0.0.1".to_string()
        }
    }

    /// Get the full bind socket address.
    pub fn get_socket_addr(&self) -> String {
        format!("{}:{}", self.get_bind_address(), self.port)
    }
}

/// Full gateway configuration, built once at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, Validate)]
pub struct GatewayConfig {
    #[serde(default)]
    #[validate(nested)]
    pub server: ServerConfig,
    #[serde(default)]
    #[validate(nested)]
    pub mds: MdsServiceConfig,
}

impl GatewayConfig {
    /// Copy with secrets masked, for display.
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        copy.mds.credentials = self.mds.credentials.redacted();
        copy
    }
}

pub const fn default_port() -> u16 {
    8080
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address_follows_lan_flag() {
        let mut server = ServerConfig::default();
        assert_eq!(server.get_socket_addr(), "127.0.0.1:8080");
        server.allow_lan_access = true;
        assert_eq!(server.get_bind_address(), "0.0.0.0");
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: GatewayConfig = serde_json::from_value(serde_json::json!({
            "mds": {"service_url": "https://mds.example.com/service/service.svc"}
        }))
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.mds.request_timeout, 120);
        assert!(config.mds.credentials.username.is_empty());
    }
}
