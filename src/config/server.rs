//! Listener, logging and transport settings for the API server.

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Longest request timeout accepted from configuration.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Production logs JSON and insists on auth users and an https build hook.
    #[serde(default)]
    pub environment: Environment,

    /// `EnvFilter` directive, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whole-request timeout applied in front of every route.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    /// Comma-separated origins allowed to call the storefront API.
    /// Unset, empty or `*` allows any origin.
    pub cors_origins: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ValidationError::InvalidHost(raw))
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Configured origins, trimmed, blanks dropped.
    pub fn cors_origins_list(&self) -> Vec<String> {
        self.cors_origins
            .as_deref()
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Whether cross-origin calls are open to every origin.
    pub fn allows_any_origin(&self) -> bool {
        let origins = self.cors_origins_list();
        origins.is_empty() || origins.iter().any(|o| o == "*")
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr()?;
        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: Environment::default(),
            log_level: default_log_level(),
            request_timeout_secs: default_request_timeout(),
            cors_origins: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info,smartwatch_api=debug,tower_http=info".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_origins(origins: &str) -> ServerConfig {
        ServerConfig {
            cors_origins: Some(origins.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn unset_origins_allow_any() {
        let config = ServerConfig::default();
        assert!(config.cors_origins_list().is_empty());
        assert!(config.allows_any_origin());
        assert!(with_origins(" , ").allows_any_origin());
    }

    #[test]
    fn wildcard_origin_allows_any() {
        assert!(with_origins("*").allows_any_origin());
        assert!(with_origins("https://shop.example.com, *").allows_any_origin());
    }

    #[test]
    fn storefront_origins_are_listed() {
        let config = with_origins("https://shop.example.com, http://localhost:8000,");
        assert_eq!(
            config.cors_origins_list(),
            vec!["https://shop.example.com", "http://localhost:8000"]
        );
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn request_timeout_is_in_seconds() {
        let config = ServerConfig {
            request_timeout_secs: 45,
            ..Default::default()
        };
        assert_eq!(config.request_timeout(), Duration::from_secs(45));
        assert_eq!(ServerConfig::default().request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn request_timeout_must_be_within_bounds() {
        let at_limit = ServerConfig {
            request_timeout_secs: MAX_REQUEST_TIMEOUT_SECS,
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());

        for secs in [0, MAX_REQUEST_TIMEOUT_SECS + 1] {
            let config = ServerConfig {
                request_timeout_secs: secs,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
        }
    }

    #[test]
    fn listen_address_combines_host_and_port() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            ..Default::default()
        };
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:3000");

        let bad = ServerConfig {
            host: "shop.local".to_string(),
            ..Default::default()
        };
        assert!(matches!(bad.validate(), Err(ValidationError::InvalidHost(_))));
    }

    #[test]
    fn environment_names_are_lowercase() {
        let config: ServerConfig =
            serde_json::from_str(r#"{"environment": "production"}"#).unwrap();
        assert!(config.is_production());
        assert_eq!(config.port, 8080);

        let staging = serde_json::from_str::<ServerConfig>(r#"{"environment": "staging"}"#);
        assert!(staging.is_err());
    }
}
