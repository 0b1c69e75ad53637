//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.user-service.toml` files.

use crate::discovery::PRODUCT_SERVICE;
use crate::models::{default_users, User};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = ".user-service.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Product-service settings.
    #[serde(default)]
    pub collaborator: CollaboratorSettings,

    /// Service name -> base URL registry.
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Seed records for the user store.
    #[serde(default = "default_users")]
    pub users: Vec<User>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            collaborator: CollaboratorSettings::default(),
            discovery: DiscoveryConfig::default(),
            users: default_users(),
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind; also reported by `/users/info`.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8081
}

/// Product-service client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollaboratorSettings {
    /// Logical service name resolved through discovery.
    #[serde(default = "default_service")]
    pub service: String,

    /// Request timeout in seconds. Absent keeps the transport default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

impl Default for CollaboratorSettings {
    fn default() -> Self {
        Self {
            service: default_service(),
            timeout_seconds: None,
        }
    }
}

fn default_service() -> String {
    PRODUCT_SERVICE.to_string()
}

/// Static service registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    /// Logical name -> base URL.
    #[serde(default = "default_services")]
    pub services: HashMap<String, String>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            services: default_services(),
        }
    }
}

fn default_services() -> HashMap<String, String> {
    let mut services = HashMap::new();
    services.insert(
        PRODUCT_SERVICE.to_string(),
        "http://localhost:8082".to_string(),
    );
    services
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_from_dir(Path::new("."))
    }

    /// Try to load `.user-service.toml` from `dir`.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(DEFAULT_CONFIG_FILE);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings, but only
    /// when they were actually given.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref host) = args.host {
            self.server.host = host.clone();
        }
        if let Some(port) = args.port {
            self.server.port = port;
        }

        if let Some(timeout) = args.timeout {
            self.collaborator.timeout_seconds = Some(timeout);
        }

        if let Some(ref url) = args.product_service_url {
            self.discovery
                .services
                .insert(self.collaborator.service.clone(), url.clone());
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Args;

    /// Args with no overrides; built directly so env vars cannot leak in.
    fn bare_args() -> Args {
        Args {
            host: None,
            port: None,
            product_service_url: None,
            timeout: None,
            config: None,
            verbose: false,
            quiet: false,
            init_config: false,
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.collaborator.service, "product-service");
        assert_eq!(config.collaborator.timeout_seconds, None);
        assert_eq!(
            config.discovery.services.get("product-service").map(String::as_str),
            Some("http://localhost:8082")
        );
        assert_eq!(config.users.len(), 3);
    }

    #[test]
    fn test_parse_config() {
        let toml_content = r#"
[server]
port = 9090

[collaborator]
timeout_seconds = 3

[discovery.services]
product-service = "http://products.internal:80"

[[users]]
id = 10
name = "Ada"
email = "ada@email.com"
phone = "0800"
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.collaborator.service, "product-service");
        assert_eq!(config.collaborator.timeout_seconds, Some(3));
        assert_eq!(
            config.discovery.services.get("product-service").map(String::as_str),
            Some("http://products.internal:80")
        );
        assert_eq!(config.users, vec![User::new(10, "Ada", "ada@email.com", "0800")]);
    }

    #[test]
    fn test_missing_users_fall_back_to_catalog() {
        let config: Config = toml::from_str("[server]\nport = 1\n").unwrap();
        assert_eq!(config.users, default_users());
    }

    #[test]
    fn test_default_toml_generation() {
        let toml_str = Config::default_toml();
        assert!(toml_str.contains("[server]"));
        assert!(toml_str.contains("[collaborator]"));
        assert!(toml_str.contains("[[users]]"));

        let reparsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(reparsed.server.port, 8081);
        assert_eq!(reparsed.users, default_users());
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load_from_dir(dir.path()).unwrap().is_none());

        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "[server]\nport = 7000\n").unwrap();
        let config = Config::load_from_dir(dir.path()).unwrap().unwrap();
        assert_eq!(config.server.port, 7000);
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[server\nport = ").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_merge_with_args() {
        let args = Args {
            port: Some(9000),
            timeout: Some(2),
            product_service_url: Some("http://10.0.0.5:8082".to_string()),
            ..bare_args()
        };

        let mut config = Config::default();
        config.merge_with_args(&args);

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.collaborator.timeout_seconds, Some(2));
        assert_eq!(
            config.discovery.services.get("product-service").map(String::as_str),
            Some("http://10.0.0.5:8082")
        );
    }

    #[test]
    fn test_merge_without_flags_keeps_file_values() {
        let args = bare_args();

        let mut config: Config = toml::from_str("[server]\nport = 7000\n").unwrap();
        config.merge_with_args(&args);

        assert_eq!(config.server.port, 7000);
        assert_eq!(config.collaborator.timeout_seconds, None);
        assert_eq!(
            config.discovery.services.get("product-service").map(String::as_str),
            Some("http://localhost:8082")
        );
    }
}
