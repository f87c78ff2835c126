//! Configuration for the servlet runtime.
//!
//! Only the vault servlet consumes configuration, and only when its client
//! is constructed; `describe` must never read it. Values come from the
//! environment (with `.env` support via dotenvy).

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Main configuration structure for the servlet runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Runtime identification and metadata.
    pub server: ServerConfig,

    /// Vault API collaborator settings.
    pub vault: VaultConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Runtime identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name reported in logs.
    pub name: String,

    pub version: String,
}

/// Settings for the remote vault-file API.
#[derive(Clone, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Base URL of the vault REST API.
    pub api_url: String,

    /// Bearer credential sent with every request.
    pub api_key: String,
}

/// Custom Debug implementation to redact the credential from logs.
impl std::fmt::Debug for VaultConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaultConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "mcp-servlets".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            vault: VaultConfig {
                api_url: "http://127.0.0.1:27123".to_string(),
                api_key: String::new(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Recognized variables: `VAULT_API_URL`, `VAULT_API_KEY`,
    /// `SERVLET_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(level) = std::env::var("SERVLET_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(api_url) = std::env::var("VAULT_API_URL") {
            config.vault.api_url = api_url;
            info!("Vault API URL loaded from environment");
        }

        if let Ok(api_key) = std::env::var("VAULT_API_KEY") {
            config.vault.api_key = api_key;
        } else {
            warn!("VAULT_API_KEY not set; vault requests will be unauthenticated");
        }

        config
    }
}
