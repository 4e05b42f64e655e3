//! Startup configuration for the relay.
//!
//! Configuration comes from two places: the secret chain (secrets file,
//! then environment) for credentials, and plain environment variables for
//! operational knobs. Both mandatory secrets must resolve or startup
//! fails; everything else has a default.

use std::path::PathBuf;

use parlance_core::service::secret::SecretService;
use parlance_types::error::ConfigError;

use crate::llm::openrouter::DEFAULT_BASE_URL;
use crate::secret::chain::build_secret_chain;

/// Default completion model served through OpenRouter.
pub const DEFAULT_MODEL: &str = "mistralai/mistral-small-3.1-24b-instruct";

/// Fully resolved relay configuration.
///
/// # Token Security
///
/// Holds both credentials in the clear, so this type does NOT derive
/// Debug.
pub struct Config {
    pub telegram_bot_token: String,
    pub openrouter_api_key: String,
    pub openrouter_base_url: String,
    pub model: String,
    pub data_dir: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Resolve the full configuration, or fail with the first missing
    /// mandatory secret.
    pub async fn load() -> Result<Self, ConfigError> {
        let data_dir = resolve_data_dir()?;
        let secrets = SecretService::new(build_secret_chain(&data_dir).await);

        let telegram_bot_token = require(&secrets, "TELEGRAM_BOT_TOKEN").await?;
        let openrouter_api_key = require(&secrets, "OPENROUTER_API_KEY").await?;

        let openrouter_base_url = std::env::var("PARLANCE_OPENROUTER_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model =
            std::env::var("PARLANCE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let host =
            std::env::var("PARLANCE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match std::env::var("PARLANCE_PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "PARLANCE_PORT".to_string(),
                reason: format!("'{raw}' is not a valid port number"),
            })?,
            Err(_) => 8080,
        };

        Ok(Self {
            telegram_bot_token,
            openrouter_api_key,
            openrouter_base_url,
            model,
            data_dir,
            host,
            port,
        })
    }

    /// SQLite database URL inside the data directory.
    pub fn database_url(&self) -> String {
        format!(
            "sqlite://{}?mode=rwc",
            self.data_dir.join("parlance.db").display()
        )
    }
}

async fn require(secrets: &SecretService, key: &str) -> Result<String, ConfigError> {
    secrets
        .get_secret(key)
        .await
        .map_err(|e| ConfigError::Resolution(e.to_string()))?
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingSecret(key.to_string()))
}

/// Resolve the data directory: `PARLANCE_DATA_DIR` if set, else
/// `~/.parlance`.
pub fn resolve_data_dir() -> Result<PathBuf, ConfigError> {
    if let Ok(dir) = std::env::var("PARLANCE_DATA_DIR") {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".parlance"))
        .ok_or_else(|| ConfigError::Invalid {
            key: "PARLANCE_DATA_DIR".to_string(),
            reason: "no home directory available and PARLANCE_DATA_DIR not set".to_string(),
        })
}
