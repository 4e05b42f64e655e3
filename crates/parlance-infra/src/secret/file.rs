//! Secrets file provider.
//!
//! Reads `secrets.toml` from the data directory (`~/.parlance/` in
//! production) once at construction and serves lookups from memory. The
//! file is a flat table of string keys to string values:
//!
//! ```toml
//! TELEGRAM_BOT_TOKEN = "123456:ABC..."
//! OPENROUTER_API_KEY = "sk-or-..."
//! ```
//!
//! A missing or malformed file yields an empty provider (with a warning),
//! so the chain falls through to environment variables.

use std::collections::HashMap;
use std::path::Path;

use parlance_core::repository::secret::SecretProvider;
use parlance_types::error::RepositoryError;

/// Secrets file name inside the data directory.
const SECRETS_FILE: &str = "secrets.toml";

/// Read-only provider backed by `{data_dir}/secrets.toml`.
pub struct FileSecretProvider {
    values: HashMap<String, String>,
}

impl FileSecretProvider {
    /// Load the secrets file from the given data directory.
    ///
    /// Tolerant by design: a missing file is normal (env-only deployments),
    /// and a malformed file logs a warning instead of failing startup.
    pub async fn load(data_dir: &Path) -> Self {
        let path = data_dir.join(SECRETS_FILE);

        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no secrets file at {}", path.display());
                return Self {
                    values: HashMap::new(),
                };
            }
            Err(err) => {
                tracing::warn!("failed to read {}: {err}", path.display());
                return Self {
                    values: HashMap::new(),
                };
            }
        };

        match toml::from_str::<HashMap<String, String>>(&content) {
            Ok(values) => Self { values },
            Err(err) => {
                tracing::warn!("failed to parse {}: {err}", path.display());
                Self {
                    values: HashMap::new(),
                }
            }
        }
    }
}

impl SecretProvider for FileSecretProvider {
    fn name(&self) -> &str {
        "file"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        Ok(self.values.get(key).cloned())
    }
}
