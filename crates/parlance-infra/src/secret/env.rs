//! Environment variable secret provider.
//!
//! A read-only secret provider that checks environment variables. This is
//! the fallback in the resolution chain: keys absent from the secrets file
//! resolve from the process environment.

use parlance_core::repository::secret::SecretProvider;
use parlance_types::error::RepositoryError;

/// Environment variable secret provider.
pub struct EnvSecretProvider;

impl EnvSecretProvider {
    /// Create a new environment variable secret provider.
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvSecretProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretProvider for EnvSecretProvider {
    fn name(&self) -> &str {
        "env"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        match std::env::var(key) {
            Ok(val) => Ok(Some(val)),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(std::env::VarError::NotUnicode(_)) => {
                // Env var exists but has invalid Unicode -- treat as not found
                // rather than erroring, since secrets must be valid strings
                Ok(None)
            }
        }
    }
}
