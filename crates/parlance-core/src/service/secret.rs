//! Secret resolution service.
//!
//! SecretService resolves secrets through a chain of providers in priority
//! order (first match wins). The concrete chain is assembled in
//! parlance-infra; the default order is secrets file first, environment
//! variables as the fallback.

use parlance_types::error::RepositoryError;

use crate::repository::secret::DynSecretProvider;

/// Service resolving secrets across multiple read-only backends.
pub struct SecretService {
    providers: Vec<DynSecretProvider>,
}

impl SecretService {
    /// Create a new SecretService with the given provider chain.
    ///
    /// Providers should be ordered by precedence (highest priority first).
    pub fn new(providers: Vec<DynSecretProvider>) -> Self {
        Self { providers }
    }

    /// Resolve a secret value by iterating through providers in priority order.
    pub async fn get_secret(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        for provider in &self.providers {
            if let Some(value) = provider.get_boxed(key).await? {
                tracing::debug!(key, provider = provider.name(), "secret resolved");
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}
