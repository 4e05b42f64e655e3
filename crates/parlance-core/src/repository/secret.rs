//! Secret provider trait definition.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use parlance_types::error::RepositoryError;

/// Trait for secret sources (secrets file, environment).
///
/// Each provider resolves secret values by key. [`crate::service::secret::SecretService`]
/// chains multiple providers in priority order. Providers here are read-only:
/// credentials are managed outside the relay process.
pub trait SecretProvider: Send + Sync {
    /// Human-readable provider name, for resolution logging.
    fn name(&self) -> &str;

    /// Retrieve a secret value by key.
    /// Returns None if the secret does not exist in this provider.
    fn get(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<String>, RepositoryError>> + Send;
}

/// Object-safe version of [`SecretProvider`] with a boxed future.
///
/// Exists solely to enable dynamic dispatch for heterogeneous provider
/// chains. A blanket implementation is provided for all `SecretProvider`s.
pub trait SecretProviderDyn: Send + Sync {
    fn name(&self) -> &str;

    fn get_boxed<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<String>, RepositoryError>> + Send + 'a>>;
}

impl<T: SecretProvider> SecretProviderDyn for T {
    fn name(&self) -> &str {
        SecretProvider::name(self)
    }

    fn get_boxed<'a>(
        &'a self,
        key: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Option<String>, RepositoryError>> + Send + 'a>> {
        Box::pin(self.get(key))
    }
}

/// Type-erased secret provider for chain assembly.
pub type DynSecretProvider = Arc<dyn SecretProviderDyn>;
