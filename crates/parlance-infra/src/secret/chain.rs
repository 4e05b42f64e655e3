//! Secret chain builder -- wires concrete providers in priority order.
//!
//! This module lives in `parlance-infra` because it assembles concrete
//! provider implementations. The resulting chain is passed to `SecretService`
//! in `parlance-core` via the `DynSecretProvider` abstraction.
//!
//! Default chain order: `[FileSecretProvider, EnvSecretProvider]`

use std::path::Path;
use std::sync::Arc;

use parlance_core::repository::secret::DynSecretProvider;

use crate::secret::env::EnvSecretProvider;
use crate::secret::file::FileSecretProvider;

/// Build the default secret resolution chain.
///
/// The chain is ordered by precedence (first match wins):
/// 1. Secrets file (`{data_dir}/secrets.toml`)
/// 2. Environment variables
pub async fn build_secret_chain(data_dir: &Path) -> Vec<DynSecretProvider> {
    vec![
        Arc::new(FileSecretProvider::load(data_dir).await),
        Arc::new(EnvSecretProvider::new()),
    ]
}
