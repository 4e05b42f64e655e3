//! Application state wiring all services together.
//!
//! The orchestrator is generic over repository, provider, and liveness
//! sink; AppState pins it to the concrete infra implementations. The
//! Telegram cell appears twice on purpose: once inside the orchestrator
//! as its liveness sink, once directly so handlers can obtain the client
//! for reply delivery.

use std::sync::Arc;

use parlance_core::llm::service::CompletionService;
use parlance_core::turn::orchestrator::TurnOrchestrator;
use parlance_infra::config::Config;
use parlance_infra::llm::openrouter::OpenRouterProvider;
use parlance_infra::sqlite::conversation::SqliteConversationRepository;
use parlance_infra::sqlite::pool::DatabasePool;
use parlance_infra::telegram::lazy::TelegramCell;

/// The orchestrator pinned to the concrete infra implementations.
pub type ConcreteOrchestrator =
    TurnOrchestrator<SqliteConversationRepository, OpenRouterProvider, TelegramCell>;

/// Shared application state for the webhook server.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<ConcreteOrchestrator>,
    pub telegram: Arc<TelegramCell>,
}

impl AppState {
    /// Initialize the application state: connect to the database and wire
    /// the orchestrator. The Telegram client itself stays uninitialized
    /// until the first webhook needs it.
    pub async fn init(config: &Config) -> anyhow::Result<Self> {
        tokio::fs::create_dir_all(&config.data_dir).await?;

        let db_pool = DatabasePool::new(&config.database_url()).await?;
        let repo = SqliteConversationRepository::new(db_pool);

        let provider =
            OpenRouterProvider::new(&config.openrouter_api_key, &config.openrouter_base_url);
        let completion = CompletionService::new(provider, config.model.clone());

        let telegram = Arc::new(TelegramCell::new(config.telegram_bot_token.clone()));
        let orchestrator = Arc::new(TurnOrchestrator::new(
            repo,
            completion,
            Arc::clone(&telegram),
        ));

        Ok(Self {
            orchestrator,
            telegram,
        })
    }
}
