//! Service assembly.
//!
//! [`App`] wires configuration into concrete adapters: the seeded content
//! store, the user directory and the queued build hook. The binary serves
//! [`App::router`]; embedders publish content through
//! [`App::publish_handler`].

use std::sync::Arc;

use axum::Router;
use secrecy::SecretString;
use thiserror::Error;

use crate::adapters::auth::InMemoryUserDirectory;
use crate::adapters::build_hook::{
    build_hook_queue, BuildHookWorker, HttpBuildHook, HttpBuildHookConfig, LoggingBuildNotifier,
};
use crate::adapters::http::{api_router, ApiState, ContentAppState, StockAppState};
use crate::adapters::memory::{load_seed_file, InMemoryContentStore};
use crate::application::handlers::content::PublishContentHandler;
use crate::config::{AppConfig, BuildHookConfig, ConfigError};
use crate::domain::foundation::{DomainError, ValidationError};
use crate::ports::{BuildNotifier, NotifyError, UserDirectory};

/// Errors raised while assembling the service.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid auth users: {0}")]
    Users(#[from] ValidationError),

    #[error("Failed to load content: {0}")]
    Seed(#[from] DomainError),

    #[error("Failed to set up build hook: {0}")]
    BuildHook(#[from] NotifyError),
}

/// The assembled service.
#[derive(Clone)]
pub struct App {
    config: AppConfig,
    store: Arc<InMemoryContentStore>,
    users: Arc<dyn UserDirectory>,
    notifier: Arc<dyn BuildNotifier>,
}

impl App {
    /// Validates `config` and builds every adapter it describes.
    ///
    /// The returned worker must be spawned for publish events to leave the
    /// process.
    pub fn build(config: AppConfig) -> Result<(Self, BuildHookWorker), StartupError> {
        config.validate().map_err(ConfigError::from)?;

        let store = match &config.content.seed_path {
            Some(path) => load_seed_file(path)?,
            None => {
                tracing::warn!("No content seed configured, starting with an empty store");
                InMemoryContentStore::new()
            }
        };

        let users = InMemoryUserDirectory::from_entries(&config.auth.users)?;
        tracing::info!(users = users.user_count(), "User directory loaded");

        let delivery: Arc<dyn BuildNotifier> = match &config.build_hook.url {
            Some(url) => {
                tracing::info!(%url, "Build hook enabled");
                Arc::new(HttpBuildHook::new(hook_client_config(url, &config.build_hook))?)
            }
            None => Arc::new(LoggingBuildNotifier),
        };
        let (notifier, worker) = build_hook_queue(delivery, config.build_hook.queue_capacity);

        let app = Self::from_parts(
            config,
            Arc::new(store),
            Arc::new(users),
            Arc::new(notifier),
        );
        Ok((app, worker))
    }

    /// Assembles the service from ready-made parts.
    pub fn from_parts(
        config: AppConfig,
        store: Arc<InMemoryContentStore>,
        users: Arc<dyn UserDirectory>,
        notifier: Arc<dyn BuildNotifier>,
    ) -> Self {
        Self {
            config,
            store,
            users,
            notifier,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<InMemoryContentStore> {
        &self.store
    }

    pub fn api_state(&self) -> ApiState {
        ApiState {
            content: ContentAppState::new(self.store.clone(), self.config.content.page_size),
            stock: StockAppState::new(
                self.store.clone(),
                self.config.content.stock_update_attempts,
            ),
            auth: self.users.clone(),
        }
    }

    /// The API router, without transport layers.
    pub fn router(&self) -> Router {
        api_router(self.api_state())
    }

    pub fn publish_handler(&self) -> PublishContentHandler {
        PublishContentHandler::new(self.store.clone(), self.notifier.clone())
    }
}

fn hook_client_config(url: &str, config: &BuildHookConfig) -> HttpBuildHookConfig {
    let client = HttpBuildHookConfig::new(url)
        .with_max_attempts(config.max_attempts)
        .with_initial_backoff(config.initial_backoff())
        .with_timeout(config.timeout());

    match &config.secret {
        Some(secret) => client.with_secret(SecretString::clone(secret)),
        None => client,
    }
}
