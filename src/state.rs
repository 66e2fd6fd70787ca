//! Request-scoped access to shared resources.
//!
//! axum hands every request a clone of [`AppState`]; handlers pull out only
//! what they need (`State<Store>`, `State<NotFoundPolicy>`) through `FromRef`.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::config::AppConfig;
use crate::lookup::NotFoundPolicy;
use crate::store::{Store, StoreError};

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    store: Store,
    config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Store, config: AppConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Open the store described by `config` and wrap both.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot be opened or migrated.
    pub async fn connect(config: AppConfig) -> Result<Self, StoreError> {
        let store = Store::connect(&config.database_url, config.max_connections).await?;
        Ok(Self::new(store, config))
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl FromRef<AppState> for Store {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for NotFoundPolicy {
    fn from_ref(state: &AppState) -> Self {
        state.config.not_found_policy
    }
}
