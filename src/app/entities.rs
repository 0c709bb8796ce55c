//! AppStores - Store Handles per UI Domain
//!
//! One store per domain, created once at startup and handed to whatever
//! needs it. Clones share the same stores.

use crate::domain::AppConfig;
use crate::state::{MocksState, RequestLogState, UiState};
use crate::store::Store;

/// Collection of all store handles
#[derive(Clone, Debug)]
pub struct AppStores {
    /// General UI state
    pub ui: Store<UiState>,
    /// Mocks panel state
    pub mocks: Store<MocksState>,
    /// Request log state
    pub request_log: Store<RequestLogState>,
}

impl AppStores {
    /// Initialize all stores from configuration
    pub fn init(config: &AppConfig) -> Self {
        Self {
            ui: Store::new("ui", UiState::from_config(config)),
            mocks: Store::new("mocks", MocksState::default()),
            request_log: Store::new("request-log", RequestLogState::from_config(config)),
        }
    }
}

impl Default for AppStores {
    fn default() -> Self {
        Self::init(&AppConfig::default())
    }
}
