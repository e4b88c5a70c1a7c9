use crate::config::Config;
use std::sync::Arc;

/// Application state shared across all request handlers.
///
/// Every tool function is pure, so the state reduces to configuration.
/// Arc-shared and immutable, no synchronization needed.
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
