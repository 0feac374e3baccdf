//! Application state

use std::sync::Arc;

use crate::config::Config;

/// Shared application state
///
/// Configuration is read-only once the server starts, so handlers only
/// ever clone the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
