//! Application state for the HTTP server.

use crate::db::repository::MovieRepository;
use std::sync::Arc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Record store the analysis reads from
    pub repository: Arc<dyn MovieRepository>,
}

impl AppState {
    /// Create a new application state with the given record store.
    pub fn new(repository: Arc<dyn MovieRepository>) -> Self {
        Self { repository }
    }
}
