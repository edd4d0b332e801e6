//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::PostRepository;

/// Shared application state passed to all handlers.
///
/// The registry is owned here and nowhere else; handlers receive it through
/// axum's `State` extractor rather than reaching for ambient globals.
#[derive(Clone)]
pub struct AppState {
    /// Post registry backing the service.
    pub repository: Arc<dyn PostRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }
}
