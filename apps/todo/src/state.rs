//! Application state - shared across all handlers.

use std::path::Path;
use std::sync::Arc;

use sip_core::ports::TaskRepository;
use sip_infra::JsonTaskRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub tasks: Arc<dyn TaskRepository>,
}

impl AppState {
    pub fn new(data_dir: &Path) -> Self {
        tracing::info!(data_dir = %data_dir.display(), "Tasks stored as JSON");
        Self {
            tasks: Arc::new(JsonTaskRepository::in_dir(data_dir)),
        }
    }
}
