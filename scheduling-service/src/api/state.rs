use std::sync::Arc;

use crate::infrastructure::config::Settings;

/// Process-wide, read-only state shared across requests: just the parsed
/// configuration. No repositories, no connection pools -- the solver keeps
/// no state beyond the per-request model.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }
}
