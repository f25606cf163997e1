use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionService;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds no per-request data; every generation is independent.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Default: `LlmClient`.
    pub completion: Arc<dyn CompletionService>,
    pub config: Config,
}
