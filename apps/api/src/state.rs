use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::CompletionClient;
use crate::models::profile::ProfileRecord;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only during request handling.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Built once at startup; never mutated.
    pub profile: Arc<ProfileRecord>,
    /// `None` when no completion credential is configured.
    pub llm: Option<Arc<dyn CompletionClient>>,
}
