use std::sync::Arc;

use crate::config::Config;
use crate::nexus::CompletionBackend;

/// Shared application state injected into all route handlers via Axum
/// extractors. Holds only immutable, request-independent values; each flow
/// invocation is otherwise self-contained.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable completion backend. Production: NexusClient. Tests inject
    /// fakes so flows run without credentials or network.
    pub completion: Arc<dyn CompletionBackend>,
    pub config: Config,
}
