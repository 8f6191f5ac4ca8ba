use std::sync::Arc;

use crate::analysis::Pipeline;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum
/// extractors. The pipeline is built once during startup and shared
/// read-only across concurrent requests.
#[derive(Clone)]
pub struct AppState {
    /// Process-level configuration; thresholds already baked into `pipeline`.
    #[allow(dead_code)]
    pub config: Config,
    pub pipeline: Arc<Pipeline>,
}
