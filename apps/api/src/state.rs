use std::sync::Arc;

use crate::alignment::{AlignmentScorer, KnowledgeBase};
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Read-only catalog, loaded once at startup.
    pub knowledge_base: Arc<KnowledgeBase>,
    /// Pluggable scorer. Default: `AlignmentEngine` over `knowledge_base`.
    pub scorer: Arc<dyn AlignmentScorer>,
}
