use std::sync::Arc;

use crate::analysis::matching::SimilarityScorer;
use crate::catalog::JobPosting;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum
/// extractors. Catalogs are loaded once at startup and read-only from then
/// on; per-request working data never lands here.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub skill_catalog: Arc<Vec<String>>,
    pub job_catalog: Arc<Vec<JobPosting>>,
    /// Pluggable similarity scorer. Default: TokenSetScorer.
    pub scorer: Arc<dyn SimilarityScorer>,
}
