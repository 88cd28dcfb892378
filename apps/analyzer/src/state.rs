use std::sync::Arc;

use crate::analysis::NlpPipeline;
use crate::config::Config;
use crate::scoring::{KeywordResumeScorer, ResumeScorer};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Built once at startup, read-only afterwards.
    pub pipeline: Arc<NlpPipeline>,
    /// Pluggable resume scorer. Default: KeywordResumeScorer.
    pub scorer: Arc<dyn ResumeScorer>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            pipeline: Arc::new(NlpPipeline::english()),
            scorer: Arc::new(KeywordResumeScorer),
            config,
        }
    }
}
