use std::sync::Arc;

use anyhow::Result;

use crate::config::Config;
use crate::jobs::remote::{JobSource, MockJobSource};
use crate::jobs::JobStore;
use crate::search::SearchPipeline;
use crate::session::SessionRegistry;
use crate::voice::{IntentClassifier, SpeechOutput};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only search universe.
    pub store: Arc<JobStore>,
    pub classifier: Arc<IntentClassifier>,
    pub pipeline: Arc<SearchPipeline>,
    /// Mock job board used by the fetch endpoint. Not part of ranking.
    pub job_source: Arc<dyn JobSource>,
    pub sessions: Arc<SessionRegistry>,
}

impl AppState {
    pub fn new(config: &Config, store: JobStore, speech: Arc<dyn SpeechOutput>) -> Result<Self> {
        let store = Arc::new(store);
        let classifier = Arc::new(IntentClassifier::new()?);
        let pipeline = Arc::new(SearchPipeline::standard(store.clone(), config.subagent_delay)?);
        let job_source = Arc::new(MockJobSource::new(store.clone(), config.fetch_latency));
        let sessions = Arc::new(SessionRegistry::new(
            classifier.clone(),
            pipeline.clone(),
            speech,
            config.silence_threshold,
        ));

        Ok(AppState {
            store,
            classifier,
            pipeline,
            job_source,
            sessions,
        })
    }
}
