//! Subagent pipeline — runs the four subagents in order, each after a simulated
//! processing delay, then hands their results to the combiner.
//!
//! Subagents run sequentially. A failing subagent is replaced by a
//! zero-confidence result; it never aborts the others and is not retried.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::{debug, info, warn};

use crate::jobs::JobStore;
use crate::models::SearchQuery;
use crate::search::combiner::{combine, SearchResult};
use crate::search::compensation::SalaryParser;
use crate::search::subagents::{
    JobMatcher, KeywordAnalyzer, LocationAnalyzer, SalaryAnalyzer, SearchContext, Subagent,
    SubagentResult,
};

/// Simulated per-subagent processing time, sampled uniformly from `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubagentDelay {
    pub min: Duration,
    pub max: Duration,
}

impl SubagentDelay {
    pub fn new(min: Duration, max: Duration) -> Self {
        Self { min, max }
    }

    /// No delay at all.
    pub fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    pub fn sample(&self) -> Duration {
        if self.max <= self.min {
            return self.min;
        }
        rand::thread_rng().gen_range(self.min..=self.max)
    }

    async fn pause(&self) {
        let delay = self.sample();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

impl Default for SubagentDelay {
    fn default() -> Self {
        Self::new(Duration::from_millis(100), Duration::from_millis(300))
    }
}

pub struct SearchPipeline {
    store: Arc<JobStore>,
    subagents: Vec<Arc<dyn Subagent>>,
    delay: SubagentDelay,
}

impl SearchPipeline {
    /// Keyword analysis → job matching → salary analysis → location analysis.
    pub fn standard(store: Arc<JobStore>, delay: SubagentDelay) -> Result<Self, regex::Error> {
        let subagents: Vec<Arc<dyn Subagent>> = vec![
            Arc::new(KeywordAnalyzer),
            Arc::new(JobMatcher),
            Arc::new(SalaryAnalyzer::new(SalaryParser::new()?)),
            Arc::new(LocationAnalyzer),
        ];
        Ok(Self::with_subagents(store, subagents, delay))
    }

    pub fn with_subagents(
        store: Arc<JobStore>,
        subagents: Vec<Arc<dyn Subagent>>,
        delay: SubagentDelay,
    ) -> Self {
        Self {
            store,
            subagents,
            delay,
        }
    }

    /// Runs every subagent and returns their results in execution order.
    pub async fn run_subagents(&self, query: &SearchQuery) -> Vec<SubagentResult> {
        let mut results = Vec::with_capacity(self.subagents.len());

        for agent in &self.subagents {
            let kind = agent.kind();
            debug!(task_id = kind.task_id(), "Subagent started");
            self.delay.pause().await;

            let started = Instant::now();
            let ctx = SearchContext {
                query,
                jobs: self.store.all(),
            };
            let result = match agent.analyze(&ctx) {
                Ok(result) => {
                    debug!(
                        task_id = kind.task_id(),
                        confidence = result.confidence,
                        elapsed_us = started.elapsed().as_micros() as u64,
                        "Subagent finished"
                    );
                    result
                }
                Err(e) => {
                    warn!(task_id = kind.task_id(), error = %e, "Subagent failed");
                    SubagentResult::failed(kind)
                }
            };
            results.push(result);
        }

        results
    }

    /// Full search: subagents, then combination.
    pub async fn search(&self, query: &SearchQuery) -> SearchResult {
        let results = self.run_subagents(query).await;
        let combined = combine(&results, query, &self.store);
        info!(
            keywords = query.keywords.as_deref().unwrap_or(""),
            total = combined.total_count,
            returned = combined.jobs.len(),
            "Search complete"
        );
        combined
    }
}
