//! Scoring Subagents — four independent heuristics that each read the query and
//! the job store and contribute a confidence-tagged partial result.
//!
//! Only job matching orders jobs. Salary and location analysis produce filter
//! sets that the combiner intersects with the ranked list.

pub mod keyword;
pub mod location;
pub mod matching;
pub mod salary;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{JobPosting, SearchQuery};

pub use keyword::{KeywordAnalysis, KeywordAnalyzer};
pub use location::{LocationAnalysis, LocationAnalyzer};
pub use matching::{JobMatcher, JobMatches};
pub use salary::{SalaryAnalysis, SalaryAnalyzer};

/// The four subagent kinds, in pipeline execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SubagentKind {
    KeywordAnalysis,
    JobMatching,
    SalaryAnalysis,
    LocationAnalysis,
}

impl SubagentKind {
    /// Stable task id surfaced in insights and logs.
    pub fn task_id(&self) -> &'static str {
        match self {
            SubagentKind::KeywordAnalysis => "keyword-analyzer",
            SubagentKind::JobMatching => "job-matcher",
            SubagentKind::SalaryAnalysis => "salary-analyzer",
            SubagentKind::LocationAnalysis => "location-optimizer",
        }
    }
}

/// Read-only input shared by every subagent in one search.
#[derive(Debug, Clone, Copy)]
pub struct SearchContext<'a> {
    pub query: &'a SearchQuery,
    pub jobs: &'a [JobPosting],
}

/// Kind-specific result body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SubagentPayload {
    Keyword(KeywordAnalysis),
    Matching(JobMatches),
    Salary(SalaryAnalysis),
    Location(LocationAnalysis),
}

/// One subagent's contribution to a search. `payload` is `None` when the
/// subagent failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubagentResult {
    pub task_id: SubagentKind,
    pub payload: Option<SubagentPayload>,
    pub confidence: f32,
    pub insights: Vec<String>,
}

impl SubagentResult {
    /// Zero-confidence placeholder recorded when a subagent fails.
    pub fn failed(kind: SubagentKind) -> Self {
        Self {
            task_id: kind,
            payload: None,
            confidence: 0.0,
            insights: vec![format!("Subagent {} encountered an error", kind.task_id())],
        }
    }
}

#[derive(Debug, Error)]
pub enum SubagentError {
    #[error("subagent {kind:?} failed: {message}")]
    Failed { kind: SubagentKind, message: String },
}

/// A scoring heuristic. Implementations are pure: they must not mutate the
/// store and must tolerate empty or partial queries.
pub trait Subagent: Send + Sync {
    fn kind(&self) -> SubagentKind;

    fn analyze(&self, ctx: &SearchContext<'_>) -> Result<SubagentResult, SubagentError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_result_has_zero_confidence_and_generic_insight() {
        let result = SubagentResult::failed(SubagentKind::SalaryAnalysis);
        assert_eq!(result.confidence, 0.0);
        assert!(result.payload.is_none());
        assert_eq!(
            result.insights,
            vec!["Subagent salary-analyzer encountered an error".to_string()]
        );
    }

    #[test]
    fn test_kind_serde_is_kebab_case() {
        let json = serde_json::to_string(&SubagentKind::JobMatching).unwrap();
        assert_eq!(json, r#""job-matching""#);
    }
}
