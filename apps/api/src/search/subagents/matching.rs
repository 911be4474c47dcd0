//! Job matching — the primary relevance ranking.
//!
//! Additive integer score per job:
//! - +30 title contains the query or any query word
//! - +15 per tag overlapping the query (substring either direction)
//! - +10 description contains the query
//! - +20 location filter matches (case-insensitive substring)
//! - +15 remote filter equals the job's remote flag
//! - +25 "senior"/"junior" in the query and the job carries that tag
//!
//! Jobs scoring zero are dropped; the rest are sorted by score descending with
//! ties kept in store order, then truncated to the top 10.

use serde::{Deserialize, Serialize};

use super::{SearchContext, Subagent, SubagentError, SubagentKind, SubagentPayload, SubagentResult};
use crate::models::{JobPosting, SearchQuery};

const CONFIDENCE: f32 = 0.9;
pub const MAX_RANKED: usize = 10;

const TITLE_POINTS: u32 = 30;
const TAG_POINTS: u32 = 15;
const DESCRIPTION_POINTS: u32 = 10;
const LOCATION_POINTS: u32 = 20;
const REMOTE_POINTS: u32 = 15;
const LEVEL_POINTS: u32 = 25;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredJob {
    pub job: JobPosting,
    pub score: u32,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMatches {
    /// Top matches, best first.
    pub ranked_jobs: Vec<ScoredJob>,
    /// Number of jobs with a positive score, before truncation.
    pub total_matches: usize,
    /// Reasons accumulated across all positively scored jobs.
    pub reason_count: usize,
}

pub struct JobMatcher;

impl Subagent for JobMatcher {
    fn kind(&self) -> SubagentKind {
        SubagentKind::JobMatching
    }

    fn analyze(&self, ctx: &SearchContext<'_>) -> Result<SubagentResult, SubagentError> {
        if ctx.jobs.is_empty() {
            return Err(SubagentError::Failed {
                kind: self.kind(),
                message: "no jobs to rank".to_string(),
            });
        }
        let matches = rank_jobs(ctx.query, ctx.jobs);

        let top = matches
            .ranked_jobs
            .first()
            .map(|s| format!("{} (Score: {})", s.job.title, s.score))
            .unwrap_or_else(|| "None (Score: 0)".to_string());
        let average = if matches.ranked_jobs.is_empty() {
            0
        } else {
            let sum: u32 = matches.ranked_jobs.iter().map(|s| s.score).sum();
            (sum as f64 / matches.ranked_jobs.len() as f64).round() as u32
        };

        let insights = vec![
            format!("Found {} relevant jobs", matches.total_matches),
            format!("Top match: {top}"),
            format!("Average relevance score: {average}"),
        ];

        Ok(SubagentResult {
            task_id: self.kind(),
            payload: Some(SubagentPayload::Matching(matches)),
            confidence: CONFIDENCE,
            insights,
        })
    }
}

pub fn rank_jobs(query: &SearchQuery, jobs: &[JobPosting]) -> JobMatches {
    let text = query.search_text();

    let mut scored: Vec<ScoredJob> = jobs
        .iter()
        .map(|job| {
            let (score, reasons) = score_job(&text, query, job);
            ScoredJob {
                job: job.clone(),
                score,
                reasons,
            }
        })
        .filter(|s| s.score > 0)
        .collect();

    // sort_by is stable: equal scores keep store order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    let total_matches = scored.len();
    let reason_count = scored.iter().map(|s| s.reasons.len()).sum();
    scored.truncate(MAX_RANKED);

    JobMatches {
        ranked_jobs: scored,
        total_matches,
        reason_count,
    }
}

/// Scores one job. `text` is the lower-cased query keywords.
pub fn score_job(text: &str, query: &SearchQuery, job: &JobPosting) -> (u32, Vec<String>) {
    let mut score = 0;
    let mut reasons = Vec::new();

    let title = job.title.to_lowercase();
    if title.contains(text) || text.split_whitespace().any(|w| title.contains(w)) {
        score += TITLE_POINTS;
        reasons.push("Title match".to_string());
    }

    let tag_hits = job
        .tags
        .iter()
        .map(|t| t.to_lowercase())
        .filter(|t| text.contains(t.as_str()) || t.contains(text))
        .count() as u32;
    if tag_hits > 0 {
        score += tag_hits * TAG_POINTS;
        reasons.push(format!("{tag_hits} skill matches"));
    }

    if job.description.to_lowercase().contains(text) {
        score += DESCRIPTION_POINTS;
        reasons.push("Description match".to_string());
    }

    if let Some(location) = query.location_filter() {
        if job.location.to_lowercase().contains(&location.to_lowercase()) {
            score += LOCATION_POINTS;
            reasons.push("Location match".to_string());
        }
    }

    if query.remote == Some(job.remote) {
        score += REMOTE_POINTS;
        reasons.push("Remote preference match".to_string());
    }

    if text.contains("senior") && job.is_tagged("senior") {
        score += LEVEL_POINTS;
        reasons.push("Senior level match".to_string());
    } else if text.contains("junior") && job.is_tagged("junior") {
        score += LEVEL_POINTS;
        reasons.push("Junior level match".to_string());
    }

    (score, reasons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::JobStore;

    fn ids(matches: &JobMatches) -> Vec<&str> {
        matches.ranked_jobs.iter().map(|s| s.job.id.as_str()).collect()
    }

    #[test]
    fn test_react_query_ranks_job_one_above_non_react_jobs() {
        let store = JobStore::fixture();
        let matches = rank_jobs(&SearchQuery::keywords("React developer jobs remote"), store.all());
        let order = ids(&matches);
        let pos = |id: &str| order.iter().position(|x| *x == id);

        let job_one = pos("1").expect("job 1 ranked");
        for non_react in ["5", "6", "10"] {
            if let Some(p) = pos(non_react) {
                assert!(job_one < p, "job 1 should outrank job {non_react}");
            }
        }
        // 1, 3 and 8 tie at 45 and keep store order.
        assert_eq!(&order[..3], &["1", "3", "8"]);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let store = JobStore::fixture();
        let query = SearchQuery {
            keywords: Some("senior engineer".to_string()),
            location: Some("seattle".to_string()),
            remote: Some(true),
            ..SearchQuery::default()
        };
        let a = rank_jobs(&query, store.all());
        let b = rank_jobs(&query, store.all());
        assert_eq!(ids(&a), ids(&b));
        let scores_a: Vec<u32> = a.ranked_jobs.iter().map(|s| s.score).collect();
        let scores_b: Vec<u32> = b.ranked_jobs.iter().map(|s| s.score).collect();
        assert_eq!(scores_a, scores_b);
    }

    #[test]
    fn test_senior_tag_bonus() {
        let store = JobStore::fixture();
        let job = store.get("1").unwrap();
        let query = SearchQuery::keywords("senior");
        let (score, reasons) = score_job("senior", &query, job);
        // title +30, tag "senior" +15, description +10, level +25
        assert_eq!(score, 80);
        assert!(reasons.contains(&"Senior level match".to_string()));
    }

    #[test]
    fn test_location_and_remote_points() {
        let store = JobStore::fixture();
        let job = store.get("4").unwrap();
        let query = SearchQuery {
            keywords: Some("zzz".to_string()),
            location: Some("Seattle".to_string()),
            remote: Some(true),
            ..SearchQuery::default()
        };
        let (score, reasons) = score_job("zzz", &query, job);
        assert_eq!(score, LOCATION_POINTS + REMOTE_POINTS);
        assert_eq!(reasons, vec!["Location match", "Remote preference match"]);
    }

    #[test]
    fn test_unmatched_jobs_are_dropped() {
        let store = JobStore::fixture();
        let matches = rank_jobs(&SearchQuery::keywords("zzzz"), store.all());
        assert!(matches.ranked_jobs.is_empty());
        assert_eq!(matches.total_matches, 0);
    }

    #[test]
    fn test_empty_query_matches_every_job() {
        let store = JobStore::fixture();
        let matches = rank_jobs(&SearchQuery::default(), store.all());
        assert_eq!(matches.total_matches, 10);
        assert_eq!(matches.ranked_jobs.len(), MAX_RANKED);
    }

    #[test]
    fn test_insights_report_top_match() {
        let store = JobStore::fixture();
        let query = SearchQuery::keywords("devops");
        let ctx = SearchContext { query: &query, jobs: store.all() };
        let result = JobMatcher.analyze(&ctx).unwrap();
        assert_eq!(result.confidence, CONFIDENCE);
        assert_eq!(result.insights[0], "Found 1 relevant jobs");
        assert!(result.insights[1].starts_with("Top match: DevOps Engineer"));
    }

    #[test]
    fn test_empty_store_is_an_error() {
        let query = SearchQuery::keywords("react");
        let ctx = SearchContext { query: &query, jobs: &[] };
        let err = JobMatcher.analyze(&ctx).unwrap_err();
        assert!(matches!(err, SubagentError::Failed { kind: SubagentKind::JobMatching, .. }));
    }
}
