//! Result Combiner — merges subagent outputs into one ranked `SearchResult`.
//!
//! The job-matching order is authoritative. Salary and location results only
//! remove jobs (set membership by id); they never reorder.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::jobs::JobStore;
use crate::models::{JobPosting, SearchQuery};
use crate::search::subagents::{SubagentPayload, SubagentResult};

pub const MAX_RESULTS: usize = 10;
pub const MAX_REFINEMENTS: usize = 3;
/// Jobs shown when job matching produced nothing usable.
pub const FALLBACK_JOBS: usize = 5;
const FEW_MATCHES: usize = 3;
const MANY_REMOTE: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub jobs: Vec<JobPosting>,
    pub total_count: usize,
    pub search_insights: Vec<String>,
    pub suggested_refinements: Vec<String>,
}

pub fn combine(results: &[SubagentResult], query: &SearchQuery, store: &JobStore) -> SearchResult {
    let mut keyword = None;
    let mut matching = None;
    let mut salary = None;
    let mut location = None;
    for result in results {
        match &result.payload {
            Some(SubagentPayload::Keyword(k)) => keyword = Some(k),
            Some(SubagentPayload::Matching(m)) => matching = Some(m),
            Some(SubagentPayload::Salary(s)) => salary = Some(s),
            Some(SubagentPayload::Location(l)) => location = Some(l),
            None => {}
        }
    }

    let mut jobs: Vec<JobPosting> = match matching {
        Some(m) => m.ranked_jobs.iter().map(|s| s.job.clone()).collect(),
        None => store.first(FALLBACK_JOBS).to_vec(),
    };

    if let Some(s) = salary {
        retain_ids(&mut jobs, &s.filtered_job_ids);
    }
    if let Some(l) = location {
        retain_ids(&mut jobs, &l.filtered_job_ids);
    }

    let total_count = jobs.len();
    jobs.truncate(MAX_RESULTS);

    let search_insights = results
        .iter()
        .flat_map(|r| r.insights.iter().cloned())
        .collect();

    let mut refinements = Vec::new();
    if keyword.is_some_and(|k| k.tech_skills.is_empty()) {
        refinements.push(
            "Try adding specific technical skills (e.g., \"React\", \"Python\", \"AWS\")".to_string(),
        );
    }
    if matching.is_some_and(|m| m.total_matches < FEW_MATCHES) {
        refinements.push(if query.salary_floor().is_some() {
            "Broaden your search terms or lower your salary expectations".to_string()
        } else {
            "Broaden your search terms or consider related technologies".to_string()
        });
    }
    if query.location_filter().is_none() {
        refinements.push("Specify a preferred location or search for remote positions".to_string());
    }
    if query.salary_floor().is_none() {
        refinements.push("Add salary expectations to see more targeted results".to_string());
    }
    if location.is_some_and(|l| l.remote_count > MANY_REMOTE) {
        refinements.push("Consider remote positions for more opportunities".to_string());
    }
    refinements.truncate(MAX_REFINEMENTS);

    SearchResult {
        jobs,
        total_count,
        search_insights,
        suggested_refinements: refinements,
    }
}

fn retain_ids(jobs: &mut Vec<JobPosting>, allowed: &[String]) {
    let allowed: HashSet<&str> = allowed.iter().map(String::as_str).collect();
    jobs.retain(|j| allowed.contains(j.id.as_str()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::compensation::SalaryParser;
    use crate::search::subagents::{
        JobMatcher, KeywordAnalyzer, LocationAnalyzer, SalaryAnalyzer, SearchContext, Subagent,
        SubagentKind,
    };

    fn run_all(query: &SearchQuery, store: &JobStore) -> Vec<SubagentResult> {
        let salary = SalaryAnalyzer::new(SalaryParser::new().unwrap());
        let agents: [&dyn Subagent; 4] = [&KeywordAnalyzer, &JobMatcher, &salary, &LocationAnalyzer];
        let ctx = SearchContext { query, jobs: store.all() };
        agents.iter().map(|a| a.analyze(&ctx).unwrap()).collect()
    }

    fn ids(result: &SearchResult) -> Vec<&str> {
        result.jobs.iter().map(|j| j.id.as_str()).collect()
    }

    #[test]
    fn test_matching_order_is_preserved() {
        let store = JobStore::fixture();
        let query = SearchQuery::keywords("React developer jobs remote");
        let result = combine(&run_all(&query, &store), &query, &store);
        assert_eq!(ids(&result), vec!["1", "3", "8", "5", "10", "6"]);
        assert_eq!(result.total_count, 6);
    }

    #[test]
    fn test_insights_concatenate_in_execution_order() {
        let store = JobStore::fixture();
        let query = SearchQuery::keywords("react");
        let results = run_all(&query, &store);
        let combined = combine(&results, &query, &store);
        let expected: Vec<String> = results.iter().flat_map(|r| r.insights.clone()).collect();
        assert_eq!(combined.search_insights, expected);
        assert_eq!(combined.search_insights.len(), 12);
        assert!(combined.search_insights[0].starts_with("Identified"));
        assert!(combined.search_insights[11].ends_with("jobs match location preferences"));
    }

    #[test]
    fn test_salary_floor_intersects_ranked_list() {
        let store = JobStore::fixture();
        let query = SearchQuery {
            keywords: Some("machine learning".to_string()),
            salary_min: Some(200_000),
            ..SearchQuery::default()
        };
        let result = combine(&run_all(&query, &store), &query, &store);
        assert_eq!(ids(&result), vec!["2"]);
        assert_eq!(result.total_count, 1);
        assert_eq!(
            result.suggested_refinements,
            vec![
                "Broaden your search terms or lower your salary expectations",
                "Specify a preferred location or search for remote positions",
                "Consider remote positions for more opportunities",
            ]
        );
    }

    #[test]
    fn test_refinements_capped_at_three_in_order() {
        let store = JobStore::fixture();
        let query = SearchQuery::keywords("zzzz");
        let result = combine(&run_all(&query, &store), &query, &store);
        assert!(result.jobs.is_empty());
        assert_eq!(
            result.suggested_refinements,
            vec![
                "Try adding specific technical skills (e.g., \"React\", \"Python\", \"AWS\")",
                "Broaden your search terms or consider related technologies",
                "Specify a preferred location or search for remote positions",
            ]
        );
    }

    #[test]
    fn test_missing_matching_result_falls_back_to_store_slice() {
        let store = JobStore::fixture();
        let query = SearchQuery {
            keywords: Some("react".to_string()),
            location: Some("Seattle".to_string()),
            ..SearchQuery::default()
        };
        let mut results = run_all(&query, &store);
        results[1] = SubagentResult::failed(SubagentKind::JobMatching);

        let combined = combine(&results, &query, &store);
        // Fallback slice is 1..=5; only Seattle survives the location filter.
        assert_eq!(ids(&combined), vec!["4"]);
        assert!(combined
            .search_insights
            .contains(&"Subagent job-matcher encountered an error".to_string()));
    }

    #[test]
    fn test_all_failed_still_returns_fallback() {
        let store = JobStore::fixture();
        let query = SearchQuery::default();
        let results: Vec<SubagentResult> = [
            SubagentKind::KeywordAnalysis,
            SubagentKind::JobMatching,
            SubagentKind::SalaryAnalysis,
            SubagentKind::LocationAnalysis,
        ]
        .into_iter()
        .map(SubagentResult::failed)
        .collect();

        let combined = combine(&results, &query, &store);
        assert_eq!(combined.jobs.len(), FALLBACK_JOBS);
        assert_eq!(combined.search_insights.len(), 4);
        // Only the query-derived refinements apply.
        assert_eq!(
            combined.suggested_refinements,
            vec![
                "Specify a preferred location or search for remote positions",
                "Add salary expectations to see more targeted results",
            ]
        );
    }
}
