//! Mock "remote fetch" collaborator. Not part of the ranking core: it filters the
//! store by role and location the way a job board API would, after a simulated
//! network delay.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::jobs::JobStore;
use crate::models::JobPosting;

/// Number of postings returned when nothing matches.
const FALLBACK_COUNT: usize = 3;

#[async_trait]
pub trait JobSource: Send + Sync {
    async fn fetch(&self, role: &str, location: Option<&str>) -> Vec<JobPosting>;
}

pub struct MockJobSource {
    store: Arc<JobStore>,
    latency: Duration,
}

impl MockJobSource {
    pub fn new(store: Arc<JobStore>, latency: Duration) -> Self {
        Self { store, latency }
    }
}

#[async_trait]
impl JobSource for MockJobSource {
    async fn fetch(&self, role: &str, location: Option<&str>) -> Vec<JobPosting> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let role = role.to_lowercase();
        let location = location
            .map(str::to_lowercase)
            .filter(|l| !l.is_empty());

        let matched: Vec<JobPosting> = self
            .store
            .all()
            .iter()
            .filter(|job| {
                let matches_role = job.title.to_lowercase().contains(&role)
                    || job.description.to_lowercase().contains(&role);
                let matches_location = match &location {
                    None => true,
                    Some(loc) => job.location.to_lowercase().contains(loc) || job.remote,
                };
                matches_role && matches_location
            })
            .cloned()
            .collect();

        debug!(role = %role, matched = matched.len(), "mock fetch complete");

        if matched.is_empty() {
            self.store.first(FALLBACK_COUNT).to_vec()
        } else {
            matched
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> MockJobSource {
        MockJobSource::new(Arc::new(JobStore::fixture()), Duration::ZERO)
    }

    #[tokio::test]
    async fn test_fetch_filters_by_role() {
        let jobs = source().fetch("Data Scientist", None).await;
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].id, "6");
    }

    #[tokio::test]
    async fn test_fetch_location_admits_remote_jobs() {
        let jobs = source().fetch("engineer", Some("new york")).await;
        let ids: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        // ML engineer is in New York; the others qualify by being remote.
        assert!(ids.contains(&"2"));
        assert!(ids.contains(&"4"));
        assert!(jobs.iter().all(|j| j.remote || j.location.contains("New York")));
    }

    #[tokio::test]
    async fn test_fetch_falls_back_to_first_three() {
        let jobs = source().fetch("astronaut", None).await;
        let ids: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_waits_for_latency() {
        let source = MockJobSource::new(Arc::new(JobStore::fixture()), Duration::from_secs(1));
        let start = tokio::time::Instant::now();
        source.fetch("engineer", None).await;
        assert!(start.elapsed() >= Duration::from_secs(1));
    }
}
