//! The user's saved jobs: insertion-ordered, no duplicates.
//!
//! Duplicates are detected by canonical job id. The `title-company` display
//! key is what the client removes by, and a removal takes every entry sharing
//! that key, so a re-fetched posting saved under a new id goes with it.

use crate::models::JobPosting;

#[derive(Debug, Clone, Default)]
pub struct SavedJobs {
    jobs: Vec<JobPosting>,
}

impl SavedJobs {
    /// Returns `false` when the job was already saved.
    pub fn insert(&mut self, job: JobPosting) -> bool {
        if self.contains_id(&job.id) {
            return false;
        }
        self.jobs.push(job);
        true
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.jobs.iter().any(|j| j.id == id)
    }

    /// Removes every saved job with this display key, returning them in
    /// insertion order.
    pub fn remove_by_key(&mut self, display_key: &str) -> Vec<JobPosting> {
        let (removed, kept) = std::mem::take(&mut self.jobs)
            .into_iter()
            .partition(|j| j.display_key() == display_key);
        self.jobs = kept;
        removed
    }

    pub fn list(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }
}
