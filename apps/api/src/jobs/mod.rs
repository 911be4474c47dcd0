//! Job Store — a read-only, ordered collection of postings.
//!
//! The search pipeline borrows from the store and never mutates it; every job a
//! search returns is a clone of a store entry.

pub mod fixture;
pub mod handlers;
pub mod remote;

use crate::models::JobPosting;

#[derive(Debug, Clone)]
pub struct JobStore {
    jobs: Vec<JobPosting>,
}

impl JobStore {
    pub fn new(jobs: Vec<JobPosting>) -> Self {
        Self { jobs }
    }

    /// The built-in 10-posting fixture.
    pub fn fixture() -> Self {
        Self::new(fixture::fixture_jobs())
    }

    pub fn all(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn get(&self, id: &str) -> Option<&JobPosting> {
        self.jobs.iter().find(|j| j.id == id)
    }

    /// The first `n` postings in store order.
    pub fn first(&self, n: usize) -> &[JobPosting] {
        &self.jobs[..n.min(self.jobs.len())]
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }
}
