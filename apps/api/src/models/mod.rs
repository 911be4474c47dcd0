pub mod job;
pub mod search;

pub use job::{JobPosting, JobType};
pub use search::SearchQuery;
