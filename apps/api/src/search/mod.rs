//! The search core: four scoring subagents run in sequence by the pipeline, and
//! the combiner that turns their partial results into one `SearchResult`.

pub mod combiner;
pub mod compensation;
pub mod handlers;
pub mod pipeline;
pub mod subagents;

pub use combiner::SearchResult;
pub use pipeline::{SearchPipeline, SubagentDelay};
