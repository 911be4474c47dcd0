use serde::{Deserialize, Serialize};

use super::{SearchContext, Subagent, SubagentError, SubagentKind, SubagentPayload, SubagentResult};

const CONFIDENCE: f32 = 0.9;
const TOP_LOCATIONS: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocationAnalysis {
    /// Job count per location, in first-seen store order.
    pub location_distribution: Vec<(String, usize)>,
    pub remote_count: usize,
    pub on_site_count: usize,
    /// Jobs passing the location filter, or the whole store when none is set.
    pub filtered_job_ids: Vec<String>,
    pub top_locations: Vec<(String, usize)>,
}

pub struct LocationAnalyzer;

impl Subagent for LocationAnalyzer {
    fn kind(&self) -> SubagentKind {
        SubagentKind::LocationAnalysis
    }

    fn analyze(&self, ctx: &SearchContext<'_>) -> Result<SubagentResult, SubagentError> {
        let mut distribution: Vec<(String, usize)> = Vec::new();
        for job in ctx.jobs {
            match distribution.iter_mut().find(|(loc, _)| *loc == job.location) {
                Some((_, count)) => *count += 1,
                None => distribution.push((job.location.clone(), 1)),
            }
        }

        let remote_count = ctx.jobs.iter().filter(|j| j.remote).count();
        let on_site_count = ctx.jobs.len() - remote_count;

        let filtered_job_ids: Vec<String> = match ctx.query.location_filter() {
            Some(location) => {
                let location = location.to_lowercase();
                let wants_remote = ctx.query.remote == Some(true);
                ctx.jobs
                    .iter()
                    .filter(|j| {
                        j.location.to_lowercase().contains(&location) || (wants_remote && j.remote)
                    })
                    .map(|j| j.id.clone())
                    .collect()
            }
            None => ctx.jobs.iter().map(|j| j.id.clone()).collect(),
        };

        // Stable: locations with equal counts stay in first-seen order.
        let mut top_locations = distribution.clone();
        top_locations.sort_by(|a, b| b.1.cmp(&a.1));
        top_locations.truncate(TOP_LOCATIONS);

        let top = top_locations
            .first()
            .map(|(loc, _)| loc.as_str())
            .unwrap_or("none");
        let insights = vec![
            format!("{remote_count} remote positions available"),
            format!("Top location: {top}"),
            format!("{} jobs match location preferences", filtered_job_ids.len()),
        ];

        let analysis = LocationAnalysis {
            location_distribution: distribution,
            remote_count,
            on_site_count,
            filtered_job_ids,
            top_locations,
        };

        Ok(SubagentResult {
            task_id: self.kind(),
            payload: Some(SubagentPayload::Location(analysis)),
            confidence: CONFIDENCE,
            insights,
        })
    }
}
