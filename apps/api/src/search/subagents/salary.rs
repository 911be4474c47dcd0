use serde::{Deserialize, Serialize};

use super::{SearchContext, Subagent, SubagentError, SubagentKind, SubagentPayload, SubagentResult};
use crate::search::compensation::{format_dollars, SalaryBand, SalaryParser};

const CONFIDENCE: f32 = 0.8;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryAnalysis {
    /// Mean of per-job band averages, rounded. Zero when no salary parses.
    pub average_salary: u64,
    /// Lowest minimum and highest maximum across parseable jobs.
    pub salary_range: Option<(u64, u64)>,
    /// Jobs passing the salary floor, or the whole store when no floor is set.
    pub filtered_job_ids: Vec<String>,
    pub salary_insights: Vec<String>,
}

struct ParsedSalary<'a> {
    title: &'a str,
    company: &'a str,
    id: &'a str,
    band: SalaryBand,
}

pub struct SalaryAnalyzer {
    parser: SalaryParser,
}

impl SalaryAnalyzer {
    pub fn new(parser: SalaryParser) -> Self {
        Self { parser }
    }
}

impl Subagent for SalaryAnalyzer {
    fn kind(&self) -> SubagentKind {
        SubagentKind::SalaryAnalysis
    }

    fn analyze(&self, ctx: &SearchContext<'_>) -> Result<SubagentResult, SubagentError> {
        // Malformed or missing salary strings are skipped.
        let parsed: Vec<ParsedSalary<'_>> = ctx
            .jobs
            .iter()
            .filter_map(|job| {
                let band = self.parser.parse(job.salary.as_deref()?)?;
                Some(ParsedSalary {
                    title: &job.title,
                    company: &job.company,
                    id: &job.id,
                    band,
                })
            })
            .collect();

        let average_salary = if parsed.is_empty() {
            0
        } else {
            let sum: f64 = parsed.iter().map(|p| p.band.average()).sum();
            (sum / parsed.len() as f64).round() as u64
        };

        let salary_range = parsed
            .iter()
            .map(|p| p.band.min)
            .min()
            .zip(parsed.iter().map(|p| p.band.max).max());

        let floor = ctx.query.salary_floor();
        let filtered_job_ids: Vec<String> = match floor {
            Some(floor) => parsed
                .iter()
                .filter(|p| p.band.max >= floor)
                .map(|p| p.id.to_string())
                .collect(),
            None => ctx.jobs.iter().map(|j| j.id.clone()).collect(),
        };

        let range_text = match salary_range {
            Some((lo, hi)) => format!("Salary range: {} - {}", format_dollars(lo), format_dollars(hi)),
            None => "Salary range: unavailable".to_string(),
        };
        let insights = vec![
            format!("Average salary: {}", format_dollars(average_salary)),
            range_text,
            format!("{} jobs meet salary expectations", filtered_job_ids.len()),
        ];

        let analysis = SalaryAnalysis {
            average_salary,
            salary_range,
            filtered_job_ids,
            salary_insights: salary_insights(&parsed, floor),
        };

        Ok(SubagentResult {
            task_id: self.kind(),
            payload: Some(SubagentPayload::Salary(analysis)),
            confidence: CONFIDENCE,
            insights,
        })
    }
}

fn salary_insights(parsed: &[ParsedSalary<'_>], floor: Option<u64>) -> Vec<String> {
    if parsed.is_empty() {
        return vec!["Limited salary data available".to_string()];
    }

    let mut by_average: Vec<&ParsedSalary<'_>> = parsed.iter().collect();
    by_average.sort_by(|a, b| b.band.average().total_cmp(&a.band.average()));

    let mut insights = Vec::new();
    if let (Some(highest), Some(lowest)) = (by_average.first(), by_average.last()) {
        insights.push(format!("Highest paying: {} at {}", highest.title, highest.company));
        insights.push(format!(
            "Entry level range: {} - {}",
            format_dollars(lowest.band.min),
            format_dollars(lowest.band.max)
        ));
    }

    if let Some(floor) = floor {
        let meeting = parsed.iter().filter(|p| p.band.max >= floor).count();
        insights.push(format!(
            "{meeting}/{} positions meet your salary expectations",
            parsed.len()
        ));
    }

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::JobStore;
    use crate::models::SearchQuery;

    fn analyze(query: &SearchQuery, store: &JobStore) -> (SalaryAnalysis, Vec<String>) {
        let agent = SalaryAnalyzer::new(SalaryParser::new().unwrap());
        let ctx = SearchContext { query, jobs: store.all() };
        let result = agent.analyze(&ctx).unwrap();
        assert_eq!(result.confidence, CONFIDENCE);
        match result.payload {
            Some(SubagentPayload::Salary(a)) => (a, result.insights),
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn test_fixture_range_and_average() {
        let store = JobStore::fixture();
        let (analysis, insights) = analyze(&SearchQuery::default(), &store);
        assert_eq!(analysis.salary_range, Some((70_000, 220_000)));
        // Per-job averages sum to 1,397,500 over 10 jobs.
        assert_eq!(analysis.average_salary, 139_750);
        assert_eq!(insights[0], "Average salary: $139,750");
        assert_eq!(insights[1], "Salary range: $70,000 - $220,000");
    }

    #[test]
    fn test_no_floor_keeps_whole_store() {
        let store = JobStore::fixture();
        let (analysis, insights) = analyze(&SearchQuery::default(), &store);
        assert_eq!(analysis.filtered_job_ids.len(), 10);
        assert_eq!(insights[2], "10 jobs meet salary expectations");
    }

    #[test]
    fn test_high_floor_keeps_only_ml_engineer() {
        let store = JobStore::fixture();
        let query = SearchQuery {
            salary_min: Some(200_000),
            ..SearchQuery::default()
        };
        let (analysis, _) = analyze(&query, &store);
        assert_eq!(analysis.filtered_job_ids, vec!["2".to_string()]);
        assert!(analysis
            .salary_insights
            .contains(&"1/10 positions meet your salary expectations".to_string()));
    }

    #[test]
    fn test_salary_insights_name_extremes() {
        let store = JobStore::fixture();
        let (analysis, _) = analyze(&SearchQuery::default(), &store);
        assert_eq!(
            analysis.salary_insights[0],
            "Highest paying: Machine Learning Engineer at AI Innovations Inc."
        );
        assert_eq!(analysis.salary_insights[1], "Entry level range: $70,000 - $90,000");
    }

    #[test]
    fn test_malformed_salaries_are_excluded() {
        let mut jobs = JobStore::fixture().all().to_vec();
        for job in jobs.iter_mut() {
            job.salary = Some("Competitive".to_string());
        }
        jobs[0].salary = Some("$100,000 - $120,000".to_string());
        jobs[1].salary = None;
        let store = JobStore::new(jobs);

        let (analysis, _) = analyze(&SearchQuery::default(), &store);
        assert_eq!(analysis.average_salary, 110_000);
        assert_eq!(analysis.salary_range, Some((100_000, 120_000)));
    }

    #[test]
    fn test_no_salary_data() {
        let mut jobs = JobStore::fixture().all().to_vec();
        for job in jobs.iter_mut() {
            job.salary = None;
        }
        let store = JobStore::new(jobs);
        let (analysis, insights) = analyze(&SearchQuery::default(), &store);
        assert_eq!(analysis.average_salary, 0);
        assert!(analysis.salary_range.is_none());
        assert_eq!(insights[1], "Salary range: unavailable");
        assert_eq!(analysis.salary_insights, vec!["Limited salary data available"]);
    }
}
