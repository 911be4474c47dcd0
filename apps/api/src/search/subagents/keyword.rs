use serde::{Deserialize, Serialize};

use super::{SearchContext, Subagent, SubagentError, SubagentKind, SubagentPayload, SubagentResult};

const CONFIDENCE: f32 = 0.85;

/// Tech vocabulary recognised in queries. Hyphenated entries also match with a space.
const TECH_SKILLS: &[&str] = &[
    "react",
    "nodejs",
    "typescript",
    "javascript",
    "python",
    "java",
    "go",
    "aws",
    "azure",
    "gcp",
    "kubernetes",
    "docker",
    "terraform",
    "machine-learning",
    "ai",
    "data-science",
    "sql",
    "mongodb",
    "frontend",
    "backend",
    "fullstack",
    "devops",
    "mobile",
    "react-native",
    "ios",
    "android",
    "security",
    "cybersecurity",
];

const JOB_TYPE_TOKENS: &[&str] = &["remote", "full-time", "part-time", "contract"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub tech_skills: Vec<String>,
    /// "senior" | "junior" | "mid" | "any"
    pub experience_level: String,
    pub job_type_prefs: Vec<String>,
    /// Query words longer than two characters.
    pub processed_keywords: Vec<String>,
}

pub struct KeywordAnalyzer;

impl Subagent for KeywordAnalyzer {
    fn kind(&self) -> SubagentKind {
        SubagentKind::KeywordAnalysis
    }

    fn analyze(&self, ctx: &SearchContext<'_>) -> Result<SubagentResult, SubagentError> {
        let text = ctx.query.search_text();
        let analysis = analyze_keywords(&text);

        let prefs = if analysis.job_type_prefs.is_empty() {
            "none".to_string()
        } else {
            analysis.job_type_prefs.join(", ")
        };
        let insights = vec![
            format!("Identified {} technical skills", analysis.tech_skills.len()),
            format!("Experience level: {}", analysis.experience_level),
            format!("Job type preferences: {prefs}"),
        ];

        Ok(SubagentResult {
            task_id: self.kind(),
            payload: Some(SubagentPayload::Keyword(analysis)),
            confidence: CONFIDENCE,
            insights,
        })
    }
}

pub fn analyze_keywords(text: &str) -> KeywordAnalysis {
    KeywordAnalysis {
        tech_skills: extract_tech_skills(text),
        experience_level: experience_level(text).to_string(),
        job_type_prefs: JOB_TYPE_TOKENS
            .iter()
            .filter(|t| text.contains(*t))
            .map(|t| t.to_string())
            .collect(),
        processed_keywords: text
            .split_whitespace()
            .filter(|w| w.chars().count() > 2)
            .map(str::to_string)
            .collect(),
    }
}

fn extract_tech_skills(text: &str) -> Vec<String> {
    TECH_SKILLS
        .iter()
        .filter(|skill| text.contains(*skill) || text.contains(&skill.replacen('-', " ", 1)))
        .map(|s| s.to_string())
        .collect()
}

/// Experience level implied by the query. Senior words win over junior words.
pub fn experience_level(text: &str) -> &'static str {
    let has = |words: &[&str]| words.iter().any(|w| text.contains(w));
    if has(&["senior", "lead", "principal"]) {
        "senior"
    } else if has(&["junior", "entry"]) {
        "junior"
    } else if has(&["mid", "intermediate"]) {
        "mid"
    } else {
        "any"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SearchQuery;

    fn run(keywords: &str) -> (KeywordAnalysis, Vec<String>) {
        let query = SearchQuery::keywords(keywords);
        let ctx = SearchContext { query: &query, jobs: &[] };
        let result = KeywordAnalyzer.analyze(&ctx).unwrap();
        assert_eq!(result.confidence, CONFIDENCE);
        match result.payload {
            Some(SubagentPayload::Keyword(a)) => (a, result.insights),
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn test_extracts_skills_from_vocabulary() {
        let (analysis, insights) = run("Senior React TypeScript developer");
        assert!(analysis.tech_skills.contains(&"react".to_string()));
        assert!(analysis.tech_skills.contains(&"typescript".to_string()));
        assert_eq!(analysis.experience_level, "senior");
        assert_eq!(insights[1], "Experience level: senior");
    }

    #[test]
    fn test_hyphenated_skill_matches_spaced_form() {
        let (analysis, _) = run("machine learning research");
        assert!(analysis.tech_skills.contains(&"machine-learning".to_string()));
    }

    #[test]
    fn test_experience_levels() {
        assert_eq!(experience_level("principal engineer"), "senior");
        assert_eq!(experience_level("entry level"), "junior");
        assert_eq!(experience_level("intermediate designer"), "mid");
        assert_eq!(experience_level("designer"), "any");
    }

    #[test]
    fn test_job_type_prefs_verbatim() {
        let (analysis, insights) = run("remote contract full-time work");
        assert_eq!(analysis.job_type_prefs, vec!["remote", "full-time", "contract"]);
        assert_eq!(insights[2], "Job type preferences: remote, full-time, contract");
    }

    #[test]
    fn test_empty_query_completes() {
        let (analysis, insights) = run("");
        assert!(analysis.tech_skills.is_empty());
        assert_eq!(analysis.experience_level, "any");
        assert!(analysis.processed_keywords.is_empty());
        assert_eq!(insights[0], "Identified 0 technical skills");
    }

    #[test]
    fn test_processed_keywords_drop_short_words() {
        let (analysis, _) = run("a go dev in sf working remote");
        assert_eq!(analysis.processed_keywords, vec!["dev", "working", "remote"]);
    }
}
