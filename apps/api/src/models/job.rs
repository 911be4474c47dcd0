use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employment type of a posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[serde(rename = "Full-time")]
    FullTime,
    #[serde(rename = "Part-time")]
    PartTime,
    Contract,
    Internship,
}

/// An immutable job record from the Job Store. Identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub job_type: JobType,
    pub remote: bool,
    pub salary: Option<String>,
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    pub tags: Vec<String>,
    pub posted_date: NaiveDate,
    pub application_deadline: Option<NaiveDate>,
}

impl JobPosting {
    /// Display-derived key used by the saved-jobs view: `title-company` with
    /// whitespace runs collapsed to `-`.
    pub fn display_key(&self) -> String {
        display_key(&self.title, &self.company)
    }

    pub fn is_tagged(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

pub fn display_key(title: &str, company: &str) -> String {
    format!("{title}-{company}")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_type_serde_uses_display_names() {
        let json = serde_json::to_string(&JobType::FullTime).unwrap();
        assert_eq!(json, r#""Full-time""#);
        let parsed: JobType = serde_json::from_str(r#""Part-time""#).unwrap();
        assert_eq!(parsed, JobType::PartTime);
    }

    #[test]
    fn test_display_key_replaces_whitespace() {
        assert_eq!(
            display_key("Data Scientist", "DataDriven Analytics"),
            "Data-Scientist-DataDriven-Analytics"
        );
    }

    #[test]
    fn test_optional_sequences_default_to_empty() {
        let json = r#"{
            "id": "x",
            "title": "Engineer",
            "company": "Acme",
            "location": "Remote",
            "job_type": "Contract",
            "remote": true,
            "salary": null,
            "description": "",
            "tags": ["go"],
            "posted_date": "2024-11-01",
            "application_deadline": null
        }"#;
        let job: JobPosting = serde_json::from_str(json).unwrap();
        assert!(job.requirements.is_empty());
        assert!(job.benefits.is_empty());
        assert!(job.is_tagged("go"));
    }
}
