use serde::{Deserialize, Serialize};

/// Transient search request built per search. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub keywords: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub remote: Option<bool>,
    #[serde(default)]
    pub salary_min: Option<u64>,
    #[serde(default)]
    pub job_type: Option<String>,
}

impl SearchQuery {
    pub fn keywords(keywords: impl Into<String>) -> Self {
        Self {
            keywords: Some(keywords.into()),
            ..Self::default()
        }
    }

    /// Lower-cased keywords, or the empty string when absent.
    pub fn search_text(&self) -> String {
        self.keywords.as_deref().unwrap_or("").to_lowercase()
    }

    /// Location filter, ignoring blank strings.
    pub fn location_filter(&self) -> Option<&str> {
        self.location.as_deref().filter(|l| !l.trim().is_empty())
    }

    /// Salary floor, ignoring zero.
    pub fn salary_floor(&self) -> Option<u64> {
        self.salary_min.filter(|s| *s > 0)
    }
}
