//! Intent classifier — maps an utterance to exactly one `VoiceCommand`.
//!
//! Classification is first-match over an ordered rule table: intents are tried
//! in priority order (search, navigate, save, analyze, explain) and patterns in
//! listed order within each intent. Reordering the table changes behavior.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{JobPosting, SearchQuery};
use crate::search::compensation::{format_dollars, SalaryParser};
use crate::voice::narrative::{job_analysis, simple_explanation};

pub const HELP_MESSAGE: &str = "I didn't understand that command. Try saying 'find React jobs', 'next job', 'save this job', or 'analyze this position'.";

const SEARCH_CONFIDENCE: f32 = 0.9;
const NAVIGATE_CONFIDENCE: f32 = 0.95;
const SAVE_CONFIDENCE: f32 = 0.95;
const NARRATIVE_CONFIDENCE: f32 = 0.9;
const NO_SELECTION_CONFIDENCE: f32 = 0.8;
const UNKNOWN_CONFIDENCE: f32 = 0.1;

// ──────────────────────────────────────────────
// Rule table
// ──────────────────────────────────────────────

const RULES: &[(Intent, &[&str])] = &[
    (
        Intent::Search,
        &[
            r"find\s+jobs?\s+(?:for\s+)?(.+)",
            r"search\s+(?:for\s+)?(.+)",
            r"look\s+for\s+(.+)\s+jobs?",
            r"show\s+me\s+(.+)\s+positions?",
            r"(.+)\s+jobs?\s+in\s+(.+)",
            r"remote\s+(.+)\s+jobs?",
            r"(.+)\s+developer\s+jobs?",
            r"(.+)\s+engineer\s+positions?",
        ],
    ),
    (
        Intent::Navigate,
        &[
            r"(?:go\s+to\s+)?next\s+job",
            r"next",
            r"(?:go\s+to\s+)?previous\s+job",
            r"previous",
            r"prev",
            r"go\s+back",
            r"show\s+me\s+the\s+next\s+(?:job|position)",
            r"show\s+me\s+the\s+previous\s+(?:job|position)",
        ],
    ),
    (
        Intent::Save,
        &[
            r"save\s+this\s+job",
            r"save\s+(?:this\s+)?position",
            r"bookmark\s+this",
            r"add\s+to\s+favorites",
            r"remember\s+this\s+job",
        ],
    ),
    (
        Intent::Analyze,
        &[
            r"analyze\s+this\s+job",
            r"tell\s+me\s+about\s+this\s+(?:job|position)",
            r"what\s+do\s+you\s+think\s+about\s+this\s+job",
            r"analyze\s+(?:this\s+)?position",
            r"give\s+me\s+insights?\s+(?:about\s+)?(?:this\s+)?job",
            r"evaluate\s+this\s+(?:job|position)",
        ],
    ),
    (
        Intent::Explain,
        &[
            r"explain\s+this\s+job",
            r"what\s+does\s+this\s+job\s+do",
            r"simplify\s+this\s+(?:job|position)",
            r"break\s+down\s+this\s+job",
            r"explain\s+(?:this\s+)?position\s+simply",
            r"what\s+would\s+i\s+be\s+doing",
            r"summarize\s+this\s+job",
        ],
    ),
];

/// Any of these in an unmatched utterance makes it a search.
const JOB_VOCABULARY: &[&str] = &[
    "developer", "engineer", "designer", "manager", "analyst", "scientist",
    "react", "python", "java", "javascript", "node", "angular", "vue",
    "remote", "frontend", "backend", "fullstack", "devops", "data",
    "senior", "junior", "entry", "intern", "lead", "principal",
    "software", "web", "mobile", "app", "api", "database",
    "marketing", "sales", "product", "design", "ui", "ux",
];

const SALARY_MENTION: &str = r"(?i)(\d+)k?\+?\s*(?:salary|pay|compensation)";

// ──────────────────────────────────────────────
// Types
// ──────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Search,
    Navigate,
    Save,
    Analyze,
    Explain,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Next,
    Previous,
}

/// Parameters extracted for a command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommandParams {
    None,
    Search(SearchQuery),
    Navigate { direction: Direction },
    Job { job_id: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceCommand {
    pub intent: Intent,
    pub confidence: f32,
    pub parameters: CommandParams,
    pub original_text: String,
    /// Spoken back to the user.
    pub response: String,
}

/// What the classifier may look at when building a command.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandContext<'a> {
    pub jobs: &'a [JobPosting],
    pub index: usize,
    pub search_active: bool,
    pub last_query: Option<&'a SearchQuery>,
}

impl<'a> CommandContext<'a> {
    fn selected(&self) -> Option<&'a JobPosting> {
        self.jobs.get(self.index)
    }
}

// ──────────────────────────────────────────────
// Classifier
// ──────────────────────────────────────────────

pub struct IntentClassifier {
    rules: Vec<(Intent, Regex)>,
    salary_mention: Regex,
    salaries: SalaryParser,
}

impl IntentClassifier {
    pub fn new() -> Result<Self, regex::Error> {
        let mut rules = Vec::new();
        for (intent, patterns) in RULES {
            for pattern in *patterns {
                rules.push((*intent, Regex::new(&format!("(?i){pattern}"))?));
            }
        }
        Ok(Self {
            rules,
            salary_mention: Regex::new(SALARY_MENTION)?,
            salaries: SalaryParser::new()?,
        })
    }

    pub fn classify(&self, text: &str, ctx: &CommandContext<'_>) -> VoiceCommand {
        let normalized = text.trim().to_lowercase();

        for (intent, pattern) in &self.rules {
            if let Some(caps) = pattern.captures(&normalized) {
                debug!(intent = ?intent, pattern = pattern.as_str(), "Utterance matched");
                return match intent {
                    Intent::Search => self.search_command(Some(&caps), &normalized, text),
                    Intent::Navigate => self.navigate_command(direction_of(&normalized), text, ctx),
                    Intent::Save => self.save_command(text, ctx),
                    Intent::Analyze => self.analyze_command(text, ctx),
                    Intent::Explain => self.explain_command(text, ctx),
                    Intent::Unknown => unknown(text),
                };
            }
        }

        if is_job_search_query(&normalized) {
            debug!("Utterance matched job vocabulary");
            return self.search_command(None, &normalized, text);
        }

        unknown(text)
    }

    fn search_command(&self, caps: Option<&Captures<'_>>, normalized: &str, text: &str) -> VoiceCommand {
        let group = |i: usize| {
            caps.and_then(|c| c.get(i))
                .map(|m| m.as_str().trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let mut query = SearchQuery::keywords(group(1).unwrap_or_else(|| normalized.to_string()));
        query.location = group(2);
        if text.to_lowercase().contains("remote") {
            query.remote = Some(true);
        }
        query.salary_min = self.salary_floor(text);

        VoiceCommand {
            intent: Intent::Search,
            confidence: SEARCH_CONFIDENCE,
            response: search_response(&query),
            parameters: CommandParams::Search(query),
            original_text: text.to_string(),
        }
    }

    /// A bare figure under 1000 is read as thousands ("120k salary").
    fn salary_floor(&self, text: &str) -> Option<u64> {
        let caps = self.salary_mention.captures(text)?;
        let amount: u64 = caps.get(1)?.as_str().parse().ok()?;
        Some(if amount < 1000 { amount * 1000 } else { amount })
    }

    pub fn navigate_command(&self, direction: Direction, text: &str, ctx: &CommandContext<'_>) -> VoiceCommand {
        let total = ctx.jobs.len();
        let (confidence, response) = if total == 0 {
            (
                NO_SELECTION_CONFIDENCE,
                "No jobs are currently loaded. Try searching for positions first.".to_string(),
            )
        } else {
            let response = match direction {
                Direction::Next if ctx.index + 1 >= total => format!(
                    "You're viewing the last job ({total} of {total}). Try searching for more positions."
                ),
                Direction::Next => format!("Moving to the next job ({} of {total}).", ctx.index + 2),
                Direction::Previous if ctx.index == 0 => {
                    format!("You're viewing the first job. There are {total} jobs total.")
                }
                Direction::Previous => {
                    format!("Going back to the previous job ({} of {total}).", ctx.index)
                }
            };
            (NAVIGATE_CONFIDENCE, response)
        };

        VoiceCommand {
            intent: Intent::Navigate,
            confidence,
            parameters: CommandParams::Navigate { direction },
            original_text: text.to_string(),
            response,
        }
    }

    pub fn save_command(&self, text: &str, ctx: &CommandContext<'_>) -> VoiceCommand {
        match ctx.selected() {
            Some(job) => VoiceCommand {
                intent: Intent::Save,
                confidence: SAVE_CONFIDENCE,
                parameters: CommandParams::Job { job_id: job.id.clone() },
                original_text: text.to_string(),
                response: format!(
                    "I've saved the \"{}\" position at {} to your favorites.",
                    job.title, job.company
                ),
            },
            None => nothing_selected(Intent::Save, text, "There's no job currently selected to save."),
        }
    }

    fn analyze_command(&self, text: &str, ctx: &CommandContext<'_>) -> VoiceCommand {
        match ctx.selected() {
            Some(job) => VoiceCommand {
                intent: Intent::Analyze,
                confidence: NARRATIVE_CONFIDENCE,
                parameters: CommandParams::Job { job_id: job.id.clone() },
                original_text: text.to_string(),
                response: job_analysis(job, &self.salaries),
            },
            None => nothing_selected(
                Intent::Analyze,
                text,
                "There's no job currently selected to analyze. Please search for jobs first.",
            ),
        }
    }

    fn explain_command(&self, text: &str, ctx: &CommandContext<'_>) -> VoiceCommand {
        match ctx.selected() {
            Some(job) => VoiceCommand {
                intent: Intent::Explain,
                confidence: NARRATIVE_CONFIDENCE,
                parameters: CommandParams::Job { job_id: job.id.clone() },
                original_text: text.to_string(),
                response: simple_explanation(job),
            },
            None => nothing_selected(
                Intent::Explain,
                text,
                "There's no job currently selected to explain. Please search for jobs first.",
            ),
        }
    }
}

/// "next" wins whenever present; otherwise any backwards word means previous.
fn direction_of(normalized: &str) -> Direction {
    let backwards = ["previous", "back", "prev"].iter().any(|w| normalized.contains(w));
    if normalized.contains("next") || !backwards {
        Direction::Next
    } else {
        Direction::Previous
    }
}

fn is_job_search_query(normalized: &str) -> bool {
    JOB_VOCABULARY.iter().any(|word| normalized.contains(word))
}

fn search_response(query: &SearchQuery) -> String {
    let mut parts = Vec::new();
    if let Some(keywords) = query.keywords.as_deref().filter(|k| !k.is_empty()) {
        parts.push(format!("searching for {keywords} positions"));
    }
    if let Some(location) = &query.location {
        parts.push(format!("in {location}"));
    }
    if query.remote == Some(true) {
        parts.push("with remote work options".to_string());
    }
    if let Some(floor) = query.salary_min {
        parts.push(format!("with minimum salary of {}", format_dollars(floor)));
    }

    let description = if parts.is_empty() {
        "jobs matching your criteria".to_string()
    } else {
        parts.join(" ")
    };
    format!("I'm {description}. Let me analyze the available positions using my AI subagents...")
}

fn nothing_selected(intent: Intent, text: &str, response: &str) -> VoiceCommand {
    VoiceCommand {
        intent,
        confidence: NO_SELECTION_CONFIDENCE,
        parameters: CommandParams::None,
        original_text: text.to_string(),
        response: response.to_string(),
    }
}

fn unknown(text: &str) -> VoiceCommand {
    VoiceCommand {
        intent: Intent::Unknown,
        confidence: UNKNOWN_CONFIDENCE,
        parameters: CommandParams::None,
        original_text: text.to_string(),
        response: HELP_MESSAGE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::JobStore;

    fn classifier() -> IntentClassifier {
        IntentClassifier::new().unwrap()
    }

    fn search_query(cmd: &VoiceCommand) -> &SearchQuery {
        match &cmd.parameters {
            CommandParams::Search(q) => q,
            other => panic!("expected search params, got {other:?}"),
        }
    }

    #[test]
    fn test_search_extracts_first_group() {
        let cmd = classifier().classify("Find jobs for React developer", &CommandContext::default());
        assert_eq!(cmd.intent, Intent::Search);
        assert_eq!(cmd.confidence, 0.9);
        assert_eq!(search_query(&cmd).keywords.as_deref(), Some("react developer"));
        assert_eq!(cmd.original_text, "Find jobs for React developer");
    }

    #[test]
    fn test_search_with_location_group() {
        let cmd = classifier().classify("  python jobs in New York  ", &CommandContext::default());
        let q = search_query(&cmd);
        assert_eq!(q.keywords.as_deref(), Some("python"));
        assert_eq!(q.location.as_deref(), Some("new york"));
        assert_eq!(q.remote, None);
        assert_eq!(
            cmd.response,
            "I'm searching for python positions in new york. Let me analyze the available positions using my AI subagents..."
        );
    }

    #[test]
    fn test_search_detects_remote_and_salary() {
        let cmd = classifier().classify(
            "search for remote rust roles with 150k salary",
            &CommandContext::default(),
        );
        let q = search_query(&cmd);
        assert_eq!(q.keywords.as_deref(), Some("remote rust roles with 150k salary"));
        assert_eq!(q.remote, Some(true));
        assert_eq!(q.salary_min, Some(150_000));
        assert!(cmd
            .response
            .contains("with remote work options with minimum salary of $150,000"));
    }

    #[test]
    fn test_full_salary_figure_kept() {
        let cmd = classifier().classify("search for designers 120000 pay", &CommandContext::default());
        assert_eq!(search_query(&cmd).salary_min, Some(120_000));
    }

    #[test]
    fn test_search_beats_navigate_in_priority() {
        // "next" would match navigate, but search rules are tried first.
        let cmd = classifier().classify("search for next gen jobs", &CommandContext::default());
        assert_eq!(cmd.intent, Intent::Search);
    }

    #[test]
    fn test_vocabulary_fallback_uses_whole_utterance() {
        let cmd = classifier().classify("Senior Rust", &CommandContext::default());
        assert_eq!(cmd.intent, Intent::Search);
        assert_eq!(search_query(&cmd).keywords.as_deref(), Some("senior rust"));
    }

    #[test]
    fn test_unknown_gets_help_message() {
        let cmd = classifier().classify("what's the weather", &CommandContext::default());
        assert_eq!(cmd.intent, Intent::Unknown);
        assert_eq!(cmd.confidence, 0.1);
        assert_eq!(cmd.response, HELP_MESSAGE);
        assert_eq!(cmd.parameters, CommandParams::None);
    }

    #[test]
    fn test_navigate_direction_bias() {
        assert_eq!(direction_of("next job"), Direction::Next);
        assert_eq!(direction_of("go back"), Direction::Previous);
        assert_eq!(direction_of("previous"), Direction::Previous);
        assert_eq!(direction_of("go back to the next one"), Direction::Next);
    }

    #[test]
    fn test_navigate_without_jobs() {
        let cmd = classifier().classify("next job", &CommandContext::default());
        assert_eq!(cmd.intent, Intent::Navigate);
        assert_eq!(cmd.confidence, 0.8);
        assert_eq!(
            cmd.response,
            "No jobs are currently loaded. Try searching for positions first."
        );
    }

    #[test]
    fn test_navigate_boundaries_do_not_wrap() {
        let store = JobStore::fixture();
        let jobs = store.first(3);
        let c = classifier();

        let last = CommandContext { jobs, index: 2, ..Default::default() };
        let cmd = c.classify("next", &last);
        assert_eq!(cmd.parameters, CommandParams::Navigate { direction: Direction::Next });
        assert_eq!(cmd.response, "You're viewing the last job (3 of 3). Try searching for more positions.");

        let first = CommandContext { jobs, index: 0, ..Default::default() };
        let cmd = c.classify("go back", &first);
        assert_eq!(cmd.response, "You're viewing the first job. There are 3 jobs total.");

        let middle = CommandContext { jobs, index: 1, ..Default::default() };
        assert_eq!(c.classify("next job", &middle).response, "Moving to the next job (3 of 3).");
        assert_eq!(
            c.classify("previous job", &middle).response,
            "Going back to the previous job (1 of 3)."
        );
    }

    #[test]
    fn test_save_without_selection() {
        let cmd = classifier().classify("save this job", &CommandContext::default());
        assert_eq!(cmd.intent, Intent::Save);
        assert_eq!(cmd.confidence, 0.8);
        assert!(cmd.response.contains("no job currently selected"));
    }

    #[test]
    fn test_save_selected_job() {
        let store = JobStore::fixture();
        let ctx = CommandContext { jobs: store.all(), index: 1, ..Default::default() };
        let cmd = classifier().classify("Bookmark this", &ctx);
        assert_eq!(cmd.intent, Intent::Save);
        assert_eq!(cmd.parameters, CommandParams::Job { job_id: "2".to_string() });
        assert_eq!(
            cmd.response,
            "I've saved the \"Machine Learning Engineer\" position at AI Innovations Inc. to your favorites."
        );
    }

    #[test]
    fn test_analyze_and_explain_use_selected_job() {
        let store = JobStore::fixture();
        let ctx = CommandContext { jobs: store.all(), index: 0, ..Default::default() };
        let c = classifier();

        let analyze = c.classify("What do you think about this job?", &ctx);
        assert_eq!(analyze.intent, Intent::Analyze);
        assert!(analyze.response.starts_with("Here's my analysis of the Senior Full Stack Developer"));

        let explain = c.classify("What would I be doing", &ctx);
        assert_eq!(explain.intent, Intent::Explain);
        assert!(explain.response.starts_with("In simple terms:"));
    }

    #[test]
    fn test_explain_without_selection() {
        let cmd = classifier().classify("summarize this job", &CommandContext::default());
        assert_eq!(cmd.intent, Intent::Explain);
        assert_eq!(
            cmd.response,
            "There's no job currently selected to explain. Please search for jobs first."
        );
    }
}
