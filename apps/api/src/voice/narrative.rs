//! Spoken narratives derived purely from a posting's fields: the analysis,
//! the plain-language explanation, and the short summary read after a search
//! or a navigation.

use crate::models::JobPosting;
use crate::search::compensation::SalaryParser;

const MODERN_TECH: &[&str] = &["react", "typescript", "kubernetes", "aws", "python", "node.js"];

const SUMMARY_DESCRIPTION_CHARS: usize = 100;

fn seniority(title: &str) -> &'static str {
    if title.contains("senior") {
        "senior"
    } else if title.contains("junior") {
        "junior"
    } else {
        "mid-level"
    }
}

/// "Analyze this job": seniority, compensation tier, work arrangement,
/// requirement load, tech stack, and company stage.
pub fn job_analysis(job: &JobPosting, salaries: &SalaryParser) -> String {
    let title = job.title.to_lowercase();
    let mut insights: Vec<&str> = Vec::new();

    if title.contains("senior") || title.contains("lead") {
        insights.push("This is a senior-level position requiring significant experience");
    } else if title.contains("junior") || title.contains("entry") {
        insights.push("This is an entry-level position perfect for career starters");
    } else {
        insights.push("This appears to be a mid-level position");
    }

    if let Some(band) = job.salary.as_deref().and_then(|s| salaries.parse(s)) {
        let average = band.average();
        insights.push(if average > 150_000.0 {
            "The compensation is highly competitive, above market average"
        } else if average > 100_000.0 {
            "The salary range is competitive for this role"
        } else {
            "This position offers entry to mid-level compensation"
        });
    }

    insights.push(if job.remote {
        "You can work remotely, offering great flexibility"
    } else {
        "This is an on-site position requiring office presence"
    });

    let requirements = job.requirements.len();
    if requirements > 6 {
        insights.push("This role has extensive requirements, indicating a complex position");
    } else if requirements > 3 {
        insights.push("The role has moderate requirements, typical for the level");
    }

    let modern = job
        .tags
        .iter()
        .filter(|tag| {
            let tag = tag.to_lowercase();
            MODERN_TECH.iter().any(|tech| tag.contains(tech))
        })
        .count();
    if modern >= 3 {
        insights.push("This position uses modern, in-demand technologies");
    } else if modern > 0 {
        insights.push("The role includes some current technology stack elements");
    }

    let company = job.company.to_lowercase();
    insights.push(if company.contains("startup") || company.contains("xyz") {
        "This appears to be a startup environment with potential for rapid growth"
    } else {
        "This seems to be an established company offering stability"
    });

    format!(
        "Here's my analysis of the {} role at {}: {}. The position offers {} and appears to be a {} opportunity.",
        job.title,
        job.company,
        insights.join(". "),
        if job.remote {
            "remote work flexibility"
        } else {
            "on-site collaboration"
        },
        seniority(&title),
    )
}

/// "Explain this job": what the role is, in plain words.
pub fn simple_explanation(job: &JobPosting) -> String {
    let title = job.title.to_lowercase();

    let role_type = if title.contains("developer") || title.contains("engineer") {
        "technical person who builds software"
    } else if title.contains("designer") {
        "creative person who designs user interfaces"
    } else if title.contains("data scientist") {
        "analyst who finds insights in data"
    } else if title.contains("manager") {
        "leader who guides teams and projects"
    } else {
        "professional"
    };

    let experience = if title.contains("senior") {
        "5+ years of experience"
    } else if title.contains("junior") || title.contains("entry") {
        "little to no experience required"
    } else {
        "some experience"
    };

    let main_tech = job.tags.iter().take(3).cloned().collect::<Vec<_>>().join(", ");
    let skills = if main_tech.is_empty() {
        String::new()
    } else {
        format!(" and skills in {main_tech}")
    };
    let workplace = if job.remote {
        "You can work from home. "
    } else {
        "You'd work in their office. "
    };
    let salary = job
        .salary
        .as_deref()
        .map(|s| format!("They're offering {s} per year. "))
        .unwrap_or_default();

    format!(
        "In simple terms: You'd be a {role_type} at {company}. {workplace}This role needs {experience}{skills}. {salary}Your main job would be helping {company} {goal}.",
        company = job.company,
        goal = company_goal(&job.description),
    )
}

fn company_goal(description: &str) -> &'static str {
    let d = description.to_lowercase();
    if d.contains("user") && d.contains("product") {
        "build better products for their users"
    } else if d.contains("platform") || d.contains("system") {
        "maintain and improve their technology platform"
    } else if d.contains("client") || d.contains("customer") {
        "serve their clients and customers better"
    } else if d.contains("data") || d.contains("analytics") {
        "make data-driven decisions"
    } else {
        "grow their business and achieve their goals"
    }
}

/// Short spoken summary read after a search and on each move.
pub fn job_summary(job: &JobPosting) -> String {
    let title = job.title.to_lowercase();
    let level = if title.contains("senior") {
        "senior-level"
    } else if title.contains("junior") {
        "entry-level"
    } else {
        "mid-level"
    };
    let work_style = if job.remote { "remote" } else { "on-site" };
    let location = if job.location.is_empty() {
        "location not specified"
    } else {
        job.location.as_str()
    };
    let salary = job.salary.as_deref().unwrap_or("salary not disclosed");
    let skills = if job.tags.is_empty() {
        "various skills".to_string()
    } else {
        job.tags.iter().take(3).cloned().collect::<Vec<_>>().join(", ")
    };
    let details = if job.description.is_empty() {
        "More details are available in the job listing.".to_string()
    } else {
        let excerpt: String = job.description.chars().take(SUMMARY_DESCRIPTION_CHARS).collect();
        format!("{excerpt}...")
    };

    format!(
        "This is a {level} {} position at {} in {location}. It's a {work_style} role offering {salary}. Key requirements include {skills}. {details}",
        job.title, job.company,
    )
}
