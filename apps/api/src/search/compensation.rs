//! Salary string parsing and dollar formatting shared by the salary subagent
//! and the spoken job analysis.

use regex::Regex;

/// A parsed `$<min> - $<max>` salary band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryBand {
    pub min: u64,
    pub max: u64,
}

impl SalaryBand {
    pub fn average(&self) -> f64 {
        (self.min + self.max) as f64 / 2.0
    }
}

/// Parses salary strings such as `"$140,000 - $180,000"`.
/// Strings that do not contain a dollar range are rejected, never an error.
#[derive(Debug, Clone)]
pub struct SalaryParser {
    range: Regex,
}

impl SalaryParser {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            range: Regex::new(r"\$([\d,]+)\s*-\s*\$([\d,]+)")?,
        })
    }

    pub fn parse(&self, salary: &str) -> Option<SalaryBand> {
        let caps = self.range.captures(salary)?;
        let min = parse_amount(caps.get(1)?.as_str())?;
        let max = parse_amount(caps.get(2)?.as_str())?;
        Some(SalaryBand { min, max })
    }
}

fn parse_amount(raw: &str) -> Option<u64> {
    raw.replace(',', "").parse().ok()
}

/// Formats a whole-dollar amount with thousands separators, e.g. `$140,000`.
pub fn format_dollars(amount: u64) -> String {
    format!("${}", group_thousands(amount))
}

pub fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fixture_format() {
        let parser = SalaryParser::new().unwrap();
        let band = parser.parse("$140,000 - $180,000").unwrap();
        assert_eq!(band, SalaryBand { min: 140_000, max: 180_000 });
        assert!((band.average() - 160_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_accepts_surrounding_text() {
        let parser = SalaryParser::new().unwrap();
        let band = parser.parse("Pays $95000-$130,000 per year").unwrap();
        assert_eq!(band.min, 95_000);
        assert_eq!(band.max, 130_000);
    }

    #[test]
    fn test_malformed_salary_is_none() {
        let parser = SalaryParser::new().unwrap();
        assert!(parser.parse("Competitive").is_none());
        assert!(parser.parse("$120k").is_none());
        assert!(parser.parse("").is_none());
    }

    #[test]
    fn test_format_dollars_groups_thousands() {
        assert_eq!(format_dollars(0), "$0");
        assert_eq!(format_dollars(999), "$999");
        assert_eq!(format_dollars(1_000), "$1,000");
        assert_eq!(format_dollars(145_500), "$145,500");
        assert_eq!(format_dollars(1_250_000), "$1,250,000");
    }
}
