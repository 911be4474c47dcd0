use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::search::SubagentDelay;
use crate::voice::SpeechSettings;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub subagent_delay: SubagentDelay,
    pub fetch_latency: Duration,
    pub silence_threshold: Duration,
    pub speech: SpeechSettings,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let delay_min: u64 = parse(&var("SUBAGENT_DELAY_MIN_MS", "100"), "SUBAGENT_DELAY_MIN_MS")?;
        let delay_max: u64 = parse(&var("SUBAGENT_DELAY_MAX_MS", "300"), "SUBAGENT_DELAY_MAX_MS")?;
        if delay_min > delay_max {
            bail!("SUBAGENT_DELAY_MIN_MS ({delay_min}) must not exceed SUBAGENT_DELAY_MAX_MS ({delay_max})");
        }

        Ok(Config {
            port: parse(&var("PORT", "8080"), "PORT")?,
            rust_log: var("RUST_LOG", "info"),
            subagent_delay: SubagentDelay::new(
                Duration::from_millis(delay_min),
                Duration::from_millis(delay_max),
            ),
            fetch_latency: Duration::from_millis(parse(
                &var("FETCH_LATENCY_MS", "1000"),
                "FETCH_LATENCY_MS",
            )?),
            silence_threshold: Duration::from_millis(parse(
                &var("SILENCE_THRESHOLD_MS", "3000"),
                "SILENCE_THRESHOLD_MS",
            )?),
            speech: SpeechSettings {
                rate: parse(&var("SPEECH_RATE", "0.9"), "SPEECH_RATE")?,
                pitch: parse(&var("SPEECH_PITCH", "1.0"), "SPEECH_PITCH")?,
                volume: parse(&var("SPEECH_VOLUME", "0.8"), "SPEECH_VOLUME")?,
            },
        })
    }
}

fn parse<T>(raw: &str, key: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("{key} must be a valid number, got '{raw}'"))
}
