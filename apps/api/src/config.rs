use anyhow::{Context, Result};

use crate::analysis::AnalysisConfig;

/// Application configuration loaded from environment variables. Rubric
/// thresholds are overridable per deployment; everything unset falls back
/// to the documented defaults in `AnalysisConfig`.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub analysis: AnalysisConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let mut analysis = AnalysisConfig::default();
        if let Some(v) = parse_env("RELEVANCE_MIN_OVERLAP")? {
            analysis.relevance_min_overlap = v;
        }
        if let Some(v) = parse_env("CLARITY_MIN_TOKENS")? {
            analysis.clarity_min_tokens = v;
        }
        if let Some(v) = parse_env("CLARITY_MAX_TOKENS")? {
            analysis.clarity_max_tokens = v;
        }
        if let Some(v) = parse_env("CLARITY_MAX_FILLER_RATIO")? {
            analysis.clarity_max_filler_ratio = v;
        }
        if let Some(v) = parse_env("TONE_MIN_CONFIDENCE")? {
            analysis.tone_min_confidence = v;
        }

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            analysis,
        })
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => {
            let value = raw
                .parse::<T>()
                .with_context(|| format!("'{key}' has an invalid value: {raw:?}"))?;
            Ok(Some(value))
        }
        Err(_) => Ok(None),
    }
}
