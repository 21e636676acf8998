use crate::error::QuizError;
use crate::session::TIME_LIMIT_SECONDS;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TICK_MS: u64 = 250;

pub const ENV_TIME_LIMIT: &str = "QUIZ_TIME_LIMIT_SECS";
pub const ENV_TICK_MS: &str = "QUIZ_TICK_MS";
pub const ENV_LOG_FILE: &str = "QUIZ_LOG_FILE";
pub const ENV_REPORT_FILE: &str = "QUIZ_REPORT_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub time_limit: Duration,
    /// How often the expiry timer fires; bounds how far past the limit a
    /// question can run.
    pub tick_rate: Duration,
    pub log_file: Option<PathBuf>,
    pub report_file: Option<PathBuf>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(TIME_LIMIT_SECONDS),
            tick_rate: Duration::from_millis(DEFAULT_TICK_MS),
            log_file: None,
            report_file: None,
        }
    }
}

impl QuizConfig {
    pub fn from_env() -> Result<Self, QuizError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, QuizError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(secs) = parse_positive(&lookup, ENV_TIME_LIMIT)? {
            config.time_limit = Duration::from_secs(secs);
        }
        if let Some(ms) = parse_positive(&lookup, ENV_TICK_MS)? {
            config.tick_rate = Duration::from_millis(ms);
        }
        config.log_file = non_empty(&lookup, ENV_LOG_FILE).map(PathBuf::from);
        config.report_file = non_empty(&lookup, ENV_REPORT_FILE).map(PathBuf::from);

        Ok(config)
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_positive<F>(lookup: &F, key: &str) -> Result<Option<u64>, QuizError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = non_empty(lookup, key) else {
        return Ok(None);
    };

    match raw.parse::<u64>() {
        Ok(0) => Err(QuizError::InvalidConfig {
            key: key.to_string(),
            reason: "must be greater than zero".to_string(),
        }),
        Ok(value) => Ok(Some(value)),
        Err(e) => Err(QuizError::InvalidConfig {
            key: key.to_string(),
            reason: format!("'{}' is not a whole number: {}", raw, e),
        }),
    }
}
