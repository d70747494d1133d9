//! Runtime configuration.
//!
//! Values come from, in increasing precedence:
//! 1. built-in defaults
//! 2. `PARCEL_TRACK_*` environment variables (a `.env` file is loaded first)
//! 3. command-line flags, applied by the command handlers

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::error::ConfigError;
use crate::locale::Locale;

/// Simulated carrier latency, in milliseconds.
pub const LATENCY_ENV: &str = "PARCEL_TRACK_LATENCY_MS";
/// Output locale, `en` or `ar`.
pub const LOCALE_ENV: &str = "PARCEL_TRACK_LOCALE";
/// `strftime` pattern for timestamps in text output.
pub const DATE_FORMAT_ENV: &str = "PARCEL_TRACK_DATE_FORMAT";
/// RFC 3339 instant to pin the clock to.
pub const NOW_ENV: &str = "PARCEL_TRACK_NOW";

/// Default simulated carrier latency.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);
/// Default text-output timestamp pattern.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Settings shared by all commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Single wait applied before a batch is answered.
    pub latency: Duration,
    /// Language of record texts.
    pub locale: Locale,
    /// `strftime` pattern for text output.
    pub date_format: String,
    /// Pinned clock instant, if any.
    pub now: Option<DateTime<Utc>>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
            locale: Locale::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            now: None,
        }
    }
}

impl TrackerConfig {
    /// Loads `.env` if present, then reads the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is the normal case.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unset or blank keys
    /// keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = get(LATENCY_ENV) {
            let millis: u64 = raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::invalid(LATENCY_ENV, &raw, format!("{e}")))?;
            config.latency = Duration::from_millis(millis);
        }

        if let Some(raw) = get(LOCALE_ENV) {
            config.locale = raw.parse().map_err(|e| ConfigError::invalid(LOCALE_ENV, &raw, e))?;
        }

        if let Some(raw) = get(DATE_FORMAT_ENV) {
            validate_date_format(&raw)
                .map_err(|reason| ConfigError::invalid(DATE_FORMAT_ENV, &raw, reason))?;
            config.date_format = raw;
        }

        if let Some(raw) = get(NOW_ENV) {
            let at = DateTime::parse_from_rfc3339(raw.trim())
                .map_err(|e| ConfigError::invalid(NOW_ENV, &raw, format!("{e}")))?;
            config.now = Some(at.with_timezone(&Utc));
        }

        Ok(config)
    }
}

/// Rejects `strftime` patterns chrono cannot render.
///
/// # Errors
///
/// Returns a reason string for unknown or malformed specifiers.
pub fn validate_date_format(pattern: &str) -> Result<(), String> {
    use chrono::format::{Item, StrftimeItems};

    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(format!("unsupported date format `{pattern}`"));
    }
    Ok(())
}
