//! Launcher preferences.

use std::env;
use std::str::FromStr;

use dioxus_logger::tracing::Level;
use serde::Deserialize;
use serde::Serialize;

use crate::error::PrefsError;

/// Env var that selects the log level.
pub const LOG_LEVEL_VAR: &str = "BOXES_LOG_LEVEL";

/// Verbosity passed to the logger at startup.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

/// Represents all app prefs.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize, Default)]
pub struct AppPrefs {
    #[serde(default)]
    log_level: LogLevel,
}

impl AppPrefs {
    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Reads prefs from environment variables.
    ///
    /// # Environment Variables
    /// - `BOXES_LOG_LEVEL`: "trace", "debug", "info", "warn" or "error"
    ///   (case-insensitive). Defaults to "info" when unset.
    pub fn from_env() -> Result<Self, PrefsError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, PrefsError> {
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(value) => LogLevel::from_str(value.trim())
                .map_err(|_| PrefsError::InvalidLogLevel { value })?,
            None => LogLevel::default(),
        };
        Ok(Self { log_level })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |key| {
            assert_eq!(key, LOG_LEVEL_VAR);
            value.map(str::to_string)
        }
    }

    #[test]
    fn unset_defaults_to_info() {
        let prefs = AppPrefs::from_lookup(lookup(None)).unwrap();
        assert_eq!(prefs.log_level(), LogLevel::Info);
    }

    #[test]
    fn level_is_case_insensitive() {
        let prefs = AppPrefs::from_lookup(lookup(Some("DEBUG"))).unwrap();
        assert_eq!(prefs.log_level(), LogLevel::Debug);
        assert_eq!(Level::from(prefs.log_level()), Level::DEBUG);
    }

    #[test]
    fn bad_level_is_rejected() {
        let err = AppPrefs::from_lookup(lookup(Some("loud"))).unwrap_err();
        assert_eq!(
            err,
            PrefsError::InvalidLogLevel {
                value: "loud".to_string()
            }
        );
    }

    #[test]
    fn deserializes_from_saved_json() {
        let prefs: AppPrefs = serde_json::from_str(r#"{ "log_level": "warn" }"#).unwrap();
        assert_eq!(prefs.log_level(), LogLevel::Warn);

        let prefs: AppPrefs = serde_json::from_str("{}").unwrap();
        assert_eq!(prefs.log_level(), LogLevel::Info);
    }
}
