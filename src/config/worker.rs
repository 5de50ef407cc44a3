//! Reminder worker configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::ReminderError;

/// Environment key toggling the worker.
pub const ENV_ENABLED: &str = "REMINDER_WORKER__ENABLED";
/// Environment key for the look-ahead window, in minutes.
pub const ENV_HORIZON: &str = "REMINDER_WORKER__HORIZON";
/// Environment key for the pause between scans, in seconds.
pub const ENV_INTERVAL: &str = "REMINDER_WORKER__INTERVAL";
/// Environment key enabling de-duplication across scans.
pub const ENV_DEDUPE: &str = "REMINDER_WORKER__DEDUPE";

/// Options read once at startup and fixed for the life of the worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerOptions {
    /// When false the worker exits immediately without scanning.
    pub enabled: bool,
    /// How far ahead of "now" a reminder counts as due soon.
    pub horizon_minutes: u32,
    /// Pause between scans.
    pub interval_seconds: u64,
    /// Notify each task once per reminder instant instead of once per scan.
    pub dedupe: bool,
}

impl Default for WorkerOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            horizon_minutes: 5,
            interval_seconds: 30,
            dedupe: false,
        }
    }
}

impl WorkerOptions {
    /// Defaults: enabled, 5 minute horizon, 30 second interval, no de-duplication.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle the worker.
    #[must_use]
    pub const fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the horizon in minutes.
    #[must_use]
    pub const fn with_horizon_minutes(mut self, minutes: u32) -> Self {
        self.horizon_minutes = minutes;
        self
    }

    /// Set the scan interval in seconds.
    #[must_use]
    pub const fn with_interval_seconds(mut self, seconds: u64) -> Self {
        self.interval_seconds = seconds;
        self
    }

    /// Toggle de-duplication.
    #[must_use]
    pub const fn with_dedupe(mut self, dedupe: bool) -> Self {
        self.dedupe = dedupe;
        self
    }

    /// Look-ahead window.
    pub const fn horizon(&self) -> Duration {
        Duration::from_secs(self.horizon_minutes as u64 * 60)
    }

    /// Pause between scans.
    pub const fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }

    /// Validate option values.
    pub fn validate(&self) -> Result<(), String> {
        if self.interval_seconds == 0 {
            return Err("interval_seconds must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse options from a JSON document and validate. Missing fields keep their defaults.
    pub fn from_json_str(input: &str) -> Result<Self, ReminderError> {
        let opts: Self = serde_json::from_str(input)
            .map_err(|e| ReminderError::InvalidConfig(format!("parse error: {e}")))?;
        opts.validate().map_err(ReminderError::InvalidConfig)?;
        Ok(opts)
    }

    /// Build options from a key lookup (e.g. environment variables).
    ///
    /// Absent keys keep their defaults; present but malformed values are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ReminderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let opts = Self {
            enabled: parse_key(&lookup, ENV_ENABLED)?.unwrap_or(defaults.enabled),
            horizon_minutes: parse_key(&lookup, ENV_HORIZON)?.unwrap_or(defaults.horizon_minutes),
            interval_seconds: parse_key(&lookup, ENV_INTERVAL)?
                .unwrap_or(defaults.interval_seconds),
            dedupe: parse_key(&lookup, ENV_DEDUPE)?.unwrap_or(defaults.dedupe),
        };
        opts.validate().map_err(ReminderError::InvalidConfig)?;
        Ok(opts)
    }

    /// Load a `.env` file if present, then read options from the process environment.
    pub fn from_env() -> Result<Self, ReminderError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("ignoring unreadable .env file: {}", e);
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

fn parse_key<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ReminderError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .to_ascii_lowercase()
                .parse::<T>()
                .map_err(|e| ReminderError::InvalidConfig(format!("{key}={raw:?}: {e}")))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let opts = WorkerOptions::default();
        assert!(opts.enabled);
        assert_eq!(opts.horizon(), Duration::from_secs(300));
        assert_eq!(opts.interval(), Duration::from_secs(30));
        assert!(!opts.dedupe);
    }

    #[test]
    fn test_lookup_overrides() {
        let opts = WorkerOptions::from_lookup(lookup_from(&[
            (ENV_ENABLED, "False"),
            (ENV_HORIZON, "15"),
            (ENV_INTERVAL, " 10 "),
        ]))
        .unwrap();
        assert!(!opts.enabled);
        assert_eq!(opts.horizon_minutes, 15);
        assert_eq!(opts.interval_seconds, 10);
        assert!(!opts.dedupe);
    }

    #[test]
    fn test_lookup_rejects_malformed_value() {
        let err = WorkerOptions::from_lookup(lookup_from(&[(ENV_HORIZON, "-5")])).unwrap_err();
        assert!(matches!(err, ReminderError::InvalidConfig(_)));
    }

    #[test]
    fn test_zero_interval_rejected() {
        assert!(WorkerOptions::new().with_interval_seconds(0).validate().is_err());
        let err = WorkerOptions::from_lookup(lookup_from(&[(ENV_INTERVAL, "0")])).unwrap_err();
        assert!(matches!(err, ReminderError::InvalidConfig(_)));
    }

    #[test]
    fn test_zero_horizon_allowed() {
        let opts = WorkerOptions::new().with_horizon_minutes(0);
        assert!(opts.validate().is_ok());
        assert_eq!(opts.horizon(), Duration::ZERO);
    }
}
