//! Board configuration.
//!
//! # Responsibility
//! - Hold input rules and optional logging settings.
//! - Load overrides from `PROJECTBOARD_*` environment variables.
//!
//! # Invariants
//! - `InputConstraints::people_min <= people_max` after loading.

use crate::logging::{default_log_level, LogConfig, LoggingError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const ENV_LOG_LEVEL: &str = "PROJECTBOARD_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "PROJECTBOARD_LOG_DIR";
pub const ENV_DESCRIPTION_MIN_LEN: &str = "PROJECTBOARD_DESCRIPTION_MIN_LEN";
pub const ENV_PEOPLE_MIN: &str = "PROJECTBOARD_PEOPLE_MIN";
pub const ENV_PEOPLE_MAX: &str = "PROJECTBOARD_PEOPLE_MAX";

/// Rules applied by the project input form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputConstraints {
    pub description_min_len: usize,
    pub people_min: u32,
    pub people_max: u32,
}

impl Default for InputConstraints {
    fn default() -> Self {
        Self {
            description_min_len: 5,
            people_min: 1,
            people_max: 5,
        }
    }
}

/// Top-level settings for one board process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardConfig {
    /// File logging; `None` leaves the `log` facade unconfigured.
    pub log: Option<LogConfig>,
    pub constraints: InputConstraints,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { key: &'static str, value: String },
    InvalidPeopleRange { min: u32, max: u32 },
    Logging(LoggingError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber { key, value } => {
                write!(f, "{key} must be a non-negative integer, got `{value}`")
            }
            Self::InvalidPeopleRange { min, max } => {
                write!(f, "people range is empty: min {min} > max {max}")
            }
            Self::Logging(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LoggingError> for ConfigError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

impl BoardConfig {
    /// Reads overrides from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads overrides through `lookup`; blank values count as unset.
    ///
    /// Logging is enabled only when a log directory is given.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let log = match get(ENV_LOG_DIR) {
            Some(dir) => {
                let level = get(ENV_LOG_LEVEL).unwrap_or_else(|| default_log_level().to_string());
                Some(LogConfig::new(&level, dir)?)
            }
            None => None,
        };

        let defaults = InputConstraints::default();
        let constraints = InputConstraints {
            description_min_len: parse_or(
                get(ENV_DESCRIPTION_MIN_LEN),
                ENV_DESCRIPTION_MIN_LEN,
                defaults.description_min_len,
            )?,
            people_min: parse_or(get(ENV_PEOPLE_MIN), ENV_PEOPLE_MIN, defaults.people_min)?,
            people_max: parse_or(get(ENV_PEOPLE_MAX), ENV_PEOPLE_MAX, defaults.people_max)?,
        };
        if constraints.people_min > constraints.people_max {
            return Err(ConfigError::InvalidPeopleRange {
                min: constraints.people_min,
                max: constraints.people_max,
            });
        }

        Ok(Self { log, constraints })
    }
}

fn parse_or<T: std::str::FromStr>(
    raw: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
    }
}
