//! Catalog configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `CATALOG_TITLE_MIN` / `CATALOG_TITLE_MAX` - Title length bounds (default: 10 / 80)
//! - `CATALOG_DESCRIPTION_MIN` / `CATALOG_DESCRIPTION_MAX` - Description length bounds (default: 10 / 900)
//! - `CATALOG_REQUIRE_COLOR` - Reject drafts without a selected color (default: false)
//! - `CATALOG_MAILBOX_CAPACITY` - Pending events the session actor can queue (default: 32)
//! - `CATALOG_SEED_PATH` - JSON seed file to load instead of the embedded one

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use crate::validation::{LengthRange, ValidationRules, DESCRIPTION_RANGE, TITLE_RANGE};

pub const DEFAULT_MAILBOX_CAPACITY: usize = 32;

/// Configuration errors.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Runtime settings for a catalog session.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub rules: ValidationRules,
    pub mailbox_capacity: usize,
    pub seed_path: Option<PathBuf>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            rules: ValidationRules::default(),
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
            seed_path: None,
        }
    }
}

impl CatalogConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed, or if the
    /// resulting bounds are inconsistent.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let title = length_range(
            &lookup,
            "CATALOG_TITLE_MIN",
            "CATALOG_TITLE_MAX",
            TITLE_RANGE,
        )?;
        let description = length_range(
            &lookup,
            "CATALOG_DESCRIPTION_MIN",
            "CATALOG_DESCRIPTION_MAX",
            DESCRIPTION_RANGE,
        )?;
        let require_color = parse_or(&lookup, "CATALOG_REQUIRE_COLOR", false)?;

        let mailbox_capacity =
            parse_or(&lookup, "CATALOG_MAILBOX_CAPACITY", DEFAULT_MAILBOX_CAPACITY)?;
        if mailbox_capacity == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "CATALOG_MAILBOX_CAPACITY".to_string(),
                "must be greater than zero".to_string(),
            ));
        }

        let seed_path = lookup("CATALOG_SEED_PATH")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            rules: ValidationRules {
                title,
                description,
                require_color,
            },
            mailbox_capacity,
            seed_path,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string())),
        None => Ok(default),
    }
}

fn length_range<F>(
    lookup: &F,
    min_key: &str,
    max_key: &str,
    default: LengthRange,
) -> Result<LengthRange, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let min = parse_or(lookup, min_key, default.min)?;
    let max = parse_or(lookup, max_key, default.max)?;
    if min > max {
        return Err(ConfigError::InvalidEnvVar(
            max_key.to_string(),
            format!("{max} is below {min_key}={min}"),
        ));
    }
    Ok(LengthRange::new(min, max))
}
