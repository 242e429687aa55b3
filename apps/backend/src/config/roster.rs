use std::env;

use crate::domain::pagination::PageLimits;
use crate::error::AppError;

/// Paging bounds and retry budget for the roster service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterConfig {
    pub default_page_size: u32,
    pub max_page_size: u32,
    pub max_page_index: u32,
    /// Total save attempts per update, including the first
    pub update_max_attempts: u32,
}

impl Default for RosterConfig {
    fn default() -> Self {
        let limits = PageLimits::default();
        Self {
            default_page_size: limits.default_page_size,
            max_page_size: limits.max_page_size,
            max_page_index: limits.max_page_index,
            update_max_attempts: 3,
        }
    }
}

impl RosterConfig {
    /// Read `ROSTER_*` variables, falling back to defaults for unset ones
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();
        let config = Self {
            default_page_size: read_u32(&lookup, "ROSTER_DEFAULT_PAGE_SIZE", defaults.default_page_size)?,
            max_page_size: read_u32(&lookup, "ROSTER_MAX_PAGE_SIZE", defaults.max_page_size)?,
            max_page_index: read_u32(&lookup, "ROSTER_MAX_PAGE_INDEX", defaults.max_page_index)?,
            update_max_attempts: read_u32(
                &lookup,
                "ROSTER_UPDATE_MAX_ATTEMPTS",
                defaults.update_max_attempts,
            )?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.max_page_size == 0 {
            return Err(AppError::config("ROSTER_MAX_PAGE_SIZE must be at least 1"));
        }
        if self.default_page_size == 0 || self.default_page_size > self.max_page_size {
            return Err(AppError::config(format!(
                "ROSTER_DEFAULT_PAGE_SIZE must be between 1 and {}",
                self.max_page_size
            )));
        }
        if self.update_max_attempts == 0 {
            return Err(AppError::config(
                "ROSTER_UPDATE_MAX_ATTEMPTS must be at least 1",
            ));
        }
        Ok(())
    }

    pub fn page_limits(&self) -> PageLimits {
        PageLimits {
            default_page_size: self.default_page_size,
            max_page_size: self.max_page_size,
            max_page_index: self.max_page_index,
        }
    }
}

fn read_u32(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u32,
) -> Result<u32, AppError> {
    match lookup(name) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<u32>().map_err(|_| {
            AppError::config(format!(
                "{name} must be a non-negative integer, got '{raw}'"
            ))
        }),
    }
}
