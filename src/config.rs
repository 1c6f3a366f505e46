// src/config.rs
use std::env;
use thiserror::Error;

use crate::application::dto::PageLimits;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: Option<String>,
    database_read_url: Option<String>,
    database_max_connections: u32,
    page_limits: PageLimits,
    log_filter: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_MAX_CONNECTIONS: u32 = 16;
const DEFAULT_PAGE_SIZE: u64 = 20;
const MAX_PAGE_SIZE: u64 = 100;

fn default_log_filter() -> String {
    "info,sqlx=warn".into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            database_read_url: None,
            database_max_connections: DEFAULT_MAX_CONNECTIONS,
            page_limits: PageLimits {
                default_per_page: DEFAULT_PAGE_SIZE,
                max_per_page: MAX_PAGE_SIZE,
            },
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Build configuration from environment variables, loading `.env` first
    /// when one is present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same rules as [`AppConfig::from_env`] over an arbitrary key source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = non_empty("DATABASE_URL");
        let database_read_url = non_empty("DATABASE_READ_URL");
        if database_read_url.is_some() && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let database_max_connections = parse_or(
            non_empty("DATABASE_MAX_CONNECTIONS"),
            "DATABASE_MAX_CONNECTIONS",
            DEFAULT_MAX_CONNECTIONS,
        )?;
        if database_max_connections == 0 {
            return Err(ConfigError::Invalid(
                "DATABASE_MAX_CONNECTIONS must be at least 1".into(),
            ));
        }

        let default_per_page = parse_or(
            non_empty("DEFAULT_PAGE_SIZE"),
            "DEFAULT_PAGE_SIZE",
            DEFAULT_PAGE_SIZE,
        )?;
        let max_per_page =
            parse_or(non_empty("MAX_PAGE_SIZE"), "MAX_PAGE_SIZE", MAX_PAGE_SIZE)?;
        if default_per_page == 0 || default_per_page > max_per_page {
            return Err(ConfigError::Invalid(format!(
                "DEFAULT_PAGE_SIZE must be between 1 and MAX_PAGE_SIZE ({max_per_page})"
            )));
        }

        Ok(Self {
            database_url,
            database_read_url,
            database_max_connections,
            page_limits: PageLimits {
                default_per_page,
                max_per_page,
            },
            log_filter: non_empty("RUST_LOG").unwrap_or_else(default_log_filter),
        })
    }

    /// Primary database; `None` selects the in-memory store.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    /// Pool for read-only specifications, falling back to the primary.
    pub fn database_read_url(&self) -> Option<&str> {
        self.database_read_url.as_deref().or(self.database_url())
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn page_limits(&self) -> PageLimits {
        self.page_limits
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }
}

fn parse_or<T: std::str::FromStr>(
    raw: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| {
                ConfigError::Invalid(format!("{key} must be a positive integer, got '{value}'"))
            }),
        None => Ok(default),
    }
}
