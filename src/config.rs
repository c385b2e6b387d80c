//! Console configuration parsed from environment variables.

pub const API_BASE_URL_ENV: &str = "EVENTDESK_API_BASE_URL";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?} (expected an http:// or https:// URL)")]
    InvalidBaseUrl { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// REST base URL without a trailing slash. Empty means same-origin.
    pub api_base_url: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned() }
    }
}

impl ConsoleConfig {
    /// Build config from process environment.
    ///
    /// Optional:
    /// - `EVENTDESK_API_BASE_URL`: default `http://localhost:8080`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the base URL is not http(s).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the base URL is not http(s).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw = lookup(API_BASE_URL_ENV).unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());
        Ok(Self { api_base_url: parse_base_url(&raw)? })
    }

    /// Same-origin config used by the browser build when nothing is set.
    #[must_use]
    pub fn same_origin() -> Self {
        Self { api_base_url: String::new() }
    }
}

fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() || trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_owned())
    } else {
        Err(ConfigError::InvalidBaseUrl { var: API_BASE_URL_ENV, value: raw.to_owned() })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
