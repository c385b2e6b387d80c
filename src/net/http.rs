//! reqwest-backed transports for native builds.
//!
//! ERROR HANDLING
//! ==============
//! Login never surfaces `reqwest::Error`: a failed send becomes
//! `LoginError::Transport`, a non-2xx status becomes `LoginError::Rejected`.
//! No request timeout is configured; a hung backend keeps the caller waiting.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use async_trait::async_trait;

use super::auth_api::{AuthApi, Credentials, LoginError};
use super::endpoint;
use crate::config::ConsoleConfig;
use crate::session::Role;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status; `message` is the body's `error` field when present.
    #[error("server returned {status}: {message}")]
    Response { status: u16, message: String },

    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

pub(crate) fn build_client() -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .build()
        .map_err(|e| ApiError::ClientBuild(e.to_string()))
}

#[derive(Clone, Debug)]
pub struct HttpAuthApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpAuthApi {
    /// # Errors
    ///
    /// Returns `ApiError::ClientBuild` if the HTTP client cannot be constructed.
    pub fn new(config: &ConsoleConfig) -> Result<Self, ApiError> {
        Ok(Self { http: build_client()?, base_url: config.api_base_url.clone() })
    }
}

#[async_trait(?Send)]
impl AuthApi for HttpAuthApi {
    async fn login(&self, role: Role, credentials: &Credentials) -> Result<(), LoginError> {
        let url = endpoint(&self.base_url, role.login_path());
        let resp = self
            .http
            .post(&url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| LoginError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let body = resp.text().await.unwrap_or_default();
        Err(LoginError::rejected(status.as_u16(), &body))
    }
}
