//! Login transport seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth service only needs "did the backend accept these credentials for
//! this role". Native builds answer that with reqwest (`net::http`), the
//! browser build with gloo-net. Futures are not required to be `Send` so the
//! browser transport can hold JS handles across awaits.

#[cfg(test)]
#[path = "auth_api_test.rs"]
mod auth_api_test;

use async_trait::async_trait;
use serde::Serialize;

use super::error_field;
use crate::session::Role;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Request body for both login endpoints.
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials").field("email", &self.email).finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// The backend answered with a non-success status.
    #[error("login rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },

    /// The request never produced a response.
    #[error("login transport failed: {0}")]
    Transport(String),
}

impl LoginError {
    /// Build a rejection from a failure status and its raw response body.
    #[must_use]
    pub fn rejected(status: u16, body: &str) -> Self {
        Self::Rejected { status, message: error_field(body) }
    }

    /// Text to show the person who submitted the form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message: Some(message), .. } => message.clone(),
            Self::Rejected { message: None, .. } => LOGIN_FAILED_MESSAGE.to_owned(),
            Self::Transport(_) => NETWORK_ERROR_MESSAGE.to_owned(),
        }
    }
}

#[async_trait(?Send)]
pub trait AuthApi: Send + Sync {
    /// POST `credentials` to `role`'s login endpoint.
    ///
    /// # Errors
    ///
    /// `LoginError::Rejected` on a non-2xx response, `LoginError::Transport`
    /// when no response arrived.
    async fn login(&self, role: Role, credentials: &Credentials) -> Result<(), LoginError>;
}
