//! Login transport for the browser build.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): logins are never submitted during render, so the stub
//! reports a transport failure.
//!
//! ERROR HANDLING
//! ==============
//! Every failure maps onto `LoginError`; nothing here panics, so a broken
//! backend degrades to a login-form message instead of crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use eventdesk::{AuthApi, ConsoleConfig, Credentials, LoginError, Role};

#[cfg(any(test, feature = "hydrate"))]
fn login_url(base_url: &str, role: Role) -> String {
    eventdesk::net::endpoint(base_url, role.login_path())
}

/// API base URL baked in at compile time, or same-origin when unset/invalid.
pub fn browser_config() -> ConsoleConfig {
    config_from(option_env!("EVENTDESK_API_BASE_URL"))
}

fn config_from(raw: Option<&str>) -> ConsoleConfig {
    raw.and_then(|raw| ConsoleConfig::from_lookup(|_| Some(raw.to_owned())).ok())
        .unwrap_or_else(ConsoleConfig::same_origin)
}

#[derive(Clone, Debug)]
pub struct BrowserAuthApi {
    base_url: String,
}

impl BrowserAuthApi {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self { base_url: config.api_base_url.clone() }
    }
}

#[async_trait(?Send)]
impl AuthApi for BrowserAuthApi {
    async fn login(&self, role: Role, credentials: &Credentials) -> Result<(), LoginError> {
        #[cfg(feature = "hydrate")]
        {
            let url = login_url(&self.base_url, role);
            let resp = gloo_net::http::Request::post(&url)
                .json(credentials)
                .map_err(|e| LoginError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| LoginError::Transport(e.to_string()))?;
            if resp.ok() {
                return Ok(());
            }
            let body = resp.text().await.unwrap_or_default();
            Err(LoginError::rejected(resp.status(), &body))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.base_url, role, credentials);
            Err(LoginError::Transport("not available on server".to_owned()))
        }
    }
}
