//! REST collaborators consumed by the console.
//!
//! DESIGN
//! ======
//! `auth_api` is the seam the session core depends on; the reqwest transport
//! lives next to it behind the `http` feature so the browser build can plug in
//! its own. `events` is a plain client for the event endpoints.

pub mod auth_api;
#[cfg(feature = "http")]
pub mod events;
#[cfg(feature = "http")]
pub mod http;

/// Join a configured base URL and an absolute API path.
#[must_use]
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// Pull the `error` string out of a JSON failure body, if there is one.
#[must_use]
pub fn error_field(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(serde_json::Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
