//! Client for the public event endpoints and admin deletion.
//!
//! SYSTEM CONTEXT
//! ==============
//! Listing and reading events is public. Deletion is an admin action: callers
//! are expected to pass a `RouteGuard` check on the admin session first; the
//! backend itself is the source of truth for authorization.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use serde::{Deserialize, Serialize};

use super::http::{ApiError, build_client};
use super::{endpoint, error_field};
use crate::config::ConsoleConfig;

pub const EVENTS_PATH: &str = "/api/v1/events";
const DELETE_FAILED_MESSAGE: &str = "Failed to delete event";

/// An event as served by `/api/v1/events`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// ISO date/time string as stored by the backend.
    pub start_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default)]
    pub venue: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

fn event_path(id: &str) -> String {
    format!("{EVENTS_PATH}/{id}")
}

#[derive(Clone, Debug)]
pub struct EventsClient {
    http: reqwest::Client,
    base_url: String,
}

impl EventsClient {
    /// # Errors
    ///
    /// Returns `ApiError::ClientBuild` if the HTTP client cannot be constructed.
    pub fn new(config: &ConsoleConfig) -> Result<Self, ApiError> {
        Ok(Self { http: build_client()?, base_url: config.api_base_url.clone() })
    }

    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-2xx status, or a body that
    /// does not decode as a list of events.
    pub async fn list(&self) -> Result<Vec<Event>, ApiError> {
        let resp = self.http.get(endpoint(&self.base_url, EVENTS_PATH)).send().await?;
        let resp = check_status(resp, "Failed to load events data").await?;
        Ok(resp.json().await?)
    }

    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-2xx status, or decode failure.
    pub async fn get(&self, id: &str) -> Result<Event, ApiError> {
        let resp = self.http.get(endpoint(&self.base_url, &event_path(id))).send().await?;
        let resp = check_status(resp, "Failed to load event").await?;
        Ok(resp.json().await?)
    }

    /// # Errors
    ///
    /// Returns `ApiError::Response` carrying the body's `error` text (or a
    /// generic message) when the backend refuses the deletion.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let resp = self.http.delete(endpoint(&self.base_url, &event_path(id))).send().await?;
        check_status(resp, DELETE_FAILED_MESSAGE).await?;
        tracing::info!(event_id = id, "event deleted");
        Ok(())
    }
}

async fn check_status(resp: reqwest::Response, fallback: &str) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = error_field(&body).unwrap_or_else(|| fallback.to_owned());
    tracing::warn!(status = status.as_u16(), %message, "events request failed");
    Err(ApiError::Response { status: status.as_u16(), message })
}
