use axum::Json;
use axum::Router;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::get;
use serde_json::json;

use super::*;
use crate::testing::spawn_server;

fn sample() -> serde_json::Value {
    json!({
        "id": "ev-1",
        "title": "Jazz Night",
        "description": "Live quartet",
        "startTime": "2025-09-01T19:00:00Z",
        "time": "19:00",
        "venue": "Blue Hall",
        "category": "Music",
        "price": 2500.0,
        "maxAttendees": 120
    })
}

async fn client() -> EventsClient {
    let app = Router::new()
        .route("/api/v1/events", get(|| async { Json(json!([sample()])) }))
        .route(
            "/api/v1/events/{id}",
            get(|Path(id): Path<String>| async move {
                if id == "ev-1" {
                    Ok(Json(sample()))
                } else {
                    Err((StatusCode::NOT_FOUND, Json(json!({ "error": "event not found" }))))
                }
            })
            .delete(|Path(id): Path<String>| async move {
                if id == "ev-1" {
                    (StatusCode::CONFLICT, Json(json!({ "error": "event has attendees" })))
                } else {
                    (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({})))
                }
            }),
        );
    let base_url = spawn_server(app).await;
    EventsClient::new(&ConsoleConfig { api_base_url: base_url }).unwrap()
}

#[tokio::test]
async fn list_decodes_camel_case_events() {
    let events = client().await.list().await.unwrap();
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.start_time, "2025-09-01T19:00:00Z");
    assert_eq!(event.max_attendees, Some(120));
    assert_eq!(event.category.as_deref(), Some("Music"));
    assert_eq!(event.image_url, None);
}

#[tokio::test]
async fn get_missing_event_surfaces_error_field() {
    let err = client().await.get("nope").await.unwrap_err();
    assert!(matches!(err, ApiError::Response { status: 404, ref message } if message == "event not found"));
}

#[tokio::test]
async fn delete_surfaces_error_field_or_fallback() {
    let client = client().await;

    let err = client.delete("ev-1").await.unwrap_err();
    assert!(matches!(err, ApiError::Response { status: 409, ref message } if message == "event has attendees"));

    let err = client.delete("ev-2").await.unwrap_err();
    assert!(matches!(err, ApiError::Response { status: 500, ref message } if message == DELETE_FAILED_MESSAGE));
}
