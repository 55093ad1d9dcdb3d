#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use catalog_service::AppState;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

pub fn test_app() -> Router {
    let metrics = catalog_service::metrics::detached_handle().expect("metrics handle");
    catalog_service::app(AppState::in_memory(metrics))
}

pub async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: Body,
) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(body).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let (status, bytes) = match body {
        Some(json) => {
            send_raw(app, method, uri, Some("application/json"), Body::from(json.to_string())).await
        }
        None => send_raw(app, method, uri, None, Body::empty()).await,
    };

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}

pub async fn create_venue(app: &Router, name: &str, city: &str, capacity: i32) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/v1/venues/",
        Some(json!({ "name": name, "city": city, "capacity": capacity })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create venue failed: {body}");
    body
}

pub async fn create_event(app: &Router, venue_id: i64, event_type: &str, status: &str) -> Value {
    let (code, body) = send(
        app,
        Method::POST,
        "/v1/events/",
        Some(json!({
            "venue_id": venue_id,
            "title": format!("{event_type} evening"),
            "event_type": event_type,
            "event_date": "2025-06-01T19:30:00Z",
            "base_price": 30.0,
            "status": status,
        })),
    )
    .await;
    assert_eq!(code, StatusCode::CREATED, "create event failed: {body}");
    body
}
