mod common;

use axum::{body::Body, http::{Method, StatusCode}};
use common::{create_event, create_venue, send, send_raw, test_app};
use serde_json::{json, Value};
use std::collections::HashSet;

#[tokio::test]
async fn list_is_empty_before_any_venue_exists() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/v1/venues/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn created_venue_can_be_fetched_back() {
    let app = test_app();

    let created = create_venue(&app, "Arena", "Boston", 5000).await;
    assert_eq!(created["venue_id"], 1);
    assert_eq!(created["name"], "Arena");
    assert_eq!(created["city"], "Boston");
    assert_eq!(created["capacity"], 5000);

    let (status, fetched) = send(&app, Method::GET, "/v1/venues/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (_, listed) = send(&app, Method::GET, "/v1/venues", None).await;
    assert_eq!(listed, json!([created]));
}

#[tokio::test]
async fn venue_ids_are_unique() {
    let app = test_app();

    let mut ids = Vec::new();
    for i in 0..5 {
        let venue = create_venue(&app, &format!("Hall {i}"), "Denver", 100 + i).await;
        ids.push(venue["venue_id"].as_i64().unwrap());
    }

    let unique: HashSet<i64> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn missing_venue_is_not_found() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/v1/venues/99", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Venue not found");
}

#[tokio::test]
async fn delete_removes_the_venue() {
    let app = test_app();
    create_venue(&app, "Arena", "Boston", 5000).await;

    let (status, body) = send(&app, Method::DELETE, "/v1/venues/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = send(&app, Method::GET, "/v1/venues/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::DELETE, "/v1/venues/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Venue not found");
}

#[tokio::test]
async fn venue_with_events_is_not_deleted() {
    let app = test_app();
    create_venue(&app, "Arena", "Boston", 5000).await;
    create_event(&app, 1, "music", "OPEN").await;

    let (status, body) = send(&app, Method::DELETE, "/v1/venues/1", None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["detail"].as_str().unwrap().contains("Venue 1"));

    let (status, _) = send(&app, Method::GET, "/v1/venues/1", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn invalid_bodies_are_rejected_with_422() {
    let app = test_app();

    let cases = [
        json!({ "name": "Arena", "city": "Boston" }),
        json!({ "name": "Arena", "city": "Boston", "capacity": "lots" }),
        json!({ "name": "Arena", "city": "Boston", "capacity": 0 }),
        json!({ "name": "", "city": "Boston", "capacity": 10 }),
        json!({ "name": "Arena", "city": "   ", "capacity": 10 }),
    ];

    for body in cases {
        let (status, response) = send(&app, Method::POST, "/v1/venues/", Some(body.clone())).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "accepted {body}");
        assert!(response["detail"].is_string());
    }

    let (_, listed) = send(&app, Method::GET, "/v1/venues/", None).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn malformed_json_and_missing_content_type_are_422() {
    let app = test_app();

    let (status, _) = send_raw(
        &app,
        Method::POST,
        "/v1/venues/",
        Some("application/json"),
        Body::from("{\"name\": "),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send_raw(
        &app,
        Method::POST,
        "/v1/venues/",
        None,
        Body::from(r#"{"name":"Arena","city":"Boston","capacity":10}"#),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn non_numeric_id_is_a_bad_request() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/v1/venues/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string(), "{body}");

    let (status, body) = send(&app, Method::DELETE, "/v1/venues/1.5", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].is_string(), "{body}");
}

#[tokio::test]
async fn health_reports_service_up() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "Catalog Service is up" }));
}
