// Installs the global Prometheus recorder, so it lives in its own test binary.

mod common;

use axum::{
    body::Body,
    http::{Method, StatusCode},
};
use catalog_service::AppState;
use common::{send, send_raw};

#[tokio::test]
async fn requests_are_counted_by_route_template() {
    let handle = catalog_service::metrics::install_recorder().expect("install recorder");
    let app = catalog_service::app(AppState::in_memory(handle));

    send(&app, Method::GET, "/v1/venues/", None).await;
    send(&app, Method::GET, "/v1/venues/7", None).await;
    send(&app, Method::GET, "/v1/venues/8", None).await;

    let (status, body) = send_raw(&app, Method::GET, "/metrics", None, Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(body).unwrap();

    assert!(text.contains("http_requests_total"), "{text}");
    assert!(text.contains("http_request_duration_seconds_bucket"), "{text}");

    let not_found_line = text
        .lines()
        .find(|line| {
            line.starts_with("http_requests_total{")
                && line.contains(r#"path="/v1/venues/{venue_id}""#)
                && line.contains(r#"status="404""#)
        })
        .expect("404 series for the venue route");
    assert!(not_found_line.contains(r#"method="GET""#));
    assert!(not_found_line.ends_with(" 2"), "{not_found_line}");

    // raw ids never become label values
    assert!(!text.contains("/v1/venues/7"));
}
