mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::test_config;
use propirates_api::startup::build_router;
use service_core::middleware::cors::AllowedOrigins;
use tower::util::ServiceExt;

fn health_from(origin: &str) -> Request<Body> {
    Request::builder()
        .uri("/health")
        .header(header::ORIGIN, origin)
        .body(Body::empty())
        .unwrap()
}

fn preflight_from(origin: &str) -> Request<Body> {
    Request::builder()
        .method("OPTIONS")
        .uri("/api/logging")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type,x-custom")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn listed_origins_are_accepted_and_others_rejected() {
    let origins = AllowedOrigins::parse(Some("https://a.com, https://b.com"));
    let app = build_router(&test_config(origins));

    for origin in ["https://a.com", "https://b.com"] {
        let response = app.clone().oneshot(health_from(origin)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            origin
        );
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
            "true"
        );
    }

    let response = app.oneshot(health_from("https://c.com")).await.unwrap();
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}

#[tokio::test]
async fn any_origin_is_mirrored_when_unset_or_wildcard() {
    for raw in [None, Some("*")] {
        let app = build_router(&test_config(AllowedOrigins::parse(raw)));

        let response = app
            .oneshot(health_from("https://anywhere.example"))
            .await
            .unwrap();
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://anywhere.example"
        );
    }
}

#[tokio::test]
async fn preflight_allows_any_method_and_header() {
    let app = build_router(&test_config(AllowedOrigins::parse(Some("https://a.com"))));

    let response = app.oneshot(preflight_from("https://a.com")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "https://a.com");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST");
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
        "content-type,x-custom"
    );
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
}

#[tokio::test]
async fn empty_list_accepts_no_origin() {
    let app = build_router(&test_config(AllowedOrigins::parse(Some(" , "))));

    let response = app.oneshot(health_from("https://a.com")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
