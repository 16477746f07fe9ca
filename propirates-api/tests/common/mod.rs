#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use propirates_api::config::ApiConfig;
use propirates_api::startup::Application;
use service_core::config::Config as CoreConfig;
use service_core::middleware::cors::AllowedOrigins;

pub fn test_config(cors_origins: AllowedOrigins) -> ApiConfig {
    ApiConfig {
        // Use random port for testing (port 0)
        common: CoreConfig { port: 0 },
        cors_origins,
        log_level: "error".to_string(),
        otlp_endpoint: None,
    }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn post_logging(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/logging")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("Response body is not JSON")
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let app = Application::build(test_config(AllowedOrigins::Any))
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}
