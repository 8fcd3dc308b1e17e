use axum::{body::Body, http::Request, Router};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use website::database::ActivityDirectory;
use website::web::build_router;

/// Router over a freshly seeded directory, plus a handle to inspect it.
pub fn seeded_app() -> (Router, ActivityDirectory) {
    let directory = ActivityDirectory::seeded();
    let static_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/static");
    (build_router(directory.clone(), static_dir), directory)
}

pub struct TestResponse {
    pub status: http::StatusCode,
    pub headers: http::HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }
}

pub async fn send(app: &Router, method: &str, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("failed to build request");
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");

    let status = response.status();
    let headers = response.headers().clone();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes()
        .to_vec();
    TestResponse {
        status,
        headers,
        body,
    }
}
