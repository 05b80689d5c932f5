use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt; // for `oneshot`

pub const POST_ROUTES: [&str; 4] = [
    "/api/sentiment-analysis",
    "/api/predict-roi",
    "/api/detect-fraud",
    "/api/analyze-demographics",
];

pub const TEST_ORIGIN: &str = "http://localhost:3000";

/// Response parts a test cares about. Empty bodies decode as `Value::Null`.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    TestResponse {
        status,
        headers,
        body,
    }
}

/// POST with a JSON content type and the given raw body.
pub fn json_post(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("origin", TEST_ORIGIN)
        .body(Body::from(body.into()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("origin", TEST_ORIGIN)
        .body(Body::empty())
        .unwrap()
}

pub fn assert_allows_any_origin(headers: &HeaderMap) {
    let value = headers
        .get("access-control-allow-origin")
        .expect("missing access-control-allow-origin header");
    assert_eq!(value, "*");
}
