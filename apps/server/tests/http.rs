use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use sme::domain::config::ApiConfig;
use sme_server::{DOCS_PATH, OPENAPI_PATH, Server};
use tower::ServiceExt;

fn app() -> Router {
    Server::builder().build().expect("default server builds").router()
}

async fn get(uri: &str) -> axum::response::Response {
    app().oneshot(Request::get(uri).body(Body::empty()).expect("request")).await.expect("infallible")
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

#[tokio::test]
async fn health_is_ok() {
    let response = get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&body_text(response).await).expect("json");
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn openapi_document_describes_the_api() {
    let response = get(OPENAPI_PATH).await;
    assert_eq!(response.status(), StatusCode::OK);

    let doc: Value = serde_json::from_str(&body_text(response).await).expect("json");
    assert!(doc.get("openapi").is_some());
    assert_eq!(doc["info"]["title"], "SME Supply Chain Risk Analysis API");
    assert_eq!(doc["info"]["version"], "0.1.0");
    assert!(doc["paths"]["/health"].is_object());
    assert!(doc["paths"]["/"].is_object());
}

#[tokio::test]
async fn docs_ui_is_served() {
    let response = get(DOCS_PATH).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("<html"));
}

#[tokio::test]
async fn root_serves_landing_page() {
    let response = get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("text/html"))
    );

    let html = body_text(response).await;
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("SME Supply Chain Risk Analysis"));
    assert_eq!(html.matches(r#"data-slot="card""#).count(), 3);
}

#[tokio::test]
async fn unknown_route_returns_not_found_envelope() {
    let response = get("/api/v1/suppliers").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = serde_json::from_str(&body_text(response).await).expect("json");
    assert_eq!(body["error"]["code"], "NOT_FOUND");
    assert!(body["error"]["message"].as_str().is_some_and(|m| m.contains("/api/v1/suppliers")));
}

#[tokio::test]
async fn request_id_is_echoed() {
    let request = Request::get("/health")
        .header("x-request-id", "req-42")
        .body(Body::empty())
        .expect("request");
    let response = app().oneshot(request).await.expect("infallible");

    assert_eq!(
        response.headers().get("x-request-id").and_then(|v| v.to_str().ok()),
        Some("req-42")
    );
}

#[tokio::test]
async fn request_id_is_generated_when_absent() {
    let response = get("/").await;
    let id = response.headers().get("x-request-id").and_then(|v| v.to_str().ok());

    assert!(id.is_some_and(|id| id.len() == 36), "{id:?}");
}

#[tokio::test]
async fn cors_allows_configured_origin() {
    let request = Request::get("/health")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .expect("request");
    let response = app().oneshot(request).await.expect("infallible");

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).and_then(|v| v.to_str().ok()),
        Some("http://localhost:3000")
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
}

#[test]
fn invalid_cors_origin_fails_build() {
    let mut cfg = ApiConfig::default();
    cfg.cors.allowed_origins = vec!["http://bad\norigin".to_owned()];

    assert!(Server::builder().config(cfg).build().is_err());
}

#[test]
fn missing_certificate_fails_build() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cfg = ApiConfig::default();
    cfg.server.ssl = Some(sme::domain::config::SslConfig {
        cert: dir.path().join("cert.pem"),
        key: dir.path().join("key.pem"),
    });

    let err = Server::builder().config(cfg).build().expect_err("certificate is missing");
    assert!(err.to_string().contains("SSL certificate not found"), "{err}");
}

#[test]
fn missing_key_fails_build() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cert = dir.path().join("cert.pem");
    std::fs::write(&cert, "not a real certificate").expect("write cert");

    let mut cfg = ApiConfig::default();
    cfg.server.ssl =
        Some(sme::domain::config::SslConfig { cert, key: dir.path().join("key.pem") });

    let err = Server::builder().config(cfg).build().expect_err("key is missing");
    assert!(err.to_string().contains("SSL key not found"), "{err}");
}
