use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use sme_kernel::domain::config::ApiConfig;
use sme_kernel::prelude::ApiState;
use sme_landing::{Landing, init, landing_router};
use tower::ServiceExt;

fn app(state: ApiState) -> Router {
    let (router, _api) = landing_router().split_for_parts();
    router.with_state(state)
}

#[tokio::test]
async fn root_serves_cached_document() {
    let config = ApiConfig::default();
    let state = ApiState::builder()
        .config(config.clone())
        .register_slice(init(&config).expect("init"))
        .build();

    let response = app(state)
        .oneshot(Request::get("/").body(Body::empty()).expect("request"))
        .await
        .expect("infallible");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("text/html; charset=utf-8")
    );

    let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let html = String::from_utf8(body.to_vec()).expect("utf-8");
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("SME Supply Chain Risk Analysis"));
}

#[tokio::test]
async fn served_body_is_the_cached_buffer() {
    let config = ApiConfig::default();
    let state = ApiState::builder()
        .config(config.clone())
        .register_slice(init(&config).expect("init"))
        .build();
    let landing = state.try_get_slice::<Landing>().expect("landing slice");
    assert_eq!(landing.body.as_ref(), landing.document.as_bytes());
    let cached = landing.body.as_ptr();

    let response = app(state.clone())
        .oneshot(Request::get("/").body(Body::empty()).expect("request"))
        .await
        .expect("infallible");
    let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");

    assert_eq!(body.as_ptr(), cached);
    assert_eq!(body.len(), landing.document.len());
}

#[tokio::test]
async fn missing_slice_is_an_opaque_server_error() {
    let response = app(ApiState::builder().build())
        .oneshot(Request::get("/").body(Body::empty()).expect("request"))
        .await
        .expect("infallible");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let text = String::from_utf8(body.to_vec()).expect("utf-8");
    assert!(text.contains("INTERNAL_ERROR"), "{text}");
    assert!(!text.contains("Landing"), "{text}");
}

#[test]
fn root_is_documented() {
    let (_router, api) = landing_router().split_for_parts();
    let op = api.paths.paths.get("/").and_then(|item| item.get.as_ref()).expect("GET /");
    assert_eq!(op.tags.as_deref(), Some(&["landing".to_owned()][..]));
}
