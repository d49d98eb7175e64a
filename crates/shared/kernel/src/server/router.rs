use super::error::ApiError;
use super::health;
use axum::http::Uri;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// System routes shared by every deployment (`/health`).
pub fn system_router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
{
    health::mark_start();
    OpenApiRouter::<S>::new().routes(routes!(health::health_handler))
}

/// Fallback for unmatched paths: `404` with the error envelope.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}
