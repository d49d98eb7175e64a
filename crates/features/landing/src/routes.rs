use crate::Landing;
use axum::body::Bytes;
use axum::extract::State;
use axum::response::Html;
use sme_derive::api_handler;
use sme_kernel::domain::constants::LANDING_TAG;
use sme_kernel::prelude::{ApiError, ApiErrorExt, ApiState};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

#[api_handler(
    get,
    path = "/",
    responses((status = OK, description = "Landing page", content_type = "text/html", body = String)),
    tag = LANDING_TAG,
)]
pub(crate) async fn landing_handler(
    State(state): State<ApiState>,
) -> Result<Html<Bytes>, ApiError> {
    let landing = state.try_get_slice::<Landing>().context("serving landing page")?;
    Ok(Html(landing.body.clone()))
}

/// Routes of the landing slice (`GET /`).
pub fn landing_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(landing_handler))
}
