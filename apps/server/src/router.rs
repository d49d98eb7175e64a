use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::routing::get;
use sme::domain::constants::{API_DESCRIPTION, API_TITLE, API_VERSION};
use sme::kernel::prelude::ApiState;
use sme::kernel::server::layers::{self, LayerError};
use sme::server::router::{landing_router, not_found, system_router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiDoc;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
struct ApiDoc;

/// Path of the raw `OpenAPI` document.
pub const OPENAPI_PATH: &str = "/openapi.json";
/// Path of the interactive documentation UI.
pub const DOCS_PATH: &str = "/docs";

fn api_doc() -> OpenApiDoc {
    let mut api = ApiDoc::openapi();
    api.info.title = API_TITLE.to_owned();
    api.info.version = API_VERSION.to_owned();
    api.info.description = Some(API_DESCRIPTION.to_owned());
    api
}

/// Assembles every route and the cross-cutting layers.
///
/// # Errors
/// Returns an error if the configured CORS origins are invalid.
pub(crate) fn init(state: ApiState) -> Result<Router, LayerError> {
    let cors = layers::cors(&state.config.cors)?;

    // Separate the OpenAPI routes and the API documentation object
    let (routes, doc) = OpenApiRouter::with_openapi(api_doc())
        .merge(system_router())
        .merge(landing_router())
        .with_state(state)
        .split_for_parts();

    let raw_doc = doc.clone();
    let router = Router::new()
        .merge(routes)
        .route(OPENAPI_PATH, get(move || async move { axum::Json(raw_doc) }))
        .merge(Scalar::with_url(DOCS_PATH, doc))
        .fallback(not_found);

    // Outermost first; the request id is set before the trace span reads it.
    Ok(router.layer(
        ServiceBuilder::new()
            .layer(layers::set_request_id())
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(|request: &Request<Body>| layers::request_span(request)),
            )
            .layer(layers::propagate_request_id())
            .layer(cors),
    ))
}
