//! Cross-cutting HTTP layers: CORS, request-id correlation and request tracing.

use axum::http::{HeaderName, HeaderValue, Request};
use sme_domain::config::CorsConfig;
use sme_domain::constants::REQUEST_ID_HEADER;
use std::borrow::Cow;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tracing::{Span, info_span};

#[sme_derive::sme_error]
pub enum LayerError {
    #[error("Invalid CORS origin{}: {source}", format_context(.context))]
    Origin {
        source: axum::http::header::InvalidHeaderValue,
        context: Option<Cow<'static, str>>,
    },
}

#[must_use]
pub fn request_id_header() -> HeaderName {
    HeaderName::from_static(REQUEST_ID_HEADER)
}

/// Generates a UUID `x-request-id` unless the client already sent one.
#[must_use]
pub fn set_request_id() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(request_id_header(), MakeRequestUuid)
}

/// Copies the request's `x-request-id` onto the response.
#[must_use]
pub fn propagate_request_id() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(request_id_header())
}

/// Span factory for `TraceLayer::make_span_with`; records the correlation id.
pub fn request_span<B>(request: &Request<B>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-");

    info_span!(
        "http",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

/// Browser CORS policy: listed origins with credentials; methods and headers mirrored.
///
/// # Errors
/// Returns [`LayerError::Origin`] if an origin is not a valid header value.
pub fn cors(config: &CorsConfig) -> Result<CorsLayer, LayerError> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin.trim()).context(format!("origin '{origin}'"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}
