use super::envelope::ErrorResponse;
use super::state::ApiStateError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use std::borrow::Cow;
use tracing::error;

/// Errors surfaced to HTTP clients as the JSON error envelope.
#[sme_derive::sme_error]
pub enum ApiError {
    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Application state error{}: {source}", format_context(.context))]
    State { source: ApiStateError, context: Option<Cow<'static, str>> },

    #[error("Internal server error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

const INTERNAL_CODE: &str = "INTERNAL_ERROR";

impl ApiError {
    pub fn not_found(message: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound { message: message.into(), context: None }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::State { .. } | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Envelope body; server-side failures never leak their cause to the client.
    #[must_use]
    pub fn to_envelope(&self) -> ErrorResponse {
        match self {
            Self::NotFound { message, .. } => ErrorResponse::new(self.code(), message.clone()),
            Self::State { .. } | Self::Internal { .. } => {
                ErrorResponse::new(INTERNAL_CODE, "Internal server error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(code = self.code(), error = %self, "Request failed");
        }
        (status, Json(self.to_envelope())).into_response()
    }
}
