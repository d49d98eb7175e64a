//! Landing page feature slice.
//!
//! The page is a fixed composition of `sme-ui` primitives. It is rendered once
//! when the slice initializes and the cached document is served on every `GET /`.
mod content;
mod document;
mod error;
mod page;
#[cfg(feature = "server")]
mod routes;

pub use content::{FEATURES, Feature, GET_STARTED, LEARN_MORE, RiskLevel, TAGLINE};
pub use document::{render_document, theme_css};
pub use error::{LandingError, LandingErrorExt};
pub use page::{LandingPage, render_page};
#[cfg(feature = "server")]
pub use routes::landing_router;

use sme_kernel::domain::config::ApiConfig;
use sme_kernel::domain::registry::InitializedSlice;
use std::sync::Arc;

/// Landing feature state.
#[sme_derive::sme_slice]
pub struct Landing {
    /// Pre-rendered HTML document.
    pub document: Arc<str>,
    /// The same document as a response body; clones share one buffer.
    #[cfg(feature = "server")]
    pub body: axum::body::Bytes,
}

/// Initialize the landing feature.
///
/// # Errors
/// Returns an error if the configured theme cannot be rendered.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, LandingError> {
    let document = render_document(&config.ui).context("rendering landing document")?;
    tracing::info!(bytes = document.len(), title = %config.ui.title, "Landing slice initialized");

    let slice = Landing::new(LandingInner {
        #[cfg(feature = "server")]
        body: axum::body::Bytes::from(document.clone()),
        document: document.into(),
    });
    Ok(InitializedSlice::new(slice))
}
