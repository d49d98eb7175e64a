//! Facade crate for the SME risk analysis platform.
//! Re-exports domain/kernel primitives, the component library and aggregates
//! feature initialization. Keep this crate thin: it composes other crates.
//!
//! ## Usage
//! - Add `sme` with the desired feature flags (`server`/`client`).
//! - Call `sme::init` to register feature slices; extend as new slices appear.

use std::borrow::Cow;

pub use sme_domain as domain;
use sme_domain::config::ApiConfig;
use sme_domain::registry::InitializedSlice;
pub use sme_kernel as kernel;
pub use sme_ui as ui;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use sme_kernel::server::router::{not_found, system_router};
        pub use sme_landing::landing_router;
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use sme_landing as landing;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        #[cfg(feature = "client")]
        "client",
        "landing",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

#[sme_derive::sme_error]
pub enum InitError {
    #[error("Landing slice failed{}: {source}", format_context(.context))]
    Landing { source: sme_landing::LandingError, context: Option<Cow<'static, str>> },
}

/// Initialize all enabled features.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(config: &ApiConfig) -> Result<Vec<InitializedSlice>, InitError> {
    let slices = vec![
        // Landing page
        features::landing::init(config)?,
    ];

    tracing::debug!(count = slices.len(), "Feature slices initialized");
    Ok(slices)
}
