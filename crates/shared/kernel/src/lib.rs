//! Kernel utilities shared across slices.
//! Keep this crate lightweight: configuration loading, the application state
//! registry and the HTTP plumbing every slice relies on.
//!
//! ## Config loading
//! ```rust,no_run
//! use sme_kernel::config::load_config;
//! use sme_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(None::<&str>).unwrap_or_default();
//! assert!(cfg.server.port > 0);
//! ```
//!
//! ## HTTP (feature `server`)
//! `server::router::system_router` mounts `/health`; `server::error::ApiError`
//! renders the JSON error envelope; `server::layers` builds the CORS and
//! request-id layers.

pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use sme_domain as domain;
