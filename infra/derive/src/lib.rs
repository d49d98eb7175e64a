#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the service crates: error enums, API models and
//! handlers, feature slices and the runtime entry point.
//!
//! ## Usage
//! Add the crate as a regular dependency from any workspace member:
//! ```toml
//! [dependencies]
//! sme-derive.workspace = true
//! ```
//!
//! Examples below are `ignore`d because a proc-macro crate cannot use its own macros.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to bootstrap a Tokio runtime from a named profile.
///
/// Turns an `async fn main` into a plain `fn main` that builds the runtime
/// through `sme_runtime::build_runtime_with_config` and blocks on the body.
///
/// # Arguments
///
/// * `high_performance` - Larger stacks and longer keep-alive for servers.
/// * `memory_efficient` - Half the worker threads, smaller stacks.
/// * `default` - Worker threads auto-detected from available parallelism.
///
/// # Examples
///
/// ```rust,ignore
/// #[sme_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro to define a standard API data model.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug`, `Serialize` and `Deserialize` when missing.
/// * **`OpenAPI`**: `utoipa::ToSchema` when the consuming crate enables `server`.
/// * **Serde Policy**: `rename_all = "camelCase"` and `deny_unknown_fields`
///   unless overridden.
///
/// # Example
///
/// ```rust,ignore
/// use sme_derive::api_model;
///
/// #[api_model(rename_all = "snake_case", deny_unknown_fields = false)]
/// pub struct Meta {
///     pub request_id: Option<String>,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Attribute macro to bridge Axum handlers with `OpenAPI` documentation.
///
/// Accepts the standard `utoipa::path` arguments (`get`, `path = "..."`,
/// `responses(...)`, `tag = ...`) and only emits the `utoipa::path` attribute
/// when the consuming crate enables `server`.
///
/// # Example
///
/// ```rust,ignore
/// use sme_derive::api_handler;
///
/// #[api_handler(
///     get,
///     path = "/health",
///     responses((status = OK, body = HealthResponse)),
///     tag = SYSTEM_TAG
/// )]
/// pub async fn health_handler() -> impl IntoResponse {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Attribute macro for domain error enums.
///
/// # Features
///
/// * **Automatic Derives**: `#[derive(Debug, thiserror::Error)]` when missing.
/// * **Context Support**: a companion `...Ext` trait adding `.context()` to any
///   `Result` whose error converts into this enum.
/// * **Standard Conversions**: `From<T>` for variants with a `source` field.
/// * **Internal Fallback**: `From<&'static str>` and `From<String>` when an
///   `Internal` variant is present.
///
/// # Requirements
///
/// 1. The macro must be applied to an **enum** with named-field variants.
/// 2. A `context` field must be `Option<Cow<'static, str>>`.
/// 3. Variants with a `source` field must also carry a `context` field.
///
/// # Example
///
/// ```rust,ignore
/// use sme_derive::sme_error;
/// use std::borrow::Cow;
///
/// #[sme_error]
/// pub enum ConfigError {
///     #[error("Config error{}: {source}", format_context(.context))]
///     Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<Settings, ConfigError> {
///     builder.build().context("Failed to build config")?
///         .try_deserialize()
///         .context("Failed to deserialize config")
/// }
/// ```
#[proc_macro_attribute]
pub fn sme_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro to define a feature slice handle.
///
/// Generates a `<Name>Inner` struct with the declared fields, an `Arc`-backed
/// `<Name>` wrapper with `new` and `Deref`, and the `FeatureSlice` impl used
/// by the kernel registry.
///
/// # Example
/// ```rust,ignore
/// #[sme_derive::sme_slice]
/// pub struct Landing {
///     pub document: std::sync::Arc<str>,
/// }
///
/// fn init(document: Arc<str>) -> Landing {
///     Landing::new(LandingInner { document })
/// }
/// ```
#[proc_macro_attribute]
pub fn sme_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
