//! Names shared between the server, the kernel and the feature slices.

/// Product name shown in the page title and the hero heading.
pub const PRODUCT_NAME: &str = "SME Supply Chain Risk Analysis";

/// `OpenAPI` document title.
pub const API_TITLE: &str = "SME Supply Chain Risk Analysis API";
pub const API_DESCRIPTION: &str = "API for analyzing supply chain risks for SME suppliers";
pub const API_VERSION: &str = "0.1.0";

/// `OpenAPI` tags.
pub const SYSTEM_TAG: &str = "health";
pub const LANDING_TAG: &str = "landing";

/// Correlation header set on every response.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Prefix for environment overrides (`SME__SERVER__PORT=8080`).
pub const ENV_PREFIX: &str = "SME";
/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "SME_CONFIG";
