pub use crate::config::{ConfigError, ConfigErrorExt, load_config, load_config_with_env};
pub use crate::domain::config::ApiConfig;
pub use crate::domain::registry::{FeatureSlice, InitializedSlice};

#[cfg(feature = "server")]
pub use crate::server::{
    envelope::{ErrorBody, ErrorDetail, ErrorResponse},
    error::{ApiError, ApiErrorExt},
    state::{ApiState, ApiStateError},
};
