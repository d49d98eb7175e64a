use config::{Config, Environment, File, Map};
use serde::de::DeserializeOwned;
use sme_domain::constants::ENV_PREFIX;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Base name of the configuration file looked up in the working directory
/// (`server.toml`, `server.yaml`, `server.json`, ...).
pub const DEFAULT_CONFIG_FILE: &str = "server";

/// Keys whose environment values are comma-separated lists.
const LIST_KEYS: &[&str] = &["cors.allowed_origins", "ui.stylesheets"];

#[sme_derive::sme_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads a configuration object from a file overlaid with environment overrides.
///
/// 1. **Base File**: `path` if given (must exist), otherwise the optional
///    [`DEFAULT_CONFIG_FILE`] in the working directory.
/// 2. **Environment Overrides**: variables prefixed with `SME__`, nested with
///    double underscores (`SME__SERVER__PORT=8080` maps to `server.port`).
///    Values are parsed into numbers/booleans where possible; list keys accept
///    comma-separated values (`SME__CORS__ALLOWED_ORIGINS=https://a,https://b`).
///
/// # Errors
/// Returns an error if an explicit file is missing or malformed, or the merged
/// values do not match the structure of `T`.
///
/// # Example
/// ```rust
/// use sme_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    load_config_with_env(path, None)
}

/// Same as [`load_config`], but reads overrides from `env` instead of the
/// process environment when it is `Some`.
///
/// Keys keep their environment spelling (`SME__SERVER__PORT`).
///
/// # Errors
/// See [`load_config`].
pub fn load_config_with_env<T>(
    path: Option<impl AsRef<Path>>,
    env: Option<Map<String, String>>,
) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let (file, required) = path.map_or_else(
        || (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        |p| (p.as_ref().to_path_buf(), true),
    );

    let environment = LIST_KEYS.iter().fold(
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .source(env),
        |env, key| env.with_list_parse_key(key),
    );

    info!(path = %file.display(), required, "Loading config");

    Config::builder()
        .add_source(File::from(file.as_path()).required(required))
        .add_source(environment)
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")
}
