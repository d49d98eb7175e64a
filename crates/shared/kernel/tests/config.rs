use serial_test::serial;
use sme_kernel::config::{ConfigError, load_config, load_config_with_env};
use sme_kernel::domain::config::ApiConfig;
use std::collections::HashMap;
use std::io::Write;

fn env(vars: &[(&str, &str)]) -> Option<HashMap<String, String>> {
    Some(vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect())
}

#[test]
#[serial]
fn explicit_file_overrides_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(
        file,
        r##"
debug = true

[server]
port = 9090

[cors]
allowed_origins = ["https://portal.example.com", "http://localhost:3000"]

[ui]
title = "Supplier Risk"

[ui.palette]
warning = "#ffaa00"
"##
    )?;

    let cfg: ApiConfig = load_config(Some(file.path()))?;
    assert!(cfg.debug);
    assert_eq!(cfg.server.port, 9090);
    assert_eq!(cfg.cors.allowed_origins.len(), 2);
    assert_eq!(cfg.ui.title, "Supplier Risk");
    assert_eq!(cfg.ui.palette.warning, "#ffaa00");
    assert_eq!(cfg.logging.level, "info");
    Ok(())
}

#[test]
#[serial]
fn missing_explicit_file_is_an_error() {
    let result = load_config::<ApiConfig>(Some("does/not/exist/server.toml"));
    assert!(matches!(result, Err(ConfigError::Config { context: Some(_), .. })));
}

#[test]
#[serial]
fn default_file_is_optional() {
    let cfg: ApiConfig = load_config(None::<&str>).expect("defaults without a file");
    assert_eq!(cfg.ui.title, "SME Supply Chain Risk Analysis");
}

#[test]
#[serial]
fn malformed_values_are_rejected() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, "[server]\nport = \"not-a-port\"")?;

    let err = load_config::<ApiConfig>(Some(file.path())).expect_err("port must be numeric");
    assert_eq!(err.code(), "CONFIG");
    Ok(())
}

#[test]
#[serial]
fn environment_overrides_defaults() {
    let cfg: ApiConfig = load_config_with_env(
        None::<&str>,
        env(&[
            ("SME__SERVER__PORT", "8181"),
            ("SME__CORS__ALLOWED_ORIGINS", "https://a.example,https://b.example"),
            ("SME__LOGGING__LEVEL", "debug"),
            ("SME__DEBUG", "true"),
            ("OTHER__SERVER__PORT", "1"),
        ]),
    )
    .expect("environment overrides");

    assert_eq!(cfg.server.port, 8181);
    assert_eq!(cfg.cors.allowed_origins, vec!["https://a.example", "https://b.example"]);
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.debug);
}

#[test]
#[serial]
fn environment_wins_over_file() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, "[server]\nport = 9090\n\n[ui]\nstylesheets = [\"/file.css\"]")?;

    let cfg: ApiConfig = load_config_with_env(
        Some(file.path()),
        env(&[("SME__UI__STYLESHEETS", "/a.css,/b.css"), ("SME__UI__TITLE", "Suppliers")]),
    )?;

    assert_eq!(cfg.server.port, 9090);
    assert_eq!(cfg.ui.stylesheets, vec!["/a.css", "/b.css"]);
    assert_eq!(cfg.ui.title, "Suppliers");
    Ok(())
}

#[test]
#[serial]
fn unparsable_environment_value_is_rejected() {
    let result =
        load_config_with_env::<ApiConfig>(None::<&str>, env(&[("SME__SERVER__PORT", "eighty")]));
    assert!(matches!(result, Err(ConfigError::Config { .. })));
}
