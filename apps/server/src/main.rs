use anyhow::Context;
use sme::domain::config::ApiConfig;
use sme::domain::constants::CONFIG_PATH_ENV;
use sme::kernel::config::load_config;
use sme_logger::{LogFormat, Logger, parse_level};
use sme_server::Server;

#[sme_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::var_os(CONFIG_PATH_ENV);
    let cfg: ApiConfig =
        load_config(config_path.as_ref()).context("Critical: Configuration is malformed")?;

    let format = if cfg.debug { LogFormat::Compact } else { LogFormat::Json };
    let builder = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(parse_level(&cfg.logging.level))
        .format(format);
    let _log = match &cfg.logging.directory {
        Some(directory) => builder.path(directory).max_files(cfg.logging.max_files).init()?,
        None => builder.init()?,
    };

    Server::builder().config(cfg).build()?.run().await
}
