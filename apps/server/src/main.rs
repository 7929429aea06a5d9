use amia::domain::config::{ApiConfig, LoggingConfig};
use amia::kernel::config::load_config;
use amia_logger::Logger;
use amia_server::Server;
use anyhow::Context;

fn init_logger(cfg: &LoggingConfig) -> anyhow::Result<Logger> {
    let builder = Logger::builder().name(env!("CARGO_PKG_NAME"));
    let logger = match &cfg.directory {
        Some(dir) if cfg.json => builder.path(dir).json().init()?,
        Some(dir) => builder.path(dir).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}

#[amia_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let cfg: ApiConfig =
        load_config(Some("server")).context("Critical: Configuration is malformed")?;

    let _log = init_logger(&cfg.logging)?;

    Server::builder().config(cfg).build()?.run().await
}
