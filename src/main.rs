use anyhow::Context;
use clap::Parser;
use tracing::info;

use shortform::config::{AppConfig, CliArgs};
use shortform::interfaces::tui;
use shortform::system::{init_logging, install_panic_hook};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = CliArgs::parse();
    let config = AppConfig::load(&cli).context("failed to load configuration")?;

    // 日志与崩溃处理要在进入原始模式之前就位
    let _log_guard = init_logging(&config.logging);
    install_panic_hook();

    info!(api_base = %config.api.base_url, "starting shortform");

    tui::run_tui(&config)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
