use anyhow::Context;
use donut_delight::core::logger::init_logger;
use donut_delight::{AppConfig, CommandLine, commands};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = CommandLine::parse_args();
    let config = AppConfig::from_env().with_overrides(&cli);

    init_logger(&config.log_level, config.log_json).context("Failed to initialize logging")?;
    tracing::debug!(?config, "Configuration loaded");

    let output = commands::execute(&cli.command, &config).await?;
    println!("{output}");
    Ok(())
}
