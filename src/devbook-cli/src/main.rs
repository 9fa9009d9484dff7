use anyhow::Result;
use clap::Parser;
use devbook_cli::{commands, telemetry, Cli};
use devbook_rs::Client;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _guard = telemetry::init_telemetry(cli.debug)?;

    let config = commands::resolve_config(&cli)?;
    tracing::debug!(
        "Using extension {} on {} ({})",
        config.extension_id,
        config.base_url,
        config.api_version
    );

    let client = Client::from_config(config)?;

    let mut stdout = std::io::stdout().lock();
    commands::run(&client, cli.command, &mut stdout).await
}
