use anyhow::Context;
use clap::Parser;
use tally_config::TallyConfig;
use tally_db::service::TallyService;
use tally_server::Server;

mod cli;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("tally error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let mut config = TallyConfig::load_with_dotenv(cli.config.as_deref())
        .context("failed to load tally configuration")?;
    cli.apply(&mut config);

    init_tracing(cli.level().unwrap_or(config.logging.filter.as_str()))?;

    tracing::info!(database = %config.database.path, "opening issue store");
    let store = TallyService::new_local(&config.database.path)
        .await
        .with_context(|| format!("failed to open database '{}'", config.database.path))?;

    let server = Server::new(&config.server, store)?;
    server.run().await?;
    Ok(())
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env("TALLY_LOG")
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(level))
        .with_context(|| format!("invalid log filter '{level}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
