use anyhow::Context;
use clap::Parser;
use dotenv::dotenv;
use posture_explorer::config::{Args, ExplorerConfig};
use posture_explorer::{explorer, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok(); //load environmental variables before flags read them
    logging::init_logging();

    let args = Args::parse();
    let config = ExplorerConfig::from_args(args).context("invalid configuration")?;
    tracing::debug!(?config, "starting");

    explorer::serve(config).await.context("explorer server failed")?;
    Ok(())
}
