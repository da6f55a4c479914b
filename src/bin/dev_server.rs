//! Spawns the front-end dev server.
//! Run: cargo run --bin dev-server -- [config.yaml]

use anyhow::Result;
use port_probe::{config, launcher, logging};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config_path = std::env::args().nth(1);
    let config = config::load_or_default(config_path.as_deref()).await?;

    logging::init(&config.logging.filter)?;
    if let Some(path) = &config_path {
        info!("Loaded configuration from: {}", path);
    }

    // Child failures are reported, never turned into an exit code.
    launcher::run(&config.launcher).await;
    Ok(())
}
