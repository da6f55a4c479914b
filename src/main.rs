// src/main.rs
use anyhow::Result;
use port_probe::{logging, server::BootstrapListener};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    logging::init("port_probe=info")?;

    // A bind failure is not handled here; it ends the process.
    let listener = BootstrapListener::new().start().await?;
    listener.serve().await;

    Ok(())
}
