// ────────────────────────────────
// src/launcher/spawn.rs
// Runs the external dev server command with inherited stdio.
// ────────────────────────────────
use crate::config::LauncherConfig;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tracing::{error, info};

#[derive(Debug, thiserror::Error)]
pub enum SpawnError {
    #[error("failed to start `{command}`: {source}")]
    Start {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}")]
    Exit { command: String, status: ExitStatus },
}

/// Spawn the configured command and wait for it to finish.
pub async fn launch(config: &LauncherConfig) -> Result<ExitStatus, SpawnError> {
    let command = config.command_line();

    let mut cmd = Command::new(&config.program);
    cmd.args(&config.args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    if let Some(dir) = &config.working_dir {
        cmd.current_dir(dir);
    }

    info!(%command, "starting dev server");
    let status = cmd
        .status()
        .await
        .map_err(|source| SpawnError::Start {
            command: command.clone(),
            source,
        })?;

    if !status.success() {
        return Err(SpawnError::Exit { command, status });
    }
    Ok(status)
}

/// [`launch`], with failures reported on stderr instead of returned.
///
/// No retry and no exit-code propagation.
pub async fn run(config: &LauncherConfig) {
    if let Err(e) = launch(config).await {
        error!(%e, "dev server failed");
        eprintln!("Error starting dev server: {e}");
    }
}
