// src/config/mod.rs
mod models;

pub use models::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a file (YAML or JSON)
pub async fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let contents = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    let config: Config = match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&contents).context("Failed to parse YAML config")?
        }
        _ => serde_json::from_str(&contents).context("Failed to parse JSON config")?,
    };

    config.validate()?;
    Ok(config)
}

/// Defaults when no path is given, otherwise [`load_config`].
pub async fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Config> {
    match path {
        Some(path) => load_config(path).await,
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(suffix: &str, contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn defaults_without_path() {
        let config = load_or_default(None::<&Path>).await.unwrap();
        assert_eq!(config.launcher.program, "npm");
        assert_eq!(config.launcher.args, vec!["run", "dev"]);
        assert_eq!(config.launcher.command_line(), "npm run dev");
        assert_eq!(config.logging.filter, "info");
    }

    #[tokio::test]
    async fn loads_yaml_with_partial_fields() {
        let file = write_temp(
            ".yaml",
            "launcher:\n  program: yarn\n  args: [start]\n  working_dir: web\n",
        );
        let config = load_config(file.path()).await.unwrap();
        assert_eq!(config.launcher.command_line(), "yarn start");
        assert_eq!(config.launcher.working_dir.as_deref(), Some(Path::new("web")));
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[tokio::test]
    async fn loads_json() {
        let file = write_temp(".json", r#"{"logging":{"filter":"debug"}}"#);
        let config = load_config(file.path()).await.unwrap();
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.launcher, LauncherConfig::default());
    }

    #[tokio::test]
    async fn rejects_empty_program() {
        let file = write_temp(".yml", "launcher:\n  program: \"  \"\n");
        let err = load_config(file.path()).await.unwrap_err();
        assert!(err.to_string().contains("launcher.program"));
    }

    #[tokio::test]
    async fn missing_file_names_path() {
        let err = load_config("does/not/exist.yaml").await.unwrap_err();
        assert!(err.to_string().contains("does/not/exist.yaml"));
    }
}
