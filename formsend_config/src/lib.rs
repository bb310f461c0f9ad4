use std::path::Path;

use anyhow::Context;
use config::{File, FileFormat};
use formsend_models::contact::UserAgent;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub client: ClientConfig,
    pub toast: ToastConfig,
    /// The document-store backend. Absent means the hard dependency is
    /// missing and the form stays inert for this run.
    pub backend: Option<BackendConfig>,
}

#[derive(Debug, Deserialize)]
pub struct ClientConfig {
    /// Client metadata attached to every record; defaults to the built-in
    /// user agent when unset.
    pub user_agent: Option<UserAgent>,
}

#[derive(Debug, Deserialize)]
pub struct ToastConfig {
    pub duration_secs: u64,
}

#[derive(Debug, Deserialize)]
pub struct BackendConfig {
    pub endpoint: Url,
    pub collection: String,
    pub api_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default_config() {
        load(&[Path::new(DEFAULT_CONFIG_PATH)]).unwrap();
    }

    #[test]
    fn backend_section_is_optional() {
        let config = serde_json::from_value::<Config>(serde_json::json!({
            "client": {},
            "toast": { "duration_secs": 5 },
        }))
        .unwrap();

        assert!(config.backend.is_none());
        assert!(config.client.user_agent.is_none());
    }
}
