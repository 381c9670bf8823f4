use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    common::{Error, Result},
    configs::*,
    resolver::BrowseIdHeuristics,
};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub innertube: InnerTubeConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    #[serde(default)]
    pub filters: FiltersConfig,
    #[serde(default)]
    pub heuristics: BrowseIdHeuristics,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Reads `config.toml`, falling back to `config.default.toml`.
    pub fn load() -> Result<Self> {
        let config_path = if Path::new("config.toml").exists() {
            "config.toml"
        } else if Path::new("config.default.toml").exists() {
            "config.default.toml"
        } else {
            return Err(Error::ConfigMissing(
                "config.toml or config.default.toml".to_string(),
            ));
        };

        Self::load_from(config_path)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("Loading configuration from: {}", path.display());

        let config_str = std::fs::read_to_string(path)?;
        if config_str.trim().is_empty() {
            return Err(Error::ConfigMissing(format!("{} is empty", path.display())));
        }

        Self::from_toml_str(&config_str)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}
