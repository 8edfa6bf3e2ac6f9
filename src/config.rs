use std::{fs, io::ErrorKind, path::Path};

use anyhow::{Context, Result};
use log::info;
use serde::Deserialize;

/// Where the configuration is read from, relative to the working directory
pub const CONFIG_PATH: &str = "config.toml";

const DEFAULT_BASE_URL: &str = "https://fsa-puppy-bowl.herokuapp.com/api";
const DEFAULT_COHORT: &str = "2310-FSA-ET-WEB-PT-SF-B";

/// Represents the contents of `config.toml`
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

/// The `[api]` table: which remote roster to talk to
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// The API root, without a trailing slash
    pub base_url: String,

    /// The cohort whose players are managed
    pub cohort: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cohort: DEFAULT_COHORT.to_string(),
        }
    }
}

impl ApiConfig {
    /// The collection URL, `{base_url}/{cohort}/players`
    pub fn players_url(&self) -> String {
        format!(
            "{}/{}/players",
            self.base_url.trim_end_matches('/'),
            self.cohort.trim_matches('/')
        )
    }
}

impl Config {
    /// Loads the configuration from `config.toml`
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_PATH)
    }

    /// Loads the configuration at `path`, falling back to the defaults when
    /// the file does not exist
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents)
                .with_context(|| format!("Invalid configuration in {}", path.display())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("No {} found, using the default roster", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e).with_context(|| format!("Could not read {}", path.display())),
        }
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let cfg = toml::from_str::<Config>(contents)?;
        if cfg.api.base_url.is_empty() {
            return Err(anyhow::anyhow!("No base_url"));
        }
        if cfg.api.cohort.is_empty() {
            return Err(anyhow::anyhow!("No cohort"));
        }
        Ok(cfg)
    }
}
