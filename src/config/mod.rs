use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Raw `search.list` response to ingest.
    pub response_path: PathBuf,
    /// Where the flat serialized records are written and re-read.
    pub serialized_path: PathBuf,
    pub pretty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            response_path: PathBuf::from("fixtures/response_example.json"),
            serialized_path: PathBuf::from("fixtures/serialized_searchresult.json"),
            pretty: true,
        }
    }
}

impl Config {
    /// Loads a TOML config file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
