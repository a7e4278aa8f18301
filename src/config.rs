use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub langs_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            langs_dir: "app/appearance/langs".to_string(),
        }
    }
}

pub fn load_config() -> Result<Config> {
    let path = PathBuf::from("langcheck.toml");
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Reading config file {:?}", path))?;
    let cfg: Config = toml::from_str(&contents)
        .with_context(|| format!("Parsing config file {:?}", path))?;
    Ok(cfg)
}
