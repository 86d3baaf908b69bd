use super::defaults::*;
use crate::core::Result;
use crate::enums::PaddingMode;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: Defaults,
    pub columnar: Columnar,
    pub logging: Logging,
}

/// Parameters used when a request leaves them out
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub caesar_shift: i64,
    pub rails: usize,
    pub vigenere_key: String,
    pub columnar_key: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Columnar {
    pub padding: PaddingMode,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Logging {
    pub filter: String,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

/// Read a config file without touching the global
pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Config> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Ok(toml::from_str(&content)?)
}

/// Load config once per process: `CIPHERS_CONFIG` or `ciphers.toml`,
/// built-in defaults when the file does not exist.
pub fn load() -> Result<&'static Config> {
    CONFIG.get_or_try_init(|| {
        let config_path = config_path();

        if Path::new(&config_path).exists() {
            load_from(&config_path)
        } else {
            warn!("{config_path} not found — using built-in defaults");
            Ok(Config::default())
        }
    })
}

impl Default for Defaults {
    fn default() -> Self {
        default_parameters()
    }
}

impl Default for Logging {
    fn default() -> Self {
        default_logging()
    }
}
