use crate::config::app::{Defaults, Logging};
use crate::consts::{
    CONFIG_ENV_VAR, DEFAULT_CAESAR_SHIFT, DEFAULT_CONFIG_PATH, DEFAULT_KEY, DEFAULT_RAILS,
};

pub const DEFAULT_LOG_FILTER: &str = "info";

pub fn config_path() -> String {
    std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

pub fn default_parameters() -> Defaults {
    Defaults {
        caesar_shift: DEFAULT_CAESAR_SHIFT,
        rails: DEFAULT_RAILS,
        vigenere_key: DEFAULT_KEY.into(),
        columnar_key: DEFAULT_KEY.into(),
    }
}

pub fn default_logging() -> Logging {
    Logging {
        filter: DEFAULT_LOG_FILTER.into(),
    }
}
