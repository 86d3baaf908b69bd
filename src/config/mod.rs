//! Configuration system for classical-ciphers
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, load_from, Columnar, Config, Defaults, Logging};
pub use defaults::DEFAULT_LOG_FILTER;

mod app;
mod defaults;
