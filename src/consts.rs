// src/consts.rs
//! Shared constants — alphabet parameters and defaults

/// Letters in the Latin alphabet every substitution works over
pub const ALPHABET_LEN: u8 = 26;

/// Fills the incomplete final row of a columnar grid
pub const PADDING_CHAR: char = 'X';

/// Largest Caesar shift the request layer accepts
pub const MAX_SHIFT: i64 = 25;

/// Fewest rails the request layer accepts; fewer is an identity transform
pub const MIN_RAILS: i64 = 2;

/// Default Caesar shift when none is supplied
pub const DEFAULT_CAESAR_SHIFT: i64 = 3;

/// Default rail count when none is supplied
pub const DEFAULT_RAILS: usize = 3;

/// Default keyword for Vigenère and Columnar
pub const DEFAULT_KEY: &str = "KEY";

/// Env var naming the TOML config file
pub const CONFIG_ENV_VAR: &str = "CIPHERS_CONFIG";

/// Config file used when `CIPHERS_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "ciphers.toml";

/// Identifies the JSON demonstration export layout
pub const EXPORT_FORMAT: &str = "classical-ciphers-demo-v1";
