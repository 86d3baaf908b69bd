// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

use crate::enums::{CipherKind, Operation};

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("Key must be non-empty and contain only alphabetic characters: {key:?}")]
    InvalidKey { key: String },

    #[error("Shift must be between 0 and 25, got {0}")]
    InvalidShift(i64),

    #[error("Number of rails must be at least 2, got {0}")]
    InvalidRails(i64),

    #[error("Invalid number: {input:?}")]
    InvalidNumber { input: String },

    #[error("Expected <ciphertext>:<padding>, got {input:?}")]
    InvalidPadding { input: String },

    #[error("{cipher} does not support {operation}")]
    Unsupported {
        cipher: CipherKind,
        operation: Operation,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CipherError {
    pub(crate) fn invalid_key(key: &str) -> Self {
        CipherError::InvalidKey {
            key: key.to_owned(),
        }
    }
}
