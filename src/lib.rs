// src/lib.rs
//! classical-ciphers — four pre-modern ciphers as pure text transforms
//!
//! Features:
//! - Caesar and Vigenère substitution
//! - Rail Fence and Columnar transposition, with grid visualizations
//! - Request dispatcher with the parameter checks an interactive front end needs
//! - Demonstration samples and JSON export

pub mod config;
pub mod consts;
pub mod core;
pub mod demo;
pub mod dispatch;
pub mod enums;
pub mod error;
pub mod export;

// Re-export everything users need at the crate root
pub use crate::core::{caesar, columnar, rail_fence, vigenere, Result};
pub use config::load as load_config;
pub use dispatch::{run, Request};
pub use enums::{CipherKind, Operation, PaddingMode};
pub use error::CipherError;
pub use export::export_demo_to_json;
