//! Export utilities for classical-ciphers
//!
//! Currently one format: the demonstration samples as JSON.

pub use json::{demo_document, export_demo_to_json};

pub mod json;
