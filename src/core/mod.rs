// src/core/mod.rs
//! The four cipher transforms — pure functions, no I/O, no shared state
pub mod alphabet;
pub mod caesar;
pub mod columnar;
pub mod rail_fence;
pub mod vigenere;

pub use alphabet::*;
pub use columnar::{column_order, Padded};
pub use vigenere::prepare_key;

pub type Result<T> = std::result::Result<T, crate::error::CipherError>;
