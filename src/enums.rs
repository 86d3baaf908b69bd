// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for all #[derive(...)] enums that represent
//! user-visible choices: which cipher, which direction, which padding rule.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four supported ciphers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CipherKind {
    Caesar,
    Vigenere,
    RailFence,
    Columnar,
}

impl CipherKind {
    pub const ALL: [CipherKind; 4] = [
        CipherKind::Caesar,
        CipherKind::Vigenere,
        CipherKind::RailFence,
        CipherKind::Columnar,
    ];

    /// Only the transposition ciphers have a grid worth drawing
    pub fn can_visualize(self) -> bool {
        matches!(self, CipherKind::RailFence | CipherKind::Columnar)
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CipherKind::Caesar => "Caesar",
            CipherKind::Vigenere => "Vigenère",
            CipherKind::RailFence => "Rail Fence",
            CipherKind::Columnar => "Columnar",
        })
    }
}

impl FromStr for CipherKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "caesar" => Ok(CipherKind::Caesar),
            "vigenere" => Ok(CipherKind::Vigenere),
            "railfence" | "rail" => Ok(CipherKind::RailFence),
            "columnar" | "column" => Ok(CipherKind::Columnar),
            other => Err(format!(
                "unknown cipher {other:?} (expected caesar, vigenere, rail-fence or columnar)"
            )),
        }
    }
}

/// Direction of a transformation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Encrypt,
    Decrypt,
    Visualize,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Encrypt => "encryption",
            Operation::Decrypt => "decryption",
            Operation::Visualize => "visualization",
        })
    }
}

/// How columnar decryption removes grid padding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaddingMode {
    /// Strip every trailing `'X'` — lossy when the plaintext itself ends in `'X'`
    #[default]
    Trim,
    /// Carry the padding length alongside the ciphertext and strip exactly that
    Exact,
}
