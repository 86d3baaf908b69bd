// src/demo.rs
//! Canned demonstration samples for every cipher

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{caesar, columnar, rail_fence, vigenere, Result};
use crate::enums::CipherKind;

/// One worked example: input, parameter, and both directions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoSample {
    pub cipher: CipherKind,
    pub text: String,
    pub param: String,
    pub encrypted: String,
    pub decrypted: String,
    /// Rail fence pattern or columnar grid, when the cipher has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

const CAESAR: [(&str, i64); 2] = [("Hello World", 3), ("CRYPTOGRAPHY", 13)];
const VIGENERE: [(&str, &str); 2] = [("HELLO WORLD", "KEY"), ("Information Security", "CIPHER")];
const RAIL_FENCE: [(&str, usize); 2] = [("HELLO WORLD", 3), ("CRYPTOGRAPHY", 4)];
const COLUMNAR: [(&str, &str); 2] = [("HELLO WORLD", "KEY"), ("INFORMATION SECURITY", "CIPHER")];

/// Demonstration samples for one cipher
pub fn samples_for(cipher: CipherKind) -> Result<Vec<DemoSample>> {
    let samples = match cipher {
        CipherKind::Caesar => CAESAR
            .iter()
            .map(|&(text, shift)| {
                let encrypted = caesar::encrypt(text, shift);
                DemoSample {
                    cipher,
                    text: text.into(),
                    param: shift.to_string(),
                    decrypted: caesar::decrypt(&encrypted, shift),
                    encrypted,
                    pattern: None,
                }
            })
            .collect(),
        CipherKind::Vigenere => VIGENERE
            .iter()
            .map(|&(text, key)| -> Result<DemoSample> {
                let encrypted = vigenere::encrypt(text, key)?;
                Ok(DemoSample {
                    cipher,
                    text: text.into(),
                    param: key.into(),
                    decrypted: vigenere::decrypt(&encrypted, key)?,
                    encrypted,
                    pattern: None,
                })
            })
            .collect::<Result<Vec<_>>>()?,
        CipherKind::RailFence => RAIL_FENCE
            .iter()
            .map(|&(text, rails)| {
                let encrypted = rail_fence::encrypt(text, rails);
                DemoSample {
                    cipher,
                    text: text.into(),
                    param: rails.to_string(),
                    decrypted: rail_fence::decrypt(&encrypted, rails),
                    encrypted,
                    pattern: Some(rail_fence::visualize(text, rails)),
                }
            })
            .collect(),
        CipherKind::Columnar => COLUMNAR
            .iter()
            .map(|&(text, key)| {
                let encrypted = columnar::encrypt(text, key);
                DemoSample {
                    cipher,
                    text: text.into(),
                    param: key.into(),
                    decrypted: columnar::decrypt(&encrypted, key),
                    encrypted,
                    pattern: Some(columnar::visualize(text, key)),
                }
            })
            .collect(),
    };
    Ok(samples)
}

/// Every cipher's samples, in menu order
pub fn samples() -> Result<Vec<DemoSample>> {
    let mut all = Vec::new();
    for cipher in CipherKind::ALL {
        all.extend(samples_for(cipher)?);
    }
    Ok(all)
}

fn param_label(cipher: CipherKind) -> &'static str {
    match cipher {
        CipherKind::Caesar => "Shift:",
        CipherKind::RailFence => "Rails:",
        CipherKind::Vigenere | CipherKind::Columnar => "Key:",
    }
}

impl fmt::Display for DemoSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Original:  {}", self.text)?;
        writeln!(f, "{:<10} {}", param_label(self.cipher), self.param)?;
        writeln!(f, "Encrypted: {}", self.encrypted)?;
        writeln!(f, "Decrypted: {}", self.decrypted)?;
        if let Some(pattern) = &self.pattern {
            writeln!(f, "Pattern:\n{}", pattern.trim_end_matches('\n'))?;
        }
        Ok(())
    }
}

/// Console report, one block per sample
pub fn render(samples: &[DemoSample]) -> String {
    let mut out = String::new();
    let mut current = None;
    for sample in samples {
        if current != Some(sample.cipher) {
            current = Some(sample.cipher);
            let title = sample.cipher.to_string().to_uppercase();
            out.push_str(&format!("\n{title} CIPHER DEMONSTRATION\n{}\n", "-".repeat(40)));
        }
        out.push_str(&sample.to_string());
        out.push('\n');
    }
    out
}
