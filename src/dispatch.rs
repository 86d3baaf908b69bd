// src/dispatch.rs
//! Request routing — validates user-supplied parameters and hands the text
//! to one of the four cipher modules.
//!
//! The cipher modules themselves accept any shift, any rail count and any
//! key; the checks here are the ones an interactive front end wants.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::consts::{MAX_SHIFT, MIN_RAILS};
use crate::core::{caesar, columnar, is_alphabetic_key, rail_fence, vigenere, Result};
use crate::enums::{CipherKind, Operation, PaddingMode};
use crate::error::CipherError;

/// One unit of work: cipher, direction, text and the raw parameter the user typed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub cipher: CipherKind,
    pub operation: Operation,
    pub text: String,
    /// Shift, keyword or rail count depending on `cipher`
    pub param: String,
}

impl Request {
    pub fn new(
        cipher: CipherKind,
        operation: Operation,
        text: impl Into<String>,
        param: impl Into<String>,
    ) -> Self {
        Self {
            cipher,
            operation,
            text: text.into(),
            param: param.into(),
        }
    }
}

fn parse_int(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| CipherError::InvalidNumber {
            input: input.to_owned(),
        })
}

/// Caesar shift in `0..=25`
pub fn parse_shift(input: &str) -> Result<i64> {
    let shift = parse_int(input)?;
    if (0..=MAX_SHIFT).contains(&shift) {
        Ok(shift)
    } else {
        Err(CipherError::InvalidShift(shift))
    }
}

/// Rail count of at least 2
pub fn parse_rails(input: &str) -> Result<usize> {
    let rails = parse_int(input)?;
    if rails < MIN_RAILS {
        return Err(CipherError::InvalidRails(rails));
    }
    usize::try_from(rails).map_err(|_| CipherError::InvalidRails(rails))
}

/// Trimmed keyword, non-empty and letters only
pub fn validate_key(input: &str) -> Result<&str> {
    let key = input.trim();
    if is_alphabetic_key(key) {
        Ok(key)
    } else {
        Err(CipherError::invalid_key(key))
    }
}

/// Split `<ciphertext>:<padding>` as produced in [`PaddingMode::Exact`]
pub fn split_padded(input: &str) -> Result<(&str, usize)> {
    input
        .rsplit_once(':')
        .and_then(|(text, padding)| Some((text, padding.trim().parse::<usize>().ok()?)))
        .ok_or_else(|| CipherError::InvalidPadding {
            input: input.to_owned(),
        })
}

/// Validate the request's parameter and run it
#[instrument(level = "debug", skip_all, fields(cipher = %request.cipher, op = ?request.operation))]
pub fn run(request: &Request, padding: PaddingMode) -> Result<String> {
    let text = request.text.as_str();
    let unsupported = || CipherError::Unsupported {
        cipher: request.cipher,
        operation: request.operation,
    };

    let out = match request.cipher {
        CipherKind::Caesar => {
            let shift = parse_shift(&request.param)?;
            match request.operation {
                Operation::Encrypt => caesar::encrypt(text, shift),
                Operation::Decrypt => caesar::decrypt(text, shift),
                Operation::Visualize => return Err(unsupported()),
            }
        }
        CipherKind::Vigenere => {
            let key = validate_key(&request.param)?;
            match request.operation {
                Operation::Encrypt => vigenere::encrypt(text, key)?,
                Operation::Decrypt => vigenere::decrypt(text, key)?,
                Operation::Visualize => return Err(unsupported()),
            }
        }
        CipherKind::RailFence => {
            let rails = parse_rails(&request.param)?;
            match request.operation {
                Operation::Encrypt => rail_fence::encrypt(text, rails),
                Operation::Decrypt => rail_fence::decrypt(text, rails),
                Operation::Visualize => rail_fence::visualize(text, rails),
            }
        }
        CipherKind::Columnar => {
            let key = validate_key(&request.param)?;
            match (request.operation, padding) {
                (Operation::Encrypt, PaddingMode::Trim) => columnar::encrypt(text, key),
                (Operation::Encrypt, PaddingMode::Exact) => {
                    let padded = columnar::encrypt_padded(text, key);
                    format!("{}:{}", padded.ciphertext, padded.padding)
                }
                (Operation::Decrypt, PaddingMode::Trim) => columnar::decrypt(text, key),
                (Operation::Decrypt, PaddingMode::Exact) => {
                    let (ciphertext, count) = split_padded(text)?;
                    columnar::decrypt_padded(ciphertext, key, count)
                }
                (Operation::Visualize, _) => columnar::visualize(text, key),
            }
        }
    };

    debug!(len = out.len(), "request complete");
    Ok(out)
}

/// Draw the Rail Fence or Columnar grid for `text`
pub fn visualize(cipher: CipherKind, text: &str, param: &str) -> Result<String> {
    run(
        &Request::new(cipher, Operation::Visualize, text, param),
        PaddingMode::default(),
    )
}
