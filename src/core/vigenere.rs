//! Vigenère cipher — polyalphabetic substitution keyed by a repeating keyword
//!
//! The key advances only on letters: spaces, digits and punctuation are
//! copied through and do not consume a key letter.

use tracing::debug;

use super::alphabet::{is_alphabetic_key, is_letter, shift_letter};
use super::Result;
use crate::consts::ALPHABET_LEN;
use crate::error::CipherError;

/// Uppercase `key` and cycle it so there is exactly one key letter per
/// letter of `text`. A key longer than the text is truncated.
pub fn prepare_key(text: &str, key: &str) -> String {
    let key = key.to_ascii_uppercase();
    if key.is_empty() {
        return String::new();
    }
    let letters = text.chars().filter(|&c| is_letter(c)).count();
    key.chars().cycle().take(letters).collect()
}

/// Encrypt with an alphabetic keyword, preserving case and non-letters
pub fn encrypt(plaintext: &str, key: &str) -> Result<String> {
    transform(plaintext, key, Direction::Forward)
}

/// Inverse of [`encrypt`]
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
    transform(ciphertext, key, Direction::Backward)
}

#[derive(Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

fn transform(text: &str, key: &str, direction: Direction) -> Result<String> {
    if !is_alphabetic_key(key) {
        return Err(CipherError::invalid_key(key));
    }

    let extended = prepare_key(text, key);
    debug!(key_len = key.len(), letters = extended.len(), "vigenere");

    let mut key_letters = extended.bytes();
    let out = text
        .chars()
        .map(|c| {
            if !is_letter(c) {
                return c;
            }
            // one key letter was prepared per text letter
            let shift = key_letters.next().map_or(0, |k| k - b'A');
            let shift = match direction {
                Direction::Forward => shift,
                Direction::Backward => (ALPHABET_LEN - shift) % ALPHABET_LEN,
            };
            shift_letter(c, shift)
        })
        .collect();
    Ok(out)
}
