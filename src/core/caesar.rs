//! Caesar cipher — fixed-shift substitution
//!
//! Pure text transforms, no validation: any `i64` shift is accepted and
//! reduced mod 26. Range checks live in [`crate::dispatch`].

use tracing::debug;

use super::alphabet::{normalize_shift, shift_letter};
use crate::consts::ALPHABET_LEN;

/// Shift every ASCII letter forward by `shift`, preserving case and
/// leaving all other characters in place.
pub fn encrypt(plaintext: &str, shift: i64) -> String {
    let shift = normalize_shift(shift);
    debug!(shift, len = plaintext.len(), "caesar encrypt");
    plaintext.chars().map(|c| shift_letter(c, shift)).collect()
}

/// Inverse of [`encrypt`]
pub fn decrypt(ciphertext: &str, shift: i64) -> String {
    // i64::MIN has no negation
    encrypt(ciphertext, -(shift % i64::from(ALPHABET_LEN)))
}
