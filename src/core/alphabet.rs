//! Small alphabet helpers shared by the substitution ciphers
//!
//! Only ASCII letters take part in a shift. Anything else, accented
//! letters included, is left where it is.

use crate::consts::ALPHABET_LEN;

/// `b'A'` or `b'a'` for ASCII letters, `None` for everything else
#[inline]
pub fn case_base(c: char) -> Option<u8> {
    if c.is_ascii_uppercase() {
        Some(b'A')
    } else if c.is_ascii_lowercase() {
        Some(b'a')
    } else {
        None
    }
}

/// Reduce any integer shift to `0..26`
#[inline]
pub fn normalize_shift(shift: i64) -> u8 {
    // rem_euclid keeps negative shifts in range
    shift.rem_euclid(i64::from(ALPHABET_LEN)) as u8
}

/// Rotate an ASCII letter forward by `shift` (already in `0..26`), keeping case.
/// Non-letters come back unchanged.
#[inline]
pub fn shift_letter(c: char, shift: u8) -> char {
    match case_base(c) {
        Some(base) => {
            let offset = (c as u8 - base + shift) % ALPHABET_LEN;
            char::from(base + offset)
        }
        None => c,
    }
}

/// Letters that count towards keys and key alignment
#[inline]
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// A usable keyword: non-empty and letters only
pub fn is_alphabetic_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(is_letter)
}
