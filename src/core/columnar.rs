//! Columnar transposition — grid read out in keyword order
//!
//! Encryption drops spaces, uppercases, and pads the last row with `'X'`.
//! The default decryption strips every trailing `'X'`, which also eats
//! genuine trailing `'X'`s of the plaintext. [`encrypt_padded`] and
//! [`decrypt_padded`] carry the exact padding length instead.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::PADDING_CHAR;

/// Ciphertext plus the number of padding characters appended before transposition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Padded {
    pub ciphertext: String,
    pub padding: usize,
}

/// Source column read at each step: key positions sorted by uppercase
/// letter, ties kept in left-to-right order.
pub fn column_order(key: &str) -> Vec<usize> {
    let letters: Vec<char> = key.chars().collect();
    let mut order: Vec<usize> = (0..letters.len()).collect();
    // stable sort keeps duplicate letters in key order
    order.sort_by(|&a, &b| cmp_upper(letters[a], letters[b]));
    order
}

fn cmp_upper(a: char, b: char) -> Ordering {
    a.to_uppercase().cmp(b.to_uppercase())
}

/// Spaces removed, uppercased, then padded to whole rows
fn padded_grid_text(plaintext: &str, width: usize) -> (Vec<char>, usize) {
    let mut cells: Vec<char> = plaintext
        .chars()
        .filter(|&c| c != ' ')
        .flat_map(char::to_uppercase)
        .collect();
    let padding = (width - cells.len() % width) % width;
    cells.extend(std::iter::repeat(PADDING_CHAR).take(padding));
    (cells, padding)
}

/// Transpose `plaintext` under `key`. An empty key returns the text as is.
pub fn encrypt(plaintext: &str, key: &str) -> String {
    encrypt_padded(plaintext, key).ciphertext
}

/// Like [`encrypt`] but also reports how many `'X'`s were appended
pub fn encrypt_padded(plaintext: &str, key: &str) -> Padded {
    let width = key.chars().count();
    if width == 0 {
        return Padded {
            ciphertext: plaintext.to_owned(),
            padding: 0,
        };
    }

    let (cells, padding) = padded_grid_text(plaintext, width);
    let rows = cells.len() / width;
    debug!(width, rows, padding, "columnar encrypt");

    let ciphertext = column_order(key)
        .into_iter()
        .flat_map(|col| (0..rows).map(move |row| row * width + col))
        .map(|idx| cells[idx])
        .collect();
    Padded {
        ciphertext,
        padding,
    }
}

/// Undo the transposition into the padded, row-major text
fn untranspose(ciphertext: &str, key: &str) -> String {
    let width = key.chars().count();
    let chars: Vec<char> = ciphertext.chars().collect();
    // a trailing partial row is ignored
    let rows = chars.len() / width;
    debug!(width, rows, "columnar decrypt");

    let mut grid = vec![PADDING_CHAR; rows * width];
    let mut source = chars.into_iter();
    for col in column_order(key) {
        for row in 0..rows {
            if let Some(c) = source.next() {
                grid[row * width + col] = c;
            }
        }
    }
    grid.into_iter().collect()
}

/// Inverse of [`encrypt`], stripping every trailing `'X'`
pub fn decrypt(ciphertext: &str, key: &str) -> String {
    if key.is_empty() {
        return ciphertext.to_owned();
    }
    untranspose(ciphertext, key)
        .trim_end_matches(PADDING_CHAR)
        .to_owned()
}

/// Inverse of [`encrypt_padded`], stripping exactly `padding` characters
pub fn decrypt_padded(ciphertext: &str, key: &str, padding: usize) -> String {
    if key.is_empty() {
        return ciphertext.to_owned();
    }
    let mut text: Vec<char> = untranspose(ciphertext, key).chars().collect();
    text.truncate(text.len().saturating_sub(padding));
    text.into_iter().collect()
}

fn spaced<T: ToString>(cells: impl IntoIterator<Item = T>) -> String {
    cells
        .into_iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Key letters, 1-indexed column order, and the encryption grid
pub fn visualize(text: &str, key: &str) -> String {
    let width = key.chars().count();
    if width == 0 {
        return text.to_owned();
    }

    let (cells, _) = padded_grid_text(text, width);
    let mut out = format!("Key:     {}\n", spaced(key.to_uppercase().chars()));
    out.push_str(&format!(
        "Order:   {}\n",
        spaced(column_order(key).into_iter().map(|i| i + 1))
    ));
    out.push_str(&"-".repeat(width * 2 + 7));
    out.push('\n');
    for row in cells.chunks(width) {
        out.push_str("         ");
        out.push_str(&spaced(row));
        out.push('\n');
    }
    out
}
