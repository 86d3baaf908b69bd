//! Rail Fence cipher — zig-zag transposition across N rails
//!
//! Every character takes part, case and punctuation included. One or zero
//! rails is an identity transform in both directions.

use tracing::debug;

/// Rail index for each of `len` positions: 0, 1, .., rails-1, rails-2, .., 0, 1, ..
fn zigzag(len: usize, rails: usize) -> impl Iterator<Item = usize> {
    let period = 2 * (rails - 1);
    (0..len).map(move |i| {
        let step = i % period;
        if step < rails {
            step
        } else {
            period - step
        }
    })
}

/// Rails the zig-zag can reach for `len` characters. Beyond that the
/// pattern never bounces, so the extra rails would stay empty.
fn reachable_rails(rails: usize, len: usize) -> usize {
    rails.min(len.max(2))
}

/// Write `plaintext` along the zig-zag and read the rails top to bottom
pub fn encrypt(plaintext: &str, rails: usize) -> String {
    if rails <= 1 {
        return plaintext.to_owned();
    }
    let rails = reachable_rails(rails, plaintext.chars().count());
    debug!(rails, len = plaintext.len(), "rail fence encrypt");

    let mut fence = vec![String::new(); rails];
    for (c, rail) in plaintext.chars().zip(zigzag(usize::MAX, rails)) {
        fence[rail].push(c);
    }
    fence.concat()
}

/// Inverse of [`encrypt`]
pub fn decrypt(ciphertext: &str, rails: usize) -> String {
    if rails <= 1 {
        return ciphertext.to_owned();
    }
    let chars: Vec<char> = ciphertext.chars().collect();
    let rails = reachable_rails(rails, chars.len());
    debug!(rails, len = chars.len(), "rail fence decrypt");

    let pattern: Vec<usize> = zigzag(chars.len(), rails).collect();

    // Rails were concatenated in order, so each starts where the previous ended
    let mut cursor = vec![0usize; rails];
    for &rail in &pattern {
        cursor[rail] += 1;
    }
    let mut start = 0;
    for slot in cursor.iter_mut() {
        let len = *slot;
        *slot = start;
        start += len;
    }

    pattern
        .into_iter()
        .map(|rail| {
            let c = chars[cursor[rail]];
            cursor[rail] += 1;
            c
        })
        .collect()
}

/// Draw the zig-zag placement, one line per rail, blanks for unused cells
pub fn visualize(text: &str, rails: usize) -> String {
    if rails <= 1 {
        return text.to_owned();
    }

    let chars: Vec<char> = text.chars().collect();
    let rails = reachable_rails(rails, chars.len());
    let mut grid = vec![vec![' '; chars.len()]; rails];
    for (col, rail) in zigzag(chars.len(), rails).enumerate() {
        grid[rail][col] = chars[col];
    }

    let rendered = grid
        .iter()
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n");
    rendered.trim_end().to_owned()
}
