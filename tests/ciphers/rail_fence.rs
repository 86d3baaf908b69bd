use classical_ciphers::rail_fence::{decrypt, encrypt, visualize};
use proptest::prelude::*;

#[test]
fn test_helloworld_three_rails() {
    assert_eq!(encrypt("HELLOWORLD", 3), "HOLELWRDLO");
    assert_eq!(decrypt("HOLELWRDLO", 3), "HELLOWORLD");
}

#[test]
fn test_two_rails_alternate() {
    assert_eq!(encrypt("abcdef", 2), "acebdf");
    assert_eq!(decrypt("acebdf", 2), "abcdef");
}

#[test]
fn test_cryptography_four_rails() {
    let enc = encrypt("CRYPTOGRAPHY", 4);
    assert_eq!(enc, "CGRORYYTAHPP");
    assert_eq!(decrypt(&enc, 4), "CRYPTOGRAPHY");
}

#[test]
fn test_trivial_rail_counts_are_identity() {
    for rails in [0, 1] {
        assert_eq!(encrypt("Hello, World", rails), "Hello, World");
        assert_eq!(decrypt("Hello, World", rails), "Hello, World");
    }
}

#[test]
fn test_empty_text() {
    assert_eq!(encrypt("", 3), "");
    assert_eq!(decrypt("", 3), "");
    assert_eq!(visualize("", 3), "");
}

#[test]
fn test_visualize_trims_trailing_whitespace_only_at_end() {
    let pattern = visualize("CRYPTOGRAPHY", 3);
    let lines: Vec<&str> = pattern.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "C   T   A   ");
    assert_eq!(lines[1], " R P O R P Y");
    assert_eq!(lines[2], "  Y   G   H");
}

#[test]
fn test_huge_rail_counts_do_not_allocate_per_rail() {
    for rails in [usize::MAX, usize::MAX / 2 + 1, 1 << 58, 100_000_000_000] {
        assert_eq!(encrypt("HELLO", rails), "HELLO");
        assert_eq!(decrypt("HELLO", rails), "HELLO");
        assert_eq!(visualize("HELLO", rails), "H    \n E   \n  L  \n   L \n    O");
    }
}

#[test]
fn test_more_rails_than_chars_matches_exact_fit() {
    assert_eq!(encrypt("abcd", 9), encrypt("abcd", 4));
    assert_eq!(decrypt("abcd", 9), "abcd");
    assert_eq!(visualize("abcd", 9), visualize("abcd", 4));
    assert_eq!(encrypt("a", usize::MAX), "a");
    assert_eq!(visualize("", usize::MAX), "");
}

proptest! {
    #[test]
    fn prop_surplus_rails_change_nothing(text in "\\PC{0,20}", extra in 0usize..50) {
        let len = text.chars().count().max(2);
        prop_assert_eq!(encrypt(&text, len + extra), encrypt(&text, len));
        prop_assert_eq!(decrypt(&text, len + extra), decrypt(&text, len));
        prop_assert_eq!(visualize(&text, len + extra), visualize(&text, len));
    }

    #[test]
    fn prop_decrypt_inverts_encrypt(text in "\\PC*", rails in 2usize..=10) {
        prop_assert_eq!(decrypt(&encrypt(&text, rails), rails), text);
    }

    #[test]
    fn prop_encrypt_is_a_permutation(text in "[a-zA-Z0-9 ]{0,40}", rails in 2usize..=10) {
        let mut before: Vec<char> = text.chars().collect();
        let mut after: Vec<char> = encrypt(&text, rails).chars().collect();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }
}
