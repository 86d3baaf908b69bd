use classical_ciphers::columnar::{
    column_order, decrypt, decrypt_padded, encrypt, encrypt_padded, visualize,
};
use proptest::prelude::*;

#[test]
fn test_column_order_for_key() {
    assert_eq!(column_order("KEY"), vec![1, 0, 2]);
    assert_eq!(column_order("key"), vec![1, 0, 2]);
    assert_eq!(column_order(""), Vec::<usize>::new());
}

#[test]
fn test_hello_world_key() {
    let enc = encrypt("HELLO WORLD", "KEY");
    assert_eq!(enc, "EORXHLODLWLX");
    assert_eq!(decrypt(&enc, "KEY"), "HELLOWORLD");
}

#[test]
fn test_lowercase_input_is_uppercased() {
    assert_eq!(encrypt("hello world", "KEY"), encrypt("HELLO WORLD", "KEY"));
}

#[test]
fn test_padding_count_reported() {
    let padded = encrypt_padded("HELLO WORLD", "KEY");
    assert_eq!(padded.padding, 2);
    assert_eq!(padded.ciphertext.len(), 12);
}

#[test]
fn test_trailing_x_is_lost_by_default() {
    let enc = encrypt("RELAX", "KEY");
    assert_eq!(decrypt(&enc, "KEY"), "RELA");
}

#[test]
fn test_exact_padding_round_trips_trailing_x() {
    let padded = encrypt_padded("RELAX", "KEY");
    assert_eq!(padded.padding, 1);
    assert_eq!(
        decrypt_padded(&padded.ciphertext, "KEY", padded.padding),
        "RELAX"
    );
}

#[test]
fn test_only_spaces_are_stripped() {
    let enc = encrypt("A-B C!", "AB");
    assert_eq!(decrypt(&enc, "AB"), "A-BC!");
}

#[test]
fn test_visualize_layout() {
    let grid = visualize("HELLO WORLD", "KEY");
    let lines: Vec<&str> = grid.lines().collect();
    assert_eq!(lines[0], "Key:     K E Y");
    assert_eq!(lines[1], "Order:   2 1 3");
    assert_eq!(lines[2], "-".repeat(13));
    assert_eq!(&lines[3..], ["         H E L", "         L O W", "         O R L", "         D X X"]);
}

#[test]
fn test_visualize_empty_key_returns_text() {
    assert_eq!(visualize("abc", ""), "abc");
}

proptest! {
    #[test]
    fn prop_decrypt_recovers_stripped_uppercase(
        text in "[a-zA-Z ]{0,40}",
        key in "[a-zA-Z]{1,8}",
    ) {
        let expected = text.replace(' ', "").to_uppercase();
        prop_assume!(!expected.ends_with('X'));
        prop_assert_eq!(decrypt(&encrypt(&text, &key), &key), expected);
    }

    #[test]
    fn prop_exact_padding_always_round_trips(
        text in "[a-zA-Z ]{0,40}",
        key in "[a-zA-Z]{1,8}",
    ) {
        let padded = encrypt_padded(&text, &key);
        prop_assert_eq!(padded.ciphertext.chars().count() % key.len(), 0);
        prop_assert_eq!(
            decrypt_padded(&padded.ciphertext, &key, padded.padding),
            text.replace(' ', "").to_uppercase()
        );
    }

    #[test]
    fn prop_column_order_is_permutation(key in "[a-zA-Z]{0,12}") {
        let mut order = column_order(&key);
        order.sort_unstable();
        prop_assert_eq!(order, (0..key.len()).collect::<Vec<_>>());
    }
}
