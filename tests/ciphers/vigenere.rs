use classical_ciphers::error::CipherError;
use classical_ciphers::vigenere::{decrypt, encrypt, prepare_key};
use proptest::prelude::*;

#[test]
fn test_attack_at_dawn_reference_vector() {
    assert_eq!(encrypt("ATTACKATDAWN", "LEMON").unwrap(), "LXFOPVEFRNHR");
    assert_eq!(decrypt("LXFOPVEFRNHR", "LEMON").unwrap(), "ATTACKATDAWN");
}

#[test]
fn test_spaces_do_not_consume_key_letters() {
    // H+K E+E L+Y L+K O+E | W+Y O+K R+E L+Y D+K
    assert_eq!(encrypt("HELLO WORLD", "KEY").unwrap(), "RIJVS UYVJN");
}

#[test]
fn test_case_follows_plaintext_not_key() {
    assert_eq!(encrypt("Hello", "key").unwrap(), "Rijvs");
}

#[test]
fn test_prepare_key_cycles_and_truncates() {
    assert_eq!(prepare_key("ab cd ef g", "xy"), "XYXYXYX");
    assert_eq!(prepare_key("a", "LONGKEY"), "L");
}

#[test]
fn test_invalid_keys_fail() {
    for key in ["", "two words", "abc1", "ké"] {
        let err = encrypt("text", key).unwrap_err();
        assert!(
            matches!(err, CipherError::InvalidKey { .. }),
            "key {key:?} gave {err:?}"
        );
    }
}

proptest! {
    #[test]
    fn prop_decrypt_inverts_encrypt(text in "\\PC*", key in "[a-zA-Z]{1,12}") {
        let enc = encrypt(&text, &key).unwrap();
        prop_assert_eq!(decrypt(&enc, &key).unwrap(), text);
    }

    #[test]
    fn prop_single_letter_key_is_caesar(text in "\\PC{0,64}", letter in 0u8..26) {
        let key = char::from(b'A' + letter).to_string();
        prop_assert_eq!(
            encrypt(&text, &key).unwrap(),
            classical_ciphers::caesar::encrypt(&text, i64::from(letter))
        );
    }

    #[test]
    fn prop_non_letters_preserved(text in "[a-z0-9 ,.!]{0,48}", key in "[A-Z]{1,6}") {
        let out = encrypt(&text, &key).unwrap();
        for (a, b) in text.chars().zip(out.chars()) {
            if !a.is_ascii_alphabetic() {
                prop_assert_eq!(a, b);
            } else {
                prop_assert!(b.is_ascii_lowercase());
            }
        }
    }
}
