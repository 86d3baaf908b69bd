use classical_ciphers::caesar::{decrypt, encrypt};
use proptest::prelude::*;

use crate::common;

#[test]
fn test_hello_world_shift_three() {
    common::setup();
    assert_eq!(encrypt("Hello World", 3), "Khoor Zruog");
    assert_eq!(decrypt("Khoor Zruog", 3), "Hello World");
}

#[test]
fn test_punctuation_and_digits_stay_put() {
    assert_eq!(encrypt("Zebra-42, yes!", 1), "Afcsb-42, zft!");
}

#[test]
fn test_negative_shift_is_left_rotation() {
    assert_eq!(encrypt("abc", -1), "zab");
    assert_eq!(encrypt("abc", -1), encrypt("abc", 25));
}

#[test]
fn test_non_ascii_letters_pass_through() {
    assert_eq!(encrypt("Café Ω", 2), "Eché Ω");
}

proptest! {
    #[test]
    fn prop_decrypt_inverts_encrypt(text in "\\PC*", shift in -100i64..=100) {
        prop_assert_eq!(decrypt(&encrypt(&text, shift), shift), text);
    }

    #[test]
    fn prop_shift_is_periodic(text in "[a-zA-Z ]{0,32}", shift in -100i64..=100) {
        prop_assert_eq!(encrypt(&text, shift), encrypt(&text, shift + 26));
    }

    #[test]
    fn prop_non_letters_and_case_preserved(text in "\\PC{0,64}", shift in 0i64..26) {
        let out = encrypt(&text, shift);
        prop_assert_eq!(out.chars().count(), text.chars().count());
        for (a, b) in text.chars().zip(out.chars()) {
            if a.is_ascii_alphabetic() {
                prop_assert_eq!(a.is_ascii_uppercase(), b.is_ascii_uppercase());
            } else {
                prop_assert_eq!(a, b);
            }
        }
    }
}
