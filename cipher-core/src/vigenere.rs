// File:    vigenere.rs
// Author:  apezoo
// Date:    2025-07-21
//
// Description: The Vigenère running-key cipher.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The Vigenère cipher.
//!
//! Each plaintext letter is shifted by the alphabet position of the key
//! letter at the same index, with the key repeated as often as needed.

use log::trace;

use crate::error::{CipherError, KeyError};
use crate::text::{self, ALPHABET_LEN};

#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// Encrypts `plaintext` with a repeating alphabetic `key`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if `key` is empty or contains
/// anything other than ASCII letters.
pub fn encrypt(plaintext: &str, key: &str) -> Result<String, CipherError> {
    apply(plaintext, key, Direction::Encrypt)
}

/// Decrypts `ciphertext` produced by [`encrypt`] with the same `key`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if `key` is empty or contains
/// anything other than ASCII letters.
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String, CipherError> {
    apply(ciphertext, key, Direction::Decrypt)
}

fn apply(input: &str, key: &str, direction: Direction) -> Result<String, CipherError> {
    // The raw key is validated before anything is normalized.
    let key = text::validate_alphabetic_key(key)?;
    let key = text::normalize(key.as_str(), false);
    if key.is_empty() {
        return Err(KeyError::Empty.into());
    }

    let shifts: Vec<u8> = key.letters().map(text::position).collect();
    trace!("vigenère key cycles over {} shifts", shifts.len());

    let output = text::normalize(input, false)
        .letters()
        .zip(shifts.iter().cycle())
        .map(|(letter, &shift)| match direction {
            Direction::Encrypt => text::rotate(letter, shift),
            Direction::Decrypt => text::rotate(letter, ALPHABET_LEN - shift),
        })
        .collect();
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_known_vector() {
        assert_eq!(
            encrypt("ATTACK AT DAWN", "LEMON").unwrap(),
            "LXFOPVEFRNHR"
        );
    }

    #[test]
    fn test_decrypt_known_vector() {
        assert_eq!(
            decrypt("LXFOPVEFRNHR", "LEMON").unwrap(),
            "ATTACKATDAWN"
        );
    }

    #[test]
    fn test_key_is_case_insensitive() {
        assert_eq!(
            encrypt("attack at dawn", "lemon").unwrap(),
            encrypt("ATTACK AT DAWN", "LEMON").unwrap()
        );
    }

    #[test]
    fn test_key_longer_than_text_is_truncated() {
        assert_eq!(encrypt("AB", "BCDEFG").unwrap(), "BD");
    }

    #[test]
    fn test_key_of_a_is_identity() {
        assert_eq!(encrypt("Hello", "A").unwrap(), "HELLO");
    }

    #[test]
    fn test_empty_key_is_rejected() {
        assert_eq!(
            encrypt("ATTACK", ""),
            Err(CipherError::InvalidKey(KeyError::Empty))
        );
        assert_eq!(
            decrypt("ATTACK", ""),
            Err(CipherError::InvalidKey(KeyError::Empty))
        );
    }

    #[test]
    fn test_non_alphabetic_key_is_rejected() {
        assert_eq!(
            encrypt("ATTACK", "abc123"),
            Err(CipherError::InvalidKey(KeyError::NonAlphabetic))
        );
        assert_eq!(
            decrypt("ATTACK", "LE MON"),
            Err(CipherError::InvalidKey(KeyError::NonAlphabetic))
        );
    }

    #[test]
    fn test_invalid_key_fails_even_for_empty_text() {
        assert!(encrypt("", "").is_err());
        assert_eq!(encrypt("", "KEY").unwrap(), "");
    }
}
