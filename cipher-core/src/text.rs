// File:    text.rs
// Author:  apezoo
// Date:    2025-07-21
//
// Description: Text normalization and key validation shared by all ciphers.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Text normalization and alphabetic key validation.
//!
//! Every cipher in this crate works on the 26 uppercase Latin letters only.
//! Input text is reduced to that alphabet by [`normalize`], and keys are
//! checked by [`validate_alphabetic_key`] before they are used.

use std::fmt;

use crate::error::{CipherError, KeyError};

/// Number of letters in the Latin alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// Text reduced to uppercase ASCII letters, optionally with single spaces kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NormalizedText(String);

impl NormalizedText {
    /// Borrows the normalized text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the letters, skipping any preserved spaces.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars().filter(char::is_ascii_uppercase)
    }

    /// Number of characters, spaces included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when nothing survived normalization.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the wrapper and returns the inner string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<NormalizedText> for String {
    fn from(text: NormalizedText) -> Self {
        text.0
    }
}

/// A validated, uppercased key made only of ASCII letters. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AlphabeticKey(String);

impl AlphabeticKey {
    /// Validates `key` and stores it uppercased.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if the key is empty or contains
    /// anything other than ASCII letters. The key is not trimmed first.
    pub fn parse(key: &str) -> Result<Self, CipherError> {
        if key.is_empty() {
            return Err(KeyError::Empty.into());
        }
        if !key.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(KeyError::NonAlphabetic.into());
        }
        Ok(Self(key.to_ascii_uppercase()))
    }

    /// Borrows the uppercased key.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The alphabet position (0 for `A` to 25 for `Z`) of every key letter, in order.
    pub fn shifts(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.chars().map(position)
    }
}

impl fmt::Display for AlphabeticKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reduces arbitrary text to uppercase ASCII letters.
///
/// Letters are uppercased and kept. A literal space is kept as well when
/// `keep_spaces` is set. Everything else (digits, punctuation, tabs, newlines,
/// non-ASCII characters) is dropped. This never fails; the result may be empty.
#[must_use]
pub fn normalize(text: &str, keep_spaces: bool) -> NormalizedText {
    let normalized = text
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphabetic() {
                Some(c.to_ascii_uppercase())
            } else if keep_spaces && c == ' ' {
                Some(c)
            } else {
                None
            }
        })
        .collect();
    NormalizedText(normalized)
}

/// Checks that `key` is a non-empty run of ASCII letters and uppercases it.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] with [`KeyError::Empty`] or
/// [`KeyError::NonAlphabetic`] describing the problem.
pub fn validate_alphabetic_key(key: &str) -> Result<AlphabeticKey, CipherError> {
    AlphabeticKey::parse(key)
}

/// Alphabet position of an uppercase ASCII letter.
pub(crate) fn position(letter: char) -> u8 {
    debug_assert!(letter.is_ascii_uppercase());
    (letter as u8).wrapping_sub(b'A')
}

/// Uppercase letter for an alphabet position, taken modulo 26.
pub(crate) fn letter_at(pos: u8) -> char {
    char::from(b'A' + pos % ALPHABET_LEN)
}

/// Moves `letter` forward by `shift` places around the alphabet.
pub(crate) fn rotate(letter: char, shift: u8) -> char {
    letter_at(position(letter) + shift % ALPHABET_LEN)
}
