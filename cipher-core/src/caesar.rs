// File:    caesar.rs
// Author:  apezoo
// Date:    2025-07-21
//
// Description: The Caesar shift cipher.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The Caesar shift cipher.

use crate::text::{self, ALPHABET_LEN};

/// A shift amount reduced into `0..=25`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shift(u8);

impl Shift {
    /// Reduces any integer shift into `0..=25`; negative shifts count backwards.
    #[must_use]
    pub fn new(shift: i64) -> Self {
        let reduced = shift.rem_euclid(i64::from(ALPHABET_LEN));
        // rem_euclid keeps the value in 0..26
        Self(u8::try_from(reduced).unwrap_or_default())
    }

    /// The reduced shift value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// The shift that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self((ALPHABET_LEN - self.0) % ALPHABET_LEN)
    }
}

impl From<i64> for Shift {
    fn from(shift: i64) -> Self {
        Self::new(shift)
    }
}

/// Encrypts `plaintext` by moving every letter `shift` places forward.
///
/// The text is normalized first, so spaces, digits and punctuation vanish
/// from the output. Shifts outside `0..=25` (including negative ones) wrap.
#[must_use]
pub fn encrypt(plaintext: &str, shift: i64) -> String {
    apply(plaintext, Shift::new(shift))
}

/// Decrypts `ciphertext` produced by [`encrypt`] with the same `shift`.
#[must_use]
pub fn decrypt(ciphertext: &str, shift: i64) -> String {
    apply(ciphertext, Shift::new(shift).inverse())
}

fn apply(input: &str, shift: Shift) -> String {
    text::normalize(input, false)
        .letters()
        .map(|letter| text::rotate(letter, shift.value()))
        .collect()
}
