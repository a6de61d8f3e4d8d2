// File:    format.rs
// Author:  apezoo
// Date:    2025-07-21
//
// Description: Display helpers for grouping ciphertext and stripping Playfair fillers.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Display helpers for cipher output.
//!
//! None of this is part of the cipher contract; front-ends use it to make
//! results easier to read.

use crate::playfair::{ALTERNATE_FILLER, FILLER};

/// Conventional group width for classical ciphertext.
pub const DEFAULT_GROUP_SIZE: usize = 5;

/// Splits `text` into blocks of `size` characters separated by single spaces.
///
/// A `size` of zero returns the text unchanged.
#[must_use]
pub fn group_letters(text: &str, size: usize) -> String {
    if size == 0 {
        return text.to_owned();
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(size)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Removes Playfair filler letters from decrypted text.
///
/// Every [`FILLER`] is dropped, except that an `X` directly followed by
/// [`ALTERNATE_FILLER`] is kept and the `Q` after it is dropped instead.
/// Genuine `X` letters and genuine `XQ` sequences are lost the same way;
/// this is a readability aid only.
#[must_use]
pub fn strip_filler(text: &str) -> String {
    let mut chars = text.chars().peekable();
    let mut out = String::with_capacity(text.len());
    while let Some(c) = chars.next() {
        if c != FILLER || chars.next_if_eq(&ALTERNATE_FILLER).is_some() {
            out.push(c);
        }
    }
    out
}
