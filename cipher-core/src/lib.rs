// File:    lib.rs
// Author:  apezoo
// Date:    2025-07-21
//
// Description: The main library crate for cipher-core, exposing the Caesar, Vigenère and Playfair ciphers.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Classical Cipher Library
//!
//! This library implements three classical ciphers as pure functions over
//! text: the Caesar shift, the Vigenère running key and the Playfair digraph
//! cipher. None of them is secure; they exist for teaching and puzzles.
//!
//! All input is normalized to the uppercase letters `A`-`Z` before use, so
//! output never contains spaces, digits or punctuation.
//!
//! ```
//! use cipher_core::{caesar_encrypt, playfair_encrypt, vigenere_encrypt};
//!
//! assert_eq!(caesar_encrypt("HELLO WORLD", 3), "KHOORZRUOG");
//! assert_eq!(vigenere_encrypt("ATTACK AT DAWN", "LEMON").unwrap(), "LXFOPVEFRNHR");
//! assert_eq!(
//!     playfair_encrypt("HIDETHEGOLDINTHETREESTUMP", "PLAYFAIREXAMPLE").unwrap(),
//!     "BMODZBXDNABEKUDMUIXMMOUVIF"
//! );
//! ```

/// The Caesar shift cipher.
pub mod caesar;
/// Error types returned by keyed ciphers.
pub mod error;
/// Presentation helpers such as letter grouping.
pub mod format;
/// The Playfair digraph cipher and its key matrix.
pub mod playfair;
/// Text normalization and key validation.
pub mod text;
/// The Vigenère cipher.
pub mod vigenere;

pub use caesar::{decrypt as caesar_decrypt, encrypt as caesar_encrypt};
pub use error::{CipherError, KeyError};
pub use playfair::{
    Digraph, PlayfairMatrix, build_matrix, decrypt as playfair_decrypt,
    encrypt as playfair_encrypt, prepare_text,
};
pub use text::{AlphabeticKey, NormalizedText, normalize, validate_alphabetic_key};
pub use vigenere::{decrypt as vigenere_decrypt, encrypt as vigenere_encrypt};
