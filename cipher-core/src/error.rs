// File:    error.rs
// Author:  apezoo
// Date:    2025-07-21
//
// Description: Error types shared by every cipher in the library.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Error types returned by the cipher operations.

use thiserror::Error;

/// Why a key was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyError {
    /// The key has no characters at all.
    #[error("Key cannot be empty")]
    Empty,
    /// The key contains at least one character that is not an ASCII letter.
    #[error("Key must contain only alphabetic characters")]
    NonAlphabetic,
}

/// Errors produced by the cipher library.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// A keyed cipher received a key that is empty or not purely alphabetic.
    #[error("{0}")]
    InvalidKey(KeyError),

    /// A letter was looked up in a Playfair matrix that does not hold it.
    ///
    /// Normalized input never reaches this; it marks a broken matrix invariant.
    #[error("Symbol '{0}' is not present in the Playfair matrix")]
    SymbolNotFound(char),
}

impl CipherError {
    /// Returns `true` for errors caused by a bad user-supplied key.
    #[must_use]
    pub const fn is_invalid_key(&self) -> bool {
        matches!(self, Self::InvalidKey(_))
    }
}

impl From<KeyError> for CipherError {
    fn from(reason: KeyError) -> Self {
        Self::InvalidKey(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_empty_key() {
        let err = CipherError::InvalidKey(KeyError::Empty);
        assert_eq!(err.to_string(), "Key cannot be empty");
    }

    #[test]
    fn test_display_non_alphabetic_key() {
        let err = CipherError::from(KeyError::NonAlphabetic);
        assert_eq!(
            err.to_string(),
            "Key must contain only alphabetic characters"
        );
    }

    #[test]
    fn test_key_error_messages() {
        assert_eq!(KeyError::Empty.to_string(), "Key cannot be empty");
        assert_eq!(
            KeyError::NonAlphabetic.to_string(),
            "Key must contain only alphabetic characters"
        );
        let err: &dyn std::error::Error = &KeyError::Empty;
        assert!(err.source().is_none());
    }

    #[test]
    fn test_display_symbol_not_found() {
        let err = CipherError::SymbolNotFound('J');
        assert_eq!(
            err.to_string(),
            "Symbol 'J' is not present in the Playfair matrix"
        );
    }

    #[test]
    fn test_both_key_reasons_share_one_kind() {
        assert!(CipherError::from(KeyError::Empty).is_invalid_key());
        assert!(CipherError::from(KeyError::NonAlphabetic).is_invalid_key());
        assert!(!CipherError::SymbolNotFound('?').is_invalid_key());
    }
}
