// File:    playfair.rs
// Author:  apezoo
// Date:    2025-07-21
//
// Description: The Playfair digraph cipher, its 5x5 key matrix and digraph preparation.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The Playfair cipher.
//!
//! Letters are enciphered two at a time using a 5×5 matrix built from the
//! key. `I` and `J` share a cell, so `J` never appears in the matrix or in
//! any output.

use std::fmt;

use log::{debug, trace};
use serde::Serialize;

use crate::error::CipherError;
use crate::text::{self, ALPHABET_LEN};

/// Side length of the key matrix.
pub const MATRIX_SIZE: usize = 5;

/// Letter inserted between doubled letters and used to pad odd-length text.
pub const FILLER: char = 'X';

/// Filler used instead of [`FILLER`] when the letter being separated is itself `X`.
pub const ALTERNATE_FILLER: char = 'Q';

/// A cell of the key matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    /// Row index, `0..5`.
    pub row: usize,
    /// Column index, `0..5`.
    pub col: usize,
}

/// Two letters enciphered together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Digraph {
    /// The left letter.
    pub first: char,
    /// The right letter.
    pub second: char,
}

impl Digraph {
    /// Returns `true` when both letters are the same.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.first == self.second
    }
}

impl fmt::Display for Digraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first, self.second)
    }
}

/// The 5×5 Playfair key matrix.
///
/// Holds the 25 letters `A`..`Z` without `J`, each exactly once, keyword
/// letters first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PlayfairMatrix {
    grid: [[char; MATRIX_SIZE]; MATRIX_SIZE],
}

impl PlayfairMatrix {
    /// The matrix rows, top to bottom.
    #[must_use]
    pub const fn rows(&self) -> &[[char; MATRIX_SIZE]; MATRIX_SIZE] {
        &self.grid
    }

    /// Every symbol in row-major order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.grid.iter().flatten().copied()
    }

    /// The letter stored at `pos`.
    #[must_use]
    pub const fn at(&self, pos: Position) -> char {
        self.grid[pos.row][pos.col]
    }

    /// Finds the cell holding `letter`. `J` is looked up as `I`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::SymbolNotFound`] when `letter` is not one of the
    /// 25 placed symbols, which only happens for input that skipped normalization.
    pub fn locate(&self, letter: char) -> Result<Position, CipherError> {
        let letter = merge_j(letter);
        self.grid
            .iter()
            .enumerate()
            .find_map(|(row, cells)| {
                cells
                    .iter()
                    .position(|&cell| cell == letter)
                    .map(|col| Position { row, col })
            })
            .ok_or(CipherError::SymbolNotFound(letter))
    }

    /// Enciphers (`step == 1`) or deciphers (`step == MATRIX_SIZE - 1`) one digraph.
    fn substitute(&self, pair: Digraph, step: usize) -> Result<Digraph, CipherError> {
        let a = self.locate(pair.first)?;
        let b = self.locate(pair.second)?;
        let (a, b) = if a.row == b.row {
            (
                Position { row: a.row, col: (a.col + step) % MATRIX_SIZE },
                Position { row: b.row, col: (b.col + step) % MATRIX_SIZE },
            )
        } else if a.col == b.col {
            (
                Position { row: (a.row + step) % MATRIX_SIZE, col: a.col },
                Position { row: (b.row + step) % MATRIX_SIZE, col: b.col },
            )
        } else {
            // Rectangle: swap columns. Its own inverse.
            (
                Position { row: a.row, col: b.col },
                Position { row: b.row, col: a.col },
            )
        };
        Ok(Digraph {
            first: self.at(a),
            second: self.at(b),
        })
    }
}

impl fmt::Display for PlayfairMatrix {
    /// Renders the grid with column indices on top and row indices on the left.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for col in 0..MATRIX_SIZE {
            write!(f, " {col}")?;
        }
        for (row, cells) in self.grid.iter().enumerate() {
            write!(f, "\n{row}")?;
            for cell in cells {
                write!(f, " {cell}")?;
            }
        }
        Ok(())
    }
}

const fn merge_j(letter: char) -> char {
    if letter == 'J' { 'I' } else { letter }
}

const fn filler_for(letter: char) -> char {
    if letter == FILLER { ALTERNATE_FILLER } else { FILLER }
}

/// Builds the key matrix for `key`.
///
/// Key letters are placed first in order of first appearance (with `J`
/// merged into `I` and repeats skipped), then the rest of the alphabet.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if `key` is empty or contains
/// anything other than ASCII letters.
pub fn build_matrix(key: &str) -> Result<PlayfairMatrix, CipherError> {
    let key = text::validate_alphabetic_key(key)?;

    let mut grid = [[' '; MATRIX_SIZE]; MATRIX_SIZE];
    let mut placed = [false; ALPHABET_LEN as usize];
    let mut filled = 0;
    let candidates = key.as_str().chars().chain('A'..='Z').map(merge_j);
    for letter in candidates {
        let slot = &mut placed[usize::from(text::position(letter))];
        if *slot {
            continue;
        }
        *slot = true;
        grid[filled / MATRIX_SIZE][filled % MATRIX_SIZE] = letter;
        filled += 1;
        if filled == MATRIX_SIZE * MATRIX_SIZE {
            break;
        }
    }

    debug!("built playfair matrix for key {key}");
    Ok(PlayfairMatrix { grid })
}

/// Splits `plaintext` into the digraphs that [`encrypt`] enciphers.
///
/// The text is normalized and every `J` becomes `I`. A filler is inserted
/// after every letter that is immediately repeated, wherever the pair
/// boundaries fall, and an odd-length result is padded with one more
/// filler. The filler is [`FILLER`], or [`ALTERNATE_FILLER`] after an `X`,
/// so no two neighbouring letters match and no digraph holds the same
/// letter twice.
#[must_use]
pub fn prepare_text(plaintext: &str) -> Vec<Digraph> {
    let normalized = text::normalize(plaintext, false);
    let mut letters = normalized.letters().map(merge_j).peekable();
    let mut prepared = Vec::with_capacity(normalized.len() * 2 + 1);

    while let Some(letter) = letters.next() {
        prepared.push(letter);
        if letters.peek() == Some(&letter) {
            prepared.push(filler_for(letter));
        }
    }
    if let Some(&last) = prepared.last().filter(|_| prepared.len() % 2 == 1) {
        prepared.push(filler_for(last));
    }

    let digraphs: Vec<Digraph> = prepared
        .chunks_exact(2)
        .map(|pair| Digraph {
            first: pair[0],
            second: pair[1],
        })
        .collect();
    trace!("prepared {} digraphs from {} letters", digraphs.len(), normalized.len());
    digraphs
}

/// Encrypts `plaintext` with the Playfair cipher under `key`.
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if `key` is empty or contains
/// anything other than ASCII letters.
pub fn encrypt(plaintext: &str, key: &str) -> Result<String, CipherError> {
    let matrix = build_matrix(key)?;
    let digraphs = prepare_text(plaintext);

    let mut out = String::with_capacity(digraphs.len() * 2);
    for pair in digraphs {
        let cipher = matrix.substitute(pair, 1)?;
        out.push(cipher.first);
        out.push(cipher.second);
    }
    Ok(out)
}

/// Decrypts `ciphertext` with the Playfair cipher under `key`.
///
/// The ciphertext is normalized and read two letters at a time with no
/// filler handling; a dangling final letter is ignored. Fillers inserted
/// during encryption are left in the output (see
/// [`crate::format::strip_filler`]).
///
/// # Errors
///
/// Returns [`CipherError::InvalidKey`] if `key` is empty or contains
/// anything other than ASCII letters.
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String, CipherError> {
    let matrix = build_matrix(key)?;
    let letters: Vec<char> = text::normalize(ciphertext, false).letters().collect();
    if letters.len() % 2 == 1 {
        debug!("ignoring dangling final ciphertext letter");
    }

    let mut out = String::with_capacity(letters.len());
    for chunk in letters.chunks_exact(2) {
        let pair = Digraph {
            first: chunk[0],
            second: chunk[1],
        };
        let plain = matrix.substitute(pair, MATRIX_SIZE - 1)?;
        out.push(plain.first);
        out.push(plain.second);
    }
    Ok(out)
}
