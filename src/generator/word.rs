/*
word.rs

Copyright 2025 Hervé Quatremain

This file is part of Wordsearch.

Wordsearch is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordsearch is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordsearch. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Normalized puzzle word.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum InvalidWordError {
    /// The word is empty after trimming.
    Empty,

    /// The word contains a character that is not a letter between `A` and `Z`.
    InvalidCharacter { word: String, character: char },
}

impl fmt::Display for InvalidWordError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidWordError::Empty => write!(f, "Word cannot be empty"),
            InvalidWordError::InvalidCharacter { word, character } => write!(
                f,
                "Word '{word}' contains the character '{character}' (only letters A-Z are allowed)"
            ),
        }
    }
}

impl Error for InvalidWordError {}

/// Uppercase word made of the letters `A` to `Z` only.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    /// Trim and uppercase the raw string, and then validate it.
    ///
    /// # Errors
    ///
    /// Return an error if the word is empty or contains something else than ASCII letters.
    pub fn parse(raw: &str) -> Result<Self, InvalidWordError> {
        let value: String = raw.trim().to_ascii_uppercase();
        if value.is_empty() {
            return Err(InvalidWordError::Empty);
        }
        if let Some(character) = value.chars().find(|c| !c.is_ascii_uppercase()) {
            return Err(InvalidWordError::InvalidCharacter {
                word: raw.trim().to_string(),
                character,
            });
        }
        Ok(Self(value))
    }

    /// Number of letters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the word has no letters. A parsed word is never empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the letter at the given index.
    pub fn letter(&self, index: usize) -> Option<char> {
        self.0.as_bytes().get(index).map(|b| char::from(*b))
    }

    /// Iterate over the letters.
    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    /// Return the word as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Word {
    type Error = InvalidWordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> String {
        word.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes() {
        let word = Word::parse("  natale \n").expect("valid word");
        assert_eq!(word.as_str(), "NATALE");
        assert_eq!(word.len(), 6);
        assert_eq!(word.letter(0), Some('N'));
        assert_eq!(word.letter(6), None);
    }

    #[test]
    fn parse_rejects_empty() {
        assert_eq!(Word::parse(""), Err(InvalidWordError::Empty));
        assert_eq!(Word::parse("   "), Err(InvalidWordError::Empty));
    }

    #[test]
    fn parse_rejects_non_letters() {
        assert_eq!(
            Word::parse("ice cream"),
            Err(InvalidWordError::InvalidCharacter {
                word: "ice cream".to_string(),
                character: ' '
            })
        );
        assert!(Word::parse("R2D2").is_err());
        assert!(Word::parse("café").is_err());
    }
}
