/*
word_list.rs

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

//! Load the words to place and check that they can fit the grid.
//!
//! Words come from a text file (one word per line), from the command line, or from the built-in
//! list in [`crate::config::DEFAULT_WORDS`].

use log::{debug, warn};
use std::collections::HashSet;
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::config::DEFAULT_WORDS;
use crate::generator::grid_size::GridSize;
use crate::generator::word::{InvalidWordError, Word};

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum WordListError {
    /// No words provided.
    Empty,

    /// A word is longer than the grid.
    TooLong { word: Word, size: usize },
}

impl fmt::Display for WordListError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WordListError::Empty => write!(f, "No words provided"),
            WordListError::TooLong { word, size } => write!(
                f,
                "Longest word '{word}' ({} letters) won't fit in {size}x{size} grid. Increase grid size to at least {} or use shorter words.",
                word.len(),
                word.len()
            ),
        }
    }
}

impl Error for WordListError {}

/// Parse the given strings into words.
///
/// # Errors
///
/// Return the error of the first invalid word.
pub fn parse_words<S: AsRef<str>>(raw: &[S]) -> Result<Vec<Word>, InvalidWordError> {
    raw.iter().map(|w| Word::parse(w.as_ref())).collect()
}

/// Return the built-in word list.
pub fn default_words() -> Vec<Word> {
    DEFAULT_WORDS
        .iter()
        .filter_map(|w| Word::parse(w).ok())
        .collect()
}

/// Read the words from a file, one word per line. Blank lines are ignored.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, Box<dyn Error>> {
    let file: File = File::open(path.as_ref())?;
    let reader: BufReader<File> = BufReader::new(file);
    let mut words: Vec<Word> = Vec::new();

    for line in reader.lines() {
        let line: String = line?;
        if line.trim().is_empty() {
            continue;
        }
        words.push(Word::parse(&line)?);
    }
    debug!("Loaded {} words from {:?}", words.len(), path.as_ref());
    Ok(words)
}

/// Check that the list is not empty and that every word fits the grid, and remove duplicated
/// words.
///
/// # Errors
///
/// Return an error if there are no words, or if the longest word is longer than the grid.
pub fn validate(words: Vec<Word>, size: GridSize) -> Result<Vec<Word>, WordListError> {
    if words.is_empty() {
        return Err(WordListError::Empty);
    }

    // First of the longest words
    let mut longest: &Word = &words[0];
    for w in &words {
        if w.len() > longest.len() {
            longest = w;
        }
    }
    if longest.len() > size.get() {
        return Err(WordListError::TooLong {
            word: longest.clone(),
            size: size.get(),
        });
    }

    let mut seen: HashSet<Word> = HashSet::with_capacity(words.len());
    let mut unique: Vec<Word> = Vec::with_capacity(words.len());
    for w in words {
        if seen.contains(&w) {
            warn!("Ignoring duplicated word {w}");
            continue;
        }
        seen.insert(w.clone());
        unique.push(w);
    }
    Ok(unique)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn size(n: usize) -> GridSize {
        GridSize::new(n).expect("valid size")
    }

    #[test]
    fn default_words_fit_the_default_grid() {
        let words = default_words();
        assert_eq!(words.len(), DEFAULT_WORDS.len());
        assert!(validate(words, size(crate::config::DEFAULT_GRID_SIZE)).is_ok());
    }

    #[test]
    fn parse_words_reports_the_bad_word() {
        assert!(parse_words(&["cat", "dog"]).is_ok());
        assert_eq!(parse_words(&["cat", ""]), Err(InvalidWordError::Empty));
    }

    #[test]
    fn validate_rejects_empty_and_long_lists() {
        assert_eq!(validate(Vec::new(), size(9)), Err(WordListError::Empty));

        let words = parse_words(&["cat", "example", "doggies"]).expect("valid words");
        match validate(words, size(6)) {
            Err(WordListError::TooLong { word, size }) => {
                assert_eq!(word.as_str(), "EXAMPLE");
                assert_eq!(size, 6);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn validate_removes_duplicates() {
        let words = parse_words(&["cat", "Dog", "CAT", "dog "]).expect("valid words");
        let unique = validate(words, size(5)).expect("valid list");
        assert_eq!(unique, parse_words(&["CAT", "DOG"]).expect("valid words"));
    }

    #[test]
    fn load_from_file_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().expect("temporary file");
        writeln!(file, "stella\n\n  cometa  \n\nmagi").expect("write");
        let words = load_from_file(file.path()).expect("loaded");
        assert_eq!(
            words,
            parse_words(&["STELLA", "COMETA", "MAGI"]).expect("valid words")
        );
    }

    #[test]
    fn load_from_file_reports_errors() {
        assert!(load_from_file("/nonexistent/words.txt").is_err());

        let mut file = tempfile::NamedTempFile::new().expect("temporary file");
        writeln!(file, "stella\nice cream").expect("write");
        assert!(load_from_file(file.path()).is_err());
    }
}
