/*
puzzle.rs

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

//! Word search puzzle: the grid, the placed words, and the words that could not be placed.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::error::Error;
use std::fmt;

use super::direction::{DirectionCategory, NUM_DIRECTIONS};
use super::grid::{Grid, Position};
use super::grid_size::GridSize;
use super::placement::WordPlacement;
use super::word::Word;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum InvalidPuzzleError {
    /// The declared size is not the size of the grid.
    SizeMismatch { size: GridSize, grid: GridSize },

    /// The placed and unplaced words do not match the requested words.
    WordMismatch,

    /// A placed letter differs from the grid, runs out of the grid, or a cell is unset.
    Inconsistent(Position),
}

impl fmt::Display for InvalidPuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidPuzzleError::SizeMismatch { size, grid } => {
                write!(f, "Puzzle size {size} does not match the {grid} grid")
            }
            InvalidPuzzleError::WordMismatch => write!(
                f,
                "Placed and unplaced words do not match the requested words"
            ),
            InvalidPuzzleError::Inconsistent(position) => {
                write!(f, "Puzzle grid is inconsistent at {position}")
            }
        }
    }
}

impl Error for InvalidPuzzleError {}

/// Puzzle as read from a saved file, before validation.
#[derive(Deserialize)]
struct SavedPuzzle {
    size: GridSize,
    grid: Grid,
    placements: Vec<WordPlacement>,
    words: Vec<Word>,
    unplaced: Vec<Word>,
}

/// [`Puzzle`] object.
///
/// A puzzle is created empty by the assembler, which places the words and then fills the
/// remaining cells. Once returned by the assembler, the puzzle is only read.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "SavedPuzzle")]
pub struct Puzzle {
    /// Side length of the grid.
    size: GridSize,

    /// Letters.
    grid: Grid,

    /// Placed words, in placement order.
    placements: Vec<WordPlacement>,

    /// Requested words, in input order.
    words: Vec<Word>,

    /// Requested words that could not be placed.
    unplaced: Vec<Word>,
}

impl Puzzle {
    /// Create an empty [`Puzzle`] object for the given words.
    pub fn new(size: GridSize, words: &[Word]) -> Self {
        Self {
            size,
            grid: Grid::new(size),
            placements: Vec::with_capacity(words.len()),
            words: words.to_vec(),
            unplaced: Vec::new(),
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the grid, for the placement engine and the filler.
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn placements(&self) -> &[WordPlacement] {
        &self.placements
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Return the requested words that the assembler could not place.
    pub fn unplaced(&self) -> &[Word] {
        &self.unplaced
    }

    /// Record a placement. The letters must already be in the grid.
    pub(crate) fn add_placement(&mut self, placement: WordPlacement) {
        self.placements.push(placement);
    }

    /// Record a word that could not be placed.
    pub(crate) fn add_unplaced(&mut self, word: Word) {
        self.unplaced.push(word);
    }

    /// Whether every requested word has been placed.
    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty() && self.placements.len() == self.words.len()
    }

    /// Return the letter at the given position.
    pub fn letter_at(&self, position: Position) -> Option<char> {
        self.grid.get(position)
    }

    /// Return the placement of the given word, if it has been placed.
    pub fn placement_of(&self, word: &Word) -> Option<&WordPlacement> {
        self.placements.iter().find(|p| p.word() == word)
    }

    /// Number of placements per direction, indexed by `Direction::index`.
    pub fn direction_counts(&self) -> [usize; NUM_DIRECTIONS] {
        let mut counts: [usize; NUM_DIRECTIONS] = [0; NUM_DIRECTIONS];
        for p in &self.placements {
            counts[p.direction().index()] += 1;
        }
        counts
    }

    /// Number of placements per direction category.
    pub fn category_counts(&self) -> HashMap<DirectionCategory, usize> {
        let mut counts: HashMap<DirectionCategory, usize> = HashMap::with_capacity(3);
        for p in &self.placements {
            *counts.entry(p.direction().category()).or_insert(0) += 1;
        }
        counts
    }

    /// Percentage (0 to 100) of the requested words that are placed diagonally.
    pub fn diagonal_percent(&self) -> usize {
        if self.words.is_empty() {
            return 100;
        }
        let diagonal: usize = self
            .placements
            .iter()
            .filter(|p| p.direction().category() == DirectionCategory::Diagonal)
            .count();
        diagonal * 100 / self.words.len()
    }

    /// Check that every placement is written in the grid and that no cell is left unset.
    ///
    /// Return the first inconsistent cell, if any.
    pub fn verify(&self) -> Result<(), Position> {
        for placement in &self.placements {
            for (position, letter) in placement.cells() {
                if self.grid.get(position) != Some(letter) {
                    return Err(position);
                }
            }
        }
        let n: usize = self.size.get();
        for row in 0..n {
            for col in 0..n {
                let position: Position = Position::new(row, col);
                if self.grid.get(position).is_none() {
                    return Err(position);
                }
            }
        }
        Ok(())
    }
}

impl TryFrom<SavedPuzzle> for Puzzle {
    type Error = InvalidPuzzleError;

    fn try_from(saved: SavedPuzzle) -> Result<Self, Self::Error> {
        if saved.size != saved.grid.size() {
            return Err(InvalidPuzzleError::SizeMismatch {
                size: saved.size,
                grid: saved.grid.size(),
            });
        }

        let mut accounted: Vec<&Word> = saved
            .placements
            .iter()
            .map(|p| p.word())
            .chain(saved.unplaced.iter())
            .collect();
        let mut requested: Vec<&Word> = saved.words.iter().collect();
        accounted.sort();
        requested.sort();
        if accounted != requested {
            return Err(InvalidPuzzleError::WordMismatch);
        }

        let puzzle: Puzzle = Puzzle {
            size: saved.size,
            grid: saved.grid,
            placements: saved.placements,
            words: saved.words,
            unplaced: saved.unplaced,
        };
        puzzle.verify().map_err(InvalidPuzzleError::Inconsistent)?;
        Ok(puzzle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::direction::Direction;

    fn word(s: &str) -> Word {
        Word::parse(s).expect("valid word")
    }

    fn place(puzzle: &mut Puzzle, w: &str, start: Position, direction: Direction) {
        let placement = WordPlacement::new(word(w), start, direction, puzzle.size().get())
            .expect("fits");
        for (position, letter) in placement.cells() {
            puzzle.grid_mut().set(position, letter);
        }
        puzzle.add_placement(placement);
    }

    #[test]
    fn completeness_follows_unplaced_words() {
        let size = GridSize::new(5).expect("valid size");
        let words = vec![word("CAT"), word("DOG")];
        let mut puzzle = Puzzle::new(size, &words);
        assert!(!puzzle.is_complete());

        place(&mut puzzle, "CAT", Position::new(0, 0), Direction::East);
        puzzle.add_unplaced(word("DOG"));
        assert!(!puzzle.is_complete());

        let mut puzzle = Puzzle::new(size, &words);
        place(&mut puzzle, "CAT", Position::new(0, 0), Direction::East);
        place(&mut puzzle, "DOG", Position::new(4, 4), Direction::NorthWest);
        assert!(puzzle.is_complete());
        assert_eq!(puzzle.diagonal_percent(), 50);
        assert_eq!(
            puzzle.category_counts().get(&DirectionCategory::Horizontal),
            Some(&1)
        );
        assert_eq!(puzzle.direction_counts()[Direction::NorthWest.index()], 1);
        assert_eq!(
            puzzle.placement_of(&word("DOG")).map(|p| p.end()),
            Some(Position::new(2, 2))
        );
    }

    #[test]
    fn verify_reports_unset_cells() {
        let size = GridSize::new(5).expect("valid size");
        let mut puzzle = Puzzle::new(size, &[word("CAT")]);
        place(&mut puzzle, "CAT", Position::new(0, 0), Direction::South);
        assert_eq!(puzzle.verify(), Err(Position::new(0, 1)));
        puzzle.grid_mut().fill_unset(|| 'X');
        assert_eq!(puzzle.verify(), Ok(()));
    }

    fn assembled() -> Puzzle {
        let size = GridSize::new(5).expect("valid size");
        let mut puzzle = Puzzle::new(size, &[word("CAT"), word("DOG")]);
        place(&mut puzzle, "CAT", Position::new(0, 0), Direction::East);
        place(&mut puzzle, "DOG", Position::new(4, 4), Direction::North);
        puzzle.grid_mut().fill_unset(|| 'X');
        puzzle
    }

    #[test]
    fn load_accepts_a_saved_puzzle() {
        let puzzle = assembled();
        let json = serde_json::to_string(&puzzle).expect("serialized");
        let loaded: Puzzle = serde_json::from_str(&json).expect("valid puzzle");
        assert_eq!(loaded, puzzle);
    }

    #[test]
    fn load_rejects_inconsistent_puzzles() {
        let json = serde_json::to_value(assembled()).expect("serialized");

        let mut wrong_size = json.clone();
        wrong_size["size"] = serde_json::json!(9);
        assert!(serde_json::from_value::<Puzzle>(wrong_size).is_err());

        let mut wrong_letter = json.clone();
        wrong_letter["grid"][0] = serde_json::json!("XATXX");
        assert!(serde_json::from_value::<Puzzle>(wrong_letter).is_err());

        let mut unknown_word = json.clone();
        unknown_word["words"][1] = serde_json::json!("COW");
        assert!(serde_json::from_value::<Puzzle>(unknown_word).is_err());
    }

    #[test]
    fn load_reports_the_inconsistent_cell() {
        let puzzle = assembled();
        let saved = SavedPuzzle {
            size: puzzle.size(),
            grid: Grid::new(puzzle.size()),
            placements: puzzle.placements().to_vec(),
            words: puzzle.words().to_vec(),
            unplaced: Vec::new(),
        };
        assert_eq!(
            Puzzle::try_from(saved),
            Err(InvalidPuzzleError::Inconsistent(Position::new(0, 0)))
        );
    }
}
