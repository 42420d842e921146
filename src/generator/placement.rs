/*
placement.rs

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

//! Word placed in the grid.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use super::direction::Direction;
use super::grid::Position;
use super::word::Word;
use crate::config::MAX_GRID_SIZE;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum InvalidPlacementError {
    /// The word runs out of the largest grid.
    OutOfBounds { word: Word },

    /// The occupied cells do not follow the start position and the direction.
    WrongPositions { word: Word },
}

impl fmt::Display for InvalidPlacementError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidPlacementError::OutOfBounds { word } => {
                write!(f, "Placement of {word} runs out of the grid")
            }
            InvalidPlacementError::WrongPositions { word } => write!(
                f,
                "Placement of {word} lists cells that do not follow its start and direction"
            ),
        }
    }
}

impl Error for InvalidPlacementError {}

/// Placement as read from a saved file, before validation.
#[derive(Deserialize)]
struct SavedPlacement {
    word: Word,
    start: Position,
    direction: Direction,
    positions: Vec<Position>,
}

/// [`WordPlacement`] object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "SavedPlacement")]
pub struct WordPlacement {
    /// Placed word.
    word: Word,

    /// Position of the first letter.
    start: Position,

    /// Direction in which the word runs.
    direction: Direction,

    /// Occupied cells, in letter order.
    positions: Vec<Position>,
}

impl WordPlacement {
    /// Create a [`WordPlacement`] object.
    ///
    /// Return None if part of the word would fall outside a grid of `size` cells per side.
    pub fn new(word: Word, start: Position, direction: Direction, size: usize) -> Option<Self> {
        let positions: Vec<Position> = (0..word.len())
            .map(|k| start.step(direction, k, size))
            .collect::<Option<Vec<Position>>>()?;
        Some(Self {
            word,
            start,
            direction,
            positions,
        })
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Return the occupied cells, first letter first.
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Position of the last letter.
    pub fn end(&self) -> Position {
        *self.positions.last().unwrap_or(&self.start)
    }

    /// Iterate over the occupied cells along with the letter each one holds.
    pub fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.positions.iter().copied().zip(self.word.letters())
    }
}

/// Rebuild the cells from the start position and the direction, and compare them with the
/// saved ones. Bounds against the actual grid are checked by the puzzle.
impl TryFrom<SavedPlacement> for WordPlacement {
    type Error = InvalidPlacementError;

    fn try_from(saved: SavedPlacement) -> Result<Self, Self::Error> {
        let placement: WordPlacement = match WordPlacement::new(
            saved.word.clone(),
            saved.start,
            saved.direction,
            MAX_GRID_SIZE,
        ) {
            Some(p) => p,
            None => return Err(InvalidPlacementError::OutOfBounds { word: saved.word }),
        };
        if placement.positions != saved.positions {
            return Err(InvalidPlacementError::WrongPositions { word: saved.word });
        }
        Ok(placement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::parse(s).expect("valid word")
    }

    #[test]
    fn positions_follow_the_direction() {
        let p = WordPlacement::new(word("CAT"), Position::new(4, 0), Direction::NorthEast, 5)
            .expect("fits");
        assert_eq!(
            p.positions(),
            &[Position::new(4, 0), Position::new(3, 1), Position::new(2, 2)]
        );
        assert_eq!(p.end(), Position::new(2, 2));
        let cells: Vec<(Position, char)> = p.cells().collect();
        assert_eq!(cells[1], (Position::new(3, 1), 'A'));
        assert!(p.positions().contains(&Position::new(2, 2)));
        assert!(!p.positions().contains(&Position::new(2, 3)));
    }

    #[test]
    fn out_of_bounds_placement_is_refused() {
        assert!(WordPlacement::new(word("HELLO"), Position::new(0, 1), Direction::East, 5).is_none());
        assert!(WordPlacement::new(word("HELLO"), Position::new(0, 0), Direction::East, 5).is_some());
    }

    #[test]
    fn load_rebuilds_the_cells() {
        let p = WordPlacement::new(word("MAGI"), Position::new(1, 3), Direction::SouthWest, 6)
            .expect("fits");
        let json = serde_json::to_string(&p).expect("serialized");
        let loaded: WordPlacement = serde_json::from_str(&json).expect("valid placement");
        assert_eq!(loaded, p);
    }

    #[test]
    fn load_rejects_inconsistent_cells() {
        let json = r#"{"word":"CAT","start":{"row":0,"col":0},"direction":"east",
            "positions":[{"row":40,"col":40},{"row":0,"col":1},{"row":0,"col":2}]}"#;
        assert!(serde_json::from_str::<WordPlacement>(json).is_err());

        let json = r#"{"word":"CAT","start":{"row":0,"col":0},"direction":"north",
            "positions":[{"row":0,"col":0}]}"#;
        assert!(serde_json::from_str::<WordPlacement>(json).is_err());

        let saved = SavedPlacement {
            word: word("CAT"),
            start: Position::new(0, 1),
            direction: Direction::East,
            positions: vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
        };
        assert_eq!(
            WordPlacement::try_from(saved),
            Err(InvalidPlacementError::WrongPositions { word: word("CAT") })
        );
    }
}
