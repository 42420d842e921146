/*
grid.rs

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

//! Square letter grid.
//!
//! The cells are stored in a flat vector indexed by `row * size + col`. Placements never hold
//! references into the grid, only [`Position`] values.

use log::debug;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;

use super::direction::Direction;
use super::grid_size::GridSize;

/// Character used for unset cells when the grid is printed or serialized.
pub const UNSET_CELL: char = '.';

/// Cell coordinates, starting at `(0, 0)` in the top left corner.
#[derive(serde::Serialize, serde::Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a [`Position`] object.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Return the position `steps` cells away in the given direction, or None if it falls
    /// outside a grid of `size` cells per side.
    pub fn step(self, direction: Direction, steps: usize, size: usize) -> Option<Self> {
        let (dr, dc) = direction.delta();
        let row: isize = self.row as isize + dr * steps as isize;
        let col: isize = self.col as isize + dc * steps as isize;
        let limit: isize = size as isize;
        if (0..limit).contains(&row) && (0..limit).contains(&col) {
            Some(Self::new(row as usize, col as usize))
        } else {
            None
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Letter grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: GridSize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create an empty grid, with all the cells unset.
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![None; size.cells()],
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    /// Whether the position is inside the grid.
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.size.get() && position.col < self.size.get()
    }

    fn index(&self, position: Position) -> Option<usize> {
        if self.contains(position) {
            Some(position.row * self.size.get() + position.col)
        } else {
            None
        }
    }

    /// Return the letter at the given position, or None if the cell is unset or outside the
    /// grid.
    pub fn get(&self, position: Position) -> Option<char> {
        self.index(position).and_then(|i| self.cells[i])
    }

    /// Set the letter at the given position, which must be inside the grid.
    pub fn set(&mut self, position: Position, letter: char) {
        debug_assert!(self.contains(position), "{position} is outside the grid");
        if let Some(i) = self.index(position) {
            self.cells[i] = Some(letter);
        }
    }

    /// Whether the cell can receive the given letter: it is inside the grid, and it is either
    /// unset or already holds that same letter.
    pub fn accepts(&self, position: Position, letter: char) -> bool {
        match self.index(position) {
            Some(i) => match self.cells[i] {
                None => true,
                Some(c) => c == letter,
            },
            None => false,
        }
    }

    /// Whether every cell holds a letter.
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Set every unset cell with a letter provided by the closure.
    ///
    /// Cells are visited row by row.
    pub fn fill_unset<F>(&mut self, mut letter: F) -> usize
    where
        F: FnMut() -> char,
    {
        let mut filled: usize = 0;
        for cell in self.cells.iter_mut().filter(|c| c.is_none()) {
            *cell = Some(letter());
            filled += 1;
        }
        debug!("Filled {filled} cells");
        filled
    }

    /// Return the grid as a list of rows, [`UNSET_CELL`] standing for unset cells.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size.get())
            .map(|row| row.iter().map(|c| c.unwrap_or(UNSET_CELL)).collect())
            .collect()
    }

    /// Print the grid at the debug log level.
    pub fn debug(&self) {
        for row in self.rows() {
            debug!("    {row}");
        }
    }
}

/// Serialize a [`Grid`] object as a list of row strings.
impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let rows: Vec<String> = self.rows();
        let mut seq = serializer.serialize_seq(Some(rows.len()))?;
        for row in &rows {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}

/// Deserialize a [`Grid`] object from a list of row strings.
///
/// The grid must be square, with a valid size, and contain only letters or [`UNSET_CELL`].
impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows: Vec<String> = Vec::deserialize(deserializer)?;
        let size: GridSize = GridSize::new(rows.len()).map_err(de::Error::custom)?;
        let mut cells: Vec<Option<char>> = Vec::with_capacity(size.cells());

        for (r, row) in rows.iter().enumerate() {
            let mut n: usize = 0;
            for c in row.chars() {
                match c {
                    UNSET_CELL => cells.push(None),
                    'A'..='Z' => cells.push(Some(c)),
                    _ => {
                        return Err(de::Error::custom(format!(
                            "Invalid character '{c}' in grid row {r}"
                        )));
                    }
                }
                n += 1;
            }
            if n != size.get() {
                return Err(de::Error::invalid_length(n, &"a row as long as the grid"));
            }
        }
        Ok(Self { size, cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(n: usize) -> GridSize {
        GridSize::new(n).expect("valid size")
    }

    #[test]
    fn step_stays_in_bounds() {
        let p = Position::new(0, 0);
        assert_eq!(p.step(Direction::SouthEast, 4, 5), Some(Position::new(4, 4)));
        assert_eq!(p.step(Direction::SouthEast, 5, 5), None);
        assert_eq!(p.step(Direction::North, 1, 5), None);
        assert_eq!(p.step(Direction::West, 0, 5), Some(p));
        assert_eq!(
            Position::new(4, 0).step(Direction::NorthEast, 4, 5),
            Some(Position::new(0, 4))
        );
    }

    #[test]
    fn accepts_matching_letters_only() {
        let mut grid = Grid::new(size(5));
        let p = Position::new(2, 3);
        assert!(grid.accepts(p, 'A'));
        grid.set(p, 'A');
        assert!(grid.accepts(p, 'A'));
        assert!(!grid.accepts(p, 'B'));
        assert!(!grid.accepts(Position::new(5, 0), 'A'));
        assert_eq!(grid.get(p), Some('A'));
        assert_eq!(grid.rows().concat().matches(UNSET_CELL).count(), 24);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside the grid")]
    fn set_outside_the_grid_panics() {
        let mut grid = Grid::new(size(5));
        grid.set(Position::new(0, 5), 'A');
    }

    #[test]
    fn fill_unset_fills_everything_once() {
        let mut grid = Grid::new(size(5));
        grid.set(Position::new(0, 0), 'Q');
        let filled: usize = grid.fill_unset(|| 'Z');
        assert_eq!(filled, 24);
        assert!(grid.is_filled());
        assert_eq!(grid.get(Position::new(0, 0)), Some('Q'));
        assert_eq!(grid.fill_unset(|| 'Y'), 0);
    }

    #[test]
    fn serde_uses_row_strings() {
        let mut grid = Grid::new(size(5));
        grid.set(Position::new(1, 2), 'K');
        let json: String = serde_json::to_string(&grid).expect("serialize");
        assert_eq!(
            json,
            r#"[".....","..K..",".....",".....","....."]"#
        );
        let back: Grid = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, grid);
    }

    #[test]
    fn deserialize_rejects_bad_grids() {
        assert!(serde_json::from_str::<Grid>(r#"["ABCDE","ABCD","ABCDE","ABCDE","ABCDE"]"#).is_err());
        assert!(serde_json::from_str::<Grid>(r#"["ABCDE","ABCDE","AB1DE","ABCDE","ABCDE"]"#).is_err());
        assert!(serde_json::from_str::<Grid>(r#"["ABC","ABC","ABC"]"#).is_err());
    }
}
