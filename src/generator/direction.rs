/*
direction.rs

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

//! The eight directions a word can run in.

use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::FromRepr;

/// Number of directions.
pub const NUM_DIRECTIONS: usize = 8;

/// Direction of a word in the grid.
///
/// Rows grow downward and columns grow to the right, so [`Direction::North`] is `(-1, 0)`.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

/// Broad orientation of a direction.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DirectionCategory {
    Horizontal,
    Vertical,
    Diagonal,
}

impl Direction {
    /// All the directions, in catalog order.
    pub const ALL: [Direction; NUM_DIRECTIONS] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Return the `(row, column)` unit vector.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
            Direction::NorthEast => (-1, 1),
            Direction::NorthWest => (-1, -1),
            Direction::SouthEast => (1, 1),
            Direction::SouthWest => (1, -1),
        }
    }

    /// Position of the direction in [`Direction::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the direction at the given catalog position.
    pub fn from_index(index: usize) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_repr)
    }

    pub const fn category(self) -> DirectionCategory {
        match self {
            Direction::East | Direction::West => DirectionCategory::Horizontal,
            Direction::North | Direction::South => DirectionCategory::Vertical,
            _ => DirectionCategory::Diagonal,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name: &str = match self {
            Direction::North => "N",
            Direction::South => "S",
            Direction::East => "E",
            Direction::West => "W",
            Direction::NorthEast => "NE",
            Direction::NorthWest => "NW",
            Direction::SouthEast => "SE",
            Direction::SouthWest => "SW",
        };
        f.write_str(name)
    }
}

impl fmt::Display for DirectionCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DirectionCategory::Horizontal => write!(f, "horizontal"),
            DirectionCategory::Vertical => write!(f, "vertical"),
            DirectionCategory::Diagonal => write!(f, "diagonal"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_is_the_eight_unit_vectors() {
        let deltas: HashSet<(isize, isize)> = Direction::ALL.iter().map(|d| d.delta()).collect();
        assert_eq!(deltas.len(), NUM_DIRECTIONS);
        assert!(!deltas.contains(&(0, 0)));
        for (dr, dc) in deltas {
            assert!((-1..=1).contains(&dr) && (-1..=1).contains(&dc));
        }
    }

    #[test]
    fn index_round_trip() {
        for (i, d) in Direction::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
            assert_eq!(Direction::from_index(i), Some(*d));
        }
        assert_eq!(Direction::from_index(NUM_DIRECTIONS), None);
    }

    #[test]
    fn categories() {
        let diagonals: usize = Direction::ALL
            .iter()
            .filter(|d| d.category() == DirectionCategory::Diagonal)
            .count();
        assert_eq!(diagonals, 4);
        assert_eq!(Direction::West.category(), DirectionCategory::Horizontal);
        assert_eq!(Direction::North.category(), DirectionCategory::Vertical);
    }
}
