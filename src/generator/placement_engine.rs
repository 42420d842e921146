/*
placement_engine.rs

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

//! Fit one word into the grid.
//!
//! For each direction, in the order provided by the caller, the engine tries a bounded number of
//! random start positions. A start position is valid when the whole word stays inside the grid
//! and every cell along the path is either unset or already holds the letter the word needs.
//! The engine does not undo earlier placements: when all the trials fail, the word is reported
//! as not placeable and the caller decides what to do.

use log::debug;
use std::error::Error;
use std::fmt;
use std::ops::Range;

use super::direction::Direction;
use super::grid::{Grid, Position};
use super::placement::WordPlacement;
use super::random_source::RandomSource;
use super::word::Word;
use crate::config::TRIALS_PER_DIRECTION;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum PlacementError {
    /// The word is longer than the grid side: no direction can hold it.
    DoesNotFit,

    /// All the trials failed because of conflicting letters.
    NoRoom,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlacementError::DoesNotFit => write!(f, "the word is longer than the grid"),
            PlacementError::NoRoom => write!(f, "no free position found for the word"),
        }
    }
}

impl Error for PlacementError {}

/// [`PlacementEngine`] object.
#[derive(Debug, Clone)]
pub struct PlacementEngine {
    /// Maximum number of start positions tried per direction.
    trials_per_direction: usize,
}

impl Default for PlacementEngine {
    fn default() -> Self {
        Self::new(TRIALS_PER_DIRECTION)
    }
}

impl PlacementEngine {
    /// Create a [`PlacementEngine`] object.
    pub fn new(trials_per_direction: usize) -> Self {
        Self {
            trials_per_direction: trials_per_direction.max(1),
        }
    }

    /// Place the word in the grid and return the placement.
    ///
    /// The directions are tried in the given order. On success the letters are written into the
    /// grid. On failure the grid is left untouched.
    ///
    /// # Errors
    ///
    /// Return [`PlacementError::DoesNotFit`] if the word is longer than the grid, and
    /// [`PlacementError::NoRoom`] if every trial conflicts with letters already in the grid.
    pub fn try_place(
        &self,
        word: &Word,
        grid: &mut Grid,
        directions: &[Direction],
        rng: &mut RandomSource,
    ) -> Result<WordPlacement, PlacementError> {
        let size: usize = grid.size().get();
        if word.len() > size {
            debug!("    {word}: longer than the grid ({} > {size})", word.len());
            return Err(PlacementError::DoesNotFit);
        }

        for direction in directions {
            let mut starts: Vec<Position> = match start_positions(*direction, word.len(), size) {
                Some(s) => s,
                None => continue,
            };
            rng.shuffle(&mut starts);

            for start in starts.into_iter().take(self.trials_per_direction) {
                if !fits(word, grid, start, *direction) {
                    continue;
                }
                let placement: WordPlacement =
                    match WordPlacement::new(word.clone(), start, *direction, size) {
                        Some(p) => p,
                        None => continue,
                    };
                for (position, letter) in placement.cells() {
                    grid.set(position, letter);
                }
                debug!("    {word}: placed at {start} going {direction}");
                return Ok(placement);
            }
            debug!("    {word}: no room going {direction}");
        }
        Err(PlacementError::NoRoom)
    }
}

/// Whether every cell along the path can receive the word's letter.
fn fits(word: &Word, grid: &Grid, start: Position, direction: Direction) -> bool {
    let size: usize = grid.size().get();
    word.letters().enumerate().all(|(k, letter)| {
        start
            .step(direction, k, size)
            .is_some_and(|position| grid.accepts(position, letter))
    })
}

/// Range of valid start coordinates along one axis, for a word of `len` letters moving by
/// `delta` on that axis.
fn axis_range(delta: isize, len: usize, size: usize) -> Option<Range<usize>> {
    if len == 0 || len > size {
        return None;
    }
    match delta {
        0 => Some(0..size),
        1 => Some(0..size - len + 1),
        _ => Some(len - 1..size),
    }
}

/// Return every start position from which the word stays inside the grid.
fn start_positions(direction: Direction, len: usize, size: usize) -> Option<Vec<Position>> {
    let (dr, dc) = direction.delta();
    let rows: Range<usize> = axis_range(dr, len, size)?;
    let cols: Range<usize> = axis_range(dc, len, size)?;
    let mut starts: Vec<Position> = Vec::with_capacity(rows.len() * cols.len());
    for row in rows {
        for col in cols.clone() {
            starts.push(Position::new(row, col));
        }
    }
    Some(starts)
}
