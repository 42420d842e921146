/*
grid_size.rs

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

//! Validated side length of a square puzzle grid.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use crate::config::{MAX_GRID_SIZE, MIN_GRID_SIZE};

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum InvalidGridSizeError {
    /// The size is below [`MIN_GRID_SIZE`].
    TooSmall(usize),

    /// The size is above [`MAX_GRID_SIZE`].
    TooLarge(usize),
}

impl fmt::Display for InvalidGridSizeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidGridSizeError::TooSmall(n) => {
                write!(f, "Grid size must be at least {MIN_GRID_SIZE} (got {n})")
            }
            InvalidGridSizeError::TooLarge(n) => {
                write!(f, "Grid size must be at most {MAX_GRID_SIZE} (got {n})")
            }
        }
    }
}

impl Error for InvalidGridSizeError {}

/// Side length of the grid, between [`MIN_GRID_SIZE`] and [`MAX_GRID_SIZE`].
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "usize", into = "usize")]
pub struct GridSize(usize);

impl GridSize {
    /// Create a [`GridSize`] object.
    ///
    /// # Errors
    ///
    /// Return an error when `size` is outside the allowed bounds.
    pub fn new(size: usize) -> Result<Self, InvalidGridSizeError> {
        if size < MIN_GRID_SIZE {
            return Err(InvalidGridSizeError::TooSmall(size));
        }
        if size > MAX_GRID_SIZE {
            return Err(InvalidGridSizeError::TooLarge(size));
        }
        Ok(Self(size))
    }

    /// Return the side length.
    pub fn get(&self) -> usize {
        self.0
    }

    /// Number of cells in the grid.
    pub fn cells(&self) -> usize {
        self.0 * self.0
    }
}

impl TryFrom<usize> for GridSize {
    type Error = InvalidGridSizeError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<GridSize> for usize {
    fn from(size: GridSize) -> usize {
        size.0
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}
