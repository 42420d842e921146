/*
generator.rs

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

//! Place words in a grid and generate puzzle variants.
//!
//! The components are listed from the leaves up:
//!
//! * [`random_source::RandomSource`] provides the random numbers. It is passed explicitly to
//!   every component, and it can be seeded to reproduce a run.
//! * [`grid_size::GridSize`], [`word::Word`], [`direction::Direction`], and
//!   [`grid::Position`] are the value types. [`grid::Grid`] stores the letters.
//! * [`direction_balancer::DirectionBalancer`] orders the eight directions for each word,
//!   least-used first.
//! * [`placement_engine::PlacementEngine`] tries random start positions to fit one word into
//!   the grid, and returns a [`placement::WordPlacement`] object.
//! * [`assembler::PuzzleAssembler`] places a whole word list, longest word first, and fills the
//!   remaining cells with random letters. The result is a [`puzzle::Puzzle`] object, which
//!   reports whether every word could be placed.
//! * [`variants::VariantGenerator`] repeats the assembly until it collects the requested number
//!   of complete and distinct puzzles, or until it reaches the attempt ceiling.
//!   The [`variants::VariantReport`] object returns the puzzles and the shortfall.
//!
//! Invalid words and grid sizes are rejected when the [`word::Word`] and
//! [`grid_size::GridSize`] objects are created, before any generation starts.

pub mod assembler;
pub mod direction;
pub mod direction_balancer;
pub mod grid;
pub mod grid_size;
pub mod placement;
pub mod placement_engine;
pub mod puzzle;
pub mod random_source;
pub mod variants;
pub mod word;
