/*
assembler.rs

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

//! Build one puzzle from a word list.

use log::{Level, debug, log_enabled};

use super::direction::{Direction, NUM_DIRECTIONS};
use super::direction_balancer::DirectionBalancer;
use super::grid_size::GridSize;
use super::placement::WordPlacement;
use super::placement_engine::{PlacementEngine, PlacementError};
use super::puzzle::Puzzle;
use super::random_source::RandomSource;
use super::word::Word;

/// [`PuzzleAssembler`] object.
#[derive(Debug, Clone, Default)]
pub struct PuzzleAssembler {
    engine: PlacementEngine,
}

impl PuzzleAssembler {
    /// Create a [`PuzzleAssembler`] object that uses the given placement engine.
    pub fn new(engine: PlacementEngine) -> Self {
        Self { engine }
    }

    /// Place all the words into a new grid and fill the remaining cells.
    ///
    /// The longest words are placed first, while the grid is still empty. Words of equal length
    /// keep their input order. A word that cannot be placed is recorded in
    /// [`Puzzle::unplaced`] and the remaining words are still processed, so the returned puzzle
    /// is always filled. Use [`Puzzle::is_complete`] to know whether every word made it.
    pub fn assemble(&self, words: &[Word], size: GridSize, rng: &mut RandomSource) -> Puzzle {
        let mut puzzle: Puzzle = Puzzle::new(size, words);
        let mut balancer: DirectionBalancer = DirectionBalancer::new();

        let mut order: Vec<&Word> = words.iter().collect();
        order.sort_by(|a, b| b.len().cmp(&a.len()));

        for word in order {
            let directions: [Direction; NUM_DIRECTIONS] = balancer.next_direction_order(rng);
            let res: Result<WordPlacement, PlacementError> =
                self.engine.try_place(word, puzzle.grid_mut(), &directions, rng);
            match res {
                Ok(placement) => {
                    balancer.record(placement.direction());
                    puzzle.add_placement(placement);
                }
                Err(e) => {
                    debug!("Cannot place {word}: {e}");
                    puzzle.add_unplaced(word.clone());
                }
            }
        }

        puzzle.grid_mut().fill_unset(|| rng.letter());

        if log_enabled!(Level::Debug) {
            debug!(
                "Assembled {size} puzzle: {} placed, {} unplaced",
                puzzle.placements().len(),
                puzzle.unplaced().len()
            );
            balancer.debug();
            puzzle.grid().debug();
        }
        puzzle
    }
}
