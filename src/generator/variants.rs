/*
variants.rs

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

//! Generate several distinct puzzles for the same word list.
//!
//! The [`VariantGenerator`] calls the [`PuzzleAssembler`] until it has collected the requested
//! number of complete puzzles, or until it reaches the attempt ceiling. Each attempt starts
//! from an empty grid and fresh direction counters. Incomplete puzzles are dropped.
//!
//! Running out of attempts is not an error: the [`VariantReport`] returns the puzzles that were
//! produced along with the shortfall, and the caller decides how to warn the user.

use log::{debug, info, warn};
use std::thread;
use std::time::Instant;

use super::assembler::PuzzleAssembler;
use super::grid_size::GridSize;
use super::placement_engine::PlacementEngine;
use super::puzzle::Puzzle;
use super::random_source::RandomSource;
use super::word::Word;
use crate::config::{ATTEMPTS_PER_VARIANT, TRIALS_PER_DIRECTION};

/// Tuning parameters for the generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorOptions {
    /// Maximum number of start positions tried per direction when placing a word.
    pub trials_per_direction: usize,

    /// The attempt ceiling is `attempts_per_variant` times the requested puzzle count.
    pub attempts_per_variant: usize,

    /// Number of threads running attempts. With `1`, attempts run sequentially and share a
    /// single random stream.
    pub workers: usize,

    /// Complete puzzles with fewer diagonal words than this percentage are also discarded.
    /// `0` disables the check.
    pub min_diagonal_percent: usize,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            trials_per_direction: TRIALS_PER_DIRECTION,
            attempts_per_variant: ATTEMPTS_PER_VARIANT,
            workers: 1,
            min_diagonal_percent: 0,
        }
    }
}

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct VariantReport {
    /// Accepted puzzles, in the order they were produced.
    pub puzzles: Vec<Puzzle>,

    /// Number of requested puzzles.
    pub requested: usize,

    /// Number of requested puzzles that could not be produced before the attempt ceiling.
    pub shortfall: usize,

    /// Number of assembly attempts.
    pub attempts: usize,

    /// Number of attempts dropped because a word could not be placed.
    pub incomplete: usize,

    /// Number of complete puzzles dropped because of too few diagonal words.
    pub unbalanced: usize,

    /// Number of complete puzzles dropped because an identical grid was already accepted.
    pub duplicates: usize,

    /// Seed of the random stream. Reusing it reproduces the same puzzles.
    pub seed: u64,

    /// Duration of the generation in seconds.
    pub duration: f32,
}

impl VariantReport {
    fn new(requested: usize, seed: u64) -> Self {
        Self {
            puzzles: Vec::with_capacity(requested),
            requested,
            shortfall: 0,
            attempts: 0,
            incomplete: 0,
            unbalanced: 0,
            duplicates: 0,
            seed,
            duration: 0.0,
        }
    }

    /// Whether all the requested puzzles were produced.
    pub fn is_complete(&self) -> bool {
        self.shortfall == 0
    }
}

/// [`VariantGenerator`] object.
#[derive(Debug, Clone, Default)]
pub struct VariantGenerator {
    assembler: PuzzleAssembler,
    options: GeneratorOptions,
}

impl VariantGenerator {
    /// Create a [`VariantGenerator`] object.
    pub fn new(options: GeneratorOptions) -> Self {
        Self {
            assembler: PuzzleAssembler::new(PlacementEngine::new(options.trials_per_direction)),
            options,
        }
    }

    /// Generate up to `count` distinct complete puzzles.
    ///
    /// When `seed` is None, a random seed is drawn and returned in the report.
    pub fn generate(
        &self,
        words: &[Word],
        size: GridSize,
        count: usize,
        seed: Option<u64>,
    ) -> VariantReport {
        let seed: u64 = seed.unwrap_or_else(RandomSource::random_seed);
        let ceiling: usize = count.saturating_mul(self.options.attempts_per_variant.max(1));
        let start: Instant = Instant::now();
        let mut report: VariantReport = VariantReport::new(count, seed);

        info!(
            "Generating {count} {size} puzzles for {} words (seed {seed}, at most {ceiling} attempts)",
            words.len()
        );

        if self.options.workers > 1 {
            self.run_parallel(words, size, ceiling, &mut report);
        } else {
            self.run_sequential(words, size, ceiling, &mut report);
        }

        report.shortfall = count - report.puzzles.len();
        report.duration = start.elapsed().as_secs_f32();
        info!(
            "Generated {}/{count} puzzles in {} attempts ({}s)",
            report.puzzles.len(),
            report.attempts,
            report.duration
        );
        if report.shortfall > 0 {
            warn!(
                "Only {} puzzles generated out of {count} requested ({} incomplete, {} unbalanced, {} duplicates)",
                report.puzzles.len(),
                report.incomplete,
                report.unbalanced,
                report.duplicates
            );
        }
        report
    }

    /// Run the attempts one after the other with a single random stream.
    fn run_sequential(
        &self,
        words: &[Word],
        size: GridSize,
        ceiling: usize,
        report: &mut VariantReport,
    ) {
        let mut rng: RandomSource = RandomSource::from_seed(report.seed);

        while report.puzzles.len() < report.requested && report.attempts < ceiling {
            debug!("Attempt {}", report.attempts);
            report.attempts += 1;
            let puzzle: Puzzle = self.assembler.assemble(words, size, &mut rng);
            self.consider(puzzle, report);
        }
    }

    /// Run the attempts in batches of [`GeneratorOptions::workers`] threads.
    ///
    /// Each attempt uses its own random stream derived from the seed and the attempt index, and
    /// the results are examined in attempt order, so the outcome does not depend on thread
    /// scheduling.
    fn run_parallel(
        &self,
        words: &[Word],
        size: GridSize,
        ceiling: usize,
        report: &mut VariantReport,
    ) {
        let seed: u64 = report.seed;

        while report.puzzles.len() < report.requested && report.attempts < ceiling {
            let first: usize = report.attempts;
            let batch: usize = self.options.workers.min(ceiling - first);
            debug!("Attempts {first} to {}", first + batch - 1);

            let (sender, receiver) = async_channel::bounded::<(usize, Puzzle)>(batch);
            thread::scope(|s| {
                for index in first..first + batch {
                    let sender = sender.clone();
                    let assembler: &PuzzleAssembler = &self.assembler;
                    s.spawn(move || {
                        let mut rng: RandomSource = RandomSource::for_attempt(seed, index);
                        let puzzle: Puzzle = assembler.assemble(words, size, &mut rng);
                        if sender.send_blocking((index, puzzle)).is_err() {
                            warn!("Attempt {index}: the result channel is closed");
                        }
                    });
                }
            });
            drop(sender);

            let mut results: Vec<(usize, Puzzle)> = Vec::with_capacity(batch);
            while let Ok(result) = receiver.recv_blocking() {
                results.push(result);
            }
            results.sort_by_key(|r| r.0);

            let mut consumed: usize = batch;
            for (i, (_, puzzle)) in results.into_iter().enumerate() {
                if report.puzzles.len() >= report.requested {
                    consumed = i;
                    break;
                }
                self.consider(puzzle, report);
            }
            report.attempts = first + consumed;
        }
    }

    /// Keep the puzzle if it is complete, balanced enough, and not a copy of an accepted one.
    fn consider(&self, puzzle: Puzzle, report: &mut VariantReport) {
        if !puzzle.is_complete() {
            debug!(
                "Dropping incomplete puzzle (unplaced: {:?})",
                puzzle
                    .unplaced()
                    .iter()
                    .map(|w| w.as_str())
                    .collect::<Vec<&str>>()
            );
            report.incomplete += 1;
            return;
        }
        if puzzle.diagonal_percent() < self.options.min_diagonal_percent {
            debug!(
                "Dropping puzzle with {}% diagonal words",
                puzzle.diagonal_percent()
            );
            report.unbalanced += 1;
            return;
        }
        if report.puzzles.iter().any(|p| p.grid() == puzzle.grid()) {
            debug!("Dropping duplicated puzzle");
            report.duplicates += 1;
            return;
        }
        report.puzzles.push(puzzle);
        debug!("Accepted puzzle {}/{}", report.puzzles.len(), report.requested);
    }
}
