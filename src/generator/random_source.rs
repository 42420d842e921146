/*
random_source.rs

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

//! Seedable source of random numbers.
//!
//! Every component that needs randomness receives a [`RandomSource`] explicitly. There is no
//! process-wide generator, so a run started with the same seed always produces the same puzzles.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Multiplier used to spread attempt indexes over the seed space (64-bit golden ratio).
const ATTEMPT_SEED_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// [`RandomSource`] object.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Create a [`RandomSource`] object from the given seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create an independent stream for one generation attempt.
    ///
    /// Two different attempt indexes produce unrelated streams, which lets attempts run on
    /// separate threads without sharing the generator.
    pub fn for_attempt(seed: u64, attempt: usize) -> Self {
        let mixed: u64 = seed ^ (attempt as u64 + 1).wrapping_mul(ATTEMPT_SEED_MIX);
        Self::from_seed(mixed)
    }

    /// Draw a fresh seed from the operating system backed thread generator.
    pub fn random_seed() -> u64 {
        rand::rng().random()
    }

    /// Return a uniformly distributed integer in `0..upper`.
    ///
    /// `upper` must be greater than zero.
    pub fn below(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }

    /// Shuffle the slice in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Return a uniformly distributed uppercase letter between `A` and `Z`.
    pub fn letter(&mut self) -> char {
        char::from(b'A' + self.rng.random_range(0..26u8))
    }
}
