/*
direction_balancer.rs

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

//! Choose the order in which directions are tried for a word.
//!
//! Directions are shuffled and then stably sorted by how many words of the current puzzle
//! already use them. Ties keep the shuffle order, so the least-used directions are tried first
//! but the choice among them stays random.

use log::{Level, debug, log_enabled};

use super::direction::{Direction, NUM_DIRECTIONS};
use super::random_source::RandomSource;

/// [`DirectionBalancer`] object. One balancer is used per puzzle.
#[derive(Debug, Default, Clone)]
pub struct DirectionBalancer {
    /// Number of placed words per direction, indexed by [`Direction::index`].
    usage: [usize; NUM_DIRECTIONS],
}

impl DirectionBalancer {
    /// Create a [`DirectionBalancer`] object with all counters at zero.
    pub fn new() -> Self {
        Self {
            usage: [0; NUM_DIRECTIONS],
        }
    }

    /// Return all the directions, least-used first.
    pub fn next_direction_order(&self, rng: &mut RandomSource) -> [Direction; NUM_DIRECTIONS] {
        let mut order: [Direction; NUM_DIRECTIONS] = Direction::ALL;
        rng.shuffle(&mut order);
        // `sort_by_key` is stable
        order.sort_by_key(|d| self.usage[d.index()]);
        order
    }

    /// Record that a word has been placed in the given direction.
    pub fn record(&mut self, direction: Direction) {
        self.usage[direction.index()] += 1;
    }

    /// Number of words placed in the given direction.
    pub fn usage(&self, direction: Direction) -> usize {
        self.usage[direction.index()]
    }

    /// Print the counters at the debug log level.
    pub fn debug(&self) {
        if !log_enabled!(Level::Debug) {
            return;
        }
        let s: Vec<String> = (0..NUM_DIRECTIONS)
            .filter_map(Direction::from_index)
            .map(|d| format!("{d}={}", self.usage(d)))
            .collect();
        debug!("Direction usage: {}", s.join(" "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn order_is_a_permutation() {
        let balancer = DirectionBalancer::new();
        let mut rng = RandomSource::from_seed(1);
        let order = balancer.next_direction_order(&mut rng);
        let distinct: HashSet<Direction> = order.iter().copied().collect();
        assert_eq!(distinct.len(), NUM_DIRECTIONS);
    }

    #[test]
    fn least_used_directions_come_first() {
        let mut balancer = DirectionBalancer::new();
        for d in Direction::ALL {
            if d != Direction::SouthWest && d != Direction::North {
                balancer.record(d);
            }
        }
        balancer.record(Direction::East);

        let mut rng = RandomSource::from_seed(99);
        for _ in 0..50 {
            let order = balancer.next_direction_order(&mut rng);
            let first_two: HashSet<Direction> = order[..2].iter().copied().collect();
            assert!(first_two.contains(&Direction::SouthWest));
            assert!(first_two.contains(&Direction::North));
            assert_eq!(order[NUM_DIRECTIONS - 1], Direction::East);
        }
    }

    #[test]
    fn ties_are_shuffled() {
        let balancer = DirectionBalancer::new();
        let mut rng = RandomSource::from_seed(5);
        let firsts: HashSet<Direction> = (0..100)
            .map(|_| balancer.next_direction_order(&mut rng)[0])
            .collect();
        assert!(firsts.len() > 1);
    }

    #[test]
    fn record_counts() {
        let mut balancer = DirectionBalancer::new();
        balancer.record(Direction::West);
        balancer.record(Direction::West);
        assert_eq!(balancer.usage(Direction::West), 2);
        assert_eq!(balancer.usage(Direction::East), 0);
    }
}
