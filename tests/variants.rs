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

use std::collections::{HashMap, HashSet};

use wordsearch::generator::assembler::PuzzleAssembler;
use wordsearch::generator::direction::DirectionCategory;
use wordsearch::generator::grid::Position;
use wordsearch::generator::grid_size::GridSize;
use wordsearch::generator::puzzle::Puzzle;
use wordsearch::generator::random_source::RandomSource;
use wordsearch::generator::variants::{GeneratorOptions, VariantGenerator};
use wordsearch::generator::word::Word;
use wordsearch::word_list;

fn words(list: &[&str]) -> Vec<Word> {
    word_list::parse_words(list).expect("valid words")
}

fn size(n: usize) -> GridSize {
    GridSize::new(n).expect("valid size")
}

fn check_puzzle(puzzle: &Puzzle) {
    let n: usize = puzzle.size().get();
    let mut letters: HashMap<Position, char> = HashMap::new();

    for placement in puzzle.placements() {
        for (position, letter) in placement.cells() {
            assert!(position.row < n && position.col < n, "{position} outside the grid");
            if let Some(previous) = letters.insert(position, letter) {
                assert_eq!(previous, letter, "conflicting letters at {position}");
            }
            assert_eq!(puzzle.letter_at(position), Some(letter));
        }
    }
    for row in puzzle.grid().rows() {
        assert_eq!(row.len(), n);
        assert!(row.chars().all(|c| c.is_ascii_uppercase()), "unset cell in {row}");
    }
    assert_eq!(puzzle.verify(), Ok(()));
}

#[test]
fn accepted_puzzles_are_consistent() {
    let list = words(&[
        "ADDOBBO", "ANGELO", "GIUSEPPE", "COMETA", "STELLA", "MARIA", "MAGI", "BETLEMME", "BUE",
        "NATALE", "ASINELLO", "STALLA",
    ]);
    let report = VariantGenerator::default().generate(&list, size(12), 5, Some(2025));
    assert!(!report.puzzles.is_empty());
    for puzzle in &report.puzzles {
        assert!(puzzle.is_complete());
        assert_eq!(puzzle.placements().len(), list.len());
        check_puzzle(puzzle);
    }
}

#[test]
fn full_length_word_fits_an_empty_grid() {
    let list = words(&["HELLO"]);
    for seed in 0..50 {
        let mut rng = RandomSource::from_seed(seed);
        let puzzle = PuzzleAssembler::default().assemble(&list, size(5), &mut rng);
        assert!(puzzle.is_complete());
        check_puzzle(&puzzle);

        let placement = &puzzle.placements()[0];
        let start = placement.start();
        let end = placement.end();
        match placement.direction().category() {
            DirectionCategory::Horizontal => assert_eq!(start.col.abs_diff(end.col), 4),
            DirectionCategory::Vertical => assert_eq!(start.row.abs_diff(end.row), 4),
            DirectionCategory::Diagonal => {
                assert_eq!(start.row.abs_diff(end.row), 4);
                assert_eq!(start.col.abs_diff(end.col), 4);
            }
        }
    }
}

#[test]
fn word_longer_than_the_grid_is_never_placed() {
    let list = words(&["EXAMPLE"]);
    let report = VariantGenerator::default().generate(&list, size(5), 4, Some(9));
    assert!(report.puzzles.is_empty());
    assert_eq!(report.shortfall, 4);
    assert!(!report.is_complete());

    let mut rng = RandomSource::from_seed(9);
    let puzzle = PuzzleAssembler::default().assemble(&list, size(5), &mut rng);
    assert!(!puzzle.is_complete());
    assert_eq!(puzzle.unplaced(), list.as_slice());
    assert!(puzzle.grid().is_filled());
}

#[test]
fn words_with_common_letters_share_cells() {
    let list = words(&["CAT", "CAR", "ARC", "TAR", "RAT", "ACT"]);
    let mut shared: usize = 0;

    for seed in 0..200 {
        let mut rng = RandomSource::from_seed(seed);
        let puzzle = PuzzleAssembler::default().assemble(&list, size(5), &mut rng);
        check_puzzle(&puzzle);

        let mut seen: HashSet<Position> = HashSet::new();
        for placement in puzzle.placements() {
            for position in placement.positions() {
                if !seen.insert(*position) {
                    shared += 1;
                }
            }
        }
    }
    assert!(shared > 0, "no intersection in 200 puzzles");
}

#[test]
fn ample_room_gives_the_requested_distinct_puzzles() {
    let list = words(&["CAT", "DOG", "MOUSE", "HORSE", "BIRD"]);
    let report = VariantGenerator::default().generate(&list, size(15), 10, Some(31));
    assert_eq!(report.puzzles.len(), 10);
    assert_eq!(report.shortfall, 0);
    assert!(report.is_complete());

    let grids: HashSet<Vec<String>> = report.puzzles.iter().map(|p| p.grid().rows()).collect();
    assert_eq!(grids.len(), 10);
}

#[test]
fn same_seed_same_puzzles() {
    let list = words(&["STELLA", "COMETA", "MAGI", "BUE", "NATALE"]);
    let generator = VariantGenerator::default();
    let first = generator.generate(&list, size(9), 4, Some(424242));
    let second = generator.generate(&list, size(9), 4, Some(424242));
    assert_eq!(first.puzzles, second.puzzles);
    assert_eq!(first.attempts, second.attempts);
    assert_eq!(first.seed, 424242);

    let other = generator.generate(&list, size(9), 4, Some(424243));
    assert_ne!(first.puzzles, other.puzzles);
}

#[test]
fn unseeded_runs_report_their_seed() {
    let list = words(&["STELLA", "MAGI", "BUE"]);
    let generator = VariantGenerator::new(GeneratorOptions {
        workers: 3,
        ..GeneratorOptions::default()
    });
    let report = generator.generate(&list, size(8), 3, None);
    let replay = generator.generate(&list, size(8), 3, Some(report.seed));
    assert_eq!(report.puzzles, replay.puzzles);
}

#[test]
fn directions_are_balanced() {
    let list = words(&[
        "ONE", "TWO", "SIX", "TEN", "CAT", "DOG", "EGG", "HAT", "PEN", "SUN", "MAP", "CUP", "BOX",
        "FOX", "JAR", "KEY",
    ]);
    let mut rng = RandomSource::from_seed(8);
    let puzzle = PuzzleAssembler::default().assemble(&list, size(15), &mut rng);
    assert!(puzzle.is_complete());

    // 16 words over 8 directions: the balancer uses each direction twice
    for count in puzzle.direction_counts() {
        assert_eq!(count, 2);
    }
}

#[test]
fn crowded_grid_gives_a_partial_result() {
    // Five words with no common letter fill the 5x5 grid only when they are all laid along
    // rows or all along columns. A first word placed diagonally leaves no room for the others.
    let list = words(&["ABCDE", "FGHIJ", "KLMNO", "PQRST", "UVWXY"]);
    let generator = VariantGenerator::new(GeneratorOptions {
        attempts_per_variant: 1,
        ..GeneratorOptions::default()
    });
    let report = generator.generate(&list, size(5), 20, Some(7));

    assert_eq!(report.attempts, 20);
    assert!(report.incomplete > 0);
    assert!(!report.puzzles.is_empty());
    assert!(report.shortfall > 0);
    assert_eq!(report.puzzles.len() + report.shortfall, 20);
    for puzzle in &report.puzzles {
        assert!(puzzle.is_complete());
        assert!(puzzle.unplaced().is_empty());
        check_puzzle(puzzle);
    }
}
