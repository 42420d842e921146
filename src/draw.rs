/*
draw.rs

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

//! Render puzzles as plain text.
//!
//! Used by the `text` output format, and for the solution key.

use std::collections::HashSet;

use crate::generator::grid::{Position, UNSET_CELL};
use crate::generator::puzzle::Puzzle;

/// Return the grid, one row per line, letters separated by a space.
pub fn render_grid(puzzle: &Puzzle) -> String {
    let mut s: String = String::new();
    for row in puzzle.grid().rows() {
        let letters: Vec<String> = row.chars().map(String::from).collect();
        s.push_str(&letters.join(" "));
        s.push('\n');
    }
    s
}

/// Return the solution: the letters of the placed words, and [`UNSET_CELL`] for the filler.
pub fn render_solution(puzzle: &Puzzle) -> String {
    let used: HashSet<Position> = puzzle
        .placements()
        .iter()
        .flat_map(|p| p.positions().iter().copied())
        .collect();
    let n: usize = puzzle.size().get();
    let mut s: String = String::with_capacity(n * n * 2);

    for row in 0..n {
        let mut cells: Vec<String> = Vec::with_capacity(n);
        for col in 0..n {
            let position: Position = Position::new(row, col);
            let c: char = if used.contains(&position) {
                puzzle.letter_at(position).unwrap_or(UNSET_CELL)
            } else {
                UNSET_CELL
            };
            cells.push(c.to_string());
        }
        s.push_str(&cells.join(" "));
        s.push('\n');
    }
    s
}

/// Return the word list, sorted alphabetically, with the start cell and the direction of each
/// placed word.
pub fn render_words(puzzle: &Puzzle) -> String {
    let mut lines: Vec<String> = puzzle
        .placements()
        .iter()
        .map(|p| {
            format!(
                "{:<12} row {:>2}, col {:>2}, {}",
                p.word().as_str(),
                p.start().row + 1,
                p.start().col + 1,
                p.direction()
            )
        })
        .collect();
    for w in puzzle.unplaced() {
        lines.push(format!("{:<12} (not placed)", w.as_str()));
    }
    lines.sort();
    let mut s: String = lines.join("\n");
    s.push('\n');
    s
}
