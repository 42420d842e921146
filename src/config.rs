/*
config.rs

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

//! Build-time configuration and default values.

/// Name of the program.
pub const PKGNAME: &str = env!("CARGO_PKG_NAME");

/// Version of the program.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Long version message, displayed by `--version`.
pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);

/// Smallest grid size.
pub const MIN_GRID_SIZE: usize = 5;

/// Largest grid size. Larger grids are not practical to display.
pub const MAX_GRID_SIZE: usize = 30;

/// Grid size when none is given on the command line.
pub const DEFAULT_GRID_SIZE: usize = 9;

/// Number of puzzles when none is given on the command line.
pub const DEFAULT_PUZZLE_COUNT: usize = 10;

/// Output file when none is given on the command line.
pub const DEFAULT_OUTPUT: &str = "interactive_word_search.html";

/// Puzzle title when none is given on the command line.
pub const DEFAULT_TITLE: &str = "Word Search Puzzle";

/// Maximum number of start positions tried per direction when placing a word.
pub const TRIALS_PER_DIRECTION: usize = 100;

/// Number of assembly attempts allowed per requested puzzle.
pub const ATTEMPTS_PER_VARIANT: usize = 10;

/// Words used when the user does not provide any (Christmas theme, in Italian).
pub const DEFAULT_WORDS: [&str; 12] = [
    "addobbo", "angelo", "giuseppe", "cometa", "stella", "maria", "magi", "betlemme", "bue",
    "natale", "asinello", "stalla",
];
