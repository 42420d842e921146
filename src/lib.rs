/*
lib.rs

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

//! Generate word search puzzles.
//!
//! The [`generator`] module places a list of words on a square grid, along the eight
//! straight-line directions, and fills the remaining cells with random letters. It repeats the
//! process to produce several distinct puzzles.
//!
//! The other modules are the front end: [`cli_options`] parses the command line,
//! [`word_list`] loads and checks the words, [`draw`] renders puzzles as text, and [`saver`]
//! exports them as JSON or as an interactive HTML page.

pub mod cli_options;
pub mod config;
pub mod draw;
pub mod generator;
pub mod saver;
pub mod word_list;
