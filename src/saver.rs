/*
saver.rs

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

//! Export generated puzzles.
//!
//! [`puzzles::PuzzleCollection`] groups the puzzles of one run with their title and
//! parameters. [`puzzles::SaverPuzzles`] saves and restores it in JSON format, and
//! [`html::HtmlPresenter`] turns it into a self-contained interactive HTML page.

pub mod html;
pub mod puzzles;
