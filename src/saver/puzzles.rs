/*
puzzles.rs

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

//! Save and restore generated puzzles in JSON format.
//!
//! The saved object is a serialization of the [`PuzzleCollection`] object by using [`serde`].

use chrono::{DateTime, Local};
use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::config::{PKGNAME, VERSION};
use crate::generator::grid_size::GridSize;
use crate::generator::puzzle::Puzzle;
use crate::generator::variants::VariantReport;
use crate::generator::word::Word;

/// Puzzles produced by one run, with their parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PuzzleCollection {
    /// Title displayed above the puzzles.
    pub title: String,

    /// Name and version of the program that generated the puzzles.
    pub generator: String,

    /// Generation date in RFC 3339 format.
    pub generated_at: String,

    /// Seed that reproduces the puzzles.
    pub seed: u64,

    /// Grid size.
    pub size: GridSize,

    /// Words to find.
    pub words: Vec<Word>,

    /// Generated puzzles.
    pub puzzles: Vec<Puzzle>,
}

impl PuzzleCollection {
    /// Create a [`PuzzleCollection`] object from the result of a generation.
    pub fn new(title: &str, words: &[Word], size: GridSize, report: VariantReport) -> Self {
        let now: DateTime<Local> = Local::now();
        Self {
            title: title.to_string(),
            generator: format!("{PKGNAME} {VERSION}"),
            generated_at: now.to_rfc3339(),
            seed: report.seed,
            size,
            words: words.to_vec(),
            puzzles: report.puzzles,
        }
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }
}

/// Object to save and restore a [`PuzzleCollection`] object.
pub struct SaverPuzzles {
    /// Path to the save file.
    save_file: PathBuf,
}

impl SaverPuzzles {
    /// Create a [`SaverPuzzles`] object.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Puzzle file: {save_file:?}");
        Self { save_file }
    }

    /// Retrieve the saved [`PuzzleCollection`] object.
    ///
    /// Return None if the file does not exist.
    pub fn get_puzzles(&self) -> Result<Option<PuzzleCollection>, Box<dyn Error>> {
        let file: File;
        match File::open(&self.save_file) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let collection: PuzzleCollection = serde_json::from_reader(reader)?;
        Ok(Some(collection))
    }

    /// Save the provided [`PuzzleCollection`] object.
    pub fn save_puzzles(&self, collection: &PuzzleCollection) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, collection)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the saved file.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}
