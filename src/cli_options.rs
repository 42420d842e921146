/*
cli_options.rs

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

//! Process command-line options.
//!
//! # Examples
//!
//! Generate ten 9x9 puzzles for the built-in word list, as an interactive HTML page:
//!
//! ```text
//! $ wordsearch
//! ```
//!
//! Generate three 12x12 puzzles from a word file, and print them with their solution:
//!
//! ```text
//! $ wordsearch -s 12 -i words.txt -c 3 -f text --solution
//! ```
//!
//! Generate reproducible puzzles with four threads, and print some statistics:
//!
//! ```text
//! $ wordsearch -w cat dog mouse -c 5 -j 4 --seed 42 --summary -f json -o puzzles.json
//! ```

use clap::{Parser, ValueEnum};
use log::{LevelFilter, debug, error};
use std::path::PathBuf;

use crate::config::{
    COPYRIGHT_NOTICE, DEFAULT_GRID_SIZE, DEFAULT_OUTPUT, DEFAULT_PUZZLE_COUNT, DEFAULT_TITLE,
};
use crate::draw;
use crate::generator::direction::{Direction, DirectionCategory, NUM_DIRECTIONS};
use crate::generator::grid_size::GridSize;
use crate::generator::variants::{GeneratorOptions, VariantGenerator, VariantReport};
use crate::generator::word::Word;
use crate::saver::html::HtmlPresenter;
use crate::saver::puzzles::{PuzzleCollection, SaverPuzzles};
use crate::word_list;

/// Format of the generated puzzles.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Interactive HTML page
    Html,

    /// JSON document
    Json,

    /// Plain text, printed on the standard output
    Text,
}

/// Generate word search puzzles.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Grid size (the grid is size x size)
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,

    /// Words to find, separated by spaces
    #[arg(short, long, num_args = 1..)]
    words: Vec<String>,

    /// File with one word per line (takes precedence over --words)
    #[arg(short = 'i', long)]
    wordfile: Option<PathBuf>,

    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Puzzle title
    #[arg(short, long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = DEFAULT_PUZZLE_COUNT)]
    count: usize,

    /// Output format
    #[arg(value_enum, short, long, default_value_t = OutputFormat::Html)]
    format: OutputFormat,

    /// Seed of the random generator, for reproducible puzzles
    #[arg(long)]
    seed: Option<u64>,

    /// Number of threads generating puzzles
    #[arg(short, long, default_value_t = 1)]
    jobs: usize,

    /// Minimum percentage of diagonal words in each puzzle
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=100))]
    min_diagonal: u8,

    /// With the text format, print the solution instead of the grid
    #[arg(long, default_value_t = false)]
    solution: bool,

    /// Print some statistics after generating the puzzles
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Initialize the logger. `--debug` overrides `RUST_LOG`.
fn init_logger(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

/// Select the words from the word file, the `--words` option, or the built-in list.
fn select_words(args: &Args) -> Result<Vec<Word>, String> {
    let words: Vec<Word> = if let Some(path) = &args.wordfile {
        word_list::load_from_file(path)
            .map_err(|e| format!("Cannot read the words from {}: {e}", path.display()))?
    } else if !args.words.is_empty() {
        word_list::parse_words(&args.words).map_err(|e| e.to_string())?
    } else {
        debug!("Using the built-in word list");
        word_list::default_words()
    };
    Ok(words)
}

/// Save the puzzles, or print them for the text format.
fn output(
    args: &Args,
    words: &[Word],
    size: GridSize,
    report: VariantReport,
) -> Result<(), String> {
    let collection: PuzzleCollection = PuzzleCollection::new(&args.title, words, size, report);

    match args.format {
        OutputFormat::Html => {
            HtmlPresenter::new(args.output.clone())
                .save(&collection)
                .map_err(|e| format!("Cannot write {}: {e}", args.output.display()))?;
            println!(
                "Saved {} puzzles to {}",
                collection.len(),
                args.output.display()
            );
        }
        OutputFormat::Json => {
            SaverPuzzles::new(args.output.clone())
                .save_puzzles(&collection)
                .map_err(|e| format!("Cannot write {}: {e}", args.output.display()))?;
            println!(
                "Saved {} puzzles to {}",
                collection.len(),
                args.output.display()
            );
        }
        OutputFormat::Text => {
            println!("{}", collection.title);
            for (i, puzzle) in collection.puzzles.iter().enumerate() {
                println!("\nPuzzle {}/{}\n", i + 1, collection.len());
                if args.solution {
                    print!("{}", draw::render_solution(puzzle));
                } else {
                    print!("{}", draw::render_grid(puzzle));
                }
                println!();
                print!("{}", draw::render_words(puzzle));
            }
        }
    }
    Ok(())
}

/// Print the statistics of the generation.
fn print_summary(report: &VariantReport) {
    let mut usage: [usize; NUM_DIRECTIONS] = [0; NUM_DIRECTIONS];
    for puzzle in &report.puzzles {
        for (total, count) in usage.iter_mut().zip(puzzle.direction_counts()) {
            *total += count;
        }
    }
    let n: f32 = report.puzzles.len().max(1) as f32;

    println!(
        "
           puzzles = {}/{}
          attempts = {}
        incomplete = {}
        unbalanced = {}
        duplicates = {}
              seed = {}
        total time = {}s
      average time = {}s",
        report.puzzles.len(),
        report.requested,
        report.attempts,
        report.incomplete,
        report.unbalanced,
        report.duplicates,
        report.seed,
        report.duration,
        report.duration / report.attempts.max(1) as f32
    );
    println!("\nAverage direction usage per puzzle:");
    for d in Direction::ALL {
        println!("{:>18} = {:.2}", d.to_string(), usage[d.index()] as f32 / n);
    }
    for category in [
        DirectionCategory::Horizontal,
        DirectionCategory::Vertical,
        DirectionCategory::Diagonal,
    ] {
        let total: usize = report
            .puzzles
            .iter()
            .filter_map(|p| p.category_counts().get(&category).copied())
            .sum();
        println!("{:>18} = {:.2}", category.to_string(), total as f32 / n);
    }
}

/// Parse and process command-line options.
///
/// Return the exit code of the program.
pub fn parse() -> u8 {
    let args: Args = Args::parse();
    init_logger(args.debug);
    debug!("{args:?}");

    let size: GridSize = match GridSize::new(args.size) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };
    let words: Vec<Word> = match select_words(&args) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };
    let words: Vec<Word> = match word_list::validate(words, size) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    println!("Generating {} puzzles with grid size {size}", args.count);
    println!(
        "Words: {}",
        words
            .iter()
            .map(|w| w.as_str())
            .collect::<Vec<&str>>()
            .join(", ")
    );

    let generator: VariantGenerator = VariantGenerator::new(GeneratorOptions {
        workers: args.jobs.max(1),
        min_diagonal_percent: args.min_diagonal as usize,
        ..GeneratorOptions::default()
    });
    let report: VariantReport = generator.generate(&words, size, args.count, args.seed);

    if !report.is_complete() {
        eprintln!(
            "Warning: only {} puzzles could be generated out of {} requested.",
            report.puzzles.len(),
            report.requested
        );
        eprintln!("Try using a larger grid size or fewer/shorter words.");
    }
    println!("Seed: {} (use --seed to reproduce these puzzles)", report.seed);
    if report.puzzles.is_empty() && report.requested > 0 {
        error!("No puzzle generated");
        return 1;
    }
    if args.summary {
        print_summary(&report);
    }

    if let Err(e) = output(&args, &words, size, report) {
        eprintln!("Error: {e}");
        return 1;
    }
    0
}
