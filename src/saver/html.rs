/*
html.rs

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

//! Export puzzles as a self-contained interactive HTML page.
//!
//! All the puzzles of a [`PuzzleCollection`] are embedded in the page as JSON. The page shows one
//! of them with the word list. The player selects a straight line of cells with the mouse (or
//! a finger); when the selection spells a word, in either direction, the word is marked as
//! found. The "New Puzzle" button switches to another puzzle of the collection.
//!
//! The cell and word list sizes adapt to the grid size and to the number of words.

use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use super::puzzles::PuzzleCollection;
use crate::generator::puzzle::Puzzle;

/// Grid styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStyling {
    /// Cell width and height in pixels.
    pub cell_size: usize,

    /// Letter size in pixels.
    pub font_size: usize,

    /// Space between cells in pixels.
    pub gap: usize,

    /// Cell corner radius in pixels.
    pub border_radius: usize,
}

impl GridStyling {
    /// Return the styling for the given grid size. Large grids get smaller cells.
    pub fn for_size(size: usize) -> Self {
        let (cell_size, font_size, gap, border_radius) = match size {
            0..=10 => (50, 22, 3, 8),
            11..=15 => (45, 20, 3, 6),
            16..=20 => (35, 16, 2, 5),
            _ => (28, 14, 2, 4),
        };
        Self {
            cell_size,
            font_size,
            gap,
            border_radius,
        }
    }

    /// Width of the grid in pixels, including the container padding.
    pub fn grid_width(&self, size: usize) -> usize {
        size * self.cell_size + size.saturating_sub(1) * self.gap + 40
    }
}

/// Word list styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordListStyling {
    pub item_padding: &'static str,
    pub item_font_size: &'static str,
    pub gap: &'static str,

    /// Width of the word list in pixels.
    pub section_width: usize,

    /// Number of columns.
    pub columns: usize,
}

impl WordListStyling {
    /// Return the styling for the given number of words. Long lists use two columns.
    pub fn for_word_count(count: usize) -> Self {
        match count {
            0..=10 => Self {
                item_padding: "15px 20px",
                item_font_size: "1.2em",
                gap: "12px",
                section_width: 300,
                columns: 1,
            },
            11..=20 => Self {
                item_padding: "12px 16px",
                item_font_size: "1.1em",
                gap: "10px",
                section_width: 320,
                columns: 1,
            },
            21..=30 => Self {
                item_padding: "10px 14px",
                item_font_size: "1em",
                gap: "8px",
                section_width: 380,
                columns: 2,
            },
            _ => Self {
                item_padding: "8px 12px",
                item_font_size: "0.95em",
                gap: "6px",
                section_width: 450,
                columns: 2,
            },
        }
    }
}

/// Width of the page container in pixels.
pub fn container_max_width(size: usize, grid: &GridStyling, words: &WordListStyling) -> usize {
    (grid.grid_width(size) + words.section_width + 100).max(1200)
}

/// Puzzle representation used by the page script.
#[derive(Serialize, Debug)]
struct PuzzleData {
    /// Letters, row by row.
    grid: Vec<Vec<String>>,

    /// For each word, the `[row, col]` cells it occupies.
    words: BTreeMap<String, Vec<[usize; 2]>>,
}

impl From<&Puzzle> for PuzzleData {
    fn from(puzzle: &Puzzle) -> Self {
        let grid: Vec<Vec<String>> = puzzle
            .grid()
            .rows()
            .iter()
            .map(|row| row.chars().map(String::from).collect())
            .collect();
        let words: BTreeMap<String, Vec<[usize; 2]>> = puzzle
            .placements()
            .iter()
            .map(|p| {
                (
                    p.word().to_string(),
                    p.positions().iter().map(|c| [c.row, c.col]).collect(),
                )
            })
            .collect();
        Self { grid, words }
    }
}

/// Escape the characters that have a meaning in HTML.
fn escape_html(s: &str) -> String {
    let mut escaped: String = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Build the HTML page and save it.
pub struct HtmlPresenter {
    /// Path to the HTML file.
    save_file: PathBuf,
}

impl HtmlPresenter {
    /// Create an [`HtmlPresenter`] object.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("HTML file: {save_file:?}");
        Self { save_file }
    }

    /// Return the HTML page for the given puzzles.
    pub fn render(collection: &PuzzleCollection) -> Result<String, Box<dyn Error>> {
        let size: usize = collection.size.get();
        let grid: GridStyling = GridStyling::for_size(size);
        let words: WordListStyling = WordListStyling::for_word_count(collection.words.len());
        let max_width: usize = container_max_width(size, &grid, &words);

        let data: Vec<PuzzleData> = collection.puzzles.iter().map(PuzzleData::from).collect();
        // `</` inside a script element would end it
        let puzzles_json: String = serde_json::to_string(&data)?.replace("</", "<\\/");
        let title: String = escape_html(&collection.title);

        let mut page: String = String::with_capacity(16 * 1024);
        page.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        page.push_str("    <meta charset=\"UTF-8\">\n");
        page.push_str(
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
        );
        page.push_str(&format!(
            "    <meta name=\"generator\" content=\"{}\">\n",
            escape_html(&collection.generator)
        ));
        page.push_str(&format!("    <title>{title}</title>\n"));
        page.push_str("    <style>\n");
        page.push_str(&format!(
            "        :root {{
            --cell-size: {}px;
            --font-size: {}px;
            --grid-gap: {}px;
            --border-radius: {}px;
            --word-item-padding: {};
            --word-item-font-size: {};
            --word-gap: {};
            --words-section-width: {}px;
            --words-list-columns: {};
            --grid-columns: {size};
            --container-max-width: {max_width}px;
        }}\n",
            grid.cell_size,
            grid.font_size,
            grid.gap,
            grid.border_radius,
            words.item_padding,
            words.item_font_size,
            words.gap,
            words.section_width,
            words.columns,
        ));
        page.push_str(STYLE);
        page.push_str("    </style>\n</head>\n<body>\n");
        page.push_str("    <div class=\"container\">\n");
        page.push_str(&format!("        <h1>{title}</h1>\n"));
        page.push_str(
            "        <p class=\"subtitle\">Find all the hidden words. Select the first and last letters of a word.</p>\n",
        );
        page.push_str(BODY);
        page.push_str(&format!(
            "        <p class=\"footer\">{} &middot; {} &middot; seed {}</p>\n",
            escape_html(&collection.generator),
            escape_html(&collection.generated_at),
            collection.seed
        ));
        page.push_str("    </div>\n    <script>\n");
        page.push_str(&format!("        const allPuzzles = {puzzles_json};\n"));
        page.push_str(SCRIPT);
        page.push_str("    </script>\n</body>\n</html>\n");
        Ok(page)
    }

    /// Render the page and write it to the file.
    pub fn save(&self, collection: &PuzzleCollection) -> Result<(), Box<dyn Error>> {
        let page: String = Self::render(collection)?;
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        writer.write_all(page.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

const STYLE: &str = r#"
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
            background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
            min-height: 100vh;
            padding: 20px;
            display: flex;
            justify-content: center;
            align-items: center;
        }
        .container {
            background: white;
            border-radius: 20px;
            padding: 40px;
            box-shadow: 0 20px 60px rgba(0,0,0,0.3);
            max-width: var(--container-max-width);
            width: 100%;
        }
        h1 { text-align: center; color: #333; margin-bottom: 10px; }
        .subtitle { text-align: center; color: #666; margin-bottom: 30px; }
        .game-container { display: flex; gap: 40px; justify-content: center; flex-wrap: wrap; }
        .grid-section { display: flex; flex-direction: column; align-items: center; }
        .grid-container {
            padding: 20px;
            background: #f8f9fa;
            border-radius: 15px;
            user-select: none;
            touch-action: none;
        }
        .grid {
            display: grid;
            grid-template-columns: repeat(var(--grid-columns), var(--cell-size));
            gap: var(--grid-gap);
        }
        .cell {
            width: var(--cell-size);
            height: var(--cell-size);
            display: flex;
            align-items: center;
            justify-content: center;
            background: white;
            border: 2px solid #dee2e6;
            border-radius: var(--border-radius);
            font-size: var(--font-size);
            font-weight: bold;
            color: #333;
            cursor: pointer;
        }
        .cell.selecting { background: #bbdefb; border-color: #2196F3; }
        .cell.found { background: #4CAF50; color: white; border-color: #4CAF50; }
        .controls { margin-top: 20px; display: flex; gap: 15px; align-items: center; }
        button {
            padding: 10px 24px;
            border: none;
            border-radius: 8px;
            background: #667eea;
            color: white;
            font-size: 1em;
            cursor: pointer;
        }
        .words-section { flex: 0 0 var(--words-section-width); }
        .words-section h2 { color: #333; margin-bottom: 15px; }
        .word-list {
            display: grid;
            grid-template-columns: repeat(var(--words-list-columns), 1fr);
            gap: var(--word-gap);
        }
        .word-item {
            padding: var(--word-item-padding);
            font-size: var(--word-item-font-size);
            background: #f8f9fa;
            border-radius: 8px;
            font-weight: 600;
            color: #333;
        }
        .word-item.found { text-decoration: line-through; color: #999; background: #e8f5e9; }
        .progress { margin-top: 15px; color: #666; }
        .victory { display: none; margin-top: 15px; color: #4CAF50; font-weight: bold; font-size: 1.3em; }
        .footer { margin-top: 30px; text-align: center; color: #aaa; font-size: 0.8em; }
"#;

const BODY: &str = r#"        <div class="game-container">
            <div class="grid-section">
                <div class="grid-container">
                    <div class="grid" id="grid"></div>
                </div>
                <div class="controls">
                    <button id="new-puzzle">New Puzzle</button>
                    <span id="puzzle-number"></span>
                </div>
            </div>
            <div class="words-section">
                <h2>Words</h2>
                <div class="word-list" id="word-list"></div>
                <div class="progress" id="progress"></div>
                <div class="victory" id="victory">All words found!</div>
            </div>
        </div>
"#;

const SCRIPT: &str = r#"
        let current = 0;
        let found = new Set();
        let start = null;
        let selection = [];

        function cellAt(row, col) {
            return document.querySelector(`.cell[data-row="${row}"][data-col="${col}"]`);
        }

        function clearSelection() {
            selection.forEach(([r, c]) => cellAt(r, c).classList.remove('selecting'));
            selection = [];
        }

        // Snap the selection to one of the eight directions
        function line(from, to) {
            let dr = to[0] - from[0];
            let dc = to[1] - from[1];
            const ar = Math.abs(dr);
            const ac = Math.abs(dc);
            if (ar > 2 * ac) { dc = 0; } else if (ac > 2 * ar) { dr = 0; }
            const len = Math.max(Math.abs(dr), Math.abs(dc));
            const sr = Math.sign(dr);
            const sc = Math.sign(dc);
            const size = allPuzzles[current].grid.length;
            const cells = [];
            for (let k = 0; k <= len; k++) {
                const r = from[0] + k * sr;
                const c = from[1] + k * sc;
                if (r < 0 || c < 0 || r >= size || c >= size) { break; }
                cells.push([r, c]);
            }
            return cells;
        }

        function sameCells(a, b) {
            return a.length === b.length && a.every((p, i) => p[0] === b[i][0] && p[1] === b[i][1]);
        }

        function checkSelection() {
            const words = allPuzzles[current].words;
            for (const word of Object.keys(words)) {
                if (found.has(word)) { continue; }
                const cells = words[word];
                if (sameCells(selection, cells) || sameCells(selection.slice().reverse(), cells)) {
                    found.add(word);
                    cells.forEach(([r, c]) => cellAt(r, c).classList.add('found'));
                    document.querySelector(`.word-item[data-word="${word}"]`).classList.add('found');
                    updateProgress();
                    return;
                }
            }
        }

        function updateProgress() {
            const total = Object.keys(allPuzzles[current].words).length;
            document.getElementById('progress').textContent = `Found ${found.size} of ${total} words`;
            document.getElementById('victory').style.display = found.size === total ? 'block' : 'none';
        }

        function render(index) {
            current = index;
            found = new Set();
            start = null;
            selection = [];
            const puzzle = allPuzzles[index];
            const grid = document.getElementById('grid');
            grid.innerHTML = '';
            puzzle.grid.forEach((row, r) => row.forEach((letter, c) => {
                const cell = document.createElement('div');
                cell.className = 'cell';
                cell.dataset.row = r;
                cell.dataset.col = c;
                cell.textContent = letter;
                grid.appendChild(cell);
            }));
            const list = document.getElementById('word-list');
            list.innerHTML = '';
            Object.keys(puzzle.words).sort().forEach(word => {
                const item = document.createElement('div');
                item.className = 'word-item';
                item.dataset.word = word;
                item.textContent = word;
                list.appendChild(item);
            });
            document.getElementById('puzzle-number').textContent =
                `Puzzle ${index + 1} of ${allPuzzles.length}`;
            updateProgress();
        }

        function cellFromEvent(event) {
            const target = document.elementFromPoint(event.clientX, event.clientY);
            if (!target || !target.classList.contains('cell')) { return null; }
            return [Number(target.dataset.row), Number(target.dataset.col)];
        }

        const gridElement = document.getElementById('grid');
        gridElement.addEventListener('pointerdown', event => {
            start = cellFromEvent(event);
            if (start) {
                clearSelection();
                selection = [start];
                cellAt(start[0], start[1]).classList.add('selecting');
            }
        });
        gridElement.addEventListener('pointermove', event => {
            if (!start) { return; }
            const cell = cellFromEvent(event);
            if (!cell) { return; }
            clearSelection();
            selection = line(start, cell);
            selection.forEach(([r, c]) => cellAt(r, c).classList.add('selecting'));
        });
        document.addEventListener('pointerup', () => {
            if (!start) { return; }
            checkSelection();
            clearSelection();
            start = null;
        });

        document.getElementById('new-puzzle').addEventListener('click', () => {
            if (allPuzzles.length > 1) {
                let next = current;
                while (next === current) { next = Math.floor(Math.random() * allPuzzles.length); }
                render(next);
            } else {
                render(0);
            }
        });

        if (allPuzzles.length > 0) { render(0); }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_styling_shrinks_with_size() {
        assert_eq!(GridStyling::for_size(9).cell_size, 50);
        assert_eq!(GridStyling::for_size(15).cell_size, 45);
        assert_eq!(GridStyling::for_size(20).cell_size, 35);
        assert_eq!(GridStyling::for_size(30).cell_size, 28);
    }

    #[test]
    fn word_list_styling_uses_columns_for_long_lists() {
        assert_eq!(WordListStyling::for_word_count(12).columns, 1);
        assert_eq!(WordListStyling::for_word_count(25).columns, 2);
        assert_eq!(WordListStyling::for_word_count(40).section_width, 450);
    }

    #[test]
    fn container_width_has_a_minimum() {
        let grid = GridStyling::for_size(9);
        let words = WordListStyling::for_word_count(5);
        assert_eq!(container_max_width(9, &grid, &words), 1200);

        let grid = GridStyling::for_size(30);
        // 30 * 28 + 29 * 2 + 40 = 938
        assert_eq!(grid.grid_width(30), 938);
        assert_eq!(container_max_width(30, &grid, &words), 1338);
    }

    #[test]
    fn escape() {
        assert_eq!(
            escape_html("Tom & \"Jerry\" <b>"),
            "Tom &amp; &quot;Jerry&quot; &lt;b&gt;"
        );
    }
}
