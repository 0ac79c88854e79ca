//! Board files: a word list plus a 4x4 board in one text file.
//!
//! ```text
//! dic
//! CAT
//! DOG
//! /dic
//! tab
//! C,A,T,S
//! O,X,X,X
//! X,X,X,X
//! X,X,X,X
//! /tab
//! ```
//!
//! Lines are trimmed. Dictionary words are upper-cased. Board cells are comma separated and
//! only their first character is used; blank cells keep [`EMPTY`](crate::core::grid::EMPTY).
//! Each board line starts a new row, and a line with more than four cells runs on into the
//! following rows.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::cell::Cell;
use crate::core::grid::{Grid, GRID_SIZE};
use crate::dictionary::Dictionary;
use crate::error::PuzzleError;

const DIC_OPEN: &str = "dic";
const DIC_CLOSE: &str = "/dic";
const TAB_OPEN: &str = "tab";
const TAB_CLOSE: &str = "/tab";

/// A parsed board file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Puzzle {
    pub dictionary: Dictionary,
    pub grid: Grid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Outside,
    Dictionary,
    Board,
}

pub fn parse_puzzle(text: &str) -> Puzzle {
    let mut puzzle = Puzzle::default();
    let mut section = Section::Outside;
    let mut row = 0usize;

    for raw in text.lines() {
        let line = raw.trim();
        match line {
            DIC_OPEN => {
                section = Section::Dictionary;
                continue;
            }
            TAB_OPEN => {
                section = Section::Board;
                continue;
            }
            DIC_CLOSE | TAB_CLOSE => {
                section = Section::Outside;
                continue;
            }
            _ => {}
        }
        if line.is_empty() {
            continue;
        }

        match section {
            Section::Dictionary => {
                puzzle.dictionary.insert(line);
            }
            Section::Board => {
                row += place_board_line(&mut puzzle.grid, row, line);
            }
            Section::Outside => {}
        }
    }

    debug!(
        words = puzzle.dictionary.len(),
        rows = row,
        "parsed board file"
    );
    puzzle
}

/// Write one `tab` line starting at `row`; returns how many rows it covered.
fn place_board_line(grid: &mut Grid, row: usize, line: &str) -> usize {
    let mut cells: Vec<&str> = line.split(',').map(str::trim).collect();
    while cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    for (k, text) in cells.iter().enumerate() {
        let Some(letter) = text.chars().next() else {
            continue;
        };
        let r = row + k / GRID_SIZE;
        let c = k % GRID_SIZE;
        let cell = Cell::new(r as i32, c as i32);
        if grid.set(cell, letter).is_err() {
            warn!(%cell, %letter, "board cell outside the grid ignored");
        }
    }
    cells.len().div_ceil(GRID_SIZE).max(1)
}

/// Replace the body of the first `dic` section with `dictionary` and drop any later `dic`
/// sections; other lines are kept (trimmed).
///
/// A file with no `dic` section gets one appended.
pub fn rewrite_dictionary(text: &str, dictionary: &Dictionary) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut wrote = false;
    let mut lines = text.lines();

    while let Some(raw) = lines.next() {
        let line = raw.trim();
        if line == DIC_OPEN {
            if !wrote {
                push_dictionary(&mut out, dictionary);
            }
            for rest in lines.by_ref() {
                if rest.trim() == DIC_CLOSE {
                    break;
                }
            }
            wrote = true;
        } else {
            out.push(line.to_string());
        }
    }

    if !wrote {
        push_dictionary(&mut out, dictionary);
    }

    let mut text = out.join("\n");
    text.push('\n');
    text
}

fn push_dictionary(out: &mut Vec<String>, dictionary: &Dictionary) {
    out.push(DIC_OPEN.to_string());
    out.extend(dictionary.iter().cloned());
    out.push(DIC_CLOSE.to_string());
}

pub fn load_puzzle(path: &Path) -> Result<Puzzle, PuzzleError> {
    let text = fs::read_to_string(path).map_err(|source| PuzzleError::Io {
        stage: "puzzle_load_read",
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_puzzle(&text))
}

/// Rewrite the dictionary section of the board file at `path` in place.
pub fn save_dictionary(path: &Path, dictionary: &Dictionary) -> Result<(), PuzzleError> {
    let text = fs::read_to_string(path).map_err(|source| PuzzleError::Io {
        stage: "puzzle_save_read",
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, rewrite_dictionary(&text, dictionary)).map_err(|source| PuzzleError::Io {
        stage: "puzzle_save_write",
        path: path.to_path_buf(),
        source,
    })
}
