// Sopagrama – word games for an educational app
// Copyright (C) 2026  Sopagrama authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::collections::HashSet;
use super::coord::Coord;
use super::directions;
use super::grid::Grid;

/// Found-word percentage needed for a session to count as passed.
pub const PASS_PERCENTAGE: u32 = 70;

struct WordEntry {
    word: String,
    found: bool,
}

/// Tracks which target words and cells have been found in a grid.
/// Matching is case-insensitive; every word list entry is creditable
/// exactly once, so re-tracing a found word changes nothing.
pub struct Puzzle {
    grid: Grid,
    words: Vec<WordEntry>,
    found_cells: HashSet<Coord>,
    n_words_found: usize,

    pending_word_found: Option<String>,
    pending_finish: bool,

    cells_dirty: bool,
    chips_dirty: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Outcome {
    pub n_words_found: usize,
    pub total_words: usize,
    pub percentage: u32,
    pub passed: bool,
}

impl Puzzle {
    pub fn new<I>(grid: Grid, words: I) -> Puzzle
        where I: IntoIterator<Item = String>
    {
        let words = words.into_iter()
            .map(|word| {
                WordEntry {
                    word: word.to_lowercase(),
                    found: false,
                }
            })
            .collect::<Vec<_>>();

        Puzzle {
            grid,
            words,
            found_cells: HashSet::new(),
            n_words_found: 0,
            pending_word_found: None,
            pending_finish: false,
            cells_dirty: true,
            chips_dirty: true,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    // Rebuilds the path in strict start→end order. The incoming cell
    // set has no reliable order, so the end is taken to be the cell
    // furthest from the start and the line is walked again from
    // scratch.
    fn ordered_line(&self, start: Coord, path: &[Coord]) -> Option<Vec<Coord>> {
        let &end = path.iter().max_by_key(|cell| start.chebyshev(cell))?;

        let d_row = end.row as i64 - start.row as i64;
        let d_col = end.col as i64 - start.col as i64;
        let direction = directions::snap(d_row as i32, d_col as i32)?;

        let mut cells = Vec::with_capacity(path.len());
        let mut coord = start;

        for _ in 0..start.chebyshev(&end) {
            if !self.grid.contains(coord) {
                return None;
            }

            cells.push(coord);
            coord = directions::step(coord, direction);
        }

        if !self.grid.contains(coord) {
            return None;
        }

        cells.push(coord);

        Some(cells)
    }

    fn credit(&mut self, candidate: &str) -> Option<String> {
        let entry = self.words.iter_mut()
            .find(|entry| !entry.found && entry.word == candidate)?;

        entry.found = true;

        Some(entry.word.clone())
    }

    /// Decides whether the cells selected by a completed gesture
    /// spell an unfound target word, reading the line both forwards
    /// and backwards. Returns whether a word was credited.
    pub fn score_path(&mut self, start: Coord, path: &[Coord]) -> bool {
        // A single-cell tap can never match a word
        if path.len() < 2 {
            return false;
        }

        let Some(cells) = self.ordered_line(start, path)
        else {
            return false;
        };

        let candidate = cells.iter()
            .flat_map(|&cell| self.grid.letter(cell).to_lowercase())
            .collect::<String>();
        let reversed = candidate.chars().rev().collect::<String>();

        let Some(word) = self.credit(&candidate)
            .or_else(|| self.credit(&reversed))
        else {
            return false;
        };

        self.n_words_found += 1;
        self.found_cells.extend(cells);
        self.pending_word_found = Some(word);
        self.cells_dirty = true;
        self.chips_dirty = true;

        if self.n_words_found == self.words.len() {
            self.pending_finish = true;
        }

        true
    }

    /// The word credited by the last scored gesture, reported once.
    pub fn pending_word_found(&mut self) -> Option<String> {
        self.pending_word_found.take()
    }

    /// Whether the last credit completed the puzzle, reported once.
    pub fn pending_finish(&mut self) -> bool {
        std::mem::replace(&mut self.pending_finish, false)
    }

    pub fn cells_changed(&mut self) -> bool {
        std::mem::replace(&mut self.cells_dirty, false)
    }

    pub fn chips_changed(&mut self) -> bool {
        std::mem::replace(&mut self.chips_dirty, false)
    }

    pub fn is_found_cell(&self, coord: Coord) -> bool {
        self.found_cells.contains(&coord)
    }

    /// The word list in its original order with found flags, for
    /// styling the word chips.
    pub fn words(&self) -> impl Iterator<Item = (&str, bool)> {
        self.words.iter().map(|entry| (entry.word.as_str(), entry.found))
    }

    pub fn n_words_found(&self) -> usize {
        self.n_words_found
    }

    pub fn total_words(&self) -> usize {
        self.words.len()
    }

    pub fn outcome(&self) -> Outcome {
        let total = self.words.len();
        let percentage = if total == 0 {
            100
        } else {
            (self.n_words_found * 100 / total) as u32
        };

        Outcome {
            n_words_found: self.n_words_found,
            total_words: total,
            percentage,
            passed: percentage >= PASS_PERCENTAGE,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sopa_puzzle() -> Puzzle {
        let grid = Grid::new(
            "SOPAX\n\
             LINCE\n\
             QWTYU\n\
             GHJKM\n\
             ZVBDF"
        ).unwrap();

        Puzzle::new(
            grid,
            ["Sopa", "LINCE"].map(str::to_string),
        )
    }

    fn row_path(row: u32, cols: std::ops::RangeInclusive<u32>) -> Vec<Coord> {
        cols.map(|col| Coord::new(row, col)).collect()
    }

    #[test]
    fn forward_match() {
        let mut puzzle = sopa_puzzle();

        assert!(puzzle.cells_changed());
        assert!(!puzzle.cells_changed());
        assert!(puzzle.chips_changed());

        assert!(puzzle.score_path(Coord::new(0, 0), &row_path(0, 0..=3)));

        assert_eq!(puzzle.pending_word_found().unwrap(), "sopa");
        assert!(puzzle.pending_word_found().is_none());
        assert!(!puzzle.pending_finish());
        assert!(puzzle.cells_changed());
        assert!(puzzle.chips_changed());

        assert_eq!(puzzle.n_words_found(), 1);
        assert!(puzzle.is_found_cell(Coord::new(0, 0)));
        assert!(puzzle.is_found_cell(Coord::new(0, 3)));
        assert!(!puzzle.is_found_cell(Coord::new(0, 4)));

        assert_eq!(
            puzzle.words().collect::<Vec<_>>(),
            vec![("sopa", true), ("lince", false)],
        );
    }

    #[test]
    fn unordered_path_is_rebuilt() {
        let mut puzzle = sopa_puzzle();

        // The same cells in a scrambled order still spell the word
        let path = [
            Coord::new(0, 2),
            Coord::new(0, 0),
            Coord::new(0, 3),
            Coord::new(0, 1),
        ];

        assert!(puzzle.score_path(Coord::new(0, 0), &path));
        assert_eq!(puzzle.pending_word_found().unwrap(), "sopa");
    }

    #[test]
    fn reversed_match() {
        let mut puzzle = sopa_puzzle();

        // Dragged right to left the letters read "apos", which only
        // matches after reversal
        let path = [
            Coord::new(0, 3),
            Coord::new(0, 2),
            Coord::new(0, 1),
            Coord::new(0, 0),
        ];

        assert!(puzzle.score_path(Coord::new(0, 3), &path));
        assert_eq!(puzzle.pending_word_found().unwrap(), "sopa");
    }

    #[test]
    fn no_match_changes_nothing() {
        let mut puzzle = sopa_puzzle();
        let _ = puzzle.cells_changed();

        assert!(!puzzle.score_path(Coord::new(2, 0), &row_path(2, 0..=3)));

        assert!(puzzle.pending_word_found().is_none());
        assert!(!puzzle.cells_changed());
        assert_eq!(puzzle.n_words_found(), 0);
        assert!(!puzzle.is_found_cell(Coord::new(2, 0)));
    }

    #[test]
    fn at_most_once_credit() {
        let mut puzzle = sopa_puzzle();

        assert!(puzzle.score_path(Coord::new(0, 0), &row_path(0, 0..=3)));
        assert!(!puzzle.score_path(Coord::new(0, 0), &row_path(0, 0..=3)));

        assert_eq!(puzzle.n_words_found(), 1);
        assert_eq!(
            puzzle.words().filter(|&(_, found)| found).count(),
            1,
        );
    }

    #[test]
    fn single_cell_tap_is_rejected() {
        let mut puzzle = sopa_puzzle();

        assert!(!puzzle.score_path(Coord::new(0, 0), &[Coord::new(0, 0)]));
        assert!(!puzzle.score_path(Coord::new(0, 0), &[]));
    }

    #[test]
    fn finish_fires_exactly_once() {
        let mut puzzle = sopa_puzzle();

        assert!(puzzle.score_path(Coord::new(0, 0), &row_path(0, 0..=3)));
        assert!(!puzzle.pending_finish());

        assert!(puzzle.score_path(Coord::new(1, 0), &row_path(1, 0..=4)));
        assert!(puzzle.pending_finish());
        assert!(!puzzle.pending_finish());

        // A repeat trace of a found word doesn't re-trigger the win
        assert!(!puzzle.score_path(Coord::new(1, 0), &row_path(1, 0..=4)));
        assert!(!puzzle.pending_finish());
    }

    #[test]
    fn duplicate_list_entries_each_matchable() {
        let grid = Grid::new("ECO\nXYZ\nOCE").unwrap();
        let mut puzzle = Puzzle::new(
            grid,
            ["eco", "eco"].map(str::to_string),
        );

        let path = row_path(0, 0..=2);

        assert!(puzzle.score_path(Coord::new(0, 0), &path));
        assert!(puzzle.score_path(Coord::new(0, 0), &path));
        assert!(!puzzle.score_path(Coord::new(0, 0), &path));

        assert_eq!(puzzle.n_words_found(), 2);
    }

    #[test]
    fn outcome() {
        let mut puzzle = sopa_puzzle();

        assert_eq!(
            puzzle.outcome(),
            Outcome {
                n_words_found: 0,
                total_words: 2,
                percentage: 0,
                passed: false,
            },
        );

        assert!(puzzle.score_path(Coord::new(0, 0), &row_path(0, 0..=3)));

        let outcome = puzzle.outcome();
        assert_eq!(outcome.percentage, 50);
        assert!(!outcome.passed);

        assert!(puzzle.score_path(Coord::new(1, 0), &row_path(1, 0..=4)));

        let outcome = puzzle.outcome();
        assert_eq!(outcome.percentage, 100);
        assert!(outcome.passed);
    }
}
