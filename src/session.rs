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

use super::coord::Coord;
use super::directions;
use super::puzzle::Puzzle;

pub const DEFAULT_CELL_SIZE: f32 = 35.0;

/// Highlight state of one grid cell, for the shell to colour with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Default,
    Selecting,
    Found,
}

/// One interactive word-search session. The shell feeds raw pointer
/// positions in; the session converts them to grid cells, keeps a
/// direction-snapped selection path while the pointer is down, and
/// hands the finished path to the puzzle when it is released.
pub struct Session {
    puzzle: Puzzle,
    cell_size: f32,
    start: Option<Coord>,
    current: Option<Coord>,
    path: Vec<Coord>,
}

impl Session {
    pub fn new(puzzle: Puzzle, cell_size: f32) -> Session {
        Session {
            puzzle,
            cell_size,
            start: None,
            current: None,
            path: Vec::new(),
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn puzzle_mut(&mut self) -> &mut Puzzle {
        &mut self.puzzle
    }

    /// The cells of the selection in progress, in start→end order.
    pub fn current_path(&self) -> &[Coord] {
        &self.path
    }

    // Pointer positions outside the grid yield no cell
    fn coord_from_position(&self, x: f32, y: f32) -> Option<Coord> {
        if x < 0.0 || y < 0.0 {
            return None;
        }

        let coord = Coord::new(
            (y / self.cell_size) as u32,
            (x / self.cell_size) as u32,
        );

        self.puzzle.grid().contains(coord).then_some(coord)
    }

    // Regenerates the path as a straight line from the start cell
    // towards the live pointer cell, snapped to the nearest of the
    // eight directions and clamped to the grid.
    fn update_path(&mut self) {
        self.path.clear();

        let (Some(start), Some(current)) = (self.start, self.current)
        else {
            return;
        };

        self.path.push(start);

        let d_row = current.row as i32 - start.row as i32;
        let d_col = current.col as i32 - start.col as i32;

        let Some(direction) = directions::snap(d_row, d_col)
        else {
            return;
        };

        let mut coord = start;

        for _ in 0..start.chebyshev(&current) {
            let next = directions::step(coord, direction);

            if !self.puzzle.grid().contains(next) {
                break;
            }

            self.path.push(next);
            coord = next;
        }
    }

    pub fn drag_start(&mut self, x: f32, y: f32) {
        self.start = self.coord_from_position(x, y);
        self.current = self.start;
        self.update_path();
    }

    pub fn drag_update(&mut self, x: f32, y: f32) {
        if self.start.is_none() {
            return;
        }

        // Ignore out-of-bounds positions, keeping the previous path
        if let Some(coord) = self.coord_from_position(x, y) {
            self.current = Some(coord);
            self.update_path();
        }
    }

    /// Finishes the gesture, scoring the selection against the word
    /// list and resetting the tentative state. Returns whether a word
    /// was credited.
    pub fn drag_end(&mut self) -> bool {
        let credited = match self.start {
            Some(start) => self.puzzle.score_path(start, &self.path),
            None => false,
        };

        self.start = None;
        self.current = None;
        self.path.clear();

        credited
    }

    pub fn cell_state(&self, coord: Coord) -> CellState {
        if self.puzzle.is_found_cell(coord) {
            CellState::Found
        } else if self.path.contains(&coord) {
            CellState::Selecting
        } else {
            CellState::Default
        }
    }
}
