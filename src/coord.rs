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

/// A cell position in the puzzle grid. Zero-based, row-major. Two
/// coords with the same row and column compare and hash equal so they
/// can be used as set and map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: u32,
    pub col: u32,
}

impl Coord {
    pub fn new(row: u32, col: u32) -> Coord {
        Coord { row, col }
    }

    // The number of straight-line steps between two cells that lie on
    // a common row, column or diagonal.
    pub fn chebyshev(&self, other: &Coord) -> u32 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}
