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

use std::fmt;
use super::coord::Coord;

/// A square matrix of uppercase letters. Built once per game session,
/// either by the generator or by parsing a string, and immutable
/// afterwards.
#[derive(Debug, Clone)]
pub struct Grid {
    values: Box<[char]>,
    size: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    EmptyGrid,
    NotSquare,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyGrid => write!(f, "empty grid"),
            Error::NotSquare => write!(f, "grid is not square"),
        }
    }
}

fn uppercase(ch: char) -> char {
    ch.to_uppercase().next().unwrap_or(ch)
}

impl Grid {
    /// Parses a grid from one line of text per row. Every non-empty
    /// line must have the same number of letters as there are lines.
    /// Letters are normalised to uppercase.
    pub fn new(s: &str) -> Result<Grid, Error> {
        let mut values = Vec::new();
        let mut n_rows = 0;
        let mut width = 0;

        for line in s.lines() {
            let line = line.trim_end();

            if line.is_empty() {
                continue;
            }

            let row_start = values.len();
            values.extend(line.chars().map(uppercase));

            // Every row must be as wide as the first
            if n_rows == 0 {
                width = values.len();
            } else if values.len() - row_start != width {
                return Err(Error::NotSquare);
            }

            n_rows += 1;
        }

        if n_rows == 0 {
            return Err(Error::EmptyGrid);
        }

        if values.len() != n_rows * n_rows {
            return Err(Error::NotSquare);
        }

        Ok(Grid {
            values: values.into_boxed_slice(),
            size: n_rows as u32,
        })
    }

    /// Wraps a row-major cell buffer produced by the generator. The
    /// buffer length must be `size * size`.
    pub fn from_cells(cells: Vec<char>, size: u32) -> Result<Grid, Error> {
        if size == 0 {
            return Err(Error::EmptyGrid);
        }

        if cells.len() != (size * size) as usize {
            return Err(Error::NotSquare);
        }

        Ok(Grid {
            values: cells.into_iter().map(uppercase).collect(),
            size,
        })
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn at(&self, row: u32, col: u32) -> char {
        assert!(col < self.size);

        self.values[(row * self.size + col) as usize]
    }

    pub fn letter(&self, coord: Coord) -> char {
        self.at(coord.row, coord.col)
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                write!(f, "{}", self.at(row, col))?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_grid() {
        assert_eq!(Grid::new("").unwrap_err(), Error::EmptyGrid);
        assert_eq!(Grid::new("   \n  ").unwrap_err(), Error::EmptyGrid);
        assert_eq!(&Grid::new("").unwrap_err().to_string(), "empty grid");
    }

    #[test]
    fn not_square() {
        assert_eq!(Grid::new("ab\ncd\nef").unwrap_err(), Error::NotSquare);
        assert_eq!(Grid::new("abc\nde\nfgh").unwrap_err(), Error::NotSquare);
        assert_eq!(
            &Grid::new("ab").unwrap_err().to_string(),
            "grid is not square",
        );

        // Ragged rows whose letters happen to add up to a square
        // count must not shift across rows
        assert_eq!(Grid::new("abc\na").unwrap_err(), Error::NotSquare);
    }

    #[test]
    fn parse() {
        let grid = Grid::new("sopa\nxyzw\nabcd\nefgh\n\n").unwrap();

        assert_eq!(grid.size(), 4);
        assert_eq!(grid.at(0, 0), 'S');
        assert_eq!(grid.at(0, 3), 'A');
        assert_eq!(grid.at(2, 1), 'B');
        assert_eq!(grid.letter(Coord::new(3, 3)), 'H');
    }

    #[test]
    fn from_cells() {
        let grid = Grid::from_cells(vec!['a', 'b', 'c', 'd'], 2).unwrap();

        assert_eq!(grid.size(), 2);
        assert_eq!(grid.at(1, 0), 'C');

        assert_eq!(
            Grid::from_cells(vec!['a', 'b', 'c'], 2).unwrap_err(),
            Error::NotSquare,
        );
        assert_eq!(
            Grid::from_cells(Vec::new(), 0).unwrap_err(),
            Error::EmptyGrid,
        );
    }

    #[test]
    fn contains() {
        let grid = Grid::new("ab\ncd").unwrap();

        assert!(grid.contains(Coord::new(0, 0)));
        assert!(grid.contains(Coord::new(1, 1)));
        assert!(!grid.contains(Coord::new(2, 0)));
        assert!(!grid.contains(Coord::new(0, 2)));
    }

    #[test]
    fn display() {
        let grid = Grid::new("ab\ncd").unwrap();

        assert_eq!(&grid.to_string(), "AB\nCD\n");
    }
}
