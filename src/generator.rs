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
use rand::Rng;
use rand::RngCore;
use super::directions::{Direction, ALL_DIRECTIONS};
use super::grid::{self, Grid};

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    EmptyWord,
    WordTooLong(String),
    WordsDontFit(u32),
    GridError(grid::Error),
}

impl From<grid::Error> for Error {
    fn from(e: grid::Error) -> Error {
        Error::GridError(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EmptyWord => write!(f, "empty word"),
            Error::WordTooLong(word) => {
                write!(f, "word {} is longer than the grid side", word)
            },
            Error::WordsDontFit(size) => {
                write!(
                    f,
                    "could not place every word in a {}x{} grid",
                    size,
                    size,
                )
            },
            Error::GridError(e) => e.fmt(f),
        }
    }
}

/// Builds a puzzle grid from a word list. The rest of the crate only
/// depends on this trait so the placement algorithm can be swapped
/// out without touching the selection or verification logic.
pub trait Generate {
    /// Produces a `size`×`size` grid in which every word appears at
    /// least once as a contiguous straight run along one of the eight
    /// directions, with the remaining cells filled with noise
    /// letters.
    fn generate(
        &self,
        words: &[String],
        size: u32,
        rng: &mut dyn RngCore,
    ) -> Result<Grid, Error>;
}

/// The default generator: random position and direction per word with
/// bounded retries, restarting the whole grid when a word cannot be
/// placed. Words may cross wherever they share a letter.
pub struct RandomPlacer {
    pub max_word_tries: u32,
    pub max_grid_tries: u32,
}

impl Default for RandomPlacer {
    fn default() -> RandomPlacer {
        RandomPlacer {
            max_word_tries: 200,
            max_grid_tries: 100,
        }
    }
}

fn fits(
    cells: &[Option<char>],
    size: u32,
    word: &[char],
    row: u32,
    col: u32,
    direction: Direction,
) -> bool {
    let end_row = row as i64 +
        direction.row_step() as i64 * (word.len() as i64 - 1);
    let end_col = col as i64 +
        direction.col_step() as i64 * (word.len() as i64 - 1);

    if end_row < 0 || end_row >= size as i64 ||
        end_col < 0 || end_col >= size as i64
    {
        return false;
    }

    word.iter().enumerate().all(|(i, &letter)| {
        let r = row as i64 + direction.row_step() as i64 * i as i64;
        let c = col as i64 + direction.col_step() as i64 * i as i64;
        let cell = cells[(r * size as i64 + c) as usize];

        cell.is_none() || cell == Some(letter)
    })
}

fn write_word(
    cells: &mut [Option<char>],
    size: u32,
    word: &[char],
    row: u32,
    col: u32,
    direction: Direction,
) {
    for (i, &letter) in word.iter().enumerate() {
        let r = row as i64 + direction.row_step() as i64 * i as i64;
        let c = col as i64 + direction.col_step() as i64 * i as i64;

        cells[(r * size as i64 + c) as usize] = Some(letter);
    }
}

impl RandomPlacer {
    fn place_word(
        &self,
        cells: &mut [Option<char>],
        size: u32,
        word: &[char],
        rng: &mut dyn RngCore,
    ) -> bool {
        for _ in 0..self.max_word_tries {
            let row = rng.gen_range(0..size);
            let col = rng.gen_range(0..size);
            let direction = ALL_DIRECTIONS[rng.gen_range(0..8)];

            if fits(cells, size, word, row, col, direction) {
                write_word(cells, size, word, row, col, direction);
                return true;
            }
        }

        false
    }

    fn try_grid(
        &self,
        words: &[Vec<char>],
        size: u32,
        rng: &mut dyn RngCore,
    ) -> Option<Vec<Option<char>>> {
        let mut cells = vec![None; (size * size) as usize];

        for word in words {
            if !self.place_word(&mut cells, size, word, rng) {
                return None;
            }
        }

        Some(cells)
    }
}

impl Generate for RandomPlacer {
    fn generate(
        &self,
        words: &[String],
        size: u32,
        rng: &mut dyn RngCore,
    ) -> Result<Grid, Error> {
        let mut letter_words = Vec::with_capacity(words.len());

        for word in words {
            let letters = word.chars()
                .flat_map(|ch| ch.to_uppercase())
                .collect::<Vec<char>>();

            if letters.is_empty() {
                return Err(Error::EmptyWord);
            }

            if letters.len() > size as usize {
                return Err(Error::WordTooLong(word.clone()));
            }

            letter_words.push(letters);
        }

        // Longest words are the hardest to place, so place them first
        letter_words.sort_unstable_by_key(|word| std::cmp::Reverse(word.len()));

        // Noise letters come from the same alphabet as the words so
        // that filler cells look plausible.
        let mut alphabet = letter_words.iter()
            .flatten()
            .copied()
            .collect::<Vec<char>>();
        alphabet.sort_unstable();
        alphabet.dedup();

        if alphabet.is_empty() {
            alphabet.extend('A'..='Z');
        }

        for attempt in 0..self.max_grid_tries {
            let Some(cells) = self.try_grid(&letter_words, size, rng)
            else {
                log::debug!(
                    "grid placement attempt {} failed, restarting",
                    attempt + 1,
                );
                continue;
            };

            let cells = cells.into_iter()
                .map(|cell| {
                    cell.unwrap_or_else(|| {
                        alphabet[rng.gen_range(0..alphabet.len())]
                    })
                })
                .collect::<Vec<char>>();

            return Ok(Grid::from_cells(cells, size)?);
        }

        Err(Error::WordsDontFit(size))
    }
}
