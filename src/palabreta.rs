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

use std::collections::HashMap;

pub const MAX_ATTEMPTS: usize = 6;

/// How a guessed letter relates to the target word. The variants are
/// ordered so that a status can only ever be upgraded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LetterStatus {
    Absent,
    WrongSpot,
    CorrectSpot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

/// The "Palabreta" guess-the-word game: up to six attempts at a fixed
/// target word, each submitted row scored letter by letter.
pub struct Palabreta {
    target: Vec<char>,
    hint: String,
    rows: Vec<Vec<char>>,
    scores: Vec<Vec<LetterStatus>>,
    entry: Vec<char>,
    keys: HashMap<char, LetterStatus>,
    state: GameState,
}

impl Palabreta {
    pub fn new(target: &str, hint: &str) -> Palabreta {
        Palabreta {
            target: target.chars()
                .flat_map(|ch| ch.to_uppercase())
                .collect(),
            hint: hint.to_string(),
            rows: Vec::new(),
            scores: Vec::new(),
            entry: Vec::new(),
            keys: HashMap::new(),
            state: GameState::Playing,
        }
    }

    pub fn word_len(&self) -> usize {
        self.target.len()
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn target(&self) -> String {
        self.target.iter().collect()
    }

    /// The letters typed into the row currently being filled.
    pub fn entry(&self) -> &[char] {
        &self.entry
    }

    pub fn n_attempts(&self) -> usize {
        self.rows.len()
    }

    pub fn attempt(&self, row: usize) -> Option<(&[char], &[LetterStatus])> {
        Some((self.rows.get(row)?, &self.scores[row]))
    }

    /// The best status seen so far for a letter on the keyboard, or
    /// `None` if it hasn't been guessed yet.
    pub fn key_status(&self, letter: char) -> Option<LetterStatus> {
        let letter = letter.to_uppercase().next()?;

        self.keys.get(&letter).copied()
    }

    pub fn push_letter(&mut self, letter: char) {
        if self.state != GameState::Playing {
            return;
        }

        for letter in letter.to_uppercase() {
            if self.entry.len() < self.target.len() {
                self.entry.push(letter);
            }
        }
    }

    pub fn delete_letter(&mut self) {
        if self.state == GameState::Playing {
            self.entry.pop();
        }
    }

    /// Scores the current row if it is complete, advancing the game.
    /// Returns whether a row was actually submitted.
    pub fn submit(&mut self) -> bool {
        if self.state != GameState::Playing ||
            self.entry.len() < self.target.len()
        {
            return false;
        }

        let attempt = std::mem::take(&mut self.entry);

        // Pass 1: exact positions. Matched target letters are
        // consumed so that duplicates in the guess can't all claim
        // the same target letter.
        let mut remaining = self.target.iter()
            .copied()
            .map(Some)
            .collect::<Vec<_>>();
        let mut scores = vec![LetterStatus::Absent; self.target.len()];

        for (i, &letter) in attempt.iter().enumerate() {
            if letter == self.target[i] {
                scores[i] = LetterStatus::CorrectSpot;
                remaining[i] = None;
            }
        }

        // Pass 2: right letter, wrong position
        for (i, &letter) in attempt.iter().enumerate() {
            if scores[i] == LetterStatus::CorrectSpot {
                continue;
            }

            let slot = remaining.iter_mut()
                .find(|slot| **slot == Some(letter));

            if let Some(slot) = slot {
                scores[i] = LetterStatus::WrongSpot;
                *slot = None;
            }
        }

        for (i, &letter) in attempt.iter().enumerate() {
            let status = self.keys.entry(letter)
                .or_insert(LetterStatus::Absent);
            *status = scores[i].max(*status);
        }

        let won = attempt == self.target;

        self.rows.push(attempt);
        self.scores.push(scores);

        if won {
            self.state = GameState::Won;
        } else if self.rows.len() == MAX_ATTEMPTS {
            self.state = GameState::Lost;
        }

        true
    }
}
