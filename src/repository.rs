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
use std::fmt;
use serde::{Deserialize, Serialize};

/// A data-store call failed, typically from lost connectivity. The
/// shell decides whether to retry; the engines only propagate it.
#[derive(Debug)]
pub enum Error {
    Unavailable(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Unavailable(what) => {
                write!(f, "data unavailable: {}", what)
            },
        }
    }
}

/// One multiple-choice question as stored. The storage backend is
/// responsible for mapping its own field names onto this record; the
/// engines never see raw storage rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionRow {
    pub id: String,
    pub prompt: String,
    pub choice_a: String,
    pub choice_b: String,
    #[serde(default)]
    pub choice_c: Option<String>,
    pub correct_choice: String,
    #[serde(default)]
    pub feedback_a: Option<String>,
    #[serde(default)]
    pub feedback_b: Option<String>,
    #[serde(default)]
    pub feedback_c: Option<String>,
    #[serde(default)]
    pub feedback_correct: Option<String>,
    pub topic_id: String,
    pub area_id: String,
}

/// One persisted per-(user, topic, simulator) score record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub id: String,
    pub user_id: String,
    pub topic_id: String,
    pub simulator_id: String,
    pub percentage: f64,
    pub elapsed_seconds: u64,
    pub timestamp: String,
}

pub trait Repository {
    fn words_for_puzzle(&self, puzzle_id: &str)
        -> Result<Vec<String>, Error>;

    fn questions_for_area(&self, area_id: &str)
        -> Result<Vec<QuestionRow>, Error>;

    fn topic_names(&self, topic_ids: &[String])
        -> Result<HashMap<String, String>, Error>;

    /// Stores a result, keyed by (user, topic, simulator). A row
    /// already existing for that key is overwritten, never
    /// duplicated.
    fn upsert_result(&mut self, row: ResultRow) -> Result<(), Error>;
}

/// In-memory store used by the tests and the demo tooling.
#[derive(Default)]
pub struct MemoryRepository {
    words: HashMap<String, Vec<String>>,
    questions: Vec<QuestionRow>,
    topics: HashMap<String, String>,
    results: Vec<ResultRow>,
}

impl MemoryRepository {
    pub fn new() -> MemoryRepository {
        MemoryRepository::default()
    }

    pub fn add_words<I>(&mut self, puzzle_id: &str, words: I)
        where I: IntoIterator<Item = String>
    {
        self.words.entry(puzzle_id.to_string())
            .or_default()
            .extend(words);
    }

    pub fn add_question(&mut self, question: QuestionRow) {
        self.questions.push(question);
    }

    pub fn add_topic(&mut self, topic_id: &str, name: &str) {
        self.topics.insert(topic_id.to_string(), name.to_string());
    }

    pub fn results(&self) -> &[ResultRow] {
        &self.results
    }
}

impl Repository for MemoryRepository {
    fn words_for_puzzle(&self, puzzle_id: &str)
        -> Result<Vec<String>, Error>
    {
        // An unknown puzzle is a valid-but-empty state
        Ok(self.words.get(puzzle_id).cloned().unwrap_or_default())
    }

    fn questions_for_area(&self, area_id: &str)
        -> Result<Vec<QuestionRow>, Error>
    {
        Ok(self.questions.iter()
            .filter(|question| question.area_id == area_id)
            .cloned()
            .collect())
    }

    fn topic_names(&self, topic_ids: &[String])
        -> Result<HashMap<String, String>, Error>
    {
        Ok(topic_ids.iter()
            .filter_map(|id| {
                self.topics.get(id)
                    .map(|name| (id.clone(), name.clone()))
            })
            .collect())
    }

    fn upsert_result(&mut self, row: ResultRow) -> Result<(), Error> {
        let existing = self.results.iter_mut().find(|result| {
            result.user_id == row.user_id &&
                result.topic_id == row.topic_id &&
                result.simulator_id == row.simulator_id
        });

        match existing {
            Some(result) => {
                log::debug!(
                    "overwriting result for ({}, {}, {})",
                    row.user_id,
                    row.topic_id,
                    row.simulator_id,
                );
                *result = row;
            },
            None => self.results.push(row),
        }

        Ok(())
    }
}
