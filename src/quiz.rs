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
use std::time::Instant;
use rand::RngCore;
use rand::seq::SliceRandom;
use super::repository::{self, QuestionRow, Repository, ResultRow};

/// Shown in place of a topic name the store doesn't know.
pub const UNKNOWN_TOPIC: &str = "Desconocido";

/// One question as presented in an attempt, with its choice order
/// already shuffled and frozen.
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub choices: Vec<String>,
    pub topic_id: String,
    pub topic_name: String,
    correct: String,
    feedback: HashMap<String, String>,
}

/// One quiz attempt, from question selection to submission. Created
/// when the quiz screen loads and consumed exactly once by
/// [`submit`](Attempt::submit).
pub struct Attempt {
    questions: Vec<Question>,
    answers: HashMap<usize, String>,
    started: Instant,
}

#[derive(Debug, PartialEq)]
pub struct Detail {
    pub prompt: String,
    pub selected: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
    /// The feedback text attached to the choice the user selected,
    /// if any.
    pub feedback: Option<String>,
}

#[derive(Debug, PartialEq)]
pub struct TopicScore {
    pub topic_id: String,
    pub topic_name: String,
    pub n_correct: usize,
    pub n_questions: usize,
    pub percentage: f64,
}

#[derive(Debug)]
pub struct Outcome {
    pub correct_count: usize,
    pub total: usize,
    pub elapsed_seconds: u64,
    pub details: Vec<Detail>,
    pub topic_scores: Vec<TopicScore>,
}

// The distinct non-empty choice texts plus the correct one, shuffled
// once. The order is frozen for the rest of the attempt.
fn build_choices(row: &QuestionRow, rng: &mut dyn RngCore) -> Vec<String> {
    let mut choices: Vec<String> = Vec::new();

    let candidates = [
        Some(row.choice_a.as_str()),
        Some(row.choice_b.as_str()),
        row.choice_c.as_deref(),
        Some(row.correct_choice.as_str()),
    ];

    for candidate in candidates.into_iter().flatten() {
        if !candidate.is_empty() &&
            !choices.iter().any(|choice| choice == candidate)
        {
            choices.push(candidate.to_string());
        }
    }

    choices.shuffle(rng);

    choices
}

// Feedback keyed by the choice text it belongs to. The correct
// choice's feedback wins when a wrong choice shares its text.
fn build_feedback(row: &QuestionRow) -> HashMap<String, String> {
    let pairs = [
        (Some(&row.choice_a), row.feedback_a.as_ref()),
        (Some(&row.choice_b), row.feedback_b.as_ref()),
        (row.choice_c.as_ref(), row.feedback_c.as_ref()),
        (Some(&row.correct_choice), row.feedback_correct.as_ref()),
    ];

    let mut feedback = HashMap::new();

    for (choice, text) in pairs {
        if let (Some(choice), Some(text)) = (choice, text) {
            feedback.insert(choice.clone(), text.clone());
        }
    }

    feedback
}

impl Attempt {
    /// Samples up to `length` questions from the pool, without
    /// replacement and silently capped at the pool size.
    pub fn new(
        mut pool: Vec<QuestionRow>,
        length: usize,
        topic_names: &HashMap<String, String>,
        rng: &mut dyn RngCore,
    ) -> Attempt {
        pool.shuffle(rng);
        pool.truncate(length);

        let questions = pool.into_iter()
            .map(|row| {
                let choices = build_choices(&row, rng);
                let feedback = build_feedback(&row);
                let topic_name = topic_names.get(&row.topic_id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_TOPIC.to_string());

                Question {
                    id: row.id,
                    prompt: row.prompt,
                    choices,
                    topic_id: row.topic_id,
                    topic_name,
                    correct: row.correct_choice,
                    feedback,
                }
            })
            .collect();

        Attempt {
            questions,
            answers: HashMap::new(),
            started: Instant::now(),
        }
    }

    /// Loads the active question pool for an area and the names of
    /// the topics it touches, then samples the attempt from it.
    pub fn from_repository(
        repository: &dyn Repository,
        area_id: &str,
        length: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Attempt, repository::Error> {
        let pool = repository.questions_for_area(area_id)?;

        let mut topic_ids = pool.iter()
            .map(|row| row.topic_id.clone())
            .collect::<Vec<_>>();
        topic_ids.sort_unstable();
        topic_ids.dedup();

        let topic_names = repository.topic_names(&topic_ids)?;

        Ok(Attempt::new(pool, length, &topic_names, rng))
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Records the user's choice for a question. Selecting again
    /// replaces the previous answer.
    pub fn select_answer(&mut self, index: usize, choice: &str) {
        if index >= self.questions.len() {
            log::warn!("answer for out-of-range question {} ignored", index);
            return;
        }

        self.answers.insert(index, choice.to_string());
    }

    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    pub fn all_answered(&self) -> bool {
        self.answers.len() == self.questions.len()
    }

    /// Scores the attempt. Correctness is decided by comparing the
    /// selected text with the correct choice text, so the shuffled
    /// position of the choices never matters; an unanswered question
    /// is incorrect.
    pub fn submit(self) -> Outcome {
        let elapsed_seconds = self.started.elapsed().as_secs();

        let mut correct_count = 0;
        let mut details = Vec::with_capacity(self.questions.len());
        let mut topic_scores: Vec<TopicScore> = Vec::new();

        for (index, question) in self.questions.iter().enumerate() {
            let selected = self.answers.get(&index);
            let is_correct = selected == Some(&question.correct);

            if is_correct {
                correct_count += 1;
            }

            let topic = match topic_scores.iter_mut().find(|topic| {
                topic.topic_id == question.topic_id
            }) {
                Some(topic) => topic,
                None => {
                    topic_scores.push(TopicScore {
                        topic_id: question.topic_id.clone(),
                        topic_name: question.topic_name.clone(),
                        n_correct: 0,
                        n_questions: 0,
                        percentage: 0.0,
                    });
                    topic_scores.last_mut().unwrap()
                },
            };

            topic.n_questions += 1;
            if is_correct {
                topic.n_correct += 1;
            }

            let feedback = selected
                .and_then(|choice| question.feedback.get(choice))
                .cloned();

            details.push(Detail {
                prompt: question.prompt.clone(),
                selected: selected.cloned(),
                correct_answer: question.correct.clone(),
                is_correct,
                feedback,
            });
        }

        for topic in topic_scores.iter_mut() {
            topic.percentage =
                topic.n_correct as f64 / topic.n_questions as f64 * 100.0;
        }

        Outcome {
            correct_count,
            total: self.questions.len(),
            elapsed_seconds,
            details,
            topic_scores,
        }
    }
}

fn new_result_id(rng: &mut dyn RngCore) -> String {
    format!("{:016x}{:016x}", rng.next_u64(), rng.next_u64())
}

/// Stores one result per topic touched by the attempt, keyed by
/// (user, topic, simulator). Resubmitting overwrites the earlier rows
/// instead of duplicating them.
pub fn persist_results(
    outcome: &Outcome,
    repository: &mut dyn Repository,
    user_id: &str,
    simulator_id: &str,
    rng: &mut dyn RngCore,
) -> Result<(), repository::Error> {
    let timestamp = chrono::Local::now()
        .format("%Y-%m-%d %H:%M:%S")
        .to_string();

    for topic in outcome.topic_scores.iter() {
        repository.upsert_result(ResultRow {
            id: new_result_id(rng),
            user_id: user_id.to_string(),
            topic_id: topic.topic_id.clone(),
            simulator_id: simulator_id.to_string(),
            percentage: topic.percentage,
            elapsed_seconds: outcome.elapsed_seconds,
            timestamp: timestamp.clone(),
        })?;

        log::info!(
            "saved result for topic {} at {:.0}%",
            topic.topic_id,
            topic.percentage,
        );
    }

    Ok(())
}
