//! Exercise questions, answer sheets, and grading.
//!
//! The API embeds question content as a JSON document inside the exercise
//! record's `questions` string. Parsing happens when the exercise modal
//! opens; a malformed document degrades to an inline notice instead of
//! failing the page.

#[cfg(test)]
#[path = "exercise_test.rs"]
mod exercise_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// A multiple-choice question as embedded in the exercise record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub choices: Vec<String>,
    /// The correct choice, verbatim from `choices`.
    pub answer: String,
}

/// The visitor's answers, keyed by question index. Serializes to the
/// `{"answers": {"<index>": "<choice>"}}` shape the submit endpoint expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSheet {
    pub answers: BTreeMap<usize, String>,
}

impl AnswerSheet {
    /// Record (or replace) the choice for one question.
    pub fn select(&mut self, index: usize, choice: impl Into<String>) {
        self.answers.insert(index, choice.into());
    }

    /// Whether every question up to `total` has an answer.
    #[must_use]
    pub fn is_complete(&self, total: usize) -> bool {
        (0..total).all(|index| self.answers.contains_key(&index))
    }
}

/// Result of grading a sheet against an exercise's answer key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grade {
    pub correct: usize,
    pub total: usize,
    /// Per-question verdicts, in question order.
    pub per_question: Vec<bool>,
}

/// Parse the embedded question document of an exercise.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] when the embedded string is not a JSON array
/// of questions.
pub fn parse_questions(raw: &str) -> Result<Vec<Question>, ApiError> {
    match serde_json::from_str(raw) {
        Ok(questions) => Ok(questions),
        Err(error) => Err(ApiError::Decode(error.to_string())),
    }
}

/// Grade a sheet against the answer key. Unanswered questions count as wrong.
#[must_use]
pub fn grade(questions: &[Question], sheet: &AnswerSheet) -> Grade {
    let per_question: Vec<bool> = questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            sheet
                .answers
                .get(&index)
                .is_some_and(|choice| choice == &question.answer)
        })
        .collect();
    Grade {
        correct: per_question.iter().filter(|&&ok| ok).count(),
        total: questions.len(),
        per_question,
    }
}
