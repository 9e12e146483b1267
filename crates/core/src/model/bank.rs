use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::model::ids::OptionId;
use crate::model::question::{AnswerOption, Question, RawQuestion};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// A raw result that cannot be turned into a playable question.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BankError {
    #[error("result {index} has no question text")]
    MissingPrompt { index: usize },

    #[error("result {index} has no correct answer")]
    MissingCorrectAnswer { index: usize },

    #[error("result {index} has {count} answer option(s), at least 2 are required")]
    TooFewOptions { index: usize, count: usize },
}

//
// ─── QUESTION BANK ─────────────────────────────────────────────────────────────
//

/// Ordered, read-only list of questions for one quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Normalize raw API results into a bank.
    ///
    /// The correct answer becomes option `0`, incorrect answers get `1..=N` in
    /// source order, then each question's display order is shuffled with `rng`.
    /// Ids travel with their text, so option `0` stays correct after shuffling.
    ///
    /// # Errors
    ///
    /// Returns `BankError` for the first result that lacks a prompt, lacks a
    /// correct answer, or yields fewer than two options.
    pub fn build<R>(raw: Vec<RawQuestion>, rng: &mut R) -> Result<Self, BankError>
    where
        R: Rng + ?Sized,
    {
        let questions = raw
            .into_iter()
            .enumerate()
            .map(|(index, entry)| build_question(index, entry, rng))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { questions })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

impl<'a> IntoIterator for &'a QuestionBank {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

fn build_question<R>(index: usize, entry: RawQuestion, rng: &mut R) -> Result<Question, BankError>
where
    R: Rng + ?Sized,
{
    if entry.question.trim().is_empty() {
        return Err(BankError::MissingPrompt { index });
    }
    if entry.correct_answer.trim().is_empty() {
        return Err(BankError::MissingCorrectAnswer { index });
    }

    let mut options = Vec::with_capacity(entry.incorrect_answers.len() + 1);
    options.push(AnswerOption::new(OptionId::CORRECT, entry.correct_answer));
    for (offset, text) in entry.incorrect_answers.into_iter().enumerate() {
        let id = u32::try_from(offset + 1).unwrap_or(u32::MAX);
        options.push(AnswerOption::new(OptionId::new(id), text));
    }

    if options.len() < 2 {
        return Err(BankError::TooFewOptions {
            index,
            count: options.len(),
        });
    }

    // Fisher-Yates over display order.
    options.shuffle(rng);

    Ok(Question::new(
        entry.question,
        options,
        entry.category,
        entry.difficulty,
    ))
}
