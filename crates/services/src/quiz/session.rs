use std::fmt;

use trivia_core::model::{OptionId, Question, QuestionBank, QuizOutcome, Score};

use super::progress::QuizProgress;
use crate::error::QuizError;

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    /// Waiting for an answer to the question at `position` (zero-based).
    InProgress { position: usize },
    /// Every question has a recorded answer.
    Complete,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz over a fixed question bank.
///
/// The position is always the number of recorded answers, and the score is
/// recomputed from the full answer list after every mutation.
pub struct QuizSession {
    bank: QuestionBank,
    answers: Vec<OptionId>,
    score: Score,
}

impl QuizSession {
    /// Start a fresh quiz at the first question.
    #[must_use]
    pub fn new(bank: QuestionBank) -> Self {
        Self {
            bank,
            answers: Vec::new(),
            score: Score::default(),
        }
    }

    /// Start a quiz with answers already recorded, e.g. to jump straight to a
    /// win or lose summary.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::OutOfRange` if there are more answers than questions.
    /// Returns `QuizError::UnknownOption` if an answer is not an option of its question.
    pub fn with_answers(bank: QuestionBank, answers: Vec<OptionId>) -> Result<Self, QuizError> {
        if answers.len() > bank.len() {
            return Err(QuizError::OutOfRange {
                position: answers.len(),
                len: bank.len(),
            });
        }
        for (position, (question, id)) in bank.iter().zip(&answers).enumerate() {
            if !question.has_option(*id) {
                return Err(QuizError::UnknownOption { id: *id, position });
            }
        }

        let mut session = Self::new(bank);
        session.answers = answers;
        session.rescore();
        Ok(session)
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Total number of questions in this quiz.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bank.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bank.is_empty()
    }

    /// Zero-based index of the question awaiting an answer.
    #[must_use]
    pub fn position(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn answers(&self) -> &[OptionId] {
        &self.answers
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.position() == self.bank.len()
    }

    #[must_use]
    pub fn state(&self) -> QuizState {
        if self.is_complete() {
            QuizState::Complete
        } else {
            QuizState::InProgress {
                position: self.position(),
            }
        }
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            total: self.len(),
            answered: self.position(),
            remaining: self.len().saturating_sub(self.position()),
            is_complete: self.is_complete(),
        }
    }

    /// Win/lose classification, available once every question is answered.
    #[must_use]
    pub fn outcome(&self) -> Option<QuizOutcome> {
        self.is_complete()
            .then(|| QuizOutcome::classify(self.bank.len(), &self.answers))
    }

    /// # Errors
    ///
    /// Returns `QuizError::OutOfRange` once the quiz is complete.
    pub fn current_question(&self) -> Result<&Question, QuizError> {
        let position = self.position();
        self.bank.get(position).ok_or(QuizError::OutOfRange {
            position,
            len: self.bank.len(),
        })
    }

    /// Go back to the first question and forget every answer.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.rescore();
        tracing::debug!(len = self.bank.len(), "quiz reset");
    }

    /// Record the player's choice for the current question and advance.
    ///
    /// `None` means nothing was selected: the state is left untouched and
    /// returned as-is so the caller can prompt again.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::OutOfRange` if the quiz is already complete.
    /// Returns `QuizError::UnknownOption` if `choice` is not an option of the current question.
    pub fn submit_answer(&mut self, choice: Option<OptionId>) -> Result<QuizState, QuizError> {
        let Some(id) = choice else {
            tracing::debug!(position = self.position(), "empty submission ignored");
            return Ok(self.state());
        };

        let position = self.position();
        if !self.current_question()?.has_option(id) {
            return Err(QuizError::UnknownOption { id, position });
        }

        self.answers.push(id);
        self.rescore();

        tracing::debug!(
            position,
            option = id.value(),
            correct = self.score.correct,
            wrong = self.score.wrong,
            "answer recorded"
        );
        Ok(self.state())
    }

    /// Step back one question, discarding its recorded answer.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::OutOfRange` on the first question.
    pub fn go_back(&mut self) -> Result<QuizState, QuizError> {
        // The dropped slot is refilled by the next submit.
        if self.answers.pop().is_none() {
            return Err(QuizError::OutOfRange {
                position: 0,
                len: self.bank.len(),
            });
        }
        self.rescore();

        tracing::debug!(position = self.position(), "went back");
        Ok(self.state())
    }

    fn rescore(&mut self) {
        self.score = Score::tally(&self.answers);
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.bank.len())
            .field("position", &self.position())
            .field("answers", &self.answers)
            .field("score", &self.score)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
