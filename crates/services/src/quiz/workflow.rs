use std::sync::Arc;

use trivia_core::model::QuestionBank;

use super::session::QuizSession;
use crate::error::LoadError;
use crate::trivia_source::QuestionSource;

/// Turns one fetch from a question source into a ready-to-play quiz.
#[derive(Clone)]
pub struct QuizLoader {
    source: Arc<dyn QuestionSource>,
}

impl QuizLoader {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self { source }
    }

    /// Fetch raw results and normalize them into a shuffled bank.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Fetch` if the source fails, `LoadError::Malformed`
    /// if a result breaks the bank invariants, and `LoadError::Empty` if no
    /// questions came back.
    pub async fn load_bank(&self) -> Result<QuestionBank, LoadError> {
        let raw = self.source.fetch().await.inspect_err(|err| {
            tracing::warn!(error = %err, "question fetch failed");
        })?;

        let bank = QuestionBank::build(raw, &mut rand::rng()).inspect_err(|err| {
            tracing::warn!(error = %err, "question bank rejected");
        })?;
        if bank.is_empty() {
            tracing::warn!("question source returned no results");
            return Err(LoadError::Empty);
        }

        tracing::info!(questions = bank.len(), "question bank loaded");
        Ok(bank)
    }

    /// Load a bank and start a new quiz over it.
    ///
    /// # Errors
    ///
    /// Propagates `load_bank` failures; no quiz is created on error.
    pub async fn start_quiz(&self) -> Result<QuizSession, LoadError> {
        let bank = self.load_bank().await?;
        Ok(QuizSession::new(bank))
    }
}
