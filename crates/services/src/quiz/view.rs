use trivia_core::model::{AnswerOption, OptionId, QuizOutcome, Score};

use super::progress::QuizProgress;
use super::session::{QuizSession, QuizState};
use crate::error::QuizError;

//
// ─── SNAPSHOTS ─────────────────────────────────────────────────────────────────
//

/// What the renderer needs to draw the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSnapshot {
    /// 1-based question number.
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    /// Options in display order.
    pub options: Vec<AnswerOption>,
    pub score: Score,
    pub can_go_back: bool,
    pub progress: QuizProgress,
}

/// What the renderer needs to draw the end-of-quiz screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySnapshot {
    pub outcome: QuizOutcome,
    pub score: Score,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizSnapshot {
    Question(QuestionSnapshot),
    Summary(SummarySnapshot),
}

impl QuizSnapshot {
    #[must_use]
    pub fn of(session: &QuizSession) -> Self {
        let score = session.score();
        let Ok(question) = session.current_question() else {
            return Self::Summary(SummarySnapshot {
                outcome: QuizOutcome::classify(session.len(), session.answers()),
                score,
                total: session.len(),
            });
        };

        Self::Question(QuestionSnapshot {
            number: session.position() + 1,
            total: session.len(),
            prompt: question.prompt().to_string(),
            category: question.category().map(str::to_string),
            difficulty: question.difficulty().map(str::to_string),
            options: question.options().to_vec(),
            score,
            can_go_back: session.position() > 0,
            progress: session.progress(),
        })
    }
}

impl QuizSession {
    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot::of(self)
    }
}

//
// ─── RENDERER ──────────────────────────────────────────────────────────────────
//

/// Receives a fresh snapshot after every quiz state change.
pub trait QuizRenderer {
    fn render(&mut self, snapshot: &QuizSnapshot);
}

impl<F> QuizRenderer for F
where
    F: FnMut(&QuizSnapshot),
{
    fn render(&mut self, snapshot: &QuizSnapshot) {
        self(snapshot);
    }
}

/// Owns a session and pushes snapshots to its renderer.
///
/// `submit_answer`, `go_back` and `reset` are the only ways a renderer drives
/// the quiz.
pub struct QuizController<R> {
    session: QuizSession,
    renderer: R,
}

impl<R: QuizRenderer> QuizController<R> {
    /// Wrap `session` and render its current state immediately.
    pub fn new(session: QuizSession, renderer: R) -> Self {
        let mut controller = Self { session, renderer };
        controller.publish();
        controller
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    /// # Errors
    ///
    /// See `QuizSession::submit_answer`. Nothing is rendered on error.
    pub fn submit_answer(&mut self, choice: Option<OptionId>) -> Result<QuizState, QuizError> {
        let state = self.session.submit_answer(choice)?;
        self.publish();
        Ok(state)
    }

    /// # Errors
    ///
    /// See `QuizSession::go_back`. Nothing is rendered on error.
    pub fn go_back(&mut self) -> Result<QuizState, QuizError> {
        let state = self.session.go_back()?;
        self.publish();
        Ok(state)
    }

    pub fn reset(&mut self) {
        self.session.reset();
        self.publish();
    }

    fn publish(&mut self) {
        let snapshot = self.session.snapshot();
        self.renderer.render(&snapshot);
    }
}
