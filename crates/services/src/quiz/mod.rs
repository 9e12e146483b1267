mod progress;
mod session;
mod view;
mod workflow;

// Public API of the quiz subsystem.
pub use crate::error::{LoadError, QuizError};
pub use progress::QuizProgress;
pub use session::{QuizSession, QuizState};
pub use view::{QuestionSnapshot, QuizController, QuizRenderer, QuizSnapshot, SummarySnapshot};
pub use workflow::QuizLoader;
