#![forbid(unsafe_code)]

pub mod error;
pub mod quiz;
pub mod trivia_source;

pub use error::{ConfigError, FetchError, LoadError, QuizError};
pub use quiz::{
    QuestionSnapshot, QuizController, QuizLoader, QuizProgress, QuizRenderer, QuizSession,
    QuizSnapshot, QuizState, SummarySnapshot,
};
pub use trivia_source::{
    Difficulty, OpenTdbSource, QuestionKind, QuestionSource, TriviaSourceConfig,
};
