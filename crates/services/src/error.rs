//! Shared error types for the services crate.

use thiserror::Error;

use trivia_core::model::{BankError, OptionId};

/// Errors emitted while fetching raw questions from the trivia API.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("trivia request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("trivia API returned response code {code}")]
    Api { code: u8 },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors that prevent a quiz from starting.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("no questions available for quiz")]
    Empty,
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("malformed trivia response: {0}")]
    Malformed(#[from] BankError),
}

/// Caller-contract violations on a running quiz.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("position {position} is out of range for a quiz of {len} question(s)")]
    OutOfRange { position: usize, len: usize },
    #[error("option {id} does not belong to the question at position {position}")]
    UnknownOption { id: OptionId, position: usize },
}

/// Invalid question source settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("question amount must be between 1 and {max}, got {raw}")]
    InvalidAmount { raw: String, max: u32 },
    #[error("unknown difficulty: {0} (expected easy, medium or hard)")]
    InvalidDifficulty(String),
    #[error("unknown question type: {0} (expected multiple or boolean)")]
    InvalidKind(String),
    #[error("invalid category id: {0}")]
    InvalidCategory(String),
    #[error("API url cannot be empty")]
    EmptyUrl,
}
