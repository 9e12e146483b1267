#![forbid(unsafe_code)]

pub mod model;

pub use model::{
    AnswerOption, BankError, OptionId, Question, QuestionBank, QuizOutcome, RawQuestion, Score,
};
