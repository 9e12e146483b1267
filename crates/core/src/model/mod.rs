mod bank;
mod ids;
mod outcome;
mod question;

pub use bank::{BankError, QuestionBank};
pub use ids::OptionId;
pub use outcome::{QuizOutcome, Score};
pub use question::{AnswerOption, Question, RawQuestion};
