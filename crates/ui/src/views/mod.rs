mod question;
mod quiz;
mod state;
mod summary;

#[cfg(test)]
mod view_smoke;

pub use question::QuestionPanel;
pub use quiz::QuizView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use summary::SummaryPanel;
