mod html;
mod quiz_vm;

pub use html::sanitize_html;
pub use quiz_vm::{OptionVm, QuestionVm, QuizScreenVm, SummaryVm};
