use dioxus::prelude::*;
use services::LoadError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    LoadFailed,
    NoQuestions,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn from_load(err: &LoadError) -> Self {
        match err {
            LoadError::Fetch(_) | LoadError::Malformed(_) => Self::LoadFailed,
            LoadError::Empty => Self::NoQuestions,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::LoadFailed => "Could not load questions. Check your connection and try again.",
            Self::NoQuestions => "No questions are available right now.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use services::FetchError;
    use trivia_core::model::BankError;

    #[test]
    fn load_errors_map_to_view_errors() {
        let fetch = LoadError::Fetch(FetchError::Api { code: 5 });
        let malformed = LoadError::Malformed(BankError::MissingPrompt { index: 0 });

        assert_eq!(ViewError::from_load(&fetch), ViewError::LoadFailed);
        assert_eq!(ViewError::from_load(&malformed), ViewError::LoadFailed);
        assert_eq!(ViewError::from_load(&LoadError::Empty), ViewError::NoQuestions);
    }
}
