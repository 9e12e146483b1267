use std::sync::Arc;

use services::QuizLoader;

pub trait UiApp: Send + Sync {
    fn quiz_loader(&self) -> Arc<QuizLoader>;
}

#[derive(Clone)]
pub struct AppContext {
    quiz_loader: Arc<QuizLoader>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            quiz_loader: app.quiz_loader(),
        }
    }

    #[must_use]
    pub fn quiz_loader(&self) -> Arc<QuizLoader> {
        Arc::clone(&self.quiz_loader)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
