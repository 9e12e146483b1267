use dioxus::prelude::*;
use services::{QuizController, QuizRenderer, QuizSnapshot};
use trivia_core::model::OptionId;

use crate::context::AppContext;
use crate::views::question::QuestionPanel;
use crate::views::summary::SummaryPanel;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::QuizScreenVm;

/// Pushes every quiz snapshot into the page's screen signal.
struct ScreenRenderer {
    screen: Signal<Option<QuizScreenVm>>,
}

impl QuizRenderer for ScreenRenderer {
    fn render(&mut self, snapshot: &QuizSnapshot) {
        self.screen.set(Some(QuizScreenVm::from(snapshot)));
    }
}

type Controller = QuizController<ScreenRenderer>;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let loader = ctx.quiz_loader();

    let screen = use_signal(|| None::<QuizScreenVm>);
    let mut controller = use_signal(|| None::<Controller>);
    let mut selected = use_signal(|| None::<OptionId>);

    let mut resource = use_resource(move || {
        let loader = loader.clone();
        let mut controller = controller;
        let mut selected = selected;

        async move {
            let session = loader.start_quiz().await.map_err(|err| {
                tracing::warn!(error = %err, "quiz failed to load");
                ViewError::from_load(&err)
            })?;
            selected.set(None);
            controller.set(Some(QuizController::new(session, ScreenRenderer { screen })));
            Ok::<_, ViewError>(())
        }
    });

    let state = view_state_from_resource(&resource);

    let on_select = move |id: OptionId| selected.set(Some(id));

    let on_next = move |()| {
        let choice = selected();
        if let Some(quiz) = controller.write().as_mut() {
            match quiz.submit_answer(choice) {
                Ok(_) if choice.is_some() => selected.set(None),
                Ok(_) => {}
                Err(err) => tracing::debug!(error = %err, "submit ignored"),
            }
        }
    };

    let on_prev = move |()| {
        if let Some(quiz) = controller.write().as_mut() {
            match quiz.go_back() {
                Ok(_) => selected.set(None),
                Err(err) => tracing::debug!(error = %err, "go back ignored"),
            }
        }
    };

    let on_reset = move |()| {
        if let Some(quiz) = controller.write().as_mut() {
            quiz.reset();
        }
        selected.set(None);
    };

    let on_new_quiz = move |()| {
        controller.set(None);
        selected.set(None);
        resource.restart();
    };

    rsx! {
        div { class: "page quiz",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { class: "loading", "Loading questions..." }
                },
                ViewState::Error(err) => rsx! {
                    div { class: "load-error",
                        p { "{err.message()}" }
                        button {
                            r#type: "button",
                            onclick: move |_| resource.restart(),
                            "Retry"
                        }
                    }
                },
                ViewState::Ready(()) => match screen() {
                    Some(QuizScreenVm::Question(question)) => rsx! {
                        QuestionPanel {
                            question,
                            selected: selected(),
                            on_select,
                            on_prev,
                            on_next,
                        }
                    },
                    Some(QuizScreenVm::Summary(summary)) => rsx! {
                        SummaryPanel { summary, on_reset, on_new_quiz }
                    },
                    None => rsx! {
                        p { class: "loading", "Loading questions..." }
                    },
                },
            }
        }
    }
}
