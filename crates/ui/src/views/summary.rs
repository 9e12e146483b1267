use dioxus::prelude::*;

use crate::vm::SummaryVm;

#[component]
pub fn SummaryPanel(
    summary: SummaryVm,
    on_reset: EventHandler<()>,
    on_new_quiz: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: if summary.is_win { "summary win" } else { "summary lose" },
            fieldset {
                legend { "{summary.legend}" }
                h1 { "{summary.heading}" }
                section {
                    p { "{summary.verdict}" }
                    if let Some(detail) = summary.detail.clone() {
                        p { class: "summary-detail", "{detail}" }
                    }
                }
            }
            nav { class: "quiz-nav",
                span { class: "nav-element", "{summary.correct_label}" }
                span { class: "nav-element", "{summary.wrong_label}" }
                button {
                    id: "quiz-reset",
                    r#type: "button",
                    class: "nav-element reset",
                    onclick: move |_| on_reset.call(()),
                    "Reset?"
                }
                button {
                    id: "quiz-new",
                    r#type: "button",
                    class: "nav-element",
                    onclick: move |_| on_new_quiz.call(()),
                    "New questions"
                }
            }
        }
    }
}
