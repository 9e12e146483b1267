use dioxus::prelude::*;
use trivia_core::model::OptionId;

use crate::vm::QuestionVm;

#[component]
pub fn QuestionPanel(
    question: QuestionVm,
    selected: Option<OptionId>,
    on_select: EventHandler<OptionId>,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    rsx! {
        form { id: "main-form", class: "quiz-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                on_next.call(());
            },
            fieldset { id: "question-fieldset",
                legend { "{question.legend}" }
                if let Some(meta) = question.meta_html.clone() {
                    p { class: "question-meta", dangerous_inner_html: meta }
                }
                h1 { class: "question-prompt", dangerous_inner_html: question.prompt_html.clone() }
                section { class: "answers",
                    {question.options.iter().map(|option| {
                        let id = option.id;
                        let is_selected = selected == Some(id);
                        rsx! {
                            label {
                                key: "{id}",
                                class: if is_selected { "answer selected" } else { "answer" },
                                input {
                                    id: "answer-{id}",
                                    r#type: "radio",
                                    name: "answer-set",
                                    value: "{id}",
                                    checked: is_selected,
                                    onchange: move |_| on_select.call(id),
                                }
                                span { dangerous_inner_html: option.html.clone() }
                            }
                        }
                    })}
                }
            }
            nav { class: "quiz-nav",
                span { class: "nav-element", "{question.correct_label}" }
                span { class: "nav-element", "{question.wrong_label}" }
                span { class: "nav-element progress", "{question.progress_label}" }
                button {
                    id: "quiz-prev",
                    r#type: "button",
                    class: "nav-element",
                    disabled: !question.can_go_back,
                    onclick: move |_| on_prev.call(()),
                    "Prev"
                }
                button {
                    id: "quiz-next",
                    r#type: "submit",
                    class: "nav-element",
                    "Next"
                }
            }
        }
    }
}
