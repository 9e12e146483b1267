use std::sync::Arc;

use dioxus::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use services::{FetchError, QuestionSource, QuizLoader, QuizSession};
use trivia_core::model::{OptionId, QuestionBank, RawQuestion};

use crate::context::{UiApp, build_app_context};
use crate::views::{QuestionPanel, QuizView, SummaryPanel};
use crate::vm::QuizScreenVm;

fn build_session() -> QuizSession {
    let raw = (1..=5)
        .map(|n| RawQuestion {
            question: format!("Prompt number {n}"),
            correct_answer: format!("Right{n}"),
            incorrect_answers: vec![format!("WrongA{n}"), format!("WrongB{n}")],
            ..RawQuestion::default()
        })
        .collect();
    let bank = QuestionBank::build(raw, &mut StdRng::seed_from_u64(11)).unwrap();
    QuizSession::new(bank)
}

#[derive(Props, Clone, PartialEq)]
struct ScreenHarnessProps {
    screen: QuizScreenVm,
    selected: Option<OptionId>,
}

#[component]
fn ScreenHarness(props: ScreenHarnessProps) -> Element {
    match props.screen {
        QuizScreenVm::Question(question) => rsx! {
            QuestionPanel {
                question,
                selected: props.selected,
                on_select: |_| {},
                on_prev: |_| {},
                on_next: |_| {},
            }
        },
        QuizScreenVm::Summary(summary) => rsx! {
            SummaryPanel { summary, on_reset: |_| {}, on_new_quiz: |_| {} }
        },
    }
}

fn render_screen(session: &QuizSession, selected: Option<OptionId>) -> String {
    let screen = QuizScreenVm::from(&session.snapshot());
    let mut dom = VirtualDom::new_with_props(ScreenHarness, ScreenHarnessProps { screen, selected });
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn question_panel_renders_prompt_options_and_tally() {
    let session = build_session();
    let html = render_screen(&session, None);

    assert!(html.contains("Question 1"), "missing legend in {html}");
    assert!(html.contains("Prompt number 1"), "missing prompt in {html}");
    for text in ["Right1", "WrongA1", "WrongB1"] {
        assert!(html.contains(text), "missing {text} in {html}");
    }
    assert!(html.contains("Correct: 0"), "missing tally in {html}");
    assert!(html.contains("Wrong: 0"), "missing tally in {html}");
    assert!(html.contains("Prev"), "missing prev in {html}");
    assert!(html.contains("Next"), "missing next in {html}");
}

#[test]
fn question_panel_marks_selected_option() {
    let mut session = build_session();
    session.submit_answer(Some(OptionId::new(1))).unwrap();
    let html = render_screen(&session, Some(OptionId::CORRECT));

    assert!(html.contains("Question 2"), "missing legend in {html}");
    assert!(html.contains("Wrong: 1"), "missing tally in {html}");
    assert!(html.contains("answer selected"), "missing selection in {html}");
}

#[test]
fn summary_panel_renders_lose_narrative() {
    let mut session = build_session();
    for value in [0, 1, 0, 2, 0] {
        session.submit_answer(Some(OptionId::new(value))).unwrap();
    }
    let html = render_screen(&session, None);

    assert!(html.contains("Too bad!"), "missing legend in {html}");
    assert!(
        html.contains("You got Question 2, and Question 4 wrong."),
        "missing narrative in {html}"
    );
    assert!(html.contains("Correct: 3"), "missing tally in {html}");
    assert!(html.contains("Reset?"), "missing reset in {html}");
}

#[test]
fn summary_panel_renders_win() {
    let mut session = build_session();
    while !session.is_complete() {
        session.submit_answer(Some(OptionId::CORRECT)).unwrap();
    }
    let html = render_screen(&session, None);

    assert!(html.contains("Congratulations!"), "missing heading in {html}");
    assert!(html.contains("You Win!"), "missing verdict in {html}");
    assert!(!html.contains("You got"), "unexpected narrative in {html}");
}

struct PendingSource;

#[async_trait::async_trait]
impl QuestionSource for PendingSource {
    async fn fetch(&self) -> Result<Vec<RawQuestion>, FetchError> {
        std::future::pending().await
    }
}

struct TestApp {
    quiz_loader: Arc<QuizLoader>,
}

impl UiApp for TestApp {
    fn quiz_loader(&self) -> Arc<QuizLoader> {
        Arc::clone(&self.quiz_loader)
    }
}

#[component]
fn QuizHarness() -> Element {
    use_context_provider(|| {
        let app: Arc<dyn UiApp> = Arc::new(TestApp {
            quiz_loader: Arc::new(QuizLoader::new(Arc::new(PendingSource))),
        });
        build_app_context(&app)
    });
    rsx! { QuizView {} }
}

#[test]
fn quiz_view_shows_loading_until_questions_arrive() {
    let mut dom = VirtualDom::new(QuizHarness);
    dom.rebuild_in_place();
    let html = dioxus_ssr::render(&dom);
    assert!(html.contains("Loading questions..."), "missing loading state in {html}");
}
