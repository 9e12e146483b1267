use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use services::{FetchError, LoadError, QuestionSource, QuizLoader, QuizSnapshot, QuizState};
use trivia_core::model::{BankError, OptionId, QuizOutcome, RawQuestion, Score};

struct FixedSource {
    results: Vec<RawQuestion>,
    calls: AtomicUsize,
}

impl FixedSource {
    fn new(results: Vec<RawQuestion>) -> Self {
        Self {
            results,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl QuestionSource for FixedSource {
    async fn fetch(&self) -> Result<Vec<RawQuestion>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.results.clone())
    }
}

struct RateLimitedSource;

#[async_trait]
impl QuestionSource for RateLimitedSource {
    async fn fetch(&self) -> Result<Vec<RawQuestion>, FetchError> {
        Err(FetchError::Api { code: 5 })
    }
}

fn five_questions() -> Vec<RawQuestion> {
    (1..=5)
        .map(|n| RawQuestion {
            question: format!("Which is answer {n}?"),
            correct_answer: format!("A{n}"),
            incorrect_answers: vec![format!("B{n}"), format!("C{n}"), format!("D{n}")],
            category: Some("General Knowledge".to_string()),
            difficulty: Some("easy".to_string()),
            kind: Some("multiple".to_string()),
        })
        .collect()
}

#[tokio::test]
async fn perfect_quiz_is_a_win() {
    let source = Arc::new(FixedSource::new(five_questions()));
    let loader = QuizLoader::new(source.clone());

    let mut quiz = loader.start_quiz().await.unwrap();
    assert_eq!(quiz.len(), 5);
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);

    while !quiz.is_complete() {
        quiz.submit_answer(Some(OptionId::CORRECT)).unwrap();
    }

    assert_eq!(quiz.score(), Score { correct: 5, wrong: 0 });
    assert_eq!(quiz.outcome(), Some(QuizOutcome::Win));
}

#[tokio::test]
async fn two_misses_lose_and_are_listed() {
    let loader = QuizLoader::new(Arc::new(FixedSource::new(five_questions())));
    let mut quiz = loader.start_quiz().await.unwrap();

    for value in [0, 1, 0, 2, 0] {
        quiz.submit_answer(Some(OptionId::new(value))).unwrap();
    }

    let QuizSnapshot::Summary(summary) = quiz.snapshot() else {
        panic!("quiz should be complete");
    };
    assert_eq!(summary.score, Score { correct: 3, wrong: 2 });
    assert_eq!(summary.outcome.wrong_questions(), &[2, 4]);
    assert_eq!(
        summary.outcome.narrative(),
        "You got Question 2, and Question 4 wrong."
    );
}

#[tokio::test]
async fn navigation_rescoring_and_reset() {
    let loader = QuizLoader::new(Arc::new(FixedSource::new(five_questions())));
    let mut quiz = loader.start_quiz().await.unwrap();

    assert_eq!(quiz.submit_answer(None).unwrap(), QuizState::InProgress { position: 0 });

    for value in [0, 3, 1] {
        quiz.submit_answer(Some(OptionId::new(value))).unwrap();
    }
    quiz.go_back().unwrap();
    quiz.go_back().unwrap();

    assert_eq!(quiz.position(), 1);
    assert_eq!(quiz.answers().len(), 1);
    assert_eq!(quiz.score(), Score { correct: 1, wrong: 0 });

    quiz.reset();
    quiz.reset();
    assert_eq!(quiz.state(), QuizState::InProgress { position: 0 });
    assert_eq!(quiz.score(), Score::default());
}

#[tokio::test]
async fn fetch_failure_prevents_quiz_start() {
    let loader = QuizLoader::new(Arc::new(RateLimitedSource));
    let err = loader.start_quiz().await.unwrap_err();
    assert!(matches!(err, LoadError::Fetch(FetchError::Api { code: 5 })));
}

#[tokio::test]
async fn malformed_result_prevents_quiz_start() {
    let mut results = five_questions();
    results[3].incorrect_answers.clear();
    let loader = QuizLoader::new(Arc::new(FixedSource::new(results)));

    let err = loader.start_quiz().await.unwrap_err();
    assert!(matches!(
        err,
        LoadError::Malformed(BankError::TooFewOptions { index: 3, count: 1 })
    ));
}

#[tokio::test]
async fn empty_result_set_prevents_quiz_start() {
    let loader = QuizLoader::new(Arc::new(FixedSource::new(Vec::new())));
    let err = loader.start_quiz().await.unwrap_err();
    assert!(matches!(err, LoadError::Empty));
}
