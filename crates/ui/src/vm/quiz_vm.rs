use services::{QuestionSnapshot, QuizSnapshot, SummarySnapshot};
use trivia_core::model::{OptionId, Score};

use super::html::sanitize_html;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionVm {
    pub id: OptionId,
    pub html: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub legend: String,
    pub prompt_html: String,
    pub meta_html: Option<String>,
    pub progress_label: String,
    pub options: Vec<OptionVm>,
    pub correct_label: String,
    pub wrong_label: String,
    pub can_go_back: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub is_win: bool,
    pub legend: &'static str,
    pub heading: &'static str,
    pub verdict: &'static str,
    pub detail: Option<String>,
    pub correct_label: String,
    pub wrong_label: String,
}

/// Whatever the quiz page should show right now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreenVm {
    Question(QuestionVm),
    Summary(SummaryVm),
}

impl From<&QuizSnapshot> for QuizScreenVm {
    fn from(snapshot: &QuizSnapshot) -> Self {
        match snapshot {
            QuizSnapshot::Question(question) => Self::Question(QuestionVm::from(question)),
            QuizSnapshot::Summary(summary) => Self::Summary(SummaryVm::from(summary)),
        }
    }
}

impl From<&QuestionSnapshot> for QuestionVm {
    fn from(snapshot: &QuestionSnapshot) -> Self {
        let meta = match (snapshot.category.as_deref(), snapshot.difficulty.as_deref()) {
            (Some(category), Some(difficulty)) => Some(format!("{category} · {difficulty}")),
            (Some(category), None) => Some(category.to_string()),
            (None, Some(difficulty)) => Some(difficulty.to_string()),
            (None, None) => None,
        };
        let (correct_label, wrong_label) = score_labels(snapshot.score);

        Self {
            legend: format!("Question {}", snapshot.number),
            prompt_html: sanitize_html(&snapshot.prompt),
            meta_html: meta.as_deref().map(sanitize_html),
            progress_label: format!(
                "{} / {}",
                snapshot.progress.answered + 1,
                snapshot.progress.total
            ),
            options: snapshot
                .options
                .iter()
                .map(|option| OptionVm {
                    id: option.id(),
                    html: sanitize_html(option.text()),
                })
                .collect(),
            correct_label,
            wrong_label,
            can_go_back: snapshot.can_go_back,
        }
    }
}

impl From<&SummarySnapshot> for SummaryVm {
    fn from(snapshot: &SummarySnapshot) -> Self {
        let (correct_label, wrong_label) = score_labels(snapshot.score);
        if snapshot.outcome.is_win() {
            return Self {
                is_win: true,
                legend: "Nice",
                heading: "Congratulations!",
                verdict: "You Win!",
                detail: None,
                correct_label,
                wrong_label,
            };
        }

        Self {
            is_win: false,
            legend: "Too bad!",
            heading: "Try again.",
            verdict: "You Lose...",
            detail: Some(snapshot.outcome.narrative()),
            correct_label,
            wrong_label,
        }
    }
}

fn score_labels(score: Score) -> (String, String) {
    (
        format!("Correct: {}", score.correct),
        format!("Wrong: {}", score.wrong),
    )
}
