use serde::Serialize;

use crate::model::ids::OptionId;

/// Running tally derived from recorded answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub correct: usize,
    pub wrong: usize,
}

impl Score {
    /// Rescan every recorded answer. Option `0` counts correct, anything else wrong.
    #[must_use]
    pub fn tally(answers: &[OptionId]) -> Self {
        answers.iter().fold(Self::default(), |mut score, answer| {
            if answer.is_correct() {
                score.correct += 1;
            } else {
                score.wrong += 1;
            }
            score
        })
    }

    #[must_use]
    pub fn answered(&self) -> usize {
        self.correct + self.wrong
    }
}

/// Win/lose classification of a finished quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum QuizOutcome {
    Win,
    /// 1-based numbers of the wrongly answered questions, ascending.
    Lose { wrong_questions: Vec<usize> },
}

impl QuizOutcome {
    /// Win only on a perfect score over all `total` questions.
    #[must_use]
    pub fn classify(total: usize, answers: &[OptionId]) -> Self {
        let score = Score::tally(answers);
        if score.correct == total {
            return Self::Win;
        }

        let wrong_questions = answers
            .iter()
            .enumerate()
            .filter(|(_, answer)| !answer.is_correct())
            .map(|(index, _)| index + 1)
            .collect();
        Self::Lose { wrong_questions }
    }

    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, Self::Win)
    }

    #[must_use]
    pub fn wrong_questions(&self) -> &[usize] {
        match self {
            Self::Win => &[],
            Self::Lose { wrong_questions } => wrong_questions,
        }
    }

    /// `"Question 2, and Question 4"` style list of wrong questions.
    ///
    /// Empty for a win.
    #[must_use]
    pub fn wrong_list_text(&self) -> String {
        let items: Vec<String> = self
            .wrong_questions()
            .iter()
            .map(|number| format!("Question {number}"))
            .collect();

        match items.split_last() {
            None => String::new(),
            Some((last, [])) => last.clone(),
            Some((last, rest)) => format!("{}, and {last}", rest.join(", ")),
        }
    }

    /// Full sentence for the summary screen.
    #[must_use]
    pub fn narrative(&self) -> String {
        match self {
            Self::Win => "You Win!".to_string(),
            Self::Lose { .. } => format!("You got {} wrong.", self.wrong_list_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[u32]) -> Vec<OptionId> {
        values.iter().copied().map(OptionId::new).collect()
    }

    #[test]
    fn tally_counts_zero_as_correct() {
        let score = Score::tally(&ids(&[0, 1, 0, 2, 0]));
        assert_eq!(score, Score { correct: 3, wrong: 2 });
        assert_eq!(score.answered(), 5);
    }

    #[test]
    fn empty_tally_is_zero() {
        assert_eq!(Score::tally(&[]), Score::default());
    }

    #[test]
    fn perfect_score_wins() {
        let outcome = QuizOutcome::classify(5, &ids(&[0, 0, 0, 0, 0]));
        assert!(outcome.is_win());
        assert_eq!(outcome.narrative(), "You Win!");
        assert!(outcome.wrong_list_text().is_empty());
    }

    #[test]
    fn any_wrong_answer_loses() {
        let outcome = QuizOutcome::classify(5, &ids(&[0, 1, 0, 2, 0]));
        assert_eq!(
            outcome,
            QuizOutcome::Lose {
                wrong_questions: vec![2, 4]
            }
        );
        assert_eq!(outcome.wrong_list_text(), "Question 2, and Question 4");
        assert_eq!(outcome.narrative(), "You got Question 2, and Question 4 wrong.");
    }

    #[test]
    fn single_wrong_answer_has_no_and() {
        let outcome = QuizOutcome::classify(5, &ids(&[0, 0, 3, 0, 0]));
        assert_eq!(outcome.wrong_list_text(), "Question 3");
    }

    #[test]
    fn three_wrong_answers_use_serial_and() {
        let outcome = QuizOutcome::classify(5, &ids(&[1, 2, 0, 3, 0]));
        assert_eq!(
            outcome.wrong_list_text(),
            "Question 1, Question 2, and Question 4"
        );
    }
}
