use serde::{Deserialize, Deserializer, Serialize};

use crate::model::ids::OptionId;

//
// ─── WIRE SHAPE ────────────────────────────────────────────────────────────────
//

/// One entry of a trivia API `results` array, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuestion {
    #[serde(default, deserialize_with = "null_as_default")]
    pub question: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub correct_answer: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub incorrect_answers: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Decodes an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

//
// ─── ANSWER OPTION ─────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    id: OptionId,
    text: String,
}

impl AnswerOption {
    #[must_use]
    pub fn new(id: OptionId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> OptionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.id.is_correct()
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// A normalized multiple-choice question.
///
/// `options` is in display order. Exactly one option carries
/// `OptionId::CORRECT`; the builder in `bank.rs` is the only constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    prompt: String,
    options: Vec<AnswerOption>,
    category: Option<String>,
    difficulty: Option<String>,
}

impl Question {
    pub(crate) fn new(
        prompt: String,
        options: Vec<AnswerOption>,
        category: Option<String>,
        difficulty: Option<String>,
    ) -> Self {
        Self {
            prompt,
            options,
            category,
            difficulty,
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Options in display (shuffled) order.
    #[must_use]
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<&str> {
        self.difficulty.as_deref()
    }

    #[must_use]
    pub fn option(&self, id: OptionId) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.id() == id)
    }

    #[must_use]
    pub fn has_option(&self, id: OptionId) -> bool {
        self.option(id).is_some()
    }

    /// The option holding the correct answer, wherever it was shuffled to.
    #[must_use]
    pub fn correct_option(&self) -> Option<&AnswerOption> {
        self.option(OptionId::CORRECT)
    }
}
