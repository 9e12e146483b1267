use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an answer option within a single question.
///
/// Id `0` is reserved for the correct answer; incorrect answers are numbered
/// from `1` in the order the source listed them.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OptionId(u32);

impl OptionId {
    /// The id that always denotes the correct answer.
    pub const CORRECT: OptionId = OptionId(0);

    /// Creates a new `OptionId`
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn is_correct(&self) -> bool {
        self.0 == Self::CORRECT.0
    }
}

impl fmt::Debug for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OptionId({})", self.0)
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_the_correct_id() {
        assert!(OptionId::CORRECT.is_correct());
        assert!(OptionId::new(0).is_correct());
        assert!(!OptionId::new(3).is_correct());
    }

    #[test]
    fn option_id_displays_its_value() {
        assert_eq!(OptionId::new(2).to_string(), "2");
        assert_eq!(format!("{:?}", OptionId::CORRECT), "OptionId(0)");
    }
}
