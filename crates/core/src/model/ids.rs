use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a Question, `"{category}-{item}"` with 1-based parts.
///
/// Ordering follows catalog order: by category first, then by item.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QuestionId {
    category: u16,
    item: u16,
}

impl QuestionId {
    /// Creates a new `QuestionId` from 1-based category and item positions.
    ///
    /// # Errors
    ///
    /// Returns `ParseQuestionIdError` if either position is zero.
    pub fn new(category: u16, item: u16) -> Result<Self, ParseQuestionIdError> {
        if category == 0 || item == 0 {
            return Err(ParseQuestionIdError::ZeroIndex);
        }
        Ok(Self { category, item })
    }

    /// Returns the 1-based category position.
    #[must_use]
    pub fn category(&self) -> u16 {
        self.category
    }

    /// Returns the 1-based item position within the category.
    #[must_use]
    pub fn item(&self) -> u16 {
        self.item
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({}-{})", self.category, self.item)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.item)
    }
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

/// Error type for parsing a `QuestionId` from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseQuestionIdError {
    #[error("question id must look like <category>-<item>: {raw}")]
    Malformed { raw: String },

    #[error("question id positions are 1-based")]
    ZeroIndex,
}

impl FromStr for QuestionId {
    type Err = ParseQuestionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseQuestionIdError::Malformed { raw: s.to_string() };
        let (category, item) = s.split_once('-').ok_or_else(malformed)?;
        let category = category.parse::<u16>().map_err(|_| malformed())?;
        let item = item.parse::<u16>().map_err(|_| malformed())?;
        QuestionId::new(category, item)
    }
}

impl TryFrom<String> for QuestionId {
    type Error = ParseQuestionIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<QuestionId> for String {
    fn from(id: QuestionId) -> Self {
        id.to_string()
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
