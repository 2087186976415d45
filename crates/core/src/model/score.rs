use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScoreError {
    #[error("score must be between 1 and 5, got {0}")]
    OutOfRange(u64),
}

//
// ─── SCORE ────────────────────────────────────────────────────────────────────
//

/// Five-point Likert agreement with a statement.
///
/// Higher values mean stronger agreement and contribute more to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Score {
    StronglyDisagree,
    Disagree,
    Neutral,
    Agree,
    StronglyAgree,
}

impl Score {
    /// Every offerable score, lowest first.
    pub const ALL: [Score; 5] = [
        Score::StronglyDisagree,
        Score::Disagree,
        Score::Neutral,
        Score::Agree,
        Score::StronglyAgree,
    ];

    /// Highest value a single answer can contribute.
    pub const MAX: u32 = 5;

    /// Numeric value in `1..=5`.
    #[must_use]
    pub fn value(self) -> u8 {
        match self {
            Score::StronglyDisagree => 1,
            Score::Disagree => 2,
            Score::Neutral => 3,
            Score::Agree => 4,
            Score::StronglyAgree => 5,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Score::StronglyDisagree => "Strongly Disagree",
            Score::Disagree => "Disagree",
            Score::Neutral => "Neutral / Unsure",
            Score::Agree => "Agree",
            Score::StronglyAgree => "Strongly Agree",
        }
    }

    /// Converts any integer to a `Score`, for values read back from storage.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError::OutOfRange` if the value is not in `1..=5`.
    pub fn from_u64(value: u64) -> Result<Self, ScoreError> {
        u8::try_from(value)
            .ok()
            .and_then(|v| Score::try_from(v).ok())
            .ok_or(ScoreError::OutOfRange(value))
    }
}

impl TryFrom<u8> for Score {
    type Error = ScoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Score::StronglyDisagree),
            2 => Ok(Score::Disagree),
            3 => Ok(Score::Neutral),
            4 => Ok(Score::Agree),
            5 => Ok(Score::StronglyAgree),
            _ => Err(ScoreError::OutOfRange(u64::from(value))),
        }
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.value()
    }
}

impl From<Score> for u32 {
    fn from(score: Score) -> Self {
        u32::from(score.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_one_through_five() {
        let values: Vec<u8> = Score::ALL.iter().map(|s| s.value()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5]);
        assert_eq!(u32::from(Score::StronglyAgree), Score::MAX);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(Score::try_from(0), Err(ScoreError::OutOfRange(0)));
        assert_eq!(Score::try_from(6), Err(ScoreError::OutOfRange(6)));
        assert_eq!(Score::from_u64(300), Err(ScoreError::OutOfRange(300)));
        assert_eq!(Score::from_u64(3), Ok(Score::Neutral));
    }

    #[test]
    fn serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Score::Agree).unwrap(), "4");
        let parsed: Score = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, Score::Disagree);
        assert!(serde_json::from_str::<Score>("9").is_err());
    }

    #[test]
    fn labels_match_scale() {
        assert_eq!(Score::StronglyDisagree.label(), "Strongly Disagree");
        assert_eq!(Score::Neutral.label(), "Neutral / Unsure");
        assert_eq!(Score::StronglyAgree.label(), "Strongly Agree");
    }
}
