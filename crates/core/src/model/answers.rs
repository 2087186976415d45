use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::Score;
use crate::model::ids::QuestionId;

/// Answers chosen so far, keyed by question.
///
/// Unanswered questions are absent; there is at most one entry per id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<QuestionId, Score>);

impl AnswerMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert the score for `id`, returning the value it replaced.
    pub fn set(&mut self, id: QuestionId, score: Score) -> Option<Score> {
        self.0.insert(id, score)
    }

    #[must_use]
    pub fn get(&self, id: QuestionId) -> Option<Score> {
        self.0.get(&id).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, Score)> + '_ {
        self.0.iter().map(|(id, score)| (*id, *score))
    }

    /// Sum of the latest score for every answered question.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.0.values().map(|s| u32::from(*s)).sum()
    }
}

impl FromIterator<(QuestionId, Score)> for AnswerMap {
    fn from_iter<T: IntoIterator<Item = (QuestionId, Score)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Everything the user has entered in the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub answers: AnswerMap,
    pub notes: String,
}

impl SessionState {
    #[must_use]
    pub fn new(answers: AnswerMap, notes: impl Into<String>) -> Self {
        Self {
            answers,
            notes: notes.into(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty() && self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> QuestionId {
        raw.parse().unwrap()
    }

    #[test]
    fn set_replaces_instead_of_accumulating() {
        let mut answers = AnswerMap::new();
        assert_eq!(answers.set(id("1-1"), Score::Agree), None);
        assert_eq!(answers.set(id("1-1"), Score::Disagree), Some(Score::Agree));
        answers.set(id("2-3"), Score::StronglyAgree);

        assert_eq!(answers.len(), 2);
        assert_eq!(answers.total_score(), 2 + 5);
        assert_eq!(answers.get(id("1-1")), Some(Score::Disagree));
        assert_eq!(answers.get(id("1-2")), None);
    }

    #[test]
    fn clear_empties_everything() {
        let mut answers: AnswerMap = [(id("1-1"), Score::Agree)].into_iter().collect();
        answers.clear();
        assert!(answers.is_empty());
        assert_eq!(answers.total_score(), 0);
    }

    #[test]
    fn serializes_as_flat_object() {
        let answers: AnswerMap = [(id("1-2"), Score::Agree), (id("1-1"), Score::Neutral)]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"1-1":3,"1-2":4}"#);
    }

    #[test]
    fn session_state_emptiness_covers_notes() {
        assert!(SessionState::default().is_empty());
        assert!(!SessionState::new(AnswerMap::new(), "x").is_empty());
    }
}
