//! Encoding of session state into the key-value store.

use checklist_core::model::{AnswerMap, Catalog, QuestionId, Score};
use serde_json::Value;
use tracing::warn;

pub const ANSWERS_KEY: &str = "cult-checklist-answers";
pub const NOTES_KEY: &str = "cult-checklist-notes";

/// Keys under which answers and notes are stored independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub answers: String,
    pub notes: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            answers: ANSWERS_KEY.to_string(),
            notes: NOTES_KEY.to_string(),
        }
    }
}

/// Compact JSON object, e.g. `{"1-1":4,"1-2":2}`.
#[must_use]
pub fn encode_answers(answers: &AnswerMap) -> String {
    let object: serde_json::Map<String, Value> = answers
        .iter()
        .map(|(id, score)| (id.to_string(), Value::from(score.value())))
        .collect();
    Value::Object(object).to_string()
}

/// Decode a persisted answer map, keeping only entries that are valid for `catalog`.
///
/// Anything that is not a JSON object yields an empty map.
#[must_use]
pub fn decode_answers(raw: &str, catalog: &Catalog) -> AnswerMap {
    let object = match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(object)) => object,
        Ok(other) => {
            warn!(kind = value_kind(&other), "persisted answers are not an object, starting fresh");
            return AnswerMap::new();
        }
        Err(err) => {
            warn!(error = %err, "persisted answers are not valid JSON, starting fresh");
            return AnswerMap::new();
        }
    };

    let mut answers = AnswerMap::new();
    for (key, value) in object {
        let Ok(id) = key.parse::<QuestionId>() else {
            warn!(key = %key, "dropping persisted answer with malformed id");
            continue;
        };
        if !catalog.contains(id) {
            warn!(%id, "dropping persisted answer for unknown question");
            continue;
        }
        let Some(score) = value.as_u64().and_then(|v| Score::from_u64(v).ok()) else {
            warn!(%id, value = %value, "dropping persisted answer with invalid score");
            continue;
        };
        answers.set(id, score);
    }
    answers
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> QuestionId {
        raw.parse().unwrap()
    }

    #[test]
    fn encode_then_decode_restores_answers() {
        let catalog = Catalog::reference();
        let answers: AnswerMap = [(id("1-1"), Score::Agree), (id("11-3"), Score::Disagree)]
            .into_iter()
            .collect();

        let raw = encode_answers(&answers);
        assert_eq!(raw, r#"{"1-1":4,"11-3":2}"#);
        assert_eq!(decode_answers(&raw, &catalog), answers);
    }

    #[test]
    fn garbage_yields_empty_map() {
        let catalog = Catalog::reference();
        for raw in ["", "{not json", "[1,2,3]", "null", "42", "\"text\""] {
            assert!(decode_answers(raw, &catalog).is_empty(), "raw {raw:?}");
        }
    }

    #[test]
    fn invalid_entries_are_dropped_individually() {
        let catalog = Catalog::reference();
        let raw = r#"{
            "1-1": 5,
            "1-2": 0,
            "1-3": 6,
            "1-4": "4",
            "1-5": 2.5,
            "99-1": 3,
            "bogus": 3,
            "2-1": null,
            "2-2": 1
        }"#;

        let answers = decode_answers(raw, &catalog);
        assert_eq!(answers.len(), 2);
        assert_eq!(answers.get(id("1-1")), Some(Score::StronglyAgree));
        assert_eq!(answers.get(id("2-2")), Some(Score::StronglyDisagree));
    }

    #[test]
    fn default_keys_are_distinct() {
        let keys = StorageKeys::default();
        assert_ne!(keys.answers, keys.notes);
    }
}
