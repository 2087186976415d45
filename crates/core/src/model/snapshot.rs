use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

use crate::model::Score;
use crate::model::answers::SessionState;
use crate::model::catalog::Catalog;
use crate::model::ids::QuestionId;
use crate::model::summary::Summary;

/// One catalog question joined with its answer, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotAnswer {
    pub id: QuestionId,
    pub category: String,
    pub text: String,
    pub score: Option<Score>,
}

/// Fully materialized export record of a session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub completed: u32,
    pub total_questions: u32,
    pub total_score: u32,
    pub max_score: u32,
    pub average: f64,
    pub band: &'static str,
    pub interpretation: &'static str,
    pub answers: Vec<SnapshotAnswer>,
    pub notes: String,
    #[serde(serialize_with = "serialize_iso_millis")]
    pub generated_at: DateTime<Utc>,
}

impl Snapshot {
    /// Join the catalog with the session state, one entry per question in catalog order.
    #[must_use]
    pub fn build(catalog: &Catalog, state: &SessionState, generated_at: DateTime<Utc>) -> Self {
        let summary = Summary::compute(catalog, &state.answers);
        let answers = catalog
            .questions()
            .iter()
            .map(|q| SnapshotAnswer {
                id: q.id,
                category: q.category.clone(),
                text: q.text.clone(),
                score: state.answers.get(q.id),
            })
            .collect();

        Self {
            completed: summary.completed,
            total_questions: summary.total_questions,
            total_score: summary.total_score,
            max_score: summary.max_score,
            average: summary.average,
            band: summary.band.label(),
            interpretation: summary.interpretation(),
            answers,
            notes: state.notes.clone(),
            generated_at,
        }
    }
}

fn serialize_iso_millis<S: Serializer>(at: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&at.to_rfc3339_opts(SecondsFormat::Millis, true))
}
