use crate::model::answers::AnswerMap;
use crate::model::band::Band;
use crate::model::catalog::Catalog;

/// Derived results for the current answers.
///
/// Recomputed on demand; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub completed: u32,
    pub total_questions: u32,
    pub total_score: u32,
    pub max_score: u32,
    pub average: f64,
    pub band: Band,
}

impl Summary {
    #[must_use]
    pub fn compute(catalog: &Catalog, answers: &AnswerMap) -> Self {
        let completed = u32::try_from(answers.len()).unwrap_or(u32::MAX);
        let total_score = answers.total_score();
        Self {
            completed,
            total_questions: catalog.total(),
            total_score,
            max_score: catalog.max_score(),
            average: average(total_score, completed),
            band: Band::for_score(total_score),
        }
    }

    #[must_use]
    pub fn interpretation(&self) -> &'static str {
        self.band.interpretation()
    }

    /// Share of the catalog answered, in percent.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        f64::from(self.completed) / f64::from(self.total_questions) * 100.0
    }

}

// Two decimals, half away from zero.
fn average(total_score: u32, completed: u32) -> f64 {
    if completed == 0 {
        return 0.0;
    }
    let raw = f64::from(total_score) / f64::from(completed);
    (raw * 100.0).round() / 100.0
}
