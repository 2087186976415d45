use checklist_core::model::Summary;

#[derive(Clone, Debug, PartialEq)]
pub struct SummaryVm {
    pub total_questions: u32,
    pub completed: u32,
    pub max_score: u32,
    pub total_score: u32,
    pub average_str: String,
    pub band_label: &'static str,
    pub interpretation: &'static str,
    pub score_class: String,
    pub progress_label: String,
    pub progress_width: String,
}

impl From<&Summary> for SummaryVm {
    fn from(summary: &Summary) -> Self {
        Self {
            total_questions: summary.total_questions,
            completed: summary.completed,
            max_score: summary.max_score,
            total_score: summary.total_score,
            average_str: format!("{:.2}", summary.average),
            band_label: summary.band.label(),
            interpretation: summary.interpretation(),
            score_class: format!("score score--{}", summary.band.tone()),
            progress_label: format!(
                "{}/{} answered",
                summary.completed, summary.total_questions
            ),
            progress_width: format!("width: {:.1}%", summary.progress_percent()),
        }
    }
}

#[must_use]
pub fn map_summary(summary: &Summary) -> SummaryVm {
    SummaryVm::from(summary)
}
