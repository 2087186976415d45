use checklist_core::model::Snapshot;

use crate::vm::time_fmt::format_datetime;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintRowVm {
    pub id: String,
    pub text: String,
    pub answer: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintSectionVm {
    pub name: String,
    pub rows: Vec<PrintRowVm>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PrintVm {
    pub generated_at_str: String,
    pub total_questions: u32,
    pub completed: u32,
    pub max_score: u32,
    pub total_score: u32,
    pub average_str: String,
    pub band: &'static str,
    pub interpretation: &'static str,
    pub sections: Vec<PrintSectionVm>,
    pub notes: String,
}

/// Group snapshot answers back into their categories, preserving order.
#[must_use]
pub fn map_print(snapshot: &Snapshot) -> PrintVm {
    let mut sections: Vec<PrintSectionVm> = Vec::new();
    for answer in &snapshot.answers {
        let row = PrintRowVm {
            id: answer.id.to_string(),
            text: answer.text.clone(),
            answer: answer.score.map_or_else(
                || "Not answered".to_string(),
                |s| format!("{}. {}", s.value(), s.label()),
            ),
        };
        match sections.last_mut() {
            Some(section) if section.name == answer.category => section.rows.push(row),
            _ => sections.push(PrintSectionVm {
                name: answer.category.clone(),
                rows: vec![row],
            }),
        }
    }

    PrintVm {
        generated_at_str: format_datetime(snapshot.generated_at),
        total_questions: snapshot.total_questions,
        completed: snapshot.completed,
        max_score: snapshot.max_score,
        total_score: snapshot.total_score,
        average_str: format!("{:.2}", snapshot.average),
        band: snapshot.band,
        interpretation: snapshot.interpretation,
        sections,
        notes: snapshot.notes.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checklist_core::model::{AnswerMap, Catalog, Score, SessionState};
    use checklist_core::time::fixed_now;

    #[test]
    fn regroups_answers_by_category() {
        let catalog = Catalog::reference();
        let mut answers = AnswerMap::new();
        answers.set("11-3".parse().unwrap(), Score::Neutral);
        let snapshot = Snapshot::build(&catalog, &SessionState::new(answers, ""), fixed_now());

        let vm = map_print(&snapshot);
        assert_eq!(vm.sections.len(), 11);
        let last = vm.sections.last().unwrap();
        assert_eq!(last.name, "K. Psychological Red Flags");
        assert_eq!(last.rows[2].answer, "3. Neutral / Unsure");
        assert_eq!(vm.sections[0].rows[0].answer, "Not answered");
        assert_eq!(vm.generated_at_str, "2023-11-14 22:13 UTC");
    }
}
