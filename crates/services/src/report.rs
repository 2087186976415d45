//! Plain-text print surface for a snapshot.

use std::fmt::Write as _;

use chrono::SecondsFormat;
use checklist_core::model::Score;
use checklist_core::model::Snapshot;
use checklist_core::model::resources::{
    DISCLAIMER, FURTHER_READING, FURTHER_READING_TITLE, HELP_RESOURCES, SCALE_HINT,
};

pub const REPORT_TITLE: &str = "How to Know If You’re in a Cult";

const UNANSWERED: &str = "—";

/// Render every part of `snapshot` for printing. Interactive controls have no
/// counterpart here.
#[must_use]
pub fn render_print_report(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, snapshot);
    out
}

fn write_report(out: &mut String, snapshot: &Snapshot) -> std::fmt::Result {
    writeln!(out, "{REPORT_TITLE}")?;
    writeln!(
        out,
        "Generated {}",
        snapshot
            .generated_at
            .to_rfc3339_opts(SecondsFormat::Secs, true)
    )?;
    writeln!(out)?;

    writeln!(out, "RESULTS")?;
    writeln!(
        out,
        "Total questions: {} · Answered: {} · Max score: {}",
        snapshot.total_questions, snapshot.completed, snapshot.max_score
    )?;
    writeln!(out, "Total Score: {}", snapshot.total_score)?;
    writeln!(out, "Average: {:.2}", snapshot.average)?;
    writeln!(out, "Band: {}", snapshot.band)?;
    writeln!(out, "{}", snapshot.interpretation)?;
    writeln!(out)?;
    writeln!(out, "Scale: {SCALE_HINT}")?;

    let mut current_category: Option<&str> = None;
    for answer in &snapshot.answers {
        if current_category != Some(answer.category.as_str()) {
            writeln!(out)?;
            writeln!(out, "{}", answer.category)?;
            current_category = Some(answer.category.as_str());
        }
        writeln!(out, "  [{}] {}", answer.id, answer.text)?;
        writeln!(out, "        {}", score_cell(answer.score))?;
    }

    writeln!(out)?;
    writeln!(out, "NOTES")?;
    if snapshot.notes.is_empty() {
        writeln!(out, "{UNANSWERED}")?;
    } else {
        writeln!(out, "{}", snapshot.notes)?;
    }

    writeln!(out)?;
    writeln!(out, "RESOURCES FOR HELP")?;
    for resource in HELP_RESOURCES {
        writeln!(out, "  - {}: {}", resource.name, resource.contact.display())?;
    }
    writeln!(out, "{FURTHER_READING_TITLE}")?;
    for item in FURTHER_READING {
        writeln!(out, "  - {item}")?;
    }

    writeln!(out)?;
    writeln!(out, "{DISCLAIMER}")?;
    Ok(())
}

fn score_cell(score: Option<Score>) -> String {
    match score {
        Some(score) => format!("{}. {}", score.value(), score.label()),
        None => UNANSWERED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checklist_core::model::{AnswerMap, Catalog, SessionState};
    use checklist_core::time::fixed_now;

    #[test]
    fn report_lists_results_answers_and_notes() {
        let catalog = Catalog::reference();
        let mut answers = AnswerMap::new();
        answers.set("1-1".parse().unwrap(), Score::Agree);
        let state = SessionState::new(answers, "Saw this at the 2022 retreat.");
        let snapshot = Snapshot::build(&catalog, &state, fixed_now());

        let report = render_print_report(&snapshot);

        assert!(report.contains("Total Score: 4"));
        assert!(report.contains("Band: 40–80"));
        assert!(report.contains("Generated 2023-11-14T22:13:20Z"));
        assert!(report.contains("4. Agree"));
        assert!(report.contains("Saw this at the 2022 retreat."));
        for category in catalog.categories() {
            assert!(report.contains(category.name()), "missing {}", category.name());
        }
        assert_eq!(report.matches("        —").count(), catalog.questions().len() - 1);
        assert!(report.contains("icsahome.com"));
    }

    #[test]
    fn empty_notes_render_placeholder() {
        let snapshot = Snapshot::build(&Catalog::reference(), &SessionState::default(), fixed_now());
        let report = render_print_report(&snapshot);
        assert!(report.contains("NOTES\n—\n"));
    }
}
