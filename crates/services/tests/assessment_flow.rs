use checklist_core::model::Score;
use checklist_core::time::fixed_clock;
use services::{AppServices, EXPORT_FILE_NAME, ResetOutcome, WriteStatus, render_print_report};

#[tokio::test]
async fn answers_and_notes_survive_a_restart_on_sqlite() {
    let url = "sqlite:file:memdb_flow_restart?mode=memory&cache=shared";
    let first = AppServices::new_sqlite(url, fixed_clock(), ".")
        .await
        .expect("sqlite services");
    let assessment = first.assessment();
    for (raw, score) in [("1-1", Score::StronglyAgree), ("5-3", Score::Disagree)] {
        let status = assessment
            .set_answer(raw.parse().unwrap(), score)
            .await
            .expect("known question");
        assert_eq!(status, WriteStatus::Saved);
    }
    assert_eq!(assessment.set_notes("second thoughts").await, WriteStatus::Saved);

    let second = AppServices::new_sqlite(url, fixed_clock(), ".")
        .await
        .expect("sqlite services");
    let summary = second.assessment().summary();
    assert_eq!(summary.completed, 2);
    assert_eq!(summary.total_score, 7);
    assert_eq!(summary.average, 3.5);
    assert_eq!(second.assessment().notes(), "second thoughts");

    drop(first);
}

#[tokio::test]
async fn confirmed_reset_clears_persisted_state() {
    let url = "sqlite:file:memdb_flow_reset?mode=memory&cache=shared";
    let services = AppServices::new_sqlite(url, fixed_clock(), ".")
        .await
        .expect("sqlite services");
    let assessment = services.assessment();
    assessment
        .set_answer("2-2".parse().unwrap(), Score::Agree)
        .await
        .expect("known question");

    assert_eq!(assessment.reset(false).await, ResetOutcome::Declined);
    assert_eq!(assessment.summary().completed, 1);

    assert_eq!(
        assessment.reset(true).await,
        ResetOutcome::Cleared(WriteStatus::Saved)
    );

    let reopened = AppServices::new_sqlite(url, fixed_clock(), ".")
        .await
        .expect("sqlite services");
    assert_eq!(reopened.assessment().summary().completed, 0);
    assert_eq!(reopened.assessment().notes(), "");
}

#[tokio::test]
async fn export_and_print_agree_on_the_snapshot() {
    let dir = tempfile::tempdir().expect("tempdir");
    let services = AppServices::in_memory(fixed_clock(), dir.path()).await;
    let assessment = services.assessment();
    assessment
        .set_answer("11-3".parse().unwrap(), Score::Neutral)
        .await
        .expect("known question");

    let snapshot = assessment.export_snapshot();
    let path = services.exporter().write(&snapshot).expect("export");
    assert_eq!(path, dir.path().join(EXPORT_FILE_NAME));

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["totalScore"], 3);
    assert_eq!(written["band"], "40–80");

    let report = render_print_report(&snapshot);
    assert!(report.contains("40–80"));
    assert!(report.contains("3. Neutral / Unsure"));
}
