use checklist_core::model::Score;
use services::WriteStatus;
use storage::repository::Storage;

use super::test_harness::{ViewKind, setup_view_harness, setup_view_harness_with_storage};

#[tokio::test(flavor = "current_thread")]
async fn checklist_view_smoke_renders_empty_session() {
    let mut harness = setup_view_harness(ViewKind::Checklist).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Introduction"), "missing intro in {html}");
    assert!(html.contains("A. Leadership"), "missing first category in {html}");
    assert!(html.contains("K. Psychological Red Flags"), "missing last category in {html}");
    assert!(html.contains("0/44 answered"), "missing progress in {html}");
    assert!(html.contains("0.00"), "missing average in {html}");
    assert!(html.contains("40–80"), "missing band in {html}");
    assert!(html.contains("Strongly Agree"), "missing scale labels in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn checklist_view_smoke_restores_persisted_answers() {
    let storage = Storage::in_memory();
    storage
        .kv
        .set("cult-checklist-answers", r#"{"1-1":5,"2-3":4,"99-1":5}"#)
        .await
        .expect("seed answers");
    storage
        .kv
        .set("cult-checklist-notes", "met with the elders")
        .await
        .expect("seed notes");

    let mut harness = setup_view_harness_with_storage(ViewKind::Checklist, storage).await;
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("2/44 answered"), "missing progress in {html}");
    assert!(html.contains("4.50"), "missing average in {html}");
    assert_eq!(harness.assessment.notes(), "met with the elders");
}

#[tokio::test(flavor = "current_thread")]
async fn checklist_view_smoke_reflects_answers_after_rerender() {
    let mut harness = setup_view_harness(ViewKind::Checklist).await;
    let id = "3-2".parse().unwrap();
    let status = harness
        .assessment
        .set_answer(id, Score::StronglyAgree)
        .await
        .expect("known question");
    assert_eq!(status, WriteStatus::Saved);

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("1/44 answered"), "missing progress in {html}");
    assert!(html.contains("5.00"), "missing average in {html}");
    assert_eq!(
        html.matches("question question--answered").count(),
        1,
        "expected one answered row in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn print_view_smoke_lists_unanswered_rows() {
    let mut harness = setup_view_harness(ViewKind::Print).await;
    harness
        .assessment
        .set_answer("1-1".parse().unwrap(), Score::Disagree)
        .await
        .expect("known question");
    let _ = harness.assessment.set_notes("first meeting in March").await;

    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Cult Checklist Results"), "missing title in {html}");
    assert!(html.contains("2. Disagree"), "missing answer in {html}");
    assert!(html.contains("Not answered"), "missing unanswered marker in {html}");
    assert!(html.contains("first meeting in March"), "missing notes in {html}");
    assert!(html.contains("2023-11-14 22:13 UTC"), "missing timestamp in {html}");
}
