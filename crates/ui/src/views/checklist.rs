use checklist_core::model::QuestionId;
use checklist_core::model::resources::{DISCLAIMER, INTRODUCTION, SCALE_HINT};
use dioxus::prelude::*;
use services::{RESET_PROMPT, ResetOutcome};

use crate::context::AppContext;
use crate::views::resources::HelpResources;
use crate::views::{Banner, ViewError};
use crate::vm::{CategoryVm, QuestionVm, ScaleOptionVm, SummaryVm, map_checklist, map_summary};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ResetState {
    Closed,
    Confirming,
    Resetting,
}

#[component]
pub fn ChecklistView() -> Element {
    let ctx = use_context::<AppContext>();
    let assessment = ctx.assessment();
    let exporter = ctx.exporter();
    let mut revision = use_signal(|| 0_u64);
    let mut banner = use_signal(|| None::<Banner>);
    let mut reset_state = use_signal(|| ResetState::Closed);

    // Reading the revision re-renders this view after every mutation.
    let _ = revision();
    let summary = map_summary(&assessment.summary());
    let state = assessment.state();
    let categories = map_checklist(assessment.catalog(), &state.answers);
    let notes = state.notes;

    let answer_service = assessment.clone();
    let on_answer = use_callback(move |(id, value): (QuestionId, u8)| {
        let assessment = answer_service.clone();
        match assessment.apply_answer_value(id, value) {
            Ok(true) => {
                revision += 1;
                spawn(async move {
                    let status = assessment.persist_answers().await;
                    banner.set(Banner::from_write(&status));
                });
            }
            Ok(false) => {}
            Err(_) => banner.set(Some(Banner::Error(ViewError::Unknown))),
        }
    });

    let export_source = assessment.clone();
    let on_download = use_callback(move |()| {
        let snapshot = export_source.export_snapshot();
        match exporter.write(&snapshot) {
            Ok(path) => banner.set(Some(Banner::Exported(path.display().to_string()))),
            Err(_) => banner.set(Some(Banner::Error(ViewError::ExportFailed))),
        }
    });

    let on_print = use_callback(move |()| {
        let _ = document::eval("window.print();");
    });

    let on_reset = use_callback(move |()| reset_state.set(ResetState::Confirming));

    // Memory is updated inside the event so the textarea never renders a stale value.
    let notes_service = assessment.clone();
    let on_notes = move |evt: FormEvent| {
        let assessment = notes_service.clone();
        assessment.apply_notes(evt.value());
        revision += 1;
        spawn(async move {
            let status = assessment.persist_notes().await;
            banner.set(Banner::from_write(&status));
        });
    };

    let reset_service = assessment.clone();
    let on_confirm_reset = move |_: MouseEvent| {
        let assessment = reset_service.clone();
        spawn(async move {
            reset_state.set(ResetState::Resetting);
            if let ResetOutcome::Cleared(status) = assessment.reset(true).await {
                banner.set(Banner::from_write(&status));
            }
            reset_state.set(ResetState::Closed);
            revision += 1;
        });
    };

    rsx! {
        div { class: "page checklist-page",
            ActionButtons { on_print, on_download, on_reset }

            if let Some(message) = banner() {
                div { class: message.class(), role: "status",
                    span { "{message.text()}" }
                    button {
                        class: "banner-dismiss no-print",
                        r#type: "button",
                        onclick: move |_| banner.set(None),
                        "×"
                    }
                }
            }

            section { class: "card intro",
                h2 { class: "card-title", "Introduction" }
                for paragraph in INTRODUCTION {
                    p { "{paragraph}" }
                }
                div { class: "scale-hint",
                    strong { "Scale: " }
                    "{SCALE_HINT}"
                }
                div { class: "progress",
                    div { class: "progress-meta",
                        span { "Progress" }
                        span { "{summary.progress_label}" }
                    }
                    div { class: "progress-track",
                        div { class: "progress-fill", style: "{summary.progress_width}" }
                    }
                }
            }

            for category in categories {
                CategorySection { key: "{category.name}", category, on_answer }
            }

            section { class: "card notes",
                h3 { class: "card-title", "Notes (optional)" }
                textarea {
                    class: "notes-input",
                    value: "{notes}",
                    placeholder: "Record examples, dates, or experiences here for your own reference.",
                    oninput: on_notes,
                }
            }

            ResultsPanel { summary, on_print, on_download, on_reset }

            HelpResources {}

            footer { class: "footer", "{DISCLAIMER}" }

            if reset_state() != ResetState::Closed {
                div {
                    class: "modal-overlay no-print",
                    onclick: move |_| {
                        if reset_state() == ResetState::Confirming {
                            reset_state.set(ResetState::Closed);
                        }
                    },
                    div {
                        class: "modal",
                        onclick: move |evt| evt.stop_propagation(),
                        h3 { class: "modal-title", "{RESET_PROMPT}" }
                        p { class: "modal-body",
                            "This removes every answer and your notes from this device."
                        }
                        div { class: "modal-actions",
                            button {
                                class: "btn",
                                r#type: "button",
                                onclick: move |_| reset_state.set(ResetState::Closed),
                                "Cancel"
                            }
                            button {
                                class: "btn btn-danger",
                                r#type: "button",
                                disabled: reset_state() == ResetState::Resetting,
                                onclick: on_confirm_reset,
                                "Clear answers"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ActionButtons(
    on_print: EventHandler<()>,
    on_download: EventHandler<()>,
    on_reset: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "actions no-print",
            button { class: "btn", r#type: "button", onclick: move |_| on_print.call(()), "Print" }
            button { class: "btn", r#type: "button", onclick: move |_| on_download.call(()), "Download JSON" }
            button { class: "btn", r#type: "button", onclick: move |_| on_reset.call(()), "Reset" }
        }
    }
}

#[component]
fn CategorySection(category: CategoryVm, on_answer: EventHandler<(QuestionId, u8)>) -> Element {
    rsx! {
        section { class: "card category",
            h3 { class: "card-title", "{category.name}" }
            div { class: "questions",
                for question in category.questions {
                    QuestionRow { key: "{question.id_str}", question, on_answer }
                }
            }
        }
    }
}

#[component]
fn QuestionRow(question: QuestionVm, on_answer: EventHandler<(QuestionId, u8)>) -> Element {
    let group_label = format!("Question {}", question.id_str);
    let group_name = format!("q-{}", question.id_str);
    let row_class = if question.is_answered() {
        "question question--answered"
    } else {
        "question"
    };
    rsx! {
        div { class: row_class,
            div { class: "question-text", "{question.text}" }
            div { class: "scale", role: "radiogroup", "aria-label": "{group_label}",
                for option in question.options {
                    ScaleOption {
                        key: "{option.value}",
                        question_id: question.id,
                        name: group_name.clone(),
                        option,
                        on_answer,
                    }
                }
            }
        }
    }
}

#[component]
fn ScaleOption(
    question_id: QuestionId,
    name: String,
    option: ScaleOptionVm,
    on_answer: EventHandler<(QuestionId, u8)>,
) -> Element {
    let value = option.value;
    rsx! {
        label { class: option.class,
            input {
                r#type: "radio",
                class: "sr-only",
                name: "{name}",
                value: "{value}",
                checked: option.checked,
                onchange: move |_| on_answer.call((question_id, value)),
            }
            "{value}. {option.label}"
        }
    }
}

#[component]
fn ResultsPanel(
    summary: SummaryVm,
    on_print: EventHandler<()>,
    on_download: EventHandler<()>,
    on_reset: EventHandler<()>,
) -> Element {
    rsx! {
        section { class: "card results",
            h3 { class: "card-title", "Results" }
            p { class: "results-meta",
                "Total questions: "
                strong { "{summary.total_questions}" }
                " · Answered: "
                strong { "{summary.completed}" }
                " · Max score: "
                strong { "{summary.max_score}" }
            }
            div { class: "results-score",
                "Total Score: "
                span { class: "{summary.score_class}", "{summary.total_score}" }
            }
            p { "Average: " strong { "{summary.average_str}" } }
            p { "Band: " strong { "{summary.band_label}" } }
            p { class: "results-interpretation", "{summary.interpretation}" }
            ActionButtons { on_print, on_download, on_reset }
        }
    }
}
