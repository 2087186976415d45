use checklist_core::model::resources::DISCLAIMER;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::resources::HelpResources;
use crate::vm::map_print;

/// Printer-friendly report of the current answers.
#[component]
pub fn PrintView() -> Element {
    let ctx = use_context::<AppContext>();
    let vm = map_print(&ctx.assessment().export_snapshot());

    rsx! {
        div { class: "page print-page",
            div { class: "actions no-print",
                button {
                    class: "btn",
                    r#type: "button",
                    onclick: move |_| {
                        let _ = document::eval("window.print();");
                    },
                    "Print"
                }
            }

            section { class: "card results",
                h2 { class: "card-title", "Cult Checklist Results" }
                p { class: "muted", "Generated {vm.generated_at_str}" }
                p { class: "results-meta",
                    "Answered: "
                    strong { "{vm.completed}/{vm.total_questions}" }
                    " · Total Score: "
                    strong { "{vm.total_score}/{vm.max_score}" }
                    " · Average: "
                    strong { "{vm.average_str}" }
                }
                p { "Band: " strong { "{vm.band}" } }
                p { class: "results-interpretation", "{vm.interpretation}" }
            }

            for group in vm.sections {
                section { key: "{group.name}", class: "card category",
                    h3 { class: "card-title", "{group.name}" }
                    ol { class: "print-rows",
                        for row in group.rows {
                            li { key: "{row.id}", class: "print-row",
                                span { class: "print-question", "{row.text}" }
                                span { class: "print-answer", "{row.answer}" }
                            }
                        }
                    }
                }
            }

            section { class: "card notes",
                h3 { class: "card-title", "Notes" }
                if vm.notes.is_empty() {
                    p { class: "muted", "No notes." }
                } else {
                    pre { class: "notes-print", "{vm.notes}" }
                }
            }

            HelpResources {}

            footer { class: "footer", "{DISCLAIMER}" }
        }
    }
}
