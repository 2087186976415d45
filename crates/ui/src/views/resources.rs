use checklist_core::model::resources::{FURTHER_READING, FURTHER_READING_TITLE, HELP_RESOURCES};
use dioxus::prelude::*;

/// Outside-help contacts and further reading, shared by the checklist and print views.
#[component]
pub fn HelpResources() -> Element {
    rsx! {
        section { class: "card resources",
            h3 { class: "card-title", "Where to get help" }
            ul { class: "resource-list",
                for resource in HELP_RESOURCES {
                    li { key: "{resource.name}",
                        "{resource.name}: "
                        a {
                            href: resource.contact.href(),
                            target: "_blank",
                            rel: "noreferrer",
                            "{resource.contact.display()}"
                        }
                    }
                }
            }
            p { class: "resource-subtitle", "{FURTHER_READING_TITLE}" }
            ul { class: "resource-list",
                for entry in FURTHER_READING {
                    li { key: "{entry}", "{entry}" }
                }
            }
        }
    }
}
