use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{ChecklistView, PrintView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", ChecklistView)] Checklist {},
        #[route("/print", PrintView)] Print {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "topbar",
                h1 { class: "topbar-title", "How to Know If You’re in a Cult" }
                nav { class: "topbar-nav no-print",
                    Link { to: Route::Checklist {}, "Checklist" }
                    Link { to: Route::Print {}, "Print view" }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
