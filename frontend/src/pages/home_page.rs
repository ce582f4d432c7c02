//! Document list page.

use common::pagination::{DEFAULT_PAGE, DEFAULT_PER_PAGE};
use dioxus::prelude::*;

use crate::components::document_list::DocumentList;


/// Home page
#[component]
pub fn HomePage() -> Element {
    let mut page = use_signal(|| DEFAULT_PAGE);
    // nothing flips this yet, uploads do not refresh the list
    let refresh = use_signal(|| false);

    rsx! {
        Title { "Documentos" }
        main {
            id: "x-home-container",
            class: "x-page",

            h1 { class: "x-page-title", "Documentos" }

            DocumentList {
                refresh: refresh(),
                page: page(),
                per_page: DEFAULT_PER_PAGE,
                on_page_change: move |next: u64| page.set(next),
            }
        }
    }
}
