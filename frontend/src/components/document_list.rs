//! Paginated list of uploaded documents.

use common::document::DocumentSummary;
use common::document_list::{DocumentListState, ListView};
use common::pagination::{PageMeta, PageRequest};
use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_editor_icons::MdInsertDriveFile;
use dioxus_free_icons::icons::md_navigation_icons::{MdChevronLeft, MdChevronRight};

use crate::api::client::ApiClient;
use crate::api::documents_api::list_documents;
use crate::components::loading_indicator::LoadingIndicator;
use crate::components::navigation_button::NavigationButton;
use crate::routes::Route;

/// The page number belongs to the caller, the fetched rows belong to the list.
#[component]
pub fn DocumentList(
    refresh: ReadSignal<bool>,
    page: ReadSignal<u64>,
    per_page: ReadSignal<u64>,
    on_page_change: Callback<u64>,
) -> Element {
    let api = use_context::<ApiClient>();
    let mut list = use_signal(|| DocumentListState::new(PageRequest::new(page(), per_page())));

    // refetch whenever refresh, page or per_page change
    use_effect(move || {
        let _ = refresh.read();
        let request = PageRequest::new(*page.read(), *per_page.read());
        let token = list.write().begin_fetch();
        let api = api.clone();
        spawn(async move {
            let result = list_documents(&api, request).await;
            if let Err(e) = &result {
                tracing::warn!("document list for page {} failed: {e}", request.page);
            }
            list.write().apply(token, result);
        });
    });

    let state = list.read();
    let meta = state.meta();
    match state.view() {
        ListView::Loading => rsx! {
            LoadingIndicator { message: "Cargando documentos..." }
        },
        ListView::Failed(message) => rsx! {
            p {
                style: "color:#DC2626; font-size: 16px; margin: 15px 0;",
                "Error: {message}"
            }
        },
        ListView::Empty => rsx! {
            p {
                style: "color:#4B5563; font-size: 16px; margin: 15px 0;",
                "No hay documentos disponibles"
            }
        },
        ListView::Rows(rows) => {
            let rows = rows.to_vec();
            rsx! {
                div {
                    id: "x-document-list",
                    style: "
                        display:flex;
                        flex-direction: column;
                        gap: 16px;
                    ",
                    for (idx, document) in rows.into_iter().enumerate() {
                        DocumentRow {
                            key: "{document.filename}-{idx}",
                            document,
                        }
                    }
                    PaginationBar { meta, on_page_change }
                }
            }
        }
    }
}

#[component]
fn DocumentRow(document: ReadSignal<DocumentSummary>) -> Element {
    let filename = use_memo(move || document.read().filename.clone());
    let modified = use_memo(move || document.read().modified_at_display());
    rsx! {
        div {
            class: "x-document-row",
            div {
                style: "
                    display:flex;
                    align-items:center;
                    gap: 12px;
                ",
                Icon { icon: MdInsertDriveFile, style: "width: 24px; height: 24px; color:#16A34A; flex-shrink: 0;" }
                div {
                    p {
                        style: "font-weight: 600; word-break: break-all;",
                        "{filename}"
                    }
                    p {
                        style: "font-size: 14px; color:#6B7280;",
                        "Modificado: {modified}"
                    }
                }
            }
            Link {
                to: Route::viewer_for(&filename()),
                class: "x-link",
                "Ver PDF"
            }
        }
    }
}

#[component]
fn PaginationBar(meta: ReadSignal<PageMeta>, on_page_change: Callback<u64>) -> Element {
    let can_go_previous = use_memo(move || meta.read().can_go_previous());
    let can_go_next = use_memo(move || meta.read().can_go_next());
    let label = use_memo(move || meta.read().label());
    rsx! {
        div {
            id: "x-document-list-pagination",
            style: "
                display:flex;
                align-items:center;
                justify-content:center;
                gap: 8px;
                padding-top: 8px;
            ",
            NavigationButton {
                icon: MdChevronLeft,
                label: "Anterior",
                disabled: !can_go_previous(),
                onclick: move |_| {
                    if let Some(previous) = meta.read().previous_page() {
                        on_page_change(previous);
                    }
                }
            }
            span {
                style: "font-size: 14px;",
                "{label}"
            }
            NavigationButton {
                icon: MdChevronRight,
                label: "Siguiente",
                disabled: !can_go_next(),
                onclick: move |_| {
                    if let Some(next) = meta.read().next_page() {
                        on_page_change(next);
                    }
                }
            }
        }
    }
}
