//! Single document viewer with zoom and page navigation.

use common::viewer::{MAX_ZOOM, MIN_ZOOM, RENDER_FAILED_MESSAGE, RenderStatus, ViewerState};
use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdOpenInNew, MdZoomIn, MdZoomOut};
use dioxus_free_icons::icons::md_navigation_icons::{MdChevronLeft, MdChevronRight};
use dioxus_free_icons::Icon;

use crate::api::client::ApiClient;
use crate::components::error_boundary::SectionErrorBoundary;
use crate::components::loading_indicator::LoadingIndicator;
use crate::components::navigation_button::NavigationButton;
use crate::pdf::{self, PageRenderer, PdfDocument, PdfError, RenderOutcome};
use crate::routes::Route;

const CANVAS_ID: &str = "x-viewer-canvas";


/// View document page
#[component]
pub fn ViewerPage(name: String, page: String) -> Element {
    // no name means nothing to fetch
    let Some(initial) = ViewerState::from_query(Some(name.as_str()), Some(page.as_str())) else {
        return rsx! {
            Title { "Documentos - Visor" }
            MissingDocumentName {}
        };
    };

    rsx! {
        Title { "Documentos - {name}" }
        SectionErrorBoundary {
            section: "el visor".to_string(),
            DocumentViewer { key: "{name}", initial }
        }
    }
}

#[component]
fn MissingDocumentName() -> Element {
    rsx! {
        div {
            class: "x-page",
            p {
                style: "color:#DC2626;",
                "Falta el parámetro "
                b { "name" }
                "."
            }
            Link { to: Route::HomePage {}, class: "x-link", "Volver" }
        }
    }
}

#[component]
fn DocumentViewer(initial: ReadSignal<ViewerState>) -> Element {
    let api = use_context::<ApiClient>();
    let mut viewer = use_signal(|| initial.read().clone());
    let mut pdf_document = use_signal(|| None::<PdfDocument>);
    let mut fatal_error = use_signal(|| None::<PdfError>);
    let renderer = use_hook(PageRenderer::default);

    let file_url = use_memo(move || api.config().view_url(initial.read().document_name()));

    // a new `page` query value moves the viewer there
    use_effect(move || {
        let requested = initial.read().current_page();
        viewer.write().go_to_page(requested);
    });

    use_effect(move || {
        let url = file_url();
        spawn(async move {
            match pdf::load_document(&url).await {
                Ok(document) => {
                    tracing::info!("loaded {url}, {} pages", document.num_pages());
                    viewer.write().document_loaded(document.num_pages());
                    pdf_document.set(Some(document));
                }
                Err(err) => {
                    tracing::error!("PDF load error: {err}");
                    if err.is_fatal() {
                        fatal_error.set(Some(err));
                    } else {
                        viewer.write().render_failed(err.to_string());
                    }
                }
            }
        });
    });

    let current_page = use_memo(move || viewer.read().current_page());
    let zoom = use_memo(move || viewer.read().zoom());

    // redraw on page or zoom changes only, status updates must not loop back here
    use_effect(move || {
        let Some(document) = pdf_document.read().clone() else {
            return;
        };
        let (page_number, scale) = (current_page(), zoom());
        let renderer = renderer.clone();
        spawn(async move {
            match renderer.render(&document, page_number, scale, CANVAS_ID).await {
                Ok(RenderOutcome::Drawn) => {
                    if viewer.peek().status() != &RenderStatus::Ready {
                        viewer.write().page_drawn();
                    }
                }
                Ok(RenderOutcome::Superseded) => tracing::debug!("render of page {page_number} superseded"),
                Err(err) => {
                    tracing::error!("PDF render error: {err}");
                    viewer.write().render_failed(err.to_string());
                }
            }
        });
    });

    if let Some(err) = fatal_error.read().clone() {
        return Err(err.into());
    }

    let state = viewer.read().clone();
    // the canvas outlives a failed render so the next page or zoom can draw again
    let canvas_display = match state.status() {
        RenderStatus::Failed(_) => "none",
        _ => "block",
    };
    let canvas_area = rsx! {
        div {
            style: "display:flex; flex-direction: column; align-items:center; gap: 8px;",
            {match state.status() {
                RenderStatus::Loading => rsx! {
                    LoadingIndicator { message: "Cargando documento..." }
                },
                RenderStatus::Failed(reason) => rsx! {
                    div {
                        id: "x-viewer-render-failed",
                        style: "display:flex; flex-direction: column; align-items:center; gap: 8px;",
                        p { style: "color:#DC2626; font-size: 18px;", "{RENDER_FAILED_MESSAGE}" }
                        pre { style: "color:#6B7280; font-size: 12px; text-wrap: auto; max-width: 600px;", "{reason}" }
                    }
                },
                RenderStatus::Ready => rsx! {},
            }}
            if state.total_pages().is_some() {
                div {
                    class: "x-canvas-frame",
                    style: "display: {canvas_display};",
                    canvas { id: CANVAS_ID }
                }
            }
        }
    };

    rsx! {
        div {
            id: "x-viewer-root",
            style: "
                width: 100%;
                min-height: 100vh;
                display:flex;
                flex-direction: column;
                background-color: #F9FAFB;
            ",

            ViewerToolbar { viewer, file_url: file_url() }

            div {
                style: "
                    flex-grow: 1;
                    display:flex;
                    justify-content:center;
                    padding: 24px 0;
                ",
                {canvas_area}
            }
        }
    }
}

#[component]
fn ViewerToolbar(viewer: Signal<ViewerState>, file_url: String) -> Element {
    let mut viewer = viewer;
    let name = use_memo(move || viewer.read().document_name().to_string());
    let zoom_percent = use_memo(move || viewer.read().zoom_percent());
    let page_label = use_memo(move || viewer.read().page_label());
    let at_min_zoom = use_memo(move || viewer.read().zoom() <= MIN_ZOOM);
    let at_max_zoom = use_memo(move || viewer.read().zoom() >= MAX_ZOOM);
    let at_first_page = use_memo(move || viewer.read().current_page() <= 1);
    let at_last_page = use_memo(move || {
        let state = viewer.read();
        state.total_pages().is_some_and(|total| state.current_page() >= total)
    });

    rsx! {
        div {
            id: "x-viewer-toolbar",
            style: "
                display:flex;
                align-items:center;
                justify-content: space-between;
                padding: 8px 16px;
                background-color: white;
                border-bottom: 1px solid #E5E7EB;
            ",

            div {
                style: "display:flex; align-items:center; gap: 12px;",
                Link { to: Route::HomePage {}, class: "x-link", "← Volver" }
                span { style: "font-size: 14px; color:#4B5563; word-break: break-all;", "{name}" }
                a {
                    class: "x-button x-button-small",
                    href: "{file_url}",
                    target: "_blank",
                    rel: "noreferrer",
                    Icon { icon: MdOpenInNew, style: "width: 14px; height: 14px;" }
                    "Abrir en pestaña"
                }
            }

            div {
                style: "display:flex; align-items:center; gap: 8px;",
                NavigationButton {
                    icon: MdZoomOut,
                    label: "Alejar",
                    show_label: false,
                    disabled: at_min_zoom(),
                    onclick: move |_| viewer.write().zoom_out(),
                }
                span { style: "font-size: 14px; width: 48px; text-align: center;", "{zoom_percent}%" }
                NavigationButton {
                    icon: MdZoomIn,
                    label: "Acercar",
                    show_label: false,
                    disabled: at_max_zoom(),
                    onclick: move |_| viewer.write().zoom_in(),
                }

                // page controls only once the page count is known
                if let Some(label) = page_label() {
                    div {
                        style: "display:flex; align-items:center; gap: 4px; margin-left: 16px; font-size: 14px;",
                        NavigationButton {
                            icon: MdChevronLeft,
                            label: "Página anterior",
                            show_label: false,
                            disabled: at_first_page(),
                            onclick: move |_| viewer.write().previous_page(),
                        }
                        span { "{label}" }
                        NavigationButton {
                            icon: MdChevronRight,
                            label: "Página siguiente",
                            show_label: false,
                            disabled: at_last_page(),
                            onclick: move |_| viewer.write().next_page(),
                        }
                    }
                }
            }
        }
    }
}
