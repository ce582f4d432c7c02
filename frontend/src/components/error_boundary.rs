//! Boundary for components that cannot render at all.
//!
//! Ordinary request failures stay inside their component as state. Only an
//! error returned from a component body lands here.

use dioxus::logger::tracing;
use dioxus::prelude::*;

fn describe(err: &ErrorContext) -> String {
    match err.error() {
        Some(err) => format!("{:#?}", err.0),
        None => "Error desconocido".to_string(),
    }
}

fn reload_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().reload() {
        tracing::error!("reload failed: {err:?}");
    }
}

/// Replaces `section` with an error panel when a child returns an error.
#[component]
pub fn SectionErrorBoundary(section: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                let detail = describe(&err);
                rsx! {
                    div {
                        class: "x-error-panel",
                        h2 { "No se pudo mostrar {section}" }
                        pre { "{detail}" }
                        div {
                            style: "display:flex; gap: 12px; align-items:center;",
                            button {
                                class: "x-button",
                                onclick: move |_| reload_page(),
                                "Recargar"
                            }
                            a { class: "x-link", href: "/", "Volver a Documentos" }
                        }
                    }
                }
            },
            {children}
        }
    }
}
