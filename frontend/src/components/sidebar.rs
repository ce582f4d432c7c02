//! Collapsible side panel wrapping every page.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdDescription;
use dioxus_free_icons::icons::md_file_icons::MdFileUpload;
use dioxus_free_icons::icons::md_navigation_icons::{MdClose, MdMenu};
use dioxus_free_icons::{Icon, IconShape};
use gloo_timers::future::TimeoutFuture;

use crate::components::error_boundary::SectionErrorBoundary;
use crate::routes::Route;

/// Matches the panel's CSS transition so it is closed before the page changes.
pub const CLOSE_DELAY_MS: u32 = 300;

/// Shared layout: side panel plus the routed page.
#[component]
pub fn Sidebar() -> Element {
    let mut is_open = use_signal(|| false);
    let current_route = use_route::<Route>();

    let navigate_to = use_callback(move |target: Route| {
        is_open.set(false);
        let current_route = current_route.clone();
        spawn(async move {
            TimeoutFuture::new(CLOSE_DELAY_MS).await;
            if current_route != target {
                navigator().push(target);
            }
        });
    });

    let panel_class = if is_open() { "x-sidebar x-sidebar-open" } else { "x-sidebar" };

    rsx! {
        if !is_open() {
            button {
                id: "x-sidebar-toggle",
                class: "x-sidebar-toggle",
                title: "Abrir menú",
                onclick: move |_| is_open.set(true),
                Icon { icon: MdMenu, style: "width: 24px; height: 24px;" }
            }
        }

        aside {
            id: "x-sidebar",
            class: "{panel_class}",

            div {
                style: "padding: 24px; position: relative;",
                button {
                    class: "x-sidebar-close",
                    title: "Cerrar menú",
                    onclick: move |_| is_open.set(false),
                    Icon { icon: MdClose, style: "width: 24px; height: 24px;" }
                }

                h2 {
                    style: "font-size: 24px; font-weight: 700; margin-bottom: 32px; color: white;",
                    "Gestión Documental"
                }

                nav {
                    style: "
                        display:flex;
                        flex-direction: column;
                        gap: 12px;
                    ",
                    SidebarLink { icon: MdDescription, label: "Documentos", onclick: move |_| navigate_to(Route::HomePage {}) }
                    SidebarLink { icon: MdFileUpload, label: "Subir", onclick: move |_| navigate_to(Route::UploadPage {}) }
                }
            }
        }

        div {
            id: "x-page-container",
            class: "x-page-container",
            SectionErrorBoundary {
                section: "la página".to_string(),
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn SidebarLink<T: IconShape + Clone + PartialEq + 'static>(icon: T, label: String, onclick: Callback<()>) -> Element {
    rsx! {
        button {
            class: "x-sidebar-link",
            onclick: move |_| onclick(()),
            Icon { icon: icon, style: "width: 20px; height: 20px;" }
            "{label}"
        }
    }
}
