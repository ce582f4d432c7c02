//! Small bordered button used by the pagination bar and the viewer toolbar.

use dioxus::prelude::*;
use dioxus_free_icons::{Icon, IconShape};

#[component]
pub fn NavigationButton<I: IconShape + Clone + PartialEq + 'static>(
    icon: I,
    label: String,
    #[props(default = true)] show_label: bool,
    disabled: ReadSignal<bool>,
    onclick: Callback<()>,
) -> Element {
    let btn_opacity = use_memo(move || if *disabled.read() { "0.5" } else { "1" });
    let btn_cursor = use_memo(move || if *disabled.read() { "not-allowed" } else { "pointer" });
    rsx! {
        button {
            class: "x-button",
            title: "{label}",
            disabled: *disabled.read(),
            style: "opacity: {btn_opacity}; cursor: {btn_cursor};",
            onclick: move |_| {
                if !*disabled.read() {
                    onclick(());
                }
            },
            Icon { icon: icon, style: "width: 18px; height: 18px;" }
            if show_label {
                span { "{label}" }
            }
        }
    }
}
