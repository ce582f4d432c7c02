use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator(message: String) -> Element {
    rsx! {
        p {
            style: "color:#4B5563; font-size: 16px; padding: 10px; margin: 15px 0;",
            "{message}"
        }
    }
}
