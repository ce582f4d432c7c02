use common::config::ApiConfig;
use dioxus::prelude::*;
use dioxus_primitives::toast::ToastProvider;

use crate::api::client::ApiClient;
use crate::components::error_boundary::SectionErrorBoundary;
use crate::pdf::PDFJS_SCRIPT_URL;
use crate::routes::Route;
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    // one client for the whole app, read by components through the context
    use_context_provider(|| ApiClient::new(ApiConfig::from_build_env()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: PDFJS_SCRIPT_URL }
        SectionErrorBoundary {
            section: "la aplicación".to_string(),
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}
