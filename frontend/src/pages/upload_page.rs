//! Upload page.

use std::time::Duration;

use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_primitives::toast::{ToastOptions, consume_toast};

use crate::components::upload_button::UploadButton;


/// Upload page
#[component]
pub fn UploadPage() -> Element {
    let on_upload_success = use_callback(move |_: ()| {
        tracing::info!("Documento subido correctamente");
        consume_toast().info(
            "Documento subido.".to_string(),
            ToastOptions::new()
                .description("El documento ya está disponible en la lista de documentos.")
                .duration(Duration::from_secs(15))
                .permanent(false),
        );
    });

    rsx! {
        Title { "Documentos - Subir" }
        main {
            id: "x-upload-container",
            class: "x-page",
            style: "align-items: center;",

            h1 { class: "x-page-title", "Subir documento" }

            div {
                style: "display:flex; justify-content:center;",
                UploadButton { on_upload_success }
            }
        }
    }
}
