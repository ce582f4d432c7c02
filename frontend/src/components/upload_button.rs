//! File picker plus upload button with a progress bar.

use common::error::ApiError;
use common::upload::{ACCEPTED_MIME_TYPE, SelectedFile, UploadSession, UploadState};
use dioxus::logger::tracing;
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_file_icons::MdFileUpload;
use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement};

use crate::api::client::ApiClient;
use crate::api::documents_api::upload_document;

const FILE_INPUT_ID: &str = "x-upload-file-input";

fn picked_file() -> Option<File> {
    web_sys::window()?
        .document()?
        .get_element_by_id(FILE_INPUT_ID)?
        .dyn_into::<HtmlInputElement>()
        .ok()?
        .files()?
        .get(0)
}

fn open_file_dialog() {
    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(FILE_INPUT_ID))
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
    match input {
        Some(input) => input.click(),
        None => tracing::error!("file input #{FILE_INPUT_ID} not found"),
    }
}

fn blocking_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

#[component]
pub fn UploadButton(on_upload_success: Callback<()>) -> Element {
    let api = use_context::<ApiClient>();
    let mut session = use_signal(UploadSession::default);
    let mut picked = use_signal(|| None::<File>);

    let on_file_change = move |_e: Event<FormData>| {
        let Some(file) = picked_file() else {
            session.write().clear_selection();
            picked.set(None);
            return;
        };
        session.write().select_file(SelectedFile {
            name: file.name(),
            size: file.size() as u64,
            mime_type: file.type_(),
        });
        picked.set(Some(file));
    };

    let submit = move |_: Event<MouseData>| {
        let Some(file) = picked.read().clone() else {
            return;
        };
        let token = match session.write().begin_upload() {
            Ok(token) => token,
            Err(err @ ApiError::FileTooLarge { .. }) => {
                blocking_alert(&err.user_message());
                return;
            }
            Err(err) => {
                tracing::warn!("upload not started: {err}");
                return;
            }
        };
        let api = api.clone();
        spawn(async move {
            let result = upload_document(&api, &file, move |loaded, total| {
                session.write().record_progress(token, loaded, total);
            })
            .await;
            match &result {
                Ok(()) => tracing::info!("uploaded {}", file.name()),
                Err(err) => tracing::error!("Error al subir documento: {err}"),
            }
            if session.write().finish(token, &result) {
                on_upload_success(());
            }
        });
    };

    let busy = session.read().is_busy();
    let state = session.read().state();
    let selected = session.read().file().cloned();

    rsx! {
        div {
            id: "x-upload-control",
            style: "
                display:flex;
                flex-direction: column;
                gap: 16px;
                min-width: 320px;
            ",

            input {
                id: FILE_INPUT_ID,
                r#type: "file",
                accept: ACCEPTED_MIME_TYPE,
                style: "display: none;",
                onchange: on_file_change,
            }

            button {
                class: "x-button x-button-primary",
                disabled: busy,
                onclick: move |_| open_file_dialog(),
                Icon { icon: MdFileUpload, style: "width: 18px; height: 18px;" }
                "Seleccionar documento"
            }

            if let Some(file) = selected.as_ref() {
                div {
                    class: "x-file-details",
                    p { "Nombre: {file.name}" }
                    p { "Tamaño: {file.size_kb_display()}" }
                    p { "Tipo: {file.mime_type}" }
                }
            }

            if let UploadState::Uploading { progress } = state {
                div {
                    style: "display:flex; flex-direction: column; gap: 8px;",
                    div {
                        class: "x-progress-track",
                        div {
                            class: "x-progress-bar",
                            style: "width: {progress}%;",
                        }
                    }
                    p { style: "font-size: 14px; color:#4B5563;", "{progress}% subido" }
                }
            }

            if selected.is_some() && !busy {
                button {
                    class: "x-button x-button-blue",
                    onclick: submit,
                    "Subir"
                }
            }

            if state == UploadState::Success {
                p { style: "font-size: 14px; color:#16A34A;", "Documento subido correctamente!" }
            }
            if state == UploadState::Error {
                p { style: "font-size: 14px; color:#DC2626;", "Error al subir. Intenta nuevamente." }
            }
        }
    }
}
