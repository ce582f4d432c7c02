//! Multipart POST over `XMLHttpRequest`, fetch cannot report upload progress.

use anyhow::{Context, anyhow};
use js_sys::{Function, Promise};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, ProgressEvent, XmlHttpRequest};

pub(crate) struct XhrResponse {
    pub status: u16,
    pub body: String,
}

pub(crate) fn describe_js_error(err: &JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}

fn js_error(err: JsValue) -> anyhow::Error {
    anyhow!(describe_js_error(&err))
}

pub(crate) async fn post_form(
    url: &str,
    form: &FormData,
    mut on_progress: impl FnMut(f64, f64) + 'static,
) -> anyhow::Result<XhrResponse> {
    let xhr = XmlHttpRequest::new().map_err(js_error)?;
    xhr.open_with_async("POST", url, true)
        .map_err(js_error)
        .with_context(|| format!("opening POST {url}"))?;

    let progress = Closure::<dyn FnMut(ProgressEvent)>::new(move |event: ProgressEvent| {
        if event.length_computable() {
            on_progress(event.loaded(), event.total());
        }
    });
    xhr.upload()
        .map_err(js_error)?
        .set_onprogress(Some(progress.as_ref().unchecked_ref()));

    let finished = Promise::new(&mut |resolve: Function, reject: Function| {
        let reject_abort = reject.clone();
        let onload = Closure::once_into_js(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });
        let onerror = Closure::once_into_js(move || {
            let _ = reject.call1(&JsValue::NULL, &JsValue::from_str("network error"));
        });
        let onabort = Closure::once_into_js(move || {
            let _ = reject_abort.call1(&JsValue::NULL, &JsValue::from_str("upload aborted"));
        });
        xhr.set_onload(Some(onload.unchecked_ref()));
        xhr.set_onerror(Some(onerror.unchecked_ref()));
        xhr.set_onabort(Some(onabort.unchecked_ref()));
    });

    xhr.send_with_opt_form_data(Some(form))
        .map_err(js_error)
        .with_context(|| format!("sending POST {url}"))?;
    JsFuture::from(finished)
        .await
        .map_err(js_error)
        .with_context(|| format!("POST {url}"))?;
    // progress events stop once the request has finished
    drop(progress);

    let status = xhr.status().map_err(js_error)?;
    let body = xhr.response_text().map_err(js_error)?.unwrap_or_default();
    Ok(XhrResponse { status, body })
}
