//! pdf.js bindings. Decoding and drawing happen in the library, we only
//! hand it a URL, a page number, a scale and a canvas.

use std::cell::RefCell;
use std::rc::Rc;

use common::request_token::RequestSequencer;
use gloo_timers::future::TimeoutFuture;
use js_sys::{Object, Promise, Reflect};
use serde::Serialize;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api::xhr::describe_js_error;

pub const PDFJS_SCRIPT_URL: &str = "https://unpkg.com/pdfjs-dist@3.11.174/build/pdf.min.js";
pub const PDFJS_WORKER_URL: &str = "https://unpkg.com/pdfjs-dist@3.11.174/build/pdf.worker.min.js";

const LIBRARY_GLOBAL: &str = "pdfjsLib";
const LIBRARY_POLL_MS: u32 = 100;
const LIBRARY_POLL_ATTEMPTS: u32 = 100;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PdfError {
    #[error("pdf.js did not load")]
    LibraryUnavailable,
    #[error("failed to load document: {0}")]
    Load(String),
    #[error("failed to render page {page}: {reason}")]
    Render { page: u32, reason: String },
    #[error("canvas #{0} is not available")]
    Canvas(String),
}

impl PdfError {
    /// No document can be shown without the library, so this is not the
    /// viewer's to display.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::LibraryUnavailable)
    }
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = pdfjsLib, js_name = getDocument)]
    fn get_document(src: &JsValue) -> Result<PdfLoadingTask, JsValue>;

    type PdfLoadingTask;
    #[wasm_bindgen(method, getter)]
    fn promise(this: &PdfLoadingTask) -> Promise;

    #[derive(Debug, Clone)]
    pub type PdfDocument;
    #[wasm_bindgen(method, getter, js_name = numPages)]
    pub fn num_pages(this: &PdfDocument) -> u32;
    #[wasm_bindgen(method, js_name = getPage)]
    fn get_page(this: &PdfDocument, page_number: u32) -> Promise;

    type PdfPage;
    #[wasm_bindgen(method, js_name = getViewport)]
    fn get_viewport(this: &PdfPage, params: &JsValue) -> PdfViewport;
    #[wasm_bindgen(catch, method)]
    fn render(this: &PdfPage, params: &JsValue) -> Result<PdfRenderTask, JsValue>;

    type PdfViewport;
    #[wasm_bindgen(method, getter)]
    fn width(this: &PdfViewport) -> f64;
    #[wasm_bindgen(method, getter)]
    fn height(this: &PdfViewport) -> f64;

    type PdfRenderTask;
    #[wasm_bindgen(method, getter, js_name = promise)]
    fn render_promise(this: &PdfRenderTask) -> Promise;
    #[wasm_bindgen(method)]
    fn cancel(this: &PdfRenderTask);
}

#[derive(Serialize)]
struct ViewportParams {
    scale: f32,
}

#[derive(Serialize)]
struct DocumentParams<'a> {
    url: &'a str,
}

fn library() -> Option<JsValue> {
    Reflect::get(&js_sys::global(), &JsValue::from_str(LIBRARY_GLOBAL))
        .ok()
        .filter(|lib| !lib.is_undefined() && !lib.is_null())
}

/// The script tag loads asynchronously, a direct visit to the viewer can beat it.
async fn wait_for_library() -> Result<JsValue, PdfError> {
    for _ in 0..LIBRARY_POLL_ATTEMPTS {
        if let Some(lib) = library() {
            return Ok(lib);
        }
        TimeoutFuture::new(LIBRARY_POLL_MS).await;
    }
    Err(PdfError::LibraryUnavailable)
}

fn configure_worker(lib: &JsValue) -> Result<(), PdfError> {
    let options = Reflect::get(lib, &JsValue::from_str("GlobalWorkerOptions"))
        .map_err(|e| PdfError::Load(describe_js_error(&e)))?;
    Reflect::set(&options, &JsValue::from_str("workerSrc"), &JsValue::from_str(PDFJS_WORKER_URL))
        .map_err(|e| PdfError::Load(describe_js_error(&e)))?;
    Ok(())
}

/// Loads the document at `url`, resolving once the page count is known.
pub async fn load_document(url: &str) -> Result<PdfDocument, PdfError> {
    let lib = wait_for_library().await?;
    configure_worker(&lib)?;

    let params = serde_wasm_bindgen::to_value(&DocumentParams { url })
        .map_err(|e| PdfError::Load(e.to_string()))?;
    let task = get_document(&params).map_err(|e| PdfError::Load(describe_js_error(&e)))?;
    let document = JsFuture::from(task.promise())
        .await
        .map_err(|e| PdfError::Load(describe_js_error(&e)))?;
    Ok(document.unchecked_into())
}

fn is_cancellation(err: &JsValue) -> bool {
    Reflect::get(err, &JsValue::from_str("name"))
        .ok()
        .and_then(|name| name.as_string())
        .is_some_and(|name| name == "RenderingCancelledException")
}

fn canvas_context(canvas_id: &str) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), PdfError> {
    let canvas_error = || PdfError::Canvas(canvas_id.to_string());
    let canvas = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(canvas_id))
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        .ok_or_else(canvas_error)?;
    let context = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or_else(canvas_error)?;
    Ok((canvas, context))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Drawn,
    /// A newer render took over the canvas.
    Superseded,
}

/// Draws pages onto one canvas. Starting a render cancels the one still running,
/// pdf.js refuses two renders on the same canvas.
///
/// Page fetches resolve out of order, so each render takes a token up front
/// and gives up once a newer render has been requested.
#[derive(Clone, Default)]
pub struct PageRenderer {
    running: Rc<RefCell<Option<PdfRenderTask>>>,
    sequencer: Rc<RefCell<RequestSequencer>>,
}

impl PageRenderer {
    pub async fn render(
        &self,
        document: &PdfDocument,
        page_number: u32,
        scale: f32,
        canvas_id: &str,
    ) -> Result<RenderOutcome, PdfError> {
        let render_error = |err: JsValue| PdfError::Render { page: page_number, reason: describe_js_error(&err) };
        let token = self.sequencer.borrow_mut().issue();

        let page = JsFuture::from(document.get_page(page_number)).await;
        if !self.sequencer.borrow().is_current(token) {
            return Ok(RenderOutcome::Superseded);
        }
        let page: PdfPage = page.map_err(render_error)?.unchecked_into();
        let viewport_params = serde_wasm_bindgen::to_value(&ViewportParams { scale })
            .map_err(|e| PdfError::Render { page: page_number, reason: e.to_string() })?;
        let viewport = page.get_viewport(&viewport_params);

        let (canvas, context) = canvas_context(canvas_id)?;
        if let Some(previous) = self.running.borrow_mut().take() {
            previous.cancel();
        }
        canvas.set_width(viewport.width().ceil() as u32);
        canvas.set_height(viewport.height().ceil() as u32);

        let params = Object::new();
        Reflect::set(&params, &JsValue::from_str("canvasContext"), &context).map_err(render_error)?;
        Reflect::set(&params, &JsValue::from_str("viewport"), &viewport).map_err(render_error)?;
        let task = page.render(&params).map_err(render_error)?;
        let done = task.render_promise();
        *self.running.borrow_mut() = Some(task);

        match JsFuture::from(done).await {
            Ok(_) => Ok(RenderOutcome::Drawn),
            Err(err) if is_cancellation(&err) => Ok(RenderOutcome::Superseded),
            Err(err) => Err(render_error(err)),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_a_missing_library_is_fatal() {
        assert!(PdfError::LibraryUnavailable.is_fatal());
        assert!(!PdfError::Load("InvalidPDFException".into()).is_fatal());
        assert!(!PdfError::Render { page: 2, reason: "cancelled".into() }.is_fatal());
        assert!(!PdfError::Canvas("x-viewer-canvas".into()).is_fatal());
    }
}
