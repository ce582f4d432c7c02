//! Page and zoom bookkeeping for the PDF viewer.
//!
//! The renderer is only told what to draw; clamping happens here.

use serde::{Deserialize, Serialize};

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 2.0;
pub const ZOOM_STEP: f32 = 0.1;
pub const INITIAL_ZOOM: f32 = 1.1;

/// Visible text when the renderer could not load or draw the document.
pub const RENDER_FAILED_MESSAGE: &str = "No se pudo renderizar el documento.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum RenderStatus {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerState {
    document_name: String,
    current_page: u32,
    total_pages: Option<u32>,
    zoom: f32,
    status: RenderStatus,
}

/// Parses the `page` query value, anything unusable is page 1.
pub fn parse_initial_page(raw: Option<&str>) -> u32 {
    raw.and_then(|p| p.trim().parse::<u32>().ok()).unwrap_or(1).max(1)
}

fn clamp_zoom(zoom: f32) -> f32 {
    // keep one decimal so repeated steps do not drift
    ((zoom * 10.0).round() / 10.0).clamp(MIN_ZOOM, MAX_ZOOM)
}

impl ViewerState {
    /// `None` when there is no document name, the terminal error view.
    pub fn from_query(name: Option<&str>, page: Option<&str>) -> Option<Self> {
        // the name is the document key, kept as received
        let name = name.filter(|n| !n.trim().is_empty())?;
        Some(Self {
            document_name: name.to_string(),
            current_page: parse_initial_page(page),
            total_pages: None,
            zoom: INITIAL_ZOOM,
            status: RenderStatus::Loading,
        })
    }

    pub fn document_name(&self) -> &str {
        &self.document_name
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn zoom_percent(&self) -> u32 {
        (self.zoom * 100.0).round() as u32
    }

    pub fn status(&self) -> &RenderStatus {
        &self.status
    }

    pub fn zoom_in(&mut self) {
        self.zoom = clamp_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.zoom = clamp_zoom(self.zoom - ZOOM_STEP);
    }

    pub fn next_page(&mut self) {
        self.go_to_page(self.current_page.saturating_add(1));
    }

    pub fn previous_page(&mut self) {
        self.go_to_page(self.current_page.saturating_sub(1));
    }

    /// Clamps to `[1, total]`, or only to 1 while the page count is unknown.
    pub fn go_to_page(&mut self, page: u32) {
        let page = page.max(1);
        self.current_page = match self.total_pages {
            Some(total) => page.min(total),
            None => page,
        };
    }

    pub fn document_loaded(&mut self, num_pages: u32) {
        self.total_pages = Some(num_pages.max(1));
        self.status = RenderStatus::Ready;
        self.go_to_page(self.current_page);
    }

    pub fn render_failed(&mut self, reason: impl Into<String>) {
        self.status = RenderStatus::Failed(reason.into());
    }

    /// A page was drawn. Clears an earlier render failure once the document is loaded.
    pub fn page_drawn(&mut self) {
        if self.total_pages.is_some() {
            self.status = RenderStatus::Ready;
        }
    }

    pub fn page_label(&self) -> Option<String> {
        self.total_pages.map(|total| format!("{} / {}", self.current_page, total))
    }
}
