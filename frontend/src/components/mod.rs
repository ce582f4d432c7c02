//! Shared UI components.

pub mod error_boundary;
pub mod loading_indicator;
pub mod navigation_button;
pub mod sidebar;
pub mod document_list;
pub mod upload_button;
