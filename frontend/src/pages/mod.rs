//! Routed pages.

pub mod home_page;
pub mod upload_page;
pub mod viewer_page;
