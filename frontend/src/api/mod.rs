//! HTTP access to the document API.

pub mod client;
pub mod documents_api;
pub(crate) mod xhr;
