//! Common library exports shared by the document client.
//!
//! Everything in here is target independent so the arithmetic and the wire
//! formats can be unit tested without a browser.

extern crate serde;


pub mod config;
pub mod error;
pub mod document;
pub mod timestamp;
pub mod pagination;
pub mod envelope;
pub mod document_list;
pub mod request_token;
pub mod upload;
pub mod viewer;
