//! Document metadata returned by the listing endpoint.

use serde::{Deserialize, Serialize};

use crate::timestamp::{RawTimestamp, format_timestamp_local};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub filename: String,
    #[serde(default)]
    pub modified_at: Option<RawTimestamp>,
}

impl DocumentSummary {
    pub fn modified_at_display(&self) -> String {
        format_timestamp_local(self.modified_at.as_ref())
    }
}

/// The `data` member of a successful listing envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentPage {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub documents: Vec<DocumentSummary>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<DocumentSummary>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<DocumentSummary>>::deserialize(deserializer)?.unwrap_or_default())
}
