//! Client calls for the document endpoints.

use common::config::DOCUMENT_ENDPOINT;
use common::document::DocumentPage;
use common::envelope::{check_upload_body, decode_envelope};
use common::error::ApiError;
use common::pagination::PageRequest;
use common::upload::UPLOAD_FIELD_NAME;
use web_sys::File;

use crate::api::client::ApiClient;

pub async fn list_documents(api: &ApiClient, request: PageRequest) -> Result<DocumentPage, ApiError> {
    let body = api.get(DOCUMENT_ENDPOINT, &request.query()).await?;
    decode_envelope(&body)
}

pub async fn upload_document(
    api: &ApiClient,
    file: &File,
    on_progress: impl FnMut(f64, f64) + 'static,
) -> Result<(), ApiError> {
    let body = api.post_multipart(DOCUMENT_ENDPOINT, UPLOAD_FIELD_NAME, file, on_progress).await?;
    check_upload_body(&body)
}
