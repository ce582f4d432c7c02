//! Pre-configured HTTP client shared by every component.

use std::rc::Rc;

use common::config::{ApiConfig, default_content_type};
use common::error::ApiError;
use dioxus::logger::tracing;
use reqwest::RequestBuilder;
use reqwest::header::CONTENT_TYPE;
use web_sys::{File, FormData};

use crate::api::xhr;

fn with_default_content_type(request: RequestBuilder, has_body: bool) -> RequestBuilder {
    match default_content_type(has_body) {
        Some(content_type) => request.header(CONTENT_TYPE, content_type),
        None => request,
    }
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Rc<ApiConfig>,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        tracing::info!("document API at {}", config.base_url());
        Self {
            config: Rc::new(config),
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Single hook every failed response passes through. Logs and hands the error back untouched.
    pub fn report_failure(&self, err: ApiError) -> ApiError {
        tracing::error!("API Error: {err}");
        err
    }

    /// GET `path` with query parameters, returning the body of a 2xx response.
    pub async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String, ApiError> {
        let url = self.config.endpoint(path);
        let response = with_default_content_type(self.http.get(&url).query(query), false)
            .send()
            .await
            .map_err(|e| self.report_failure(ApiError::Transport(e.to_string())))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.report_failure(ApiError::Transport(e.to_string())))?;
        if !status.is_success() {
            return Err(self.report_failure(ApiError::Status { status: status.as_u16(), body }));
        }
        Ok(body)
    }

    /// POST `file` as multipart form data under `field`.
    ///
    /// The browser sets the boundary-bearing content type. `on_progress` gets
    /// `(loaded, total)` bytes for every upload progress event with a known total.
    pub async fn post_multipart(
        &self,
        path: &str,
        field: &str,
        file: &File,
        on_progress: impl FnMut(f64, f64) + 'static,
    ) -> Result<String, ApiError> {
        let url = self.config.endpoint(path);
        let form = FormData::new()
            .and_then(|form| form.append_with_blob_and_filename(field, file, &file.name()).map(|_| form))
            .map_err(|e| ApiError::Transport(xhr::describe_js_error(&e)))?;

        let response = xhr::post_form(&url, &form, on_progress)
            .await
            .map_err(|e| self.report_failure(ApiError::Transport(format!("{e:#}"))))?;
        if !(200..300).contains(&response.status) {
            return Err(self.report_failure(ApiError::Status { status: response.status, body: response.body }));
        }
        Ok(response.body)
    }
}
