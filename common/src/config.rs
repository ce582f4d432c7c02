//! Client configuration for the document API.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

/// Endpoint serving the paginated listing and accepting uploads.
pub const DOCUMENT_ENDPOINT: &str = "/document/";
/// Endpoint streaming a single document by name.
pub const DOCUMENT_VIEW_ENDPOINT: &str = "/document/view";

/// Content type of requests that carry a body.
pub const DEFAULT_CONTENT_TYPE: &str = "multipart/form-data";

/// Bodiless requests go out without a content type, a cross-origin GET then
/// needs no preflight.
pub fn default_content_type(has_body: bool) -> Option<&'static str> {
    has_body.then_some(DEFAULT_CONTENT_TYPE)
}

/// Immutable API configuration, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        let trimmed = base_url.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base_url }
    }

    /// Reads `DOCDESK_API_BASE_URL` at compile time, the browser has no runtime environment.
    pub fn from_build_env() -> Self {
        match option_env!("DOCDESK_API_BASE_URL") {
            Some(base_url) => Self::new(base_url),
            None => Self::default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Address handed to the PDF renderer for `name`.
    pub fn view_url(&self, name: &str) -> String {
        format!(
            "{}?name={}",
            self.endpoint(DOCUMENT_VIEW_ENDPOINT),
            urlencoding::encode(name)
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_requests_with_a_body_get_a_content_type() {
        assert_eq!(default_content_type(false), None);
        assert_eq!(default_content_type(true), Some("multipart/form-data"));
    }

    #[test]
    fn default_points_at_local_api() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url(), "http://localhost:5000");
        assert_eq!(config.endpoint(DOCUMENT_ENDPOINT), "http://localhost:5000/document/");
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ApiConfig::new("https://docs.example.org///");
        assert_eq!(config.base_url(), "https://docs.example.org");
        assert_eq!(
            config.endpoint("document/view"),
            "https://docs.example.org/document/view"
        );
    }

    #[test]
    fn blank_base_falls_back_to_default() {
        assert_eq!(ApiConfig::new("  ").base_url(), DEFAULT_API_BASE_URL);
    }

    #[test]
    fn view_url_percent_encodes_the_name() {
        let config = ApiConfig::default();
        assert_eq!(
            config.view_url("informe anual & anexos.pdf"),
            "http://localhost:5000/document/view?name=informe%20anual%20%26%20anexos.pdf"
        );
        assert_eq!(
            config.view_url("a.pdf"),
            "http://localhost:5000/document/view?name=a.pdf"
        );
    }
}
