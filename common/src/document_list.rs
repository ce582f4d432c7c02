//! State behind the document list view.

use tracing::debug;

use crate::document::{DocumentPage, DocumentSummary};
use crate::error::ApiError;
use crate::pagination::{PageMeta, PageRequest};
use crate::request_token::{RequestSequencer, RequestToken};

/// What the list should render right now.
#[derive(Debug, Clone, PartialEq)]
pub enum ListView<'a> {
    Loading,
    Failed(&'a str),
    Empty,
    Rows(&'a [DocumentSummary]),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentListState {
    sequencer: RequestSequencer,
    loading: bool,
    error: Option<String>,
    documents: Vec<DocumentSummary>,
    meta: PageMeta,
}

impl Default for DocumentListState {
    fn default() -> Self {
        Self::new(PageRequest::default())
    }
}

impl DocumentListState {
    pub fn new(request: PageRequest) -> Self {
        Self {
            sequencer: RequestSequencer::default(),
            loading: true,
            error: None,
            documents: Vec::new(),
            meta: request.into(),
        }
    }

    /// Marks a fetch as started and returns the token its response must carry.
    pub fn begin_fetch(&mut self) -> RequestToken {
        self.loading = true;
        self.error = None;
        self.sequencer.issue()
    }

    /// Applies a response. Returns false when the response was superseded.
    pub fn apply(&mut self, token: RequestToken, result: Result<DocumentPage, ApiError>) -> bool {
        if !self.sequencer.is_current(token) {
            debug!("discarding stale document list response {token:?}");
            return false;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.meta = PageMeta { page: page.page, per_page: page.per_page, total: page.total };
                self.documents = page.documents;
                self.error = None;
            }
            Err(err) => {
                self.error = Some(err.user_message());
                self.documents.clear();
            }
        }
        true
    }

    pub fn meta(&self) -> PageMeta {
        self.meta
    }

    pub fn documents(&self) -> &[DocumentSummary] {
        &self.documents
    }

    pub fn view(&self) -> ListView<'_> {
        if self.loading {
            return ListView::Loading;
        }
        if let Some(error) = &self.error {
            return ListView::Failed(error);
        }
        if self.documents.is_empty() {
            return ListView::Empty;
        }
        ListView::Rows(&self.documents)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::envelope::decode_envelope;

    #[test]
    fn success_scenario_shows_single_row_and_disabled_buttons() {
        let mut state = DocumentListState::default();
        let token = state.begin_fetch();
        assert_eq!(state.view(), ListView::Loading);
        let body = r#"{"status":"success","data":{"documents":[{"filename":"a.pdf","modified_at":1700000000}],"page":1,"per_page":10,"total":1}}"#;
        assert!(state.apply(token, decode_envelope(body)));

        let ListView::Rows(rows) = state.view() else { panic!("expected rows, got {:?}", state.view()) };
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].filename, "a.pdf");
        let meta = state.meta();
        assert_eq!(meta.label(), "Página 1 de 1");
        assert!(!meta.can_go_previous());
        assert!(!meta.can_go_next());
    }

    #[test]
    fn error_scenario_clears_rows() {
        let mut state = DocumentListState::default();
        let token = state.begin_fetch();
        let body = r#"{"status":"success","data":{"documents":[{"filename":"a.pdf"}],"page":1,"per_page":10,"total":1}}"#;
        state.apply(token, decode_envelope(body));
        assert_eq!(state.documents().len(), 1);

        let token = state.begin_fetch();
        state.apply(token, decode_envelope(r#"{"status":"error","message":"boom"}"#));
        assert_eq!(state.view(), ListView::Failed("boom"));
        assert!(state.documents().is_empty());
    }

    #[test]
    fn empty_page_is_its_own_view() {
        let mut state = DocumentListState::default();
        let token = state.begin_fetch();
        state.apply(token, Ok(DocumentPage { documents: vec![], page: 1, per_page: 10, total: 0 }));
        assert_eq!(state.view(), ListView::Empty);
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut state = DocumentListState::new(PageRequest::new(1, 10));
        let page_two = state.begin_fetch();
        let page_three = state.begin_fetch();

        let fresh = DocumentPage {
            documents: vec![DocumentSummary { filename: "c.pdf".into(), modified_at: None }],
            page: 3,
            per_page: 10,
            total: 30,
        };
        assert!(state.apply(page_three, Ok(fresh)));

        let late = DocumentPage {
            documents: vec![DocumentSummary { filename: "b.pdf".into(), modified_at: None }],
            page: 2,
            per_page: 10,
            total: 30,
        };
        assert!(!state.apply(page_two, Ok(late)));
        assert_eq!(state.meta().page, 3);
        assert_eq!(state.documents()[0].filename, "c.pdf");
    }

    #[test]
    fn failure_keeps_previous_meta() {
        let mut state = DocumentListState::new(PageRequest::new(2, 5));
        let token = state.begin_fetch();
        state.apply(token, Err(ApiError::Transport(String::new())));
        assert_eq!(state.view(), ListView::Failed("Error al cargar documentos"));
        assert_eq!(state.meta(), PageMeta { page: 2, per_page: 5, total: 0 });
    }
}
