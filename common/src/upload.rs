//! Upload control state machine.
//!
//! `Idle -> Uploading -> Success | Error`, and picking a new file from any
//! state goes back to `Idle`. There is no retry state; a failed upload is
//! resubmitted from scratch.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ApiError;
use crate::request_token::{RequestSequencer, RequestToken};

/// Client-side cap, the server stays the authority.
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;
/// Multipart field the upload endpoint expects.
pub const UPLOAD_FIELD_NAME: &str = "file";
pub const ACCEPTED_MIME_TYPE: &str = "application/pdf";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
    pub mime_type: String,
}

impl SelectedFile {
    pub fn size_kb_display(&self) -> String {
        format!("{:.2} KB", self.size as f64 / 1024.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum UploadState {
    #[default]
    Idle,
    Uploading { progress: u8 },
    Success,
    Error,
}

impl UploadState {
    pub fn is_uploading(&self) -> bool {
        matches!(self, Self::Uploading { .. })
    }
}

/// Percentage of `loaded` over `total`, `None` when the total is unknown.
pub fn progress_percent(loaded: f64, total: f64) -> Option<u8> {
    if total.is_nan() || total <= 0.0 || !loaded.is_finite() {
        return None;
    }
    Some(((loaded * 100.0) / total).round().clamp(0.0, 100.0) as u8)
}

pub fn check_file_size(size: u64) -> Result<(), ApiError> {
    if size > MAX_FILE_SIZE {
        return Err(ApiError::FileTooLarge { size, limit: MAX_FILE_SIZE });
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadSession {
    file: Option<SelectedFile>,
    state: UploadState,
    sequencer: RequestSequencer,
}

impl UploadSession {
    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn state(&self) -> UploadState {
        self.state
    }

    pub fn is_busy(&self) -> bool {
        self.state.is_uploading()
    }

    /// Stores the chosen file and resets to idle. An upload still in flight becomes stale.
    pub fn select_file(&mut self, file: SelectedFile) {
        self.file = Some(file);
        self.state = UploadState::Idle;
        self.sequencer.invalidate();
    }

    /// The picker was closed without a file. Drops the previous one like a new selection would.
    pub fn clear_selection(&mut self) {
        self.file = None;
        self.state = UploadState::Idle;
        self.sequencer.invalidate();
    }

    /// Validates the selection and moves to `Uploading`.
    ///
    /// Nothing changes when this fails, so no request must be made.
    pub fn begin_upload(&mut self) -> Result<RequestToken, ApiError> {
        let Some(file) = &self.file else {
            return Err(ApiError::NoFileSelected);
        };
        if self.is_busy() {
            return Err(ApiError::UploadInProgress);
        }
        if let Err(err) = check_file_size(file.size) {
            warn!("rejecting {} before upload: {err}", file.name);
            return Err(err);
        }
        self.state = UploadState::Uploading { progress: 0 };
        Ok(self.sequencer.issue())
    }

    pub fn record_progress(&mut self, token: RequestToken, loaded: f64, total: f64) {
        if !self.sequencer.is_current(token) || !self.is_busy() {
            return;
        }
        if let Some(progress) = progress_percent(loaded, total) {
            self.state = UploadState::Uploading { progress };
        }
    }

    /// Records the outcome. Returns true when the upload succeeded and is still current.
    pub fn finish(&mut self, token: RequestToken, result: &Result<(), ApiError>) -> bool {
        if !self.sequencer.is_current(token) || !self.is_busy() {
            return false;
        }
        self.state = match result {
            Ok(()) => UploadState::Success,
            Err(_) => UploadState::Error,
        };
        result.is_ok()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn pdf(size: u64) -> SelectedFile {
        SelectedFile { name: "informe.pdf".into(), size, mime_type: ACCEPTED_MIME_TYPE.into() }
    }

    #[test]
    fn size_guard_boundary() {
        assert!(check_file_size(MAX_FILE_SIZE).is_ok());
        assert_eq!(
            check_file_size(MAX_FILE_SIZE + 1),
            Err(ApiError::FileTooLarge { size: MAX_FILE_SIZE + 1, limit: MAX_FILE_SIZE })
        );
    }

    #[test]
    fn oversized_file_never_leaves_idle() {
        let mut session = UploadSession::default();
        session.select_file(pdf(MAX_FILE_SIZE + 1));
        let err = session.begin_upload().unwrap_err();
        assert_eq!(err.user_message(), "El archivo es demasiado grande. Máximo 10 MB.");
        assert_eq!(session.state(), UploadState::Idle);
    }

    #[test]
    fn exact_limit_is_accepted() {
        let mut session = UploadSession::default();
        session.select_file(pdf(MAX_FILE_SIZE));
        assert!(session.begin_upload().is_ok());
        assert_eq!(session.state(), UploadState::Uploading { progress: 0 });
    }

    #[test]
    fn submit_without_file_is_rejected() {
        let mut session = UploadSession::default();
        assert_eq!(session.begin_upload(), Err(ApiError::NoFileSelected));
    }

    #[test]
    fn happy_path_reaches_success() {
        let mut session = UploadSession::default();
        session.select_file(pdf(2048));
        let token = session.begin_upload().unwrap();
        session.record_progress(token, 512.0, 2048.0);
        assert_eq!(session.state(), UploadState::Uploading { progress: 25 });
        session.record_progress(token, 2048.0, 2048.0);
        assert_eq!(session.state(), UploadState::Uploading { progress: 100 });
        assert!(session.finish(token, &Ok(())));
        assert_eq!(session.state(), UploadState::Success);
    }

    #[test]
    fn failure_reaches_error_and_can_be_resubmitted() {
        let mut session = UploadSession::default();
        session.select_file(pdf(2048));
        let token = session.begin_upload().unwrap();
        assert!(!session.finish(token, &Err(ApiError::Transport("offline".into()))));
        assert_eq!(session.state(), UploadState::Error);
        assert!(session.begin_upload().is_ok());
    }

    #[test]
    fn second_submit_while_uploading_is_refused() {
        let mut session = UploadSession::default();
        session.select_file(pdf(10));
        session.begin_upload().unwrap();
        assert_eq!(session.begin_upload(), Err(ApiError::UploadInProgress));
    }

    #[test]
    fn selecting_a_file_resets_from_every_state() {
        let mut session = UploadSession::default();
        session.select_file(pdf(10));
        let token = session.begin_upload().unwrap();
        session.select_file(pdf(20));
        assert_eq!(session.state(), UploadState::Idle);
        // the abandoned upload cannot overwrite the new selection
        assert!(!session.finish(token, &Ok(())));
        assert_eq!(session.state(), UploadState::Idle);

        let token = session.begin_upload().unwrap();
        session.finish(token, &Ok(()));
        session.select_file(pdf(30));
        assert_eq!(session.state(), UploadState::Idle);

        let token = session.begin_upload().unwrap();
        session.finish(token, &Err(ApiError::Server(None)));
        session.select_file(pdf(40));
        assert_eq!(session.state(), UploadState::Idle);
        assert_eq!(session.file().map(|f| f.size), Some(40));
    }

    #[test]
    fn cancelled_picker_drops_the_previous_file() {
        let mut session = UploadSession::default();
        session.select_file(pdf(10));
        let token = session.begin_upload().unwrap();
        session.clear_selection();
        assert_eq!(session.file(), None);
        assert_eq!(session.state(), UploadState::Idle);
        assert!(!session.finish(token, &Ok(())));
        assert_eq!(session.begin_upload(), Err(ApiError::NoFileSelected));
    }

    #[test]
    fn progress_ignores_unknown_totals() {
        assert_eq!(progress_percent(10.0, 0.0), None);
        assert_eq!(progress_percent(10.0, f64::NAN), None);
        assert_eq!(progress_percent(1.0, 3.0), Some(33));
        assert_eq!(progress_percent(2.0, 3.0), Some(67));
        assert_eq!(progress_percent(5.0, 3.0), Some(100));
    }

    #[test]
    fn size_is_shown_in_kilobytes() {
        assert_eq!(pdf(1536).size_kb_display(), "1.50 KB");
    }
}
