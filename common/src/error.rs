//! Error taxonomy for talking to the document API.

use thiserror::Error;

/// Shown when an error envelope carries no message.
pub const INVALID_RESPONSE_MESSAGE: &str = "Respuesta inválida";
/// Shown when a list fetch fails without any message at all.
pub const LIST_FAILED_MESSAGE: &str = "Error al cargar documentos";
/// Blocking alert text for the client-side size guard.
pub const FILE_TOO_LARGE_MESSAGE: &str = "El archivo es demasiado grande. Máximo 10 MB.";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("request failed with status {status}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedEnvelope(String),

    #[error("{}", .0.as_deref().unwrap_or(INVALID_RESPONSE_MESSAGE))]
    Server(Option<String>),

    #[error("no file selected")]
    NoFileSelected,

    #[error("file is {size} bytes, the limit is {limit} bytes")]
    FileTooLarge { size: u64, limit: u64 },

    #[error("an upload is already in progress")]
    UploadInProgress,
}

impl ApiError {
    /// Human readable text for the list view, rendered as `Error: {text}`.
    pub fn user_message(&self) -> String {
        match self {
            Self::Server(_) => self.to_string(),
            Self::Transport(message) if message.trim().is_empty() => LIST_FAILED_MESSAGE.to_string(),
            Self::FileTooLarge { .. } => FILE_TOO_LARGE_MESSAGE.to_string(),
            _ => self.to_string(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_is_shown_verbatim() {
        assert_eq!(ApiError::Server(Some("boom".into())).user_message(), "boom");
        assert_eq!(ApiError::Server(None).user_message(), INVALID_RESPONSE_MESSAGE);
    }

    #[test]
    fn empty_transport_error_uses_fallback() {
        assert_eq!(ApiError::Transport(String::new()).user_message(), LIST_FAILED_MESSAGE);
        assert_eq!(
            ApiError::Transport("connection refused".into()).user_message(),
            "network error: connection refused"
        );
    }

    #[test]
    fn status_error_mentions_code() {
        let err = ApiError::Status { status: 502, body: "bad gateway".into() };
        assert_eq!(err.user_message(), "request failed with status 502");
    }
}
