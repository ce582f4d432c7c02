//! The success/error wrapper every document API response comes in.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiEnvelope<T> {
    Success { data: T },
    Error {
        #[serde(default)]
        message: Option<String>,
    },
}

impl<T> ApiEnvelope<T> {
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            Self::Success { data } => Ok(data),
            Self::Error { message } => Err(ApiError::Server(message.filter(|m| !m.is_empty()))),
        }
    }
}

/// Decodes an envelope body and unwraps its payload.
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str::<ApiEnvelope<T>>(body)
        .map_err(|e| ApiError::MalformedEnvelope(e.to_string()))?
        .into_result()
}

/// The upload endpoint's body is free form; only an explicit error envelope is a failure.
pub fn check_upload_body(body: &str) -> Result<(), ApiError> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return Ok(());
    };
    if value.get("status").and_then(|s| s.as_str()) == Some("error") {
        let message = value
            .get("message")
            .and_then(|m| m.as_str())
            .filter(|m| !m.is_empty())
            .map(str::to_string);
        return Err(ApiError::Server(message));
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentPage;
    use crate::timestamp::RawTimestamp;

    #[test]
    fn decodes_success_listing() {
        let body = r#"{"status":"success","data":{"documents":[{"filename":"a.pdf","modified_at":1700000000}],"page":1,"per_page":10,"total":1}}"#;
        let page: DocumentPage = decode_envelope(body).unwrap();
        assert_eq!(page.documents.len(), 1);
        assert_eq!(page.documents[0].filename, "a.pdf");
        assert_eq!(page.documents[0].modified_at, Some(RawTimestamp::Number(1_700_000_000.0)));
        assert_eq!((page.page, page.per_page, page.total), (1, 10, 1));
    }

    #[test]
    fn missing_or_null_documents_is_empty() {
        let body = r#"{"status":"success","data":{"page":1,"per_page":10,"total":0}}"#;
        let page: DocumentPage = decode_envelope(body).unwrap();
        assert!(page.documents.is_empty());
        let body = r#"{"status":"success","data":{"documents":null,"page":1,"per_page":10,"total":0}}"#;
        let page: DocumentPage = decode_envelope(body).unwrap();
        assert!(page.documents.is_empty());
    }

    #[test]
    fn error_envelope_carries_message() {
        let body = r#"{"status":"error","message":"boom"}"#;
        let err = decode_envelope::<DocumentPage>(body).unwrap_err();
        assert_eq!(err, ApiError::Server(Some("boom".into())));
        assert_eq!(err.user_message(), "boom");
    }

    #[test]
    fn error_envelope_without_message() {
        let err = decode_envelope::<DocumentPage>(r#"{"status":"error"}"#).unwrap_err();
        assert_eq!(err, ApiError::Server(None));
        assert_eq!(err.user_message(), "Respuesta inválida");
    }

    #[test]
    fn unknown_shapes_are_malformed() {
        for body in [r#"{"status":"pending"}"#, r#"{"documents":[]}"#, "<html>", ""] {
            let err = decode_envelope::<DocumentPage>(body).unwrap_err();
            assert!(matches!(err, ApiError::MalformedEnvelope(_)), "{body}: {err:?}");
        }
    }

    #[test]
    fn upload_body_only_fails_on_error_envelope() {
        assert!(check_upload_body(r#"{"status":"success","data":{"filename":"a.pdf"}}"#).is_ok());
        assert!(check_upload_body("Created").is_ok());
        assert!(check_upload_body("").is_ok());
        assert_eq!(
            check_upload_body(r#"{"status":"error","message":"tipo no permitido"}"#),
            Err(ApiError::Server(Some("tipo no permitido".into())))
        );
    }
}
