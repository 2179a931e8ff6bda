//! Error type for the API client.

use serde::{Deserialize, Serialize};

/// Code carried by every error that did not come from the remote service.
pub const LOCAL_ERROR_CODE: i64 = -1;

/// The single error shape returned for every failed request.
///
/// Errors reported by MultiSafepay keep the `error_code` and `error_info` the
/// service sent. Anything synthesized locally (serialization, network,
/// unexpected bodies, decode failures, missing order fields) uses
/// [`LOCAL_ERROR_CODE`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("[{code}] {message}")]
pub struct Error {
    /// Remote error code, or `-1` for local failures.
    #[serde(rename = "error_code", default)]
    pub code: i64,
    /// Human readable description.
    #[serde(rename = "error_info", default)]
    pub message: String,
    /// Optional payload the service attached to the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl Error {
    /// Builds a locally synthesized error with code `-1`.
    pub fn local(message: impl Into<String>) -> Self {
        Self {
            code: LOCAL_ERROR_CODE,
            message: message.into(),
            data: None,
        }
    }

    pub fn is_local(&self) -> bool {
        self.code == LOCAL_ERROR_CODE
    }

    pub fn is_remote(&self) -> bool {
        !self.is_local()
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::local(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_remote_error_object() {
        let body = r#"{"success":false,"data":{},"error_code":1006,"error_info":"Invalid transaction ID"}"#;
        let err: Error = serde_json::from_str(body).unwrap();
        assert_eq!(err.code, 1006);
        assert_eq!(err.message, "Invalid transaction ID");
        assert!(err.is_remote());
        assert_eq!(err.data, Some(serde_json::json!({})));
    }

    #[test]
    fn empty_object_decodes_with_zero_code() {
        let err: Error = serde_json::from_str("{}").unwrap();
        assert_eq!(err.code, 0);
        assert!(err.message.is_empty());
        assert!(err.data.is_none());
    }

    #[test]
    fn local_errors_use_reserved_code() {
        let err = Error::local("boom");
        assert_eq!(err.code, LOCAL_ERROR_CODE);
        assert!(err.is_local());
        assert_eq!(err.to_string(), "[-1] boom");
    }
}
