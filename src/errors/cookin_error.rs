use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidData,
    NotFound,
    Io,
    Internal,
}

/// Error raised at the edges of the crate: catalog loading, config and CLI
/// argument handling. The search engine itself never fails.
#[derive(Debug, Clone, Error, Serialize)]
#[error("{message}")]
pub struct CookinError {
    pub kind: ErrorKind,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl CookinError {
    pub fn new(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidData, "INVALID_DATA", message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, "NOT_FOUND", message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io, "IO", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, "INTERNAL", message)
    }
}

impl From<std::io::Error> for CookinError {
    fn from(err: std::io::Error) -> Self {
        CookinError::io(err.to_string())
    }
}

impl From<serde_json::Error> for CookinError {
    fn from(err: serde_json::Error) -> Self {
        CookinError::invalid_data(format!("Malformed catalog JSON: {}", err))
            .with_hint("Expected an array of {id, name, image, tags, category} objects.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_keep_their_message() {
        let err: CookinError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file").into();
        assert_eq!(err.kind, ErrorKind::Io);
        assert_eq!(err.code, "IO");
        assert_eq!(err.to_string(), "no such file");
    }

    #[test]
    fn serializes_without_empty_hint() {
        let value = serde_json::to_value(CookinError::not_found("missing")).unwrap();
        assert_eq!(value["kind"], "not_found");
        assert!(value.get("hint").is_none());
    }
}
