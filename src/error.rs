use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EdsmapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid design document: {0}")]
    Validation(String),

    #[error("Document too complex: {0}")]
    TooComplex(String),

    #[error("Classification error: {0}")]
    Classification(String),

    #[error("Style extraction error: {0}")]
    StyleExtraction(String),

    #[error("Layout organization error: {0}")]
    Organization(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl EdsmapError {
    pub fn validation(message: impl Into<String>) -> Self {
        EdsmapError::Validation(message.into())
    }

    pub fn too_complex(message: impl Into<String>) -> Self {
        EdsmapError::TooComplex(message.into())
    }

    /// The pipeline stage this error belongs to, if any.
    pub fn stage(&self) -> Option<&'static str> {
        match self {
            EdsmapError::Classification(_) | EdsmapError::TooComplex(_) => Some("classification"),
            EdsmapError::StyleExtraction(_) => Some("style extraction"),
            EdsmapError::Organization(_) => Some("layout organization"),
            _ => None,
        }
    }

    pub fn to_payload(&self) -> ErrorPayload {
        match self {
            EdsmapError::Io(e) => ErrorPayload::new(
                ErrorCategory::Config,
                e.to_string(),
                "Check file paths/permissions.",
            ),
            EdsmapError::Serialization(e) => ErrorPayload::new(
                ErrorCategory::Validation,
                e.to_string(),
                "Verify the input is a JSON design document export.",
            ),
            EdsmapError::Validation(msg) => ErrorPayload::new(
                ErrorCategory::Validation,
                msg.to_string(),
                "The document must carry a name and a non-empty nodes map; re-export it from the design tool.",
            ),
            EdsmapError::TooComplex(msg) => ErrorPayload::new(
                ErrorCategory::Complexity,
                msg.to_string(),
                "Split the document into smaller frames, or raise max_depth in the config file.",
            ),
            EdsmapError::Classification(msg) => ErrorPayload::new(
                ErrorCategory::Classification,
                msg.to_string(),
                "Rerun with RUST_LOG=warn to see which nodes were demoted.",
            ),
            EdsmapError::StyleExtraction(msg) => ErrorPayload::new(
                ErrorCategory::Style,
                msg.to_string(),
                "The component tree is still usable; rerun the tokens stage after fixing the document styles.",
            ),
            EdsmapError::Organization(msg) => ErrorPayload::new(
                ErrorCategory::Layout,
                msg.to_string(),
                "Components and tokens are still usable; check canvas-level page frames.",
            ),
            EdsmapError::Config(msg) => ErrorPayload::new(
                ErrorCategory::Config,
                msg.to_string(),
                "Check flags and the TOML config file (thresholds must be >= 1, max_depth > 0).",
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, EdsmapError>;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Validation,
    Complexity,
    Classification,
    Style,
    Layout,
    Config,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorPayload {
    pub category: ErrorCategory,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl ErrorPayload {
    pub fn new(category: ErrorCategory, message: String, remediation: impl Into<String>) -> Self {
        Self {
            category,
            message,
            remediation: Some(remediation.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_payload_mentions_document_shape() {
        let err = EdsmapError::validation("design document is missing a name");
        let payload = err.to_payload();
        assert_eq!(payload.category, ErrorCategory::Validation);
        let remediation = payload.remediation.unwrap_or_default();
        assert!(
            remediation.contains("nodes map"),
            "expected document shape hint, got: {remediation}"
        );
    }

    #[test]
    fn too_complex_is_distinct_from_validation() {
        let err = EdsmapError::too_complex("max depth 64 exceeded at node 12:7");
        let payload = err.to_payload();
        assert_eq!(payload.category, ErrorCategory::Complexity);
        assert!(
            payload
                .remediation
                .unwrap_or_default()
                .contains("max_depth"),
            "expected depth remediation"
        );
    }

    #[test]
    fn stage_names_cover_the_three_core_stages() {
        assert_eq!(
            EdsmapError::Classification("x".into()).stage(),
            Some("classification")
        );
        assert_eq!(
            EdsmapError::StyleExtraction("x".into()).stage(),
            Some("style extraction")
        );
        assert_eq!(
            EdsmapError::Organization("x".into()).stage(),
            Some("layout organization")
        );
        assert_eq!(EdsmapError::Config("x".into()).stage(), None);
    }

    #[test]
    fn error_payload_serializes_with_camel_case() {
        let payload = EdsmapError::Config("bad flag".to_string()).to_payload();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["category"], "config");
        assert!(json["remediation"].is_string());
    }
}
