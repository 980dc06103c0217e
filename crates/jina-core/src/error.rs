use reqwest::header::HeaderMap;
use thiserror::Error;

use crate::models::{DimensionSupport, OperationKind};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown {kind} model: {model}")]
    InvalidModel { model: String, kind: OperationKind },

    #[error("{field} must not be empty")]
    EmptyInput { field: &'static str },

    #[error("dimensions {requested} not supported by {model} (expected {supported})")]
    DimensionOutOfRange {
        model: String,
        requested: u32,
        supported: DimensionSupport,
    },

    #[error("top_n must be between 1 and {documents}, got {top_n}")]
    InvalidTopN { top_n: usize, documents: usize },

    #[error("{model} does not accept {parameter}")]
    UnsupportedParameter {
        model: String,
        parameter: &'static str,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service error: status={status}, body={body}")]
    Service {
        status: u16,
        body: String,
        headers: HeaderMap,
    },

    #[error("unrecognized response shape: {0}")]
    UnrecognizedResponseShape(String),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl Error {
    pub fn unrecognized_shape(msg: impl Into<String>) -> Self {
        Self::UnrecognizedResponseShape(msg.into())
    }

    /// True for errors raised while building a request, before any I/O.
    pub const fn is_request_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidModel { .. }
                | Self::EmptyInput { .. }
                | Self::DimensionOutOfRange { .. }
                | Self::InvalidTopN { .. }
                | Self::UnsupportedParameter { .. }
        )
    }

    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_errors_are_classified() {
        let err = Error::InvalidTopN {
            top_n: 0,
            documents: 3,
        };
        assert!(err.is_request_error());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "top_n must be between 1 and 3, got 0");

        let err = Error::Service {
            status: 429,
            body: "rate limited".to_string(),
            headers: HeaderMap::new(),
        };
        assert!(!err.is_request_error());
        assert_eq!(err.status(), Some(429));
    }

    #[test]
    fn dimension_error_names_supported_values() {
        let err = Error::DimensionOutOfRange {
            model: "jina-colbert-v2".to_string(),
            requested: 100,
            supported: DimensionSupport::OneOf(&[128, 96, 64]),
        };
        assert_eq!(
            err.to_string(),
            "dimensions 100 not supported by jina-colbert-v2 (expected one of 128, 96, 64)"
        );
    }
}
