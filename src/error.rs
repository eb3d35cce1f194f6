//! Fatal error types: conditions that abort a comparison before it produces
//! a mismatch report.

use crate::value::JsonType;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to read file {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON: {source}")]
    MalformedJson {
        #[source]
        source: serde_json::Error,
    },

    #[error("Expected the document root to be {expected} but found {actual}")]
    UnexpectedRoot {
        expected: JsonType,
        actual: JsonType,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Failed to serialize report to JSON: {source}")]
    JsonSerializationError {
        #[source]
        source: serde_json::Error,
    },
}

impl ParseError {
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn read_error(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::ReadError {
            path: path.into(),
            source,
        }
    }

    pub fn malformed_json(source: serde_json::Error) -> Self {
        Self::MalformedJson { source }
    }

    pub fn unexpected_root(expected: JsonType, actual: JsonType) -> Self {
        Self::UnexpectedRoot { expected, actual }
    }
}
