use thiserror::Error;

use super::record::ParseError;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Source unavailable: {path}: {message}")]
    SourceUnavailable { path: String, message: String },

    #[error("Malformed source: {path}: line {line_number} \"{line}\": {reason}")]
    MalformedSource {
        path: String,
        line_number: usize,
        line: String,
        reason: String,
    },

    #[error("Not found: {message}")]
    NotFound { message: String },
}

impl DomainError {
    pub fn source_unavailable(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn malformed_source(path: impl Into<String>, err: ParseError) -> Self {
        Self::MalformedSource {
            path: path.into(),
            line_number: err.line_number,
            line: err.line,
            reason: format!("{} line: {}", err.kind, err.source),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Whether the failure is the server's data rather than the client's request
    pub fn is_server_side(&self) -> bool {
        !matches!(self, Self::NotFound { .. })
    }

    /// Stable machine-readable code. Carries no path or line content.
    pub fn code(&self) -> &'static str {
        match self {
            Self::SourceUnavailable { .. } => "source_unavailable",
            Self::MalformedSource { .. } => "malformed_source",
            Self::NotFound { .. } => "not_found",
        }
    }
}
