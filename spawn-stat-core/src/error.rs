//! Unified error type definition

use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Entry index outside `[0, len)`.
    ///
    /// A caller contract violation: external data is validated before it can
    /// reach an index-taking operation.
    #[error("Entry index {index} out of range (entry count: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Persisted or received document has the wrong shape
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// Document root is not the expected JSON type
    #[error("Unexpected document root, expected {0}")]
    UnexpectedRoot(String),

    /// network error
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Request timed out
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Non-200 answer from the stats service
    #[error("Unexpected response: HTTP {status}")]
    UnexpectedResponse { status: u16, body: String },

    /// Service answered 200 but did not report success
    #[error("Submission rejected: {0}")]
    SubmissionRejected(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl CoreError {
    /// Expected failures (bad input files, unreachable service) as opposed to bugs.
    ///
    /// Used for log level selection.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::MalformedPayload(_)
            | Self::UnexpectedRoot(_)
            | Self::NetworkError(_)
            | Self::Timeout(_)
            | Self::UnexpectedResponse { .. }
            | Self::SubmissionRejected(_) => true,
            Self::IndexOutOfRange { .. } | Self::StorageError(_) | Self::SerializationError(_) => {
                false
            }
        }
    }

    /// Transport failures the user may retry by hand.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError(_)
                | Self::Timeout(_)
                | Self::UnexpectedResponse { .. }
                | Self::SubmissionRejected(_)
        )
    }

    /// Structural validation failure of external data.
    #[must_use]
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::MalformedPayload(_) | Self::UnexpectedRoot(_))
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
