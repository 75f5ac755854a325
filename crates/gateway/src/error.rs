use fostering_codec::CodecError;
use fostering_completion::CompletionError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

#[derive(Error, Debug)]
pub enum GatewayError {
    /// The field store answered a read or write with a failure.
    #[error("{operation} failed for case {case_reference}: {message}")]
    Store {
        operation: &'static str,
        case_reference: String,
        message: String,
    },

    #[error("{operation} failed: case {case_reference} not found")]
    CaseNotFound {
        operation: &'static str,
        case_reference: String,
    },

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),

    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl GatewayError {
    pub fn store(
        operation: &'static str,
        case_reference: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Store {
            operation,
            case_reference: case_reference.into(),
            message: message.into(),
        }
    }

    pub fn case_not_found(operation: &'static str, case_reference: impl Into<String>) -> Self {
        Self::CaseNotFound {
            operation,
            case_reference: case_reference.into(),
        }
    }

    /// Attaches the operation and case to a lower-level failure. Errors that
    /// already name the case pass through untouched.
    pub(crate) fn in_operation(self, operation: &'static str, case_reference: &str) -> Self {
        match self {
            err @ (Self::Store { .. } | Self::CaseNotFound { .. }) => err,
            other => Self::store(operation, case_reference, other.to_string()),
        }
    }
}
