use crate::core::endpoints::Operation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{operation} request failed: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    #[error("{operation} returned HTTP {status}: {body}")]
    Status {
        operation: Operation,
        status: u16,
        body: String,
    },

    #[error("{operation} response could not be decoded: {source}")]
    Decode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    #[error("{operation} payload could not be encoded: {source}")]
    Encode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },

    #[error("{operation} payload of {actual} bytes exceeds the {limit} byte limit")]
    RequestTooLarge {
        operation: Operation,
        limit: u64,
        actual: u64,
    },

    #[error("{operation} response of {actual} bytes exceeds the {limit} byte limit")]
    ResponseTooLarge {
        operation: Operation,
        limit: u64,
        actual: u64,
    },

    #[error("Failed to build HTTP transport: {0}")]
    ClientBuild(#[source] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// Coarse grouping used for reporting. Failure policies never branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Status,
    Decoding,
    Configuration,
}

impl ServiceError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ServiceError::Transport { .. } => ErrorCategory::Transport,
            ServiceError::Status { .. } => ErrorCategory::Status,
            ServiceError::Decode { .. }
            | ServiceError::Encode { .. }
            | ServiceError::RequestTooLarge { .. }
            | ServiceError::ResponseTooLarge { .. } => ErrorCategory::Decoding,
            ServiceError::ClientBuild(_)
            | ServiceError::IoError(_)
            | ServiceError::ConfigValidationError { .. }
            | ServiceError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    /// The remote call that produced this error, if it came from one.
    pub fn operation(&self) -> Option<Operation> {
        match self {
            ServiceError::Transport { operation, .. }
            | ServiceError::Status { operation, .. }
            | ServiceError::Decode { operation, .. }
            | ServiceError::Encode { operation, .. }
            | ServiceError::RequestTooLarge { operation, .. }
            | ServiceError::ResponseTooLarge { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ServiceError::Transport { source, .. } if source.is_timeout())
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Transport => {
                "Check that the image service is running and reachable at the configured base URL"
            }
            ErrorCategory::Status => "Inspect the image service logs for the rejected request",
            ErrorCategory::Decoding => {
                "The image service answered with an unexpected body; check client and service versions"
            }
            ErrorCategory::Configuration => "Fix the client configuration and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
