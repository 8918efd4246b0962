//! Error types module
//!
//! Every fallible photostrip operation reports one of four kinds: a bad caller
//! argument, an unreadable source image, an output encoding failure, or an empty
//! strip. Errors are returned synchronously and never retried internally.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like argument validation failures
    Debug,
    /// Warning level - for bad user input such as corrupt uploads
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata describing how an error should be presented to the UI layer.
pub trait ErrorMetadata {
    /// Machine-readable error code (e.g., "DECODE_ERROR")
    fn error_code(&self) -> &'static str;

    /// Whether the user can recover by supplying different input
    fn is_recoverable(&self) -> bool;

    /// Suggested action for the user
    fn suggested_action(&self) -> Option<&'static str>;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StripError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{}", decode_message(.index, .message))]
    Decode {
        /// Position of the failing image in the caller's sequence, when known.
        index: Option<usize>,
        message: String,
    },

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("Cannot composite a strip with no images")]
    EmptyInput,
}

fn decode_message(index: &Option<usize>, message: &str) -> String {
    match index {
        Some(i) => format!("Failed to decode image at index {}: {}", i, message),
        None => format!("Failed to decode image: {}", message),
    }
}

impl StripError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        StripError::InvalidArgument(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        StripError::Decode {
            index: None,
            message: message.into(),
        }
    }

    pub fn encoding(message: impl Into<String>) -> Self {
        StripError::Encoding(message.into())
    }

    /// Attach the sequence position to a decode error. Other kinds are returned unchanged.
    pub fn at_index(self, index: usize) -> Self {
        match self {
            StripError::Decode { message, .. } => StripError::Decode {
                index: Some(index),
                message,
            },
            other => other,
        }
    }
}

impl ErrorMetadata for StripError {
    fn error_code(&self) -> &'static str {
        match self {
            StripError::InvalidArgument(_) => "INVALID_ARGUMENT",
            StripError::Decode { .. } => "DECODE_ERROR",
            StripError::Encoding(_) => "ENCODING_ERROR",
            StripError::EmptyInput => "EMPTY_INPUT",
        }
    }

    fn is_recoverable(&self) -> bool {
        matches!(self, StripError::Decode { .. } | StripError::EmptyInput)
    }

    fn suggested_action(&self) -> Option<&'static str> {
        match self {
            StripError::InvalidArgument(_) => Some("Check sizes and crop rectangle"),
            StripError::Decode { .. } => Some("Pick a different photo"),
            StripError::Encoding(_) => Some("Choose PNG output"),
            StripError::EmptyInput => Some("Add at least one photo"),
        }
    }

    fn log_level(&self) -> LogLevel {
        match self {
            StripError::InvalidArgument(_) | StripError::EmptyInput => LogLevel::Debug,
            StripError::Decode { .. } => LogLevel::Warn,
            StripError::Encoding(_) => LogLevel::Error,
        }
    }
}

pub type StripResult<T> = Result<T, StripError>;
