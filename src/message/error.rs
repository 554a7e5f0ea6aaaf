//! Error types for message creation, validation and publishing.
//!
//! Uses `thiserror` for ergonomic error handling with typed variants
//! that can be inspected by callers.

use super::domain::MessageId;
use std::sync::Arc;
use thiserror::Error;

/// Errors raised when a destination name is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DestinationError {
    /// The destination name is empty after trimming.
    #[error("destination name cannot be empty")]
    Empty,

    /// The destination name exceeds the maximum length; carries the
    /// character count of the trimmed name.
    #[error("destination name is {0} characters, exceeds limit of 255")]
    TooLong(usize),

    /// The destination name contains whitespace or control characters;
    /// carries the trimmed name.
    #[error("destination name contains invalid characters: {0}")]
    InvalidCharacters(String),
}

/// Errors a message creator may report instead of producing a message.
///
/// The creator contract imposes no taxonomy of its own; these variants cover
/// the common cases and [`MessageCreationError::Other`] carries anything else.
#[derive(Debug, Clone, Error)]
pub enum MessageCreationError {
    /// Data required to build the message is not available.
    #[error("required message data is missing: {0}")]
    MissingData(String),

    /// The creator could not address the message to a valid destination.
    #[error(transparent)]
    InvalidDestination(#[from] DestinationError),

    /// An implementation-specific failure.
    #[error("message creation failed: {0}")]
    Other(Arc<dyn std::error::Error + Send + Sync>),
}

impl MessageCreationError {
    /// Creates a missing-data error.
    #[must_use]
    pub fn missing_data(what: impl Into<String>) -> Self {
        Self::MissingData(what.into())
    }

    /// Wraps an arbitrary error raised while building a message.
    #[must_use]
    pub fn other(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Other(Arc::new(err))
    }
}

/// Errors that can occur during message validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The message ID is the nil UUID.
    #[error("message ID is required")]
    MissingMessageId,

    /// The client ID is the nil UUID.
    #[error("client ID is required")]
    MissingClientId,

    /// A header has an empty or whitespace-only name.
    #[error("header names cannot be empty")]
    EmptyHeaderName,

    /// The message carries too many headers.
    #[error("message has {actual} headers, exceeds limit of {max}")]
    TooManyHeaders {
        /// The maximum allowed number of headers.
        max: usize,
        /// The actual number of headers.
        actual: usize,
    },

    /// The serialised body exceeds the configured limit.
    #[error("message body size {actual_bytes} exceeds limit of {limit_bytes} bytes")]
    BodyTooLarge {
        /// The actual size in bytes.
        actual_bytes: usize,
        /// The maximum allowed size.
        limit_bytes: usize,
    },

    /// The body could not be serialised to measure its size.
    #[error("message body is not serialisable: {0}")]
    UnserialisableBody(String),

    /// The time-to-live exceeds the configured maximum.
    #[error("time-to-live {actual_millis}ms exceeds limit of {limit_millis}ms")]
    TimeToLiveTooLong {
        /// The requested time-to-live.
        actual_millis: u64,
        /// The maximum allowed time-to-live.
        limit_millis: u64,
    },

    /// The message expired before it could be sent.
    #[error("message {0} has already expired")]
    Expired(MessageId),

    /// Multiple validation errors occurred.
    #[error("multiple validation errors: {}", format_errors(.0))]
    Multiple(Vec<Self>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    /// Combines multiple validation errors into a single error.
    ///
    /// A single error is returned as-is rather than wrapped.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if called with an empty vector, as this indicates
    /// a logic error in the caller. In release builds, returns
    /// an empty [`ValidationError::Multiple`].
    #[must_use]
    pub fn multiple(mut errors: Vec<Self>) -> Self {
        debug_assert!(!errors.is_empty(), "multiple() called with no errors");
        if errors.len() == 1 {
            if let Some(single) = errors.pop() {
                return single;
            }
        }
        Self::Multiple(errors)
    }

    /// Returns `true` if this error represents multiple validation failures.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        matches!(self, Self::Multiple(_))
    }

    /// Returns the individual errors if this is a `Multiple` variant.
    #[must_use]
    pub fn errors(&self) -> Option<&[Self]> {
        match self {
            Self::Multiple(errors) => Some(errors),
            _ => None,
        }
    }
}

/// Errors that can occur while handing a message to a publisher.
#[derive(Debug, Clone, Error)]
pub enum PublishError {
    /// The publisher refused the message.
    #[error("message rejected: {0}")]
    Rejected(String),

    /// The publisher cannot currently accept messages.
    #[error("publisher unavailable: {0}")]
    Unavailable(String),

    /// The underlying delivery backend failed.
    #[error("publisher backend error: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl PublishError {
    /// Creates a rejection error.
    #[must_use]
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self::Rejected(reason.into())
    }

    /// Creates an unavailability error.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }

    /// Wraps a backend error.
    #[must_use]
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
