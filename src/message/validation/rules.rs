//! Individual validation rule implementations.
//!
//! Each rule is implemented as a pure function that validates a specific
//! aspect of a message. Rules return `Ok(())` on success or a specific
//! `ValidationError` on failure.

use crate::message::{
    domain::AsyncMessage, error::ValidationError, ports::validator::ValidationConfig,
};
use chrono::{DateTime, Utc};

/// Validates that the message has a non-nil ID.
///
/// # Errors
///
/// Returns `ValidationError::MissingMessageId` if the ID is nil.
pub fn validate_message_id(message: &AsyncMessage) -> Result<(), ValidationError> {
    if message.message_id().as_ref().is_nil() {
        return Err(ValidationError::MissingMessageId);
    }
    Ok(())
}

/// Validates that the message has a non-nil client ID.
///
/// # Errors
///
/// Returns `ValidationError::MissingClientId` if the client ID is nil.
pub fn validate_client_id(message: &AsyncMessage) -> Result<(), ValidationError> {
    if message.client_id().as_ref().is_nil() {
        return Err(ValidationError::MissingClientId);
    }
    Ok(())
}

/// Validates header names and the number of headers.
///
/// # Errors
///
/// Returns `ValidationError::EmptyHeaderName` if any header name is blank,
/// and `ValidationError::TooManyHeaders` if the header count exceeds the
/// configured limit. Both are reported when both apply.
pub fn validate_headers(
    message: &AsyncMessage,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    let headers = message.headers();
    let mut errors = Vec::new();

    if headers.iter().any(|(name, _)| name.trim().is_empty()) {
        errors.push(ValidationError::EmptyHeaderName);
    }

    if headers.len() > config.max_headers {
        errors.push(ValidationError::TooManyHeaders {
            max: config.max_headers,
            actual: headers.len(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::multiple(errors))
    }
}

/// Validates that the serialised body does not exceed the size limit.
///
/// # Errors
///
/// Returns `ValidationError::BodyTooLarge` if the body exceeds the limit, or
/// `ValidationError::UnserialisableBody` if it cannot be serialised.
pub fn validate_body_size(
    message: &AsyncMessage,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    let serialized = serde_json::to_vec(message.body())
        .map_err(|e| ValidationError::UnserialisableBody(e.to_string()))?;

    if serialized.len() > config.max_body_bytes {
        return Err(ValidationError::BodyTooLarge {
            actual_bytes: serialized.len(),
            limit_bytes: config.max_body_bytes,
        });
    }

    Ok(())
}

/// Validates the time-to-live against the configured maximum.
///
/// Messages without expiry are always accepted.
///
/// # Errors
///
/// Returns `ValidationError::TimeToLiveTooLong` if the limit is exceeded.
pub fn validate_time_to_live(
    message: &AsyncMessage,
    config: &ValidationConfig,
) -> Result<(), ValidationError> {
    let actual_millis = message.time_to_live_millis();
    match config.max_time_to_live_millis {
        Some(limit_millis) if actual_millis > limit_millis => {
            Err(ValidationError::TimeToLiveTooLong {
                actual_millis,
                limit_millis,
            })
        }
        _ => Ok(()),
    }
}

/// Validates that the message has not expired at `now`.
///
/// # Errors
///
/// Returns `ValidationError::Expired` if expired messages are rejected and
/// the message's time-to-live has elapsed.
pub fn validate_not_expired(
    message: &AsyncMessage,
    config: &ValidationConfig,
    now: DateTime<Utc>,
) -> Result<(), ValidationError> {
    if config.reject_expired && message.is_expired(now) {
        return Err(ValidationError::Expired(message.message_id()));
    }
    Ok(())
}
