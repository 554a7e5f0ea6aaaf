//! Validator port for message well-formedness checks.

use crate::message::{domain::AsyncMessage, error::ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Port for validating messages before they are published.
///
/// # Implementation Notes
///
/// Implementations should:
/// - Collect all validation errors before returning (not fail-fast)
/// - Use `ValidationError::multiple` to combine errors
/// - Be stateless and thread-safe
pub trait MessageValidator: Send + Sync {
    /// Validates a message as of the instant `now`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any rule fails. Multiple failures are
    /// combined using `ValidationError::Multiple`.
    fn validate(&self, message: &AsyncMessage, now: DateTime<Utc>) -> ValidationResult<()>;
}

/// Configuration for validation rules.
///
/// # Examples
///
/// ```
/// use flex_messaging::message::ports::validator::ValidationConfig;
///
/// let config = ValidationConfig::default();
/// assert!(config.reject_expired);
///
/// let lenient = ValidationConfig::lenient();
/// assert!(!lenient.reject_expired);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum serialised body size in bytes.
    pub max_body_bytes: usize,
    /// Maximum number of headers.
    pub max_headers: usize,
    /// Maximum time-to-live in milliseconds, if bounded.
    pub max_time_to_live_millis: Option<u64>,
    /// Whether messages that have already expired are rejected.
    pub reject_expired: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: 1024 * 1024, // 1 MiB
            max_headers: 64,
            max_time_to_live_millis: None,
            reject_expired: true,
        }
    }
}

impl ValidationConfig {
    /// Creates a lenient configuration that accepts expired messages.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            reject_expired: false,
            ..Default::default()
        }
    }

    /// Creates a strict configuration with reduced limits.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            max_body_bytes: 64 * 1024, // 64 KiB
            max_headers: 16,
            max_time_to_live_millis: Some(24 * 60 * 60 * 1000),
            reject_expired: true,
        }
    }
}
