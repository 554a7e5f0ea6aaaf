//! Validation service implementation.
//!
//! Provides the default implementation of the `MessageValidator` port,
//! combining individual validation rules into a comprehensive validator.

use crate::message::{
    domain::AsyncMessage,
    error::ValidationError,
    ports::validator::{MessageValidator, ValidationConfig, ValidationResult},
    validation::rules,
};
use chrono::{DateTime, Utc};

/// Default implementation of the message validator.
///
/// Applies all validation rules in order, collecting errors to provide
/// comprehensive feedback rather than failing on the first error.
///
/// # Examples
///
/// ```
/// use flex_messaging::message::domain::{AsyncMessage, Destination};
/// use flex_messaging::message::ports::validator::MessageValidator;
/// use flex_messaging::message::validation::DefaultMessageValidator;
/// use mockable::{Clock, DefaultClock};
///
/// let clock = DefaultClock;
/// let destination = Destination::new("chat").expect("valid destination");
/// let message = AsyncMessage::for_destination(destination, &clock);
///
/// let validator = DefaultMessageValidator::new();
/// assert!(validator.validate(&message, clock.utc()).is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefaultMessageValidator {
    config: ValidationConfig,
}

impl DefaultMessageValidator {
    /// Creates a new validator with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new validator with custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

impl MessageValidator for DefaultMessageValidator {
    fn validate(&self, message: &AsyncMessage, now: DateTime<Utc>) -> ValidationResult<()> {
        let outcomes = [
            rules::validate_message_id(message),
            rules::validate_client_id(message),
            rules::validate_headers(message, &self.config),
            rules::validate_body_size(message, &self.config),
            rules::validate_time_to_live(message, &self.config),
            rules::validate_not_expired(message, &self.config, now),
        ];

        let mut errors = Vec::new();
        for outcome in outcomes {
            if let Err(e) = outcome {
                collect_errors(&mut errors, e);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::multiple(errors))
        }
    }
}

/// Helper function to collect errors, flattening `Multiple` variants.
fn collect_errors(errors: &mut Vec<ValidationError>, error: ValidationError) {
    match error {
        ValidationError::Multiple(inner) => errors.extend(inner),
        other => errors.push(other),
    }
}
