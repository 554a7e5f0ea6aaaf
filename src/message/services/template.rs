//! Template service for creating and sending messages.
//!
//! The `MessageTemplate` asks a creator for a message, validates it and
//! hands it to a publisher. It also offers shortcuts for sending a plain
//! body to a named or default destination.

use std::sync::Arc;

use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::message::{
    creators::DestinationMessageCreator,
    domain::{AsyncMessage, Destination, MessageId},
    error::{MessageCreationError, PublishError, ValidationError},
    ports::{
        creator::AsyncMessageCreator,
        publisher::MessagePublisher,
        validator::{MessageValidator, ValidationConfig},
    },
    validation::DefaultMessageValidator,
};

/// Configuration for a [`MessageTemplate`].
///
/// # Examples
///
/// ```
/// use flex_messaging::message::services::TemplateConfig;
///
/// let config = TemplateConfig::from_json_str(
///     r#"{"default_destination": "chat", "default_time_to_live_millis": 30000}"#,
/// )
/// .expect("valid config");
/// assert_eq!(config.default_destination.map(String::from), Some("chat".to_owned()));
/// assert!(config.validation.reject_expired);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Destination used by [`MessageTemplate::send`].
    pub default_destination: Option<Destination>,
    /// Time-to-live applied to template-built messages. Zero disables expiry.
    pub default_time_to_live_millis: u64,
    /// Rules applied before publishing.
    pub validation: ValidationConfig,
}

impl TemplateConfig {
    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if the input is not valid JSON, has
    /// mistyped fields, or names an invalid destination.
    pub fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    /// Sets the default destination.
    #[must_use]
    pub fn with_default_destination(mut self, destination: Destination) -> Self {
        self.default_destination = Some(destination);
        self
    }

    /// Sets the default time-to-live in milliseconds.
    #[must_use]
    pub const fn with_default_time_to_live_millis(mut self, millis: u64) -> Self {
        self.default_time_to_live_millis = millis;
        self
    }
}

/// Service-level errors for sending messages.
#[derive(Debug, Clone, Error)]
pub enum TemplateError {
    /// A send without an explicit destination was attempted, but no
    /// default destination is configured.
    #[error("no default destination configured")]
    NoDefaultDestination,
    /// The creator failed to produce a message.
    #[error(transparent)]
    Creation(#[from] MessageCreationError),
    /// The created message failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The publisher rejected the message.
    #[error(transparent)]
    Publish(#[from] PublishError),
}

/// Result type for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Creates messages through creators and publishes them.
#[derive(Clone)]
pub struct MessageTemplate<P, C>
where
    P: MessagePublisher,
    C: Clock + Send + Sync,
{
    publisher: Arc<P>,
    clock: Arc<C>,
    validator: Arc<dyn MessageValidator>,
    config: TemplateConfig,
}

impl<P, C> MessageTemplate<P, C>
where
    P: MessagePublisher,
    C: Clock + Send + Sync,
{
    /// Creates a template with default configuration.
    #[must_use]
    pub fn new(publisher: Arc<P>, clock: Arc<C>) -> Self {
        Self::with_config(publisher, clock, TemplateConfig::default())
    }

    /// Creates a template with custom configuration.
    ///
    /// The template validates with a [`DefaultMessageValidator`] built from
    /// `config.validation`.
    #[must_use]
    pub fn with_config(publisher: Arc<P>, clock: Arc<C>, config: TemplateConfig) -> Self {
        let validator: Arc<dyn MessageValidator> = Arc::new(DefaultMessageValidator::with_config(
            config.validation.clone(),
        ));
        Self {
            publisher,
            clock,
            validator,
            config,
        }
    }

    /// Replaces the validator applied before publishing.
    ///
    /// The replacement takes over entirely: `config().validation` is left
    /// untouched and no longer describes the rules in force.
    #[must_use]
    pub fn with_validator(mut self, validator: Arc<dyn MessageValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// Returns the template configuration.
    ///
    /// `validation` reflects the active rules only while the template uses
    /// its built-in validator; see [`with_validator`](Self::with_validator).
    #[must_use]
    pub const fn config(&self) -> &TemplateConfig {
        &self.config
    }

    /// Returns the default destination, if configured.
    #[must_use]
    pub const fn default_destination(&self) -> Option<&Destination> {
        self.config.default_destination.as_ref()
    }

    /// Creates an empty-bodied message for `destination`.
    ///
    /// The message carries fresh identifiers, the current time and the
    /// configured default time-to-live.
    #[must_use]
    pub fn create_message_for_destination(&self, destination: &Destination) -> AsyncMessage {
        AsyncMessage::builder(destination.clone())
            .with_time_to_live_millis(self.config.default_time_to_live_millis)
            .build(&*self.clock)
    }

    /// Returns a creator for messages carrying `body` to `destination`.
    ///
    /// The creator shares this template's clock and default time-to-live.
    #[must_use]
    pub fn creator_for(
        &self,
        destination: Destination,
        body: Value,
    ) -> DestinationMessageCreator<C> {
        DestinationMessageCreator::new(destination, body, Arc::clone(&self.clock))
            .with_time_to_live_millis(self.config.default_time_to_live_millis)
    }

    /// Creates one message with `creator`, validates it and publishes it.
    ///
    /// Returns the ID of the published message.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Creation`] if the creator fails,
    /// [`TemplateError::Validation`] if the message is malformed, or
    /// [`TemplateError::Publish`] if the publisher rejects it. Nothing is
    /// published when creation or validation fails.
    pub async fn send_with<M>(&self, creator: &M) -> TemplateResult<MessageId>
    where
        M: AsyncMessageCreator + ?Sized,
    {
        let message = creator
            .create_message()
            .inspect_err(|e| warn!(error = %e, "message creator failed"))?;

        let message_id = message.message_id();
        let destination = message.destination().clone();

        self.validator
            .validate(&message, self.clock.utc())
            .inspect_err(|e| {
                warn!(%message_id, %destination, error = %e, "message failed validation");
            })?;

        self.publisher.publish(message).await.inspect_err(|e| {
            warn!(%message_id, %destination, error = %e, "message publish failed");
        })?;

        debug!(%message_id, %destination, "message published");
        Ok(message_id)
    }

    /// Sends `body` to the default destination.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NoDefaultDestination`] if no default
    /// destination is configured, otherwise as [`send_with`](Self::send_with).
    pub async fn send(&self, body: Value) -> TemplateResult<MessageId> {
        let destination = self
            .config
            .default_destination
            .clone()
            .ok_or(TemplateError::NoDefaultDestination)?;
        self.send_with(&self.creator_for(destination, body)).await
    }

    /// Sends `body` to `destination`.
    ///
    /// # Errors
    ///
    /// As [`send_with`](Self::send_with).
    pub async fn send_to(&self, destination: &Destination, body: Value) -> TemplateResult<MessageId> {
        self.send_with(&self.creator_for(destination.clone(), body))
            .await
    }
}
