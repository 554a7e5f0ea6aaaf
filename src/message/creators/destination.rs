//! Creator bound to a single destination and payload.

use crate::message::{
    domain::{AsyncMessage, ClientId, Destination, MessageHeaders, MessageId},
    error::DestinationError,
    ports::creator::{AsyncMessageCreator, CreatorResult},
};
use mockable::Clock;
use serde_json::Value;
use std::sync::Arc;

/// Builds a fresh message for one destination on every call.
///
/// Each message gets a new message ID and the current time from the clock.
/// The body, headers, time-to-live and correlation ID are shared by all
/// messages. Client IDs are random unless pinned with
/// [`with_client_id`](Self::with_client_id).
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use flex_messaging::message::creators::DestinationMessageCreator;
/// use flex_messaging::message::domain::Destination;
/// use flex_messaging::message::ports::creator::AsyncMessageCreator;
/// use mockable::DefaultClock;
/// use serde_json::json;
///
/// let destination = Destination::new("orders").expect("valid destination");
/// let creator = DestinationMessageCreator::new(destination, json!({"id": 7}), Arc::new(DefaultClock))
///     .with_subtopic("eu");
///
/// let first = creator.create_message().expect("message");
/// let second = creator.create_message().expect("message");
/// assert_ne!(first.message_id(), second.message_id());
/// assert_eq!(first.subtopic(), Some("eu"));
/// ```
pub struct DestinationMessageCreator<C: Clock> {
    destination: Destination,
    body: Value,
    headers: MessageHeaders,
    time_to_live_millis: u64,
    correlation_id: Option<MessageId>,
    client_id: Option<ClientId>,
    clock: Arc<C>,
}

impl<C: Clock> DestinationMessageCreator<C> {
    /// Creates a creator for messages carrying `body` to `destination`.
    #[must_use]
    pub fn new(destination: Destination, body: Value, clock: Arc<C>) -> Self {
        Self {
            destination,
            body,
            headers: MessageHeaders::new(),
            time_to_live_millis: 0,
            correlation_id: None,
            client_id: None,
            clock,
        }
    }

    /// Creates a creator from an unvalidated destination name.
    ///
    /// # Errors
    ///
    /// Returns [`DestinationError`] if `destination` is not a valid name.
    pub fn named(destination: &str, body: Value, clock: Arc<C>) -> Result<Self, DestinationError> {
        Ok(Self::new(Destination::new(destination)?, body, clock))
    }

    /// Sets a header on every created message.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: Value) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Sets the subtopic header on every created message.
    #[must_use]
    pub fn with_subtopic(self, subtopic: impl Into<String>) -> Self {
        self.with_header(
            crate::message::domain::SUBTOPIC_HEADER,
            Value::String(subtopic.into()),
        )
    }

    /// Sets the time-to-live in milliseconds. Zero disables expiry.
    #[must_use]
    pub const fn with_time_to_live_millis(mut self, millis: u64) -> Self {
        self.time_to_live_millis = millis;
        self
    }

    /// Correlates every created message with `id`.
    #[must_use]
    pub const fn with_correlation_id(mut self, id: MessageId) -> Self {
        self.correlation_id = Some(id);
        self
    }

    /// Pins the client ID used for every created message.
    #[must_use]
    pub const fn with_client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Returns the destination messages are addressed to.
    #[must_use]
    pub const fn destination(&self) -> &Destination {
        &self.destination
    }
}

impl<C: Clock> AsyncMessageCreator for DestinationMessageCreator<C> {
    fn create_message(&self) -> CreatorResult<AsyncMessage> {
        let mut builder = AsyncMessage::builder(self.destination.clone())
            .with_headers(self.headers.clone())
            .with_time_to_live_millis(self.time_to_live_millis)
            .with_body(self.body.clone());
        if let Some(client_id) = self.client_id {
            builder = builder.with_client_id(client_id);
        }
        if let Some(correlation_id) = self.correlation_id {
            builder = builder.with_correlation_id(correlation_id);
        }
        Ok(builder.build(&*self.clock))
    }
}
