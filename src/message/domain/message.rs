//! The asynchronous message value produced by message creators.
//!
//! Messages are immutable after creation and carry everything a delivery
//! subsystem needs to route them to their destination.

use super::{ClientId, Destination, MessageHeaders, MessageId};
use chrono::{DateTime, TimeDelta, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// An asynchronous, one-way message addressed to a [`Destination`].
///
/// # Invariants
///
/// - `message_id` and `client_id` are populated at construction
/// - `timestamp` records the moment the message was built
/// - a `time_to_live_millis` of zero means the message never expires
/// - messages cannot be modified after creation
///
/// # Examples
///
/// ```
/// use flex_messaging::message::domain::{AsyncMessage, Destination};
/// use mockable::DefaultClock;
/// use serde_json::json;
///
/// let destination = Destination::new("chat").expect("valid destination");
/// let message = AsyncMessage::builder(destination)
///     .with_body(json!({"text": "hello"}))
///     .build(&DefaultClock);
///
/// assert_eq!(message.destination().as_str(), "chat");
/// assert_eq!(message.body()["text"], "hello");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsyncMessage {
    /// Unique identifier for this message.
    message_id: MessageId,

    /// The client on whose behalf the message was produced.
    client_id: ClientId,

    /// Where the message is addressed.
    destination: Destination,

    /// The message this one correlates with, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    correlation_id: Option<MessageId>,

    /// When the message was created.
    timestamp: DateTime<Utc>,

    /// How long the message stays deliverable, in milliseconds.
    #[serde(default)]
    time_to_live_millis: u64,

    /// Message headers.
    #[serde(default, skip_serializing_if = "MessageHeaders::is_empty")]
    headers: MessageHeaders,

    /// Message payload.
    #[serde(default)]
    body: Value,
}

impl AsyncMessage {
    /// Returns a builder for a message addressed to `destination`.
    #[must_use]
    pub fn builder(destination: Destination) -> AsyncMessageBuilder {
        AsyncMessageBuilder::new(destination)
    }

    /// Creates an empty-bodied message addressed to `destination`.
    ///
    /// The message receives fresh message and client identifiers and the
    /// current time from `clock`.
    #[must_use]
    pub fn for_destination(destination: Destination, clock: &impl Clock) -> Self {
        Self::builder(destination).build(clock)
    }

    /// Returns the message identifier.
    #[must_use]
    pub const fn message_id(&self) -> MessageId {
        self.message_id
    }

    /// Returns the client identifier.
    #[must_use]
    pub const fn client_id(&self) -> ClientId {
        self.client_id
    }

    /// Returns the destination.
    #[must_use]
    pub const fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Returns the correlation identifier.
    #[must_use]
    pub const fn correlation_id(&self) -> Option<MessageId> {
        self.correlation_id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns the raw time-to-live in milliseconds.
    #[must_use]
    pub const fn time_to_live_millis(&self) -> u64 {
        self.time_to_live_millis
    }

    /// Returns the time-to-live, or `None` if the message never expires.
    #[must_use]
    pub const fn time_to_live(&self) -> Option<Duration> {
        if self.time_to_live_millis == 0 {
            None
        } else {
            Some(Duration::from_millis(self.time_to_live_millis))
        }
    }

    /// Returns the headers.
    #[must_use]
    pub const fn headers(&self) -> &MessageHeaders {
        &self.headers
    }

    /// Returns the body.
    #[must_use]
    pub const fn body(&self) -> &Value {
        &self.body
    }

    /// Returns the subtopic header, if set.
    #[must_use]
    pub fn subtopic(&self) -> Option<&str> {
        self.headers.subtopic()
    }

    /// Returns the instant after which the message is no longer deliverable.
    ///
    /// Returns `None` for messages without a time-to-live. Values beyond the
    /// representable range saturate to the maximum timestamp.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        if self.time_to_live_millis == 0 {
            return None;
        }
        let millis = i64::try_from(self.time_to_live_millis).unwrap_or(i64::MAX);
        let ttl = TimeDelta::try_milliseconds(millis).unwrap_or(TimeDelta::MAX);
        Some(
            self.timestamp
                .checked_add_signed(ttl)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        )
    }

    /// Returns `true` if the message has expired at `now`.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at().is_some_and(|expires_at| now >= expires_at)
    }

    /// Builds a reply correlated with this message.
    ///
    /// The reply shares this message's destination and subtopic, carries
    /// `body`, and records this message's ID as its correlation ID.
    #[must_use]
    pub fn correlated_reply(&self, body: Value, clock: &impl Clock) -> Self {
        let mut builder = Self::builder(self.destination.clone())
            .with_correlation_id(self.message_id)
            .with_body(body);
        if let Some(subtopic) = self.subtopic() {
            builder = builder.with_subtopic(subtopic);
        }
        builder.build(clock)
    }
}

/// Builder for constructing messages with full control over all fields.
#[derive(Debug, Clone)]
pub struct AsyncMessageBuilder {
    message_id: Option<MessageId>,
    client_id: Option<ClientId>,
    destination: Destination,
    correlation_id: Option<MessageId>,
    time_to_live_millis: u64,
    headers: MessageHeaders,
    body: Value,
}

impl AsyncMessageBuilder {
    /// Creates a builder for a message addressed to `destination`.
    #[must_use]
    pub fn new(destination: Destination) -> Self {
        Self {
            message_id: None,
            client_id: None,
            destination,
            correlation_id: None,
            time_to_live_millis: 0,
            headers: MessageHeaders::new(),
            body: Value::Null,
        }
    }

    /// Sets a specific message ID.
    #[must_use]
    pub const fn with_message_id(mut self, id: MessageId) -> Self {
        self.message_id = Some(id);
        self
    }

    /// Sets a specific client ID.
    #[must_use]
    pub const fn with_client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the correlation ID.
    #[must_use]
    pub const fn with_correlation_id(mut self, id: MessageId) -> Self {
        self.correlation_id = Some(id);
        self
    }

    /// Sets the time-to-live in milliseconds. Zero disables expiry.
    #[must_use]
    pub const fn with_time_to_live_millis(mut self, millis: u64) -> Self {
        self.time_to_live_millis = millis;
        self
    }

    /// Sets the time-to-live, saturating at `u64::MAX` milliseconds.
    #[must_use]
    pub fn with_time_to_live(self, ttl: Duration) -> Self {
        let millis = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        self.with_time_to_live_millis(millis)
    }

    /// Sets a single header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: Value) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Merges a set of headers, replacing any with the same name.
    #[must_use]
    pub fn with_headers(mut self, headers: MessageHeaders) -> Self {
        self.headers
            .extend(headers.iter().map(|(name, value)| (name, value.clone())));
        self
    }

    /// Sets the subtopic header.
    #[must_use]
    pub fn with_subtopic(self, subtopic: impl Into<String>) -> Self {
        self.with_header(super::SUBTOPIC_HEADER, Value::String(subtopic.into()))
    }

    /// Sets the body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = body;
        self
    }

    /// Builds the message, stamping it with the current time from `clock`.
    ///
    /// Unset message and client IDs are generated randomly.
    #[must_use]
    pub fn build(self, clock: &impl Clock) -> AsyncMessage {
        AsyncMessage {
            message_id: self.message_id.unwrap_or_default(),
            client_id: self.client_id.unwrap_or_default(),
            destination: self.destination,
            correlation_id: self.correlation_id,
            timestamp: clock.utc(),
            time_to_live_millis: self.time_to_live_millis,
            headers: self.headers,
            body: self.body,
        }
    }
}
