//! Message header map and well-known header names.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Header naming the subtopic a message is published under.
pub const SUBTOPIC_HEADER: &str = "DSSubtopic";

/// Header naming the endpoint a message arrived through.
pub const ENDPOINT_HEADER: &str = "DSEndpoint";

/// Headers attached to a message.
///
/// Names are kept in sorted order so serialised output is stable.
///
/// # Examples
///
/// ```
/// use flex_messaging::message::domain::{MessageHeaders, SUBTOPIC_HEADER};
/// use serde_json::json;
///
/// let mut headers = MessageHeaders::new();
/// headers.insert(SUBTOPIC_HEADER, json!("prices.eur"));
/// assert_eq!(headers.subtopic(), Some("prices.eur"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageHeaders(BTreeMap<String, Value>);

impl MessageHeaders {
    /// Creates an empty header map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a header, returning the previous value if one was present.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(name.into(), value)
    }

    /// Returns a header value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns `true` if the named header is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Removes a header, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    /// Returns the number of headers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no headers are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over headers in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns the subtopic header when it is set to a string.
    #[must_use]
    pub fn subtopic(&self) -> Option<&str> {
        self.get(SUBTOPIC_HEADER).and_then(Value::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for MessageHeaders {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }
}

impl<K: Into<String>> Extend<(K, Value)> for MessageHeaders {
    fn extend<I: IntoIterator<Item = (K, Value)>>(&mut self, iter: I) {
        self.0
            .extend(iter.into_iter().map(|(name, value)| (name.into(), value)));
    }
}
