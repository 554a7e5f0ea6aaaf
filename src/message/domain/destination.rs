//! Validated destination name type.

use crate::message::error::DestinationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a destination name.
const MAX_NAME_LENGTH: usize = 255;

/// A named endpoint to which messages are logically addressed.
///
/// Only the name is modelled here. Looking the name up in a registry of
/// configured destinations is left to the delivery side.
///
/// # Examples
///
/// ```
/// use flex_messaging::message::domain::Destination;
///
/// let destination = Destination::new("  chat-room ").expect("valid name");
/// assert_eq!(destination.as_str(), "chat-room");
/// assert!(Destination::new("two words").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Destination(String);

impl Destination {
    /// Creates a validated destination name.
    ///
    /// The input is trimmed. The result must be non-empty, at most 255
    /// characters long and free of whitespace and control characters.
    ///
    /// # Errors
    ///
    /// Returns [`DestinationError::Empty`] when the value is empty after
    /// trimming, [`DestinationError::TooLong`] when it exceeds 255 characters,
    /// or [`DestinationError::InvalidCharacters`] when it contains whitespace
    /// or control characters.
    pub fn new(value: impl Into<String>) -> Result<Self, DestinationError> {
        let raw = value.into();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(DestinationError::Empty);
        }

        let length = trimmed.chars().count();
        if length > MAX_NAME_LENGTH {
            return Err(DestinationError::TooLong(length));
        }

        if trimmed
            .chars()
            .any(|c| c.is_whitespace() || c.is_control())
        {
            return Err(DestinationError::InvalidCharacters(trimmed.to_owned()));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the destination name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Destination {
    type Error = DestinationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Destination {
    type Error = DestinationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Destination> for String {
    fn from(value: Destination) -> Self {
        value.0
    }
}

impl AsRef<str> for Destination {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
