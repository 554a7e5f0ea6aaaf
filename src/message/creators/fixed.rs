//! Creator that always yields the same pre-built message.

use crate::message::{
    domain::AsyncMessage,
    ports::creator::{AsyncMessageCreator, CreatorResult},
};

/// Returns a clone of one pre-built message on every call.
///
/// Every copy shares the original message ID, so this creator suits replay
/// and tests rather than producing distinct messages.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedMessageCreator {
    message: AsyncMessage,
}

impl FixedMessageCreator {
    /// Creates a creator that always yields `message`.
    #[must_use]
    pub const fn new(message: AsyncMessage) -> Self {
        Self { message }
    }

    /// Returns the message this creator yields.
    #[must_use]
    pub const fn message(&self) -> &AsyncMessage {
        &self.message
    }
}

impl From<AsyncMessage> for FixedMessageCreator {
    fn from(message: AsyncMessage) -> Self {
        Self::new(message)
    }
}

impl AsyncMessageCreator for FixedMessageCreator {
    fn create_message(&self) -> CreatorResult<AsyncMessage> {
        Ok(self.message.clone())
    }
}
