//! In-memory implementation of the `MessagePublisher` port.
//!
//! Records every published message instead of delivering it. Not suitable
//! for production use.

use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::message::{
    domain::{AsyncMessage, Destination},
    error::PublishError,
    ports::publisher::{MessagePublisher, PublishResult},
};

/// In-memory implementation of [`MessagePublisher`].
///
/// Thread-safe via internal [`RwLock`]. Clones share the same record of
/// published messages.
///
/// # Example
///
/// ```
/// use flex_messaging::message::adapters::memory::InMemoryMessagePublisher;
///
/// let publisher = InMemoryMessagePublisher::new();
/// assert!(publisher.is_empty());
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryMessagePublisher {
    messages: Arc<RwLock<Vec<AsyncMessage>>>,
}

impl InMemoryMessagePublisher {
    /// Creates an empty publisher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every published message in publication order.
    ///
    /// Returns an empty vector if the internal lock is poisoned.
    #[must_use]
    pub fn published(&self) -> Vec<AsyncMessage> {
        self.messages
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Returns the messages published to `destination`, in publication order.
    ///
    /// Returns an empty vector if the internal lock is poisoned.
    #[must_use]
    pub fn published_to(&self, destination: &Destination) -> Vec<AsyncMessage> {
        self.messages
            .read()
            .map(|guard| {
                guard
                    .iter()
                    .filter(|message| message.destination() == destination)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns the number of published messages.
    ///
    /// Returns `0` if the internal lock is poisoned, matching the fallback
    /// behaviour of an empty publisher.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.read().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Returns `true` if nothing has been published.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discards all recorded messages.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.messages.write() {
            guard.clear();
        }
    }
}

#[async_trait]
impl MessagePublisher for InMemoryMessagePublisher {
    async fn publish(&self, message: AsyncMessage) -> PublishResult<()> {
        let mut guard = self
            .messages
            .write()
            .map_err(|e| PublishError::unavailable(format!("lock poisoned: {e}")))?;

        guard.push(message);
        Ok(())
    }
}
