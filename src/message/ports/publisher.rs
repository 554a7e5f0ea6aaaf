//! Publisher port for handing created messages to a delivery subsystem.

use crate::message::{domain::AsyncMessage, error::PublishError};
use async_trait::async_trait;

/// Result type for publish operations.
pub type PublishResult<T> = Result<T, PublishError>;

/// Port through which created messages leave this crate.
///
/// How a message reaches subscribers of its destination is entirely up to
/// the implementation.
#[async_trait]
pub trait MessagePublisher: Send + Sync {
    /// Hands a message over for delivery to its destination.
    ///
    /// # Errors
    ///
    /// Returns [`PublishError`] if the message is rejected or the delivery
    /// backend is unavailable.
    async fn publish(&self, message: AsyncMessage) -> PublishResult<()>;
}
