//! Creator port: the factory contract for asynchronous messages.

use crate::message::{domain::AsyncMessage, error::MessageCreationError};
use std::sync::Arc;

/// Result type for message creation.
pub type CreatorResult<T> = Result<T, MessageCreationError>;

/// Factory for messages to be sent to a destination.
///
/// Callers obtain a ready-to-send message without knowing how it is built.
/// Each call to [`create_message`](Self::create_message) produces one new
/// message, or an explicit error when the implementation cannot build one.
///
/// # Implementation Notes
///
/// The contract makes no promise about side effects or thread-safety.
/// Implementations may read configuration or perform I/O, and decide for
/// themselves whether they are safe to share across threads. Unless an
/// implementation documents otherwise, repeated calls are expected to
/// succeed independently of one another.
///
/// # Examples
///
/// ```
/// use flex_messaging::message::creators::FixedMessageCreator;
/// use flex_messaging::message::domain::{AsyncMessage, Destination};
/// use flex_messaging::message::ports::creator::AsyncMessageCreator;
/// use mockable::DefaultClock;
///
/// let destination = Destination::new("news").expect("valid destination");
/// let creator = FixedMessageCreator::new(AsyncMessage::for_destination(destination, &DefaultClock));
///
/// let message = creator.create_message().expect("fixed creator always succeeds");
/// assert_eq!(message.destination().as_str(), "news");
/// ```
pub trait AsyncMessageCreator {
    /// Creates a new message for sending to a destination.
    ///
    /// # Errors
    ///
    /// Returns [`MessageCreationError`] when the implementation cannot build
    /// a message, for example because required data is missing.
    fn create_message(&self) -> CreatorResult<AsyncMessage>;
}

impl<T: AsyncMessageCreator + ?Sized> AsyncMessageCreator for &T {
    fn create_message(&self) -> CreatorResult<AsyncMessage> {
        (**self).create_message()
    }
}

impl<T: AsyncMessageCreator + ?Sized> AsyncMessageCreator for Box<T> {
    fn create_message(&self) -> CreatorResult<AsyncMessage> {
        (**self).create_message()
    }
}

impl<T: AsyncMessageCreator + ?Sized> AsyncMessageCreator for Arc<T> {
    fn create_message(&self) -> CreatorResult<AsyncMessage> {
        (**self).create_message()
    }
}
