//! Closure-backed creator.

use crate::message::{
    domain::AsyncMessage,
    ports::creator::{AsyncMessageCreator, CreatorResult},
};
use std::fmt;

/// Adapts a closure into an [`AsyncMessageCreator`].
///
/// Construct one with [`from_fn`].
#[derive(Clone)]
pub struct FnMessageCreator<F> {
    create: F,
}

/// Wraps `create` so it can be used wherever a message creator is expected.
///
/// # Examples
///
/// ```
/// use flex_messaging::message::creators::from_fn;
/// use flex_messaging::message::domain::{AsyncMessage, Destination};
/// use flex_messaging::message::ports::creator::AsyncMessageCreator;
/// use mockable::DefaultClock;
///
/// let creator = from_fn(|| {
///     let destination = Destination::new("alerts")?;
///     Ok(AsyncMessage::for_destination(destination, &DefaultClock))
/// });
///
/// assert!(creator.create_message().is_ok());
/// ```
#[must_use]
pub const fn from_fn<F>(create: F) -> FnMessageCreator<F>
where
    F: Fn() -> CreatorResult<AsyncMessage>,
{
    FnMessageCreator { create }
}

impl<F> AsyncMessageCreator for FnMessageCreator<F>
where
    F: Fn() -> CreatorResult<AsyncMessage>,
{
    fn create_message(&self) -> CreatorResult<AsyncMessage> {
        (self.create)()
    }
}

impl<F> fmt::Debug for FnMessageCreator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnMessageCreator").finish_non_exhaustive()
    }
}
