//! Ready-made implementations of [`AsyncMessageCreator`].
//!
//! [`AsyncMessageCreator`]: crate::message::ports::creator::AsyncMessageCreator

mod destination;
mod fixed;
mod function;

pub use destination::DestinationMessageCreator;
pub use fixed::FixedMessageCreator;
pub use function::{FnMessageCreator, from_fn};
