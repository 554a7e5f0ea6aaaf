//! Domain types for the message subsystem.
//!
//! This module contains pure domain types with no infrastructure dependencies.
//! All types are immutable after construction and serialisable via serde.

mod destination;
mod headers;
mod ids;
mod message;

pub use destination::Destination;
pub use headers::{ENDPOINT_HEADER, MessageHeaders, SUBTOPIC_HEADER};
pub use ids::{ClientId, MessageId};
pub use message::{AsyncMessage, AsyncMessageBuilder};
