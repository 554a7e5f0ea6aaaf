//! Asynchronous message creation, validation and publishing.
//!
//! # Architecture
//!
//! The module follows hexagonal architecture principles:
//!
//! - **Domain**: Pure domain types ([`domain::AsyncMessage`], [`domain::Destination`], [`domain::MessageHeaders`])
//! - **Ports**: Abstract trait interfaces ([`ports::creator::AsyncMessageCreator`], [`ports::publisher::MessagePublisher`], [`ports::validator::MessageValidator`])
//! - **Creators**: Ready-made message factories ([`creators::FixedMessageCreator`], [`creators::DestinationMessageCreator`], [`creators::from_fn`])
//! - **Adapters**: Concrete implementations ([`adapters::memory::InMemoryMessagePublisher`])
//! - **Validation**: Well-formedness checks applied before publishing
//! - **Services**: The [`services::MessageTemplate`] tying the pieces together
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use flex_messaging::message::adapters::memory::InMemoryMessagePublisher;
//! use flex_messaging::message::domain::Destination;
//! use flex_messaging::message::ports::creator::AsyncMessageCreator;
//! use flex_messaging::message::services::MessageTemplate;
//! use mockable::DefaultClock;
//! use serde_json::json;
//!
//! let template = MessageTemplate::new(
//!     Arc::new(InMemoryMessagePublisher::new()),
//!     Arc::new(DefaultClock),
//! );
//!
//! let destination = Destination::new("chat").expect("valid destination");
//! let creator = template.creator_for(destination, json!({"text": "hello"}));
//! let message = creator.create_message().expect("message");
//! assert_eq!(message.body()["text"], "hello");
//! ```

pub mod adapters;
pub mod creators;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod validation;

#[cfg(test)]
mod tests;
