//! Flex messaging: factories and templates for asynchronous messages.
//!
//! This crate provides the message-creation side of a publish/subscribe
//! messaging system: the [`AsyncMessageCreator`](message::ports::creator::AsyncMessageCreator)
//! factory contract, ready-made creators, message validation, and a template
//! service that publishes created messages through an abstract port.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure message types with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for creating and publishing messages
//! - **Adapters**: Concrete implementations of ports
//!
//! # Modules
//!
//! - [`message`]: Message model, creators, validation and publishing

pub mod message;
