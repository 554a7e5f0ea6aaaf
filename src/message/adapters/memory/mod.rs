//! In-memory adapter implementations for testing.
//!
//! These adapters provide simple, thread-safe implementations suitable for
//! unit testing without a delivery backend.

mod publisher;

pub use publisher::InMemoryMessagePublisher;
