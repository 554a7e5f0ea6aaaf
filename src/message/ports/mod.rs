//! Port trait definitions for the message subsystem.
//!
//! Ports define the abstract interfaces between message producers, the
//! domain, and whatever delivers messages downstream. Adapters and creators
//! implement these ports.

pub mod creator;
pub mod publisher;
pub mod validator;

pub use creator::{AsyncMessageCreator, CreatorResult};
pub use publisher::{MessagePublisher, PublishResult};
pub use validator::{MessageValidator, ValidationConfig, ValidationResult};
