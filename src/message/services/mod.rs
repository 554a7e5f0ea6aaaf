//! Application services for the message subsystem.
//!
//! Services orchestrate domain operations and coordinate between ports,
//! turning creator output into validated, published messages.

mod template;

pub use template::{MessageTemplate, TemplateConfig, TemplateError, TemplateResult};
