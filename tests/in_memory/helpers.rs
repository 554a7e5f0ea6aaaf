//! Shared test helpers for in-memory integration tests.

use std::sync::Arc;

use flex_messaging::message::{
    adapters::memory::InMemoryMessagePublisher,
    domain::Destination,
    services::{MessageTemplate, TemplateConfig},
};
use mockable::DefaultClock;
use rstest::fixture;

pub type TestTemplate = MessageTemplate<InMemoryMessagePublisher, DefaultClock>;

/// Provides a fresh in-memory publisher for each test.
#[fixture]
pub fn publisher() -> Arc<InMemoryMessagePublisher> {
    Arc::new(InMemoryMessagePublisher::new())
}

/// Provides the destination used as the template default.
#[fixture]
pub fn chat() -> Destination {
    Destination::new("chat").expect("valid destination")
}

/// Builds a template publishing into `publisher` with `default` as the
/// default destination.
pub fn template_over(
    publisher: &Arc<InMemoryMessagePublisher>,
    default: Destination,
) -> TestTemplate {
    MessageTemplate::with_config(
        Arc::clone(publisher),
        Arc::new(DefaultClock),
        TemplateConfig::default().with_default_destination(default),
    )
}
