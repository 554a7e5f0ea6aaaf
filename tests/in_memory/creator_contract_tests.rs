//! Creator contract checks through the public crate API.

use std::sync::Arc;

use super::helpers::{chat, publisher, template_over};
use flex_messaging::message::{
    adapters::memory::InMemoryMessagePublisher,
    creators::{FixedMessageCreator, from_fn},
    domain::{AsyncMessage, Destination},
    error::MessageCreationError,
    ports::creator::AsyncMessageCreator,
    services::TemplateError,
};
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
fn fixed_creator_yields_message_on_every_call(chat: Destination) {
    let message = AsyncMessage::for_destination(chat, &DefaultClock);
    let creator = FixedMessageCreator::from(message.clone());

    for _ in 0..3 {
        assert_eq!(creator.create_message().expect("message"), message);
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failing_creator_never_counts_as_sent(
    publisher: Arc<InMemoryMessagePublisher>,
    chat: Destination,
) {
    let template = template_over(&publisher, chat);
    let creator = from_fn(|| Err(MessageCreationError::missing_data("payload")));

    let result = template.send_with(&creator).await;

    assert!(matches!(result, Err(TemplateError::Creation(_))));
    assert!(publisher.is_empty());
}
