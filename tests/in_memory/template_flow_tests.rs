//! End-to-end template flows against the in-memory publisher.

use std::sync::Arc;

use super::helpers::{chat, publisher, template_over};
use flex_messaging::message::{
    adapters::memory::InMemoryMessagePublisher, creators::FixedMessageCreator,
    domain::Destination,
};
use mockable::DefaultClock;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn messages_are_published_in_send_order(
    publisher: Arc<InMemoryMessagePublisher>,
    chat: Destination,
) {
    let template = template_over(&publisher, chat.clone());

    let first = template.send(json!("one")).await.expect("first send");
    let second = template.send(json!("two")).await.expect("second send");

    let published = publisher.published_to(&chat);
    let ids: Vec<_> = published.iter().map(|m| m.message_id()).collect();
    assert_eq!(ids, vec![first, second]);
    let bodies: Vec<_> = published.iter().map(|m| m.body().clone()).collect();
    assert_eq!(bodies, vec![json!("one"), json!("two")]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sends_to_different_destinations_are_kept_apart(
    publisher: Arc<InMemoryMessagePublisher>,
    chat: Destination,
) {
    let template = template_over(&publisher, chat.clone());
    let alerts = Destination::new("alerts").expect("valid destination");

    template.send(json!("hi")).await.expect("send to chat");
    template
        .send_to(&alerts, json!("fire"))
        .await
        .expect("send to alerts");

    assert_eq!(publisher.len(), 2);
    assert_eq!(publisher.published_to(&chat).len(), 1);
    assert_eq!(publisher.published_to(&alerts).len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn replies_are_correlated_with_their_request(
    publisher: Arc<InMemoryMessagePublisher>,
    chat: Destination,
) {
    let template = template_over(&publisher, chat);

    let request_id = template.send(json!("ping")).await.expect("request");
    let request = publisher
        .published()
        .into_iter()
        .find(|m| m.message_id() == request_id)
        .expect("request recorded");

    let reply = request.correlated_reply(json!("pong"), &DefaultClock);
    template
        .send_with(&FixedMessageCreator::new(reply))
        .await
        .expect("reply");

    let replies: Vec<_> = publisher
        .published()
        .into_iter()
        .filter(|m| m.correlation_id() == Some(request_id))
        .collect();
    assert_eq!(replies.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clearing_publisher_discards_history(publisher: Arc<InMemoryMessagePublisher>) {
    let destination = Destination::new("log").expect("valid destination");
    let template = template_over(&publisher, destination);

    template.send(json!(1)).await.expect("send should succeed");
    assert!(!publisher.is_empty());

    publisher.clear();
    assert!(publisher.is_empty());
}
