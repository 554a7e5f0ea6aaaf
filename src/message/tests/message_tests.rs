//! Unit tests for the `AsyncMessage` value and its builder.

use super::support::{FixedClock, destination, fixed_clock, message};
use crate::message::domain::{
    AsyncMessage, ClientId, Destination, MessageHeaders, MessageId, SUBTOPIC_HEADER,
};
use chrono::TimeDelta;
use rstest::rstest;
use serde_json::json;
use std::time::Duration;

// ============================================================================
// Construction
// ============================================================================

#[rstest]
fn for_destination_populates_identity_and_time(message: AsyncMessage, fixed_clock: FixedClock) {
    assert!(!message.message_id().as_ref().is_nil());
    assert!(!message.client_id().as_ref().is_nil());
    assert_eq!(message.destination().as_str(), "market-data");
    assert_eq!(message.timestamp(), fixed_clock.0);
    assert_eq!(message.body(), &serde_json::Value::Null);
    assert!(message.headers().is_empty());
    assert_eq!(message.correlation_id(), None);
    assert_eq!(message.time_to_live(), None);
}

#[rstest]
fn builder_sets_every_field(destination: Destination, fixed_clock: FixedClock) {
    let id = MessageId::new();
    let client = ClientId::new();
    let correlation = MessageId::new();

    let message = AsyncMessage::builder(destination.clone())
        .with_message_id(id)
        .with_client_id(client)
        .with_correlation_id(correlation)
        .with_time_to_live(Duration::from_secs(30))
        .with_subtopic("eur")
        .with_header("priority", json!(5))
        .with_body(json!({"bid": 1.08}))
        .build(&fixed_clock);

    assert_eq!(message.message_id(), id);
    assert_eq!(message.client_id(), client);
    assert_eq!(message.correlation_id(), Some(correlation));
    assert_eq!(message.destination(), &destination);
    assert_eq!(message.time_to_live_millis(), 30_000);
    assert_eq!(message.time_to_live(), Some(Duration::from_secs(30)));
    assert_eq!(message.subtopic(), Some("eur"));
    assert_eq!(message.headers().get("priority"), Some(&json!(5)));
    assert_eq!(message.body()["bid"], json!(1.08));
}

#[rstest]
fn builder_generates_distinct_ids(destination: Destination, fixed_clock: FixedClock) {
    let first = AsyncMessage::for_destination(destination.clone(), &fixed_clock);
    let second = AsyncMessage::for_destination(destination, &fixed_clock);
    assert_ne!(first.message_id(), second.message_id());
    assert_ne!(first.client_id(), second.client_id());
}

#[rstest]
fn with_headers_merges_over_existing(destination: Destination, fixed_clock: FixedClock) {
    let extra: MessageHeaders = [("a", json!(2)), ("b", json!(3))].into_iter().collect();
    let message = AsyncMessage::builder(destination)
        .with_header("a", json!(1))
        .with_headers(extra)
        .build(&fixed_clock);

    assert_eq!(message.headers().get("a"), Some(&json!(2)));
    assert_eq!(message.headers().get("b"), Some(&json!(3)));
}

// ============================================================================
// Expiry
// ============================================================================

#[rstest]
fn zero_time_to_live_never_expires(message: AsyncMessage, fixed_clock: FixedClock) {
    let far_future = fixed_clock.0 + TimeDelta::days(365 * 100);
    assert_eq!(message.expires_at(), None);
    assert!(!message.is_expired(far_future));
}

#[rstest]
#[case(999, false)]
#[case(1_000, true)]
#[case(5_000, true)]
fn message_expires_once_time_to_live_elapses(
    destination: Destination,
    fixed_clock: FixedClock,
    #[case] elapsed_millis: i64,
    #[case] expected: bool,
) {
    let message = AsyncMessage::builder(destination)
        .with_time_to_live_millis(1_000)
        .build(&fixed_clock);
    let now = fixed_clock.0 + TimeDelta::milliseconds(elapsed_millis);

    assert_eq!(
        message.expires_at(),
        Some(fixed_clock.0 + TimeDelta::milliseconds(1_000))
    );
    assert_eq!(message.is_expired(now), expected);
}

#[rstest]
fn huge_time_to_live_saturates(destination: Destination, fixed_clock: FixedClock) {
    let message = AsyncMessage::builder(destination)
        .with_time_to_live_millis(u64::MAX)
        .build(&fixed_clock);
    assert!(message.expires_at().is_some());
    assert!(!message.is_expired(fixed_clock.0 + TimeDelta::days(365 * 1_000)));
}

// ============================================================================
// Replies and serialisation
// ============================================================================

#[rstest]
fn correlated_reply_references_original(destination: Destination, fixed_clock: FixedClock) {
    let original = AsyncMessage::builder(destination)
        .with_subtopic("eur")
        .with_body(json!("ping"))
        .build(&fixed_clock);

    let reply = original.correlated_reply(json!("pong"), &fixed_clock);

    assert_ne!(reply.message_id(), original.message_id());
    assert_eq!(reply.correlation_id(), Some(original.message_id()));
    assert_eq!(reply.destination(), original.destination());
    assert_eq!(reply.subtopic(), Some("eur"));
    assert_eq!(reply.body(), &json!("pong"));
}

#[rstest]
fn message_serde_preserves_fields(destination: Destination, fixed_clock: FixedClock) {
    let message = AsyncMessage::builder(destination)
        .with_header(SUBTOPIC_HEADER, json!("eur"))
        .with_body(json!({"n": 1}))
        .build(&fixed_clock);

    let json = serde_json::to_value(&message).expect("serialise");
    assert_eq!(json["destination"], "market-data");
    assert_eq!(json["headers"][SUBTOPIC_HEADER], "eur");
    assert!(json.get("correlation_id").is_none());

    let restored: AsyncMessage = serde_json::from_value(json).expect("deserialise");
    assert_eq!(restored, message);
}
