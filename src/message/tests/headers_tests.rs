//! Unit tests for message headers.

use crate::message::domain::{ENDPOINT_HEADER, MessageHeaders, SUBTOPIC_HEADER};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn headers_insert_replaces_and_returns_previous() {
    let mut headers = MessageHeaders::new();
    assert_eq!(headers.insert(ENDPOINT_HEADER, json!("amf")), None);
    assert_eq!(
        headers.insert(ENDPOINT_HEADER, json!("streaming")),
        Some(json!("amf"))
    );
    assert_eq!(headers.len(), 1);
    assert_eq!(headers.get(ENDPOINT_HEADER), Some(&json!("streaming")));
}

#[rstest]
fn headers_subtopic_requires_string_value() {
    let mut headers = MessageHeaders::new();
    headers.insert(SUBTOPIC_HEADER, json!(42));
    assert_eq!(headers.subtopic(), None);

    headers.insert(SUBTOPIC_HEADER, json!("prices.usd"));
    assert_eq!(headers.subtopic(), Some("prices.usd"));
}

#[rstest]
fn headers_iterate_in_name_order() {
    let headers: MessageHeaders = [("b", json!(2)), ("a", json!(1))].into_iter().collect();
    let names: Vec<&str> = headers.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["a", "b"]);
}

#[rstest]
fn headers_remove() {
    let mut headers: MessageHeaders = [("x", json!(true))].into_iter().collect();
    assert!(headers.contains("x"));
    assert_eq!(headers.remove("x"), Some(json!(true)));
    assert!(headers.is_empty());
}
