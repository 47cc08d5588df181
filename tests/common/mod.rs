//! Common test utilities for integration tests.
//!
//! Fixtures and helpers shared by the encoder and HTTP tests.

#![allow(dead_code)]

use serde::Serialize;
use sse_encoder::{encode_to_string, Event};

/// A record-shaped payload, as an application would send it.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub author: String,
    pub text: String,
}

/// Creates a sample chat message.
pub fn sample_message() -> ChatMessage {
    ChatMessage {
        id: 9,
        author: "ada".to_string(),
        text: "hello\nthere".to_string(),
    }
}

/// Encodes an event and panics on failure.
pub fn encoded<T: Serialize>(event: &Event<T>) -> String {
    encode_to_string(event).expect("event should encode")
}

/// Splits encoded output into lines, keeping empty ones.
pub fn wire_lines(encoded: &str) -> Vec<&str> {
    encoded.split('\n').collect()
}
