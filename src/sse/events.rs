//! SSE event types and definitions
//!
//! Contains the `Event` record handed to the encoder and the `Payload`
//! variant that decides how its `data` field is framed on the wire.

use std::fmt;
use std::time::Duration;

use serde_json::Value;

/// Media type of an event stream response.
pub const EVENT_STREAM_CONTENT_TYPE: &str = "text/event-stream";

/// Cache-Control directive applied when the caller has not set one.
pub const NO_CACHE: &str = "no-cache";

/// Payload carried in the `data` field of an event.
///
/// The variant picks the framing:
/// - `Scalar` text is split on `\n` into continuation `data:` lines and the
///   event ends with a blank line.
/// - `Structured` values are written as a single JSON document followed by
///   one `\n`.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload<T = Value> {
    /// Textual payload, written as-is apart from line framing
    Scalar(String),
    /// Record, sequence or mapping serialized as JSON
    Structured(T),
}

impl<T> Payload<T> {
    /// Build a scalar payload from any value's textual form.
    pub fn text(value: impl fmt::Display) -> Self {
        Payload::Scalar(value.to_string())
    }

    /// Build a structured payload.
    pub fn structured(value: T) -> Self {
        Payload::Structured(value)
    }

    /// Unwrap one level of optionality.
    ///
    /// `Some(payload)` is returned unchanged; an absent payload becomes an
    /// empty scalar so the event still carries a `data:` line. Only a single
    /// level is unwrapped.
    pub fn optional(value: Option<Payload<T>>) -> Self {
        value.unwrap_or_else(|| Payload::Scalar(String::new()))
    }

    /// Returns true if the payload takes the JSON path.
    pub fn is_structured(&self) -> bool {
        matches!(self, Payload::Structured(_))
    }

    /// Short name of the payload kind, used in log output.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Payload::Scalar(_) => "scalar",
            Payload::Structured(_) => "structured",
        }
    }
}

impl Payload<Value> {
    /// Classify an already-dynamic JSON value by its shape.
    ///
    /// Objects and arrays are structured. Strings keep their raw text;
    /// numbers, booleans and null use their JSON textual form.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) | Value::Array(_) => Payload::Structured(value),
            Value::String(text) => Payload::Scalar(text),
            other => Payload::Scalar(other.to_string()),
        }
    }
}

impl<T> From<&str> for Payload<T> {
    fn from(value: &str) -> Self {
        Payload::Scalar(value.to_string())
    }
}

impl<T> From<String> for Payload<T> {
    fn from(value: String) -> Self {
        Payload::Scalar(value)
    }
}

impl From<Value> for Payload<Value> {
    fn from(value: Value) -> Self {
        Payload::from_value(value)
    }
}

impl<T> From<Option<Payload<T>>> for Payload<T> {
    fn from(value: Option<Payload<T>>) -> Self {
        Payload::optional(value)
    }
}

/// A single Server-Sent Event.
///
/// Fields are written in a fixed order: `id`, `event`, `retry`, then `data`.
/// Empty `id`/`event_type` strings and a zero `retry` are treated as absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Event<T = Value> {
    /// Last-event identifier
    pub id: Option<String>,
    /// Event type name (the `event:` field)
    pub event_type: Option<String>,
    /// Reconnection time in milliseconds
    pub retry: Option<u64>,
    /// Event payload; always emitted
    pub data: Payload<T>,
}

impl<T> Event<T> {
    /// Create an event carrying only a payload.
    pub fn new(data: impl Into<Payload<T>>) -> Self {
        Self {
            id: None,
            event_type: None,
            retry: None,
            data: data.into(),
        }
    }

    /// Create an event with a JSON payload.
    pub fn json(value: T) -> Self {
        Self::new(Payload::Structured(value))
    }

    /// Set the event id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the event type name.
    pub fn with_event_type(mut self, event_type: impl Into<String>) -> Self {
        self.event_type = Some(event_type.into());
        self
    }

    /// Set the retry interval in milliseconds.
    pub fn with_retry(mut self, millis: u64) -> Self {
        self.retry = Some(millis);
        self
    }

    /// Set the retry interval from a duration, truncated to whole milliseconds.
    pub fn with_retry_duration(self, retry: Duration) -> Self {
        let millis = u64::try_from(retry.as_millis()).unwrap_or(u64::MAX);
        self.with_retry(millis)
    }

    /// The id, if it will be written.
    pub fn emitted_id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }

    /// The event type, if it will be written.
    pub fn emitted_event_type(&self) -> Option<&str> {
        self.event_type.as_deref().filter(|name| !name.is_empty())
    }

    /// The retry interval, if it will be written.
    pub fn emitted_retry(&self) -> Option<u64> {
        self.retry.filter(|millis| *millis > 0)
    }
}

impl Event<Value> {
    /// Create an event with a textual payload.
    pub fn text(value: impl fmt::Display) -> Self {
        Self::new(Payload::text(value))
    }
}
