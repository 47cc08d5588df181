//! SSE (Server-Sent Events) encoding
//!
//! Writes events in the text format defined by the W3C Server-Sent Events
//! specification:
//! - `id:<id>` - last-event identifier
//! - `event:<type>` - event type name
//! - `retry:<ms>` - reconnection time
//! - `data:<payload>` - payload line(s)
//! - Empty line - ends a scalar event
//!
//! # Module structure
//! - `events` - Event and payload definitions, header literals
//! - `encoder` - Wire encoding (encode, encode_to_bytes, escaping)
//! - `render` - HTTP response header adaptation

mod encoder;
mod events;
mod render;

// Re-export public types
pub use encoder::{encode, encode_to_bytes, encode_to_string, Escape};
pub use events::{Event, Payload, EVENT_STREAM_CONTENT_TYPE, NO_CACHE};
pub use render::{apply_event_stream_headers, render};
