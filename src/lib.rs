//! SSE Encoder - Server-Sent Events encoding for HTTP response streams
//!
//! Encodes one event at a time onto an open byte sink, and adapts HTTP
//! responses so a client reads them as an event stream.
//!
//! ```ignore
//! use sse_encoder::{encode, Event};
//!
//! let mut out = Vec::new();
//! encode(&mut out, &Event::text("line1\nline2").with_id("7"))?;
//! assert_eq!(out, b"id:7\ndata:line1\ndata:line2\n\n");
//! ```

pub mod adapters;
pub mod config;
pub mod error;
pub mod sse;
pub mod stream;
pub mod traits;

pub use config::EventStreamConfig;
pub use error::{EncodeError, EncodeResult};
pub use sse::{encode, encode_to_bytes, encode_to_string, render, Event, Payload};
pub use stream::event_stream;
