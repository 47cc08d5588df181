//! Event encoding
//!
//! Writes one `Event` to a byte sink in the Server-Sent Events wire format:
//!
//! ```text
//! id:<escaped id>\n              (only if id non-empty)
//! event:<escaped type>\n         (only if event type non-empty)
//! retry:<decimal>\n              (only if retry > 0)
//! data:<json-or-escaped-text>\n  (structured payloads)
//! data:<json-or-escaped-text>\n\n (scalar payloads)
//! ```
//!
//! Each field is written straight to the sink. A failed write aborts the
//! remaining fields and whatever was already written stays on the sink.

mod escape;

use std::io::{self, Write};

use bytes::{BufMut, Bytes, BytesMut};
use serde::Serialize;

use crate::error::{EncodeError, EncodeResult};
use crate::sse::events::{Event, Payload};

pub use escape::Escape;

/// Encode a single event onto `writer`.
///
/// Fields are written in the fixed order `id`, `event`, `retry`, `data`.
/// Errors from the sink are returned unchanged as `EncodeError::Write`; a
/// payload that cannot be serialized yields `EncodeError::Serialization`.
pub fn encode<W, T>(writer: &mut W, event: &Event<T>) -> EncodeResult<()>
where
    W: Write + ?Sized,
    T: Serialize,
{
    tracing::trace!(
        "Encoding SSE event (id={:?}, event={:?}, data={})",
        event.emitted_id(),
        event.emitted_event_type(),
        event.data.kind_name()
    );

    if let Some(id) = event.emitted_id() {
        write_field(writer, "id:", id)?;
    }
    if let Some(event_type) = event.emitted_event_type() {
        write_field(writer, "event:", event_type)?;
    }
    if let Some(retry) = event.emitted_retry() {
        write_retry(writer, retry)?;
    }
    write_data(writer, &event.data)
}

/// Encode a single event into a freshly allocated buffer.
pub fn encode_to_bytes<T: Serialize>(event: &Event<T>) -> EncodeResult<Bytes> {
    let mut writer = BytesMut::new().writer();
    encode(&mut writer, event)?;
    Ok(writer.into_inner().freeze())
}

/// Encode a single event into a string.
///
/// The output is always UTF-8: framing is ASCII, field values are written
/// as whole `&str` slices split only at ASCII line breaks, and serde_json
/// emits UTF-8. Invalid UTF-8 is reported as an `InvalidData` write error.
pub fn encode_to_string<T: Serialize>(event: &Event<T>) -> EncodeResult<String> {
    let mut buf = Vec::new();
    encode(&mut buf, event)?;
    String::from_utf8(buf)
        .map_err(|err| EncodeError::Write(io::Error::new(io::ErrorKind::InvalidData, err)))
}

fn write_field<W: Write + ?Sized>(w: &mut W, name: &str, value: &str) -> EncodeResult<()> {
    w.write_all(name.as_bytes())?;
    Escape::Field.write_to(w, value)?;
    w.write_all(b"\n")?;
    Ok(())
}

fn write_retry<W: Write + ?Sized>(w: &mut W, retry: u64) -> EncodeResult<()> {
    w.write_all(b"retry:")?;
    w.write_all(retry.to_string().as_bytes())?;
    w.write_all(b"\n")?;
    Ok(())
}

fn write_data<W, T>(w: &mut W, data: &Payload<T>) -> EncodeResult<()>
where
    W: Write + ?Sized,
    T: Serialize,
{
    w.write_all(b"data:")?;
    match data {
        Payload::Structured(value) => {
            serde_json::to_writer(&mut *w, value)?;
            w.write_all(b"\n")?;
        }
        Payload::Scalar(text) => {
            Escape::Data.write_to(w, text)?;
            w.write_all(b"\n\n")?;
        }
    }
    Ok(())
}
