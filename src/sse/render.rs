//! HTTP response adaptation
//!
//! Prepares response headers for an event stream and then hands the body
//! to the encoder.

use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderValue};
use serde::Serialize;

use crate::error::EncodeResult;
use crate::sse::encoder::encode;
use crate::sse::events::{Event, EVENT_STREAM_CONTENT_TYPE, NO_CACHE};
use crate::traits::ResponseWriter;

/// Set the headers every event stream response carries.
///
/// `Content-Type` is always replaced with `text/event-stream`.
/// `Cache-Control` is set to `no-cache` only when the caller has not
/// already chosen a caching directive.
pub fn apply_event_stream_headers(headers: &mut HeaderMap) {
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static(EVENT_STREAM_CONTENT_TYPE),
    );

    if headers.contains_key(CACHE_CONTROL) {
        tracing::debug!(
            "Keeping caller Cache-Control: {:?}",
            headers.get(CACHE_CONTROL)
        );
    } else {
        headers.insert(CACHE_CONTROL, HeaderValue::from_static(NO_CACHE));
    }
}

/// Render an event onto an HTTP response.
///
/// Adjusts the response headers, then encodes the event into the body.
pub fn render<R, T>(response: &mut R, event: &Event<T>) -> EncodeResult<()>
where
    R: ResponseWriter + ?Sized,
    T: Serialize,
{
    apply_event_stream_headers(response.headers_mut());
    encode(response, event)
}

impl<T: Serialize> Event<T> {
    /// Render this event onto an HTTP response. See [`render`].
    pub fn render<R: ResponseWriter + ?Sized>(&self, response: &mut R) -> EncodeResult<()> {
        render(response, self)
    }
}
