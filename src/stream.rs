//! Streaming event responses.
//!
//! Turns a stream of events into a chunked axum response body. Every event
//! is encoded on its own and sent as one body chunk, in stream order.

use axum::body::Body;
use axum::http::header::CACHE_CONTROL;
use axum::response::Response;
use futures::Stream;
use futures_util::StreamExt;
use serde::Serialize;

use crate::config::EventStreamConfig;
use crate::sse::{apply_event_stream_headers, encode_to_bytes, Event};

/// Build a streaming `text/event-stream` response from `events`.
///
/// The response carries the same headers as a single rendered event. If an
/// event fails to encode, the failure is logged and the body ends with that
/// error; the client sees the connection drop.
///
/// # Example
///
/// ```ignore
/// use futures::stream;
/// use sse_encoder::{event_stream, Event, EventStreamConfig};
///
/// async fn handler() -> axum::response::Response {
///     let events = stream::iter(vec![Event::text("one"), Event::text("two")]);
///     event_stream(events, EventStreamConfig::default().with_initial_retry(3000))
/// }
/// ```
pub fn event_stream<S, T>(events: S, config: EventStreamConfig) -> Response
where
    S: Stream<Item = Event<T>> + Send + 'static,
    T: Serialize + Send + 'static,
{
    let mut initial_retry = config.initial_retry;

    let body = events.map(move |mut event| {
        if let Some(retry) = initial_retry.take() {
            if event.emitted_retry().is_none() {
                event.retry = Some(retry);
            }
        }

        encode_to_bytes(&event).map_err(|err| {
            tracing::warn!(
                "Failed to encode SSE event for stream ({}): {}",
                err.error_code(),
                err
            );
            err
        })
    });

    let mut response = Response::new(Body::from_stream(body));
    if let Some(cache_control) = config.cache_control {
        response.headers_mut().insert(CACHE_CONTROL, cache_control);
    }
    apply_event_stream_headers(response.headers_mut());
    response
}
