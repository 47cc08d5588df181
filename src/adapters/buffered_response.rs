//! In-memory HTTP response adapter.
//!
//! Collects the rendered event body in memory and converts into an axum
//! response once rendering is complete.

use std::io::{self, Write};

use axum::body::Body;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use bytes::{Bytes, BytesMut};
use serde::Serialize;

use crate::sse::{render, Event};
use crate::traits::ResponseWriter;

/// Response whose body is buffered until it is handed to axum.
#[derive(Debug, Clone)]
pub struct BufferedResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: BytesMut,
}

impl BufferedResponse {
    /// Create an empty `200 OK` response.
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: BytesMut::new(),
        }
    }

    /// Create a response that starts with the given headers.
    pub fn with_headers(headers: HeaderMap) -> Self {
        Self {
            headers,
            ..Self::new()
        }
    }

    /// Response status.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Set the response status.
    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    /// Body bytes written so far.
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Take the body, leaving the response empty.
    pub fn take_body(&mut self) -> Bytes {
        self.body.split().freeze()
    }
}

impl Default for BufferedResponse {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for BufferedResponse {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.body.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl ResponseWriter for BufferedResponse {
    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}

impl IntoResponse for BufferedResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body.freeze()));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

impl<T: Serialize> IntoResponse for Event<T> {
    fn into_response(self) -> Response {
        let mut response = BufferedResponse::new();
        match render(&mut response, &self) {
            Ok(()) => response.into_response(),
            Err(err) => {
                tracing::warn!("Failed to render SSE event ({}): {}", err.error_code(), err);
                err.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
    use axum::http::HeaderValue;

    #[test]
    fn test_buffered_response_collects_body() {
        let mut response = BufferedResponse::new();
        response.write_all(b"data:").unwrap();
        response.write_all(b"x\n\n").unwrap();

        assert_eq!(response.body(), b"data:x\n\n");
        assert_eq!(response.take_body(), Bytes::from_static(b"data:x\n\n"));
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_render_sets_headers_and_body() {
        let mut response = BufferedResponse::new();
        Event::text("hello").with_id("1").render(&mut response).unwrap();

        assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), "text/event-stream");
        assert_eq!(response.headers().get(CACHE_CONTROL).unwrap(), "no-cache");
        assert_eq!(response.body(), b"id:1\ndata:hello\n\n");
    }

    #[test]
    fn test_render_preserves_caller_cache_control() {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("max-age=10"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/html"));
        let mut response = BufferedResponse::with_headers(headers);

        Event::text("x").render(&mut response).unwrap();

        assert_eq!(response.headers().get(CACHE_CONTROL).unwrap(), "max-age=10");
        assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), "text/event-stream");
    }

    #[test]
    fn test_into_response_keeps_status_and_headers() {
        let mut buffered = BufferedResponse::new();
        buffered.set_status(StatusCode::ACCEPTED);
        Event::text("x").render(&mut buffered).unwrap();

        let response = buffered.into_response();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), "text/event-stream");
    }
}
