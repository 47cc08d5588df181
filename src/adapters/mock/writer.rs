//! Mock sink for testing.
//!
//! Records every byte it accepts and can be told to start failing once a
//! byte budget is exhausted, which lets tests cut an event off at a precise
//! point on the wire.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use axum::http::HeaderMap;

use crate::traits::ResponseWriter;

/// Recording sink with failure injection.
///
/// Clones share the same buffer, so a test can keep one handle for
/// inspection while the other is written to.
///
/// # Example
///
/// ```ignore
/// use sse_encoder::adapters::mock::MockWriter;
///
/// let mut sink = MockWriter::failing_after(5);
/// let probe = sink.clone();
/// let _ = sse_encoder::encode(&mut sink, &event);
/// assert_eq!(probe.written_string(), "id:1\n");
/// ```
#[derive(Debug, Clone)]
pub struct MockWriter {
    /// Bytes accepted so far
    buffer: Arc<Mutex<Vec<u8>>>,
    /// Number of successful write calls
    write_calls: Arc<Mutex<usize>>,
    /// Total bytes accepted before writes start failing
    byte_limit: Option<usize>,
    /// Kind of the injected error
    error_kind: io::ErrorKind,
    /// Set once a write has failed; all later writes fail too
    failed: Arc<Mutex<bool>>,
    /// Response headers, for use as a `ResponseWriter`
    headers: HeaderMap,
}

impl MockWriter {
    /// Create a sink that accepts everything.
    pub fn new() -> Self {
        Self {
            buffer: Arc::new(Mutex::new(Vec::new())),
            write_calls: Arc::new(Mutex::new(0)),
            byte_limit: None,
            error_kind: io::ErrorKind::BrokenPipe,
            failed: Arc::new(Mutex::new(false)),
            headers: HeaderMap::new(),
        }
    }

    /// Create a sink that accepts `limit` bytes and then fails.
    ///
    /// A write that would cross the limit is rejected whole.
    pub fn failing_after(limit: usize) -> Self {
        Self::new().with_byte_limit(limit)
    }

    /// Set the byte budget.
    pub fn with_byte_limit(mut self, limit: usize) -> Self {
        self.byte_limit = Some(limit);
        self
    }

    /// Set the kind of the injected error (default: `BrokenPipe`).
    pub fn with_error_kind(mut self, kind: io::ErrorKind) -> Self {
        self.error_kind = kind;
        self
    }

    /// Start with the given response headers.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Get a copy of all accepted bytes.
    pub fn written(&self) -> Vec<u8> {
        self.buffer.lock().unwrap().clone()
    }

    /// Get all accepted bytes as text.
    pub fn written_string(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned()
    }

    /// Number of successful write calls.
    pub fn write_calls(&self) -> usize {
        *self.write_calls.lock().unwrap()
    }

    /// Returns true once a write has been rejected.
    pub fn has_failed(&self) -> bool {
        *self.failed.lock().unwrap()
    }
}

impl Default for MockWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for MockWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut failed = self.failed.lock().unwrap();
        let mut buffer = self.buffer.lock().unwrap();

        let over_limit = self
            .byte_limit
            .is_some_and(|limit| buffer.len() + buf.len() > limit);
        if *failed || over_limit {
            *failed = true;
            return Err(io::Error::new(self.error_kind, "mock sink closed"));
        }

        buffer.extend_from_slice(buf);
        *self.write_calls.lock().unwrap() += 1;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl ResponseWriter for MockWriter {
    fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }
}
