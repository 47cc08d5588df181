//! Event stream configuration.
//!
//! The encoder itself has no settings; this only shapes the streaming
//! response built by [`crate::stream::event_stream`].

use axum::http::HeaderValue;

/// Configuration for a streaming event response.
///
/// Use the builder pattern to customize behavior.
///
/// # Example
///
/// ```ignore
/// use sse_encoder::EventStreamConfig;
///
/// let config = EventStreamConfig::default()
///     .with_initial_retry(5_000)
///     .with_cache_control(HeaderValue::from_static("no-store"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventStreamConfig {
    /// Retry interval (ms) attached to the first event if it has none
    pub initial_retry: Option<u64>,
    /// Caching directive to send instead of `no-cache`
    pub cache_control: Option<HeaderValue>,
}

impl EventStreamConfig {
    /// Create a new EventStreamConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the retry interval announced with the first event.
    pub fn with_initial_retry(mut self, millis: u64) -> Self {
        self.initial_retry = Some(millis);
        self
    }

    /// Set the Cache-Control value for the response.
    pub fn with_cache_control(mut self, value: HeaderValue) -> Self {
        self.cache_control = Some(value);
        self
    }
}
