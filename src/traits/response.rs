//! HTTP response writer trait abstraction.
//!
//! An event can only be rendered onto an HTTP response if the response
//! exposes both its headers and a writable body. This trait captures that
//! pair so hosting layers (and tests) can plug in their own response type.

use std::io::Write;

use axum::http::HeaderMap;

/// A response whose headers can still be changed and whose body accepts bytes.
///
/// Header changes are only meaningful before the response head has been
/// sent; guaranteeing that ordering is up to the caller.
///
/// # Example
///
/// ```ignore
/// use sse_encoder::adapters::BufferedResponse;
/// use sse_encoder::traits::ResponseWriter;
///
/// let mut response = BufferedResponse::new();
/// response.headers_mut().insert("x-trace", "abc".parse()?);
/// response.write_all(b"data:hi\n\n")?;
/// ```
pub trait ResponseWriter: Write {
    /// Headers of the response, still open for modification.
    fn headers(&self) -> &HeaderMap;

    /// Mutable access to the response headers.
    fn headers_mut(&mut self) -> &mut HeaderMap;
}

impl<R: ResponseWriter + ?Sized> ResponseWriter for &mut R {
    fn headers(&self) -> &HeaderMap {
        (**self).headers()
    }

    fn headers_mut(&mut self) -> &mut HeaderMap {
        (**self).headers_mut()
    }
}
