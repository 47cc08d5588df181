//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`ResponseWriter`] - HTTP response with mutable headers and a writable body

pub mod response;

pub use response::ResponseWriter;
