//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`BufferedResponse`] - In-memory `ResponseWriter` that becomes an axum response
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockWriter`] - Recording sink with write-failure injection

pub mod buffered_response;
pub mod mock;

pub use buffered_response::BufferedResponse;
pub use mock::MockWriter;
