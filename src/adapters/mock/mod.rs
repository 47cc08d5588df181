//! Mock implementations for testing.
//!
//! - [`MockWriter`] - Recording sink with write-failure injection

pub mod writer;

pub use writer::MockWriter;
