//! Error handling for the event encoder.
//!
//! Two failure modes exist, matching the two things the encoder touches:
//!
//! | Variant | Cause | Category |
//! |---------|-------|----------|
//! | `Write` | Sink write failed | Transport |
//! | `Serialization` | Payload not representable as JSON | Payload |
//!
//! Errors are returned to the immediate caller; nothing is retried or
//! suppressed here.

mod category;
mod encode_error;
mod result;

pub use category::ErrorCategory;
pub use encode_error::EncodeError;
pub use result::EncodeResult;
