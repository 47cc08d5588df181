//! Result type alias for encoder operations.

use super::encode_error::EncodeError;

/// Type alias for Results using EncodeError.
pub type EncodeResult<T> = Result<T, EncodeError>;
