//! Error category classification.
//!
//! Encoding failures fall into two broad groups that callers handle
//! differently: the sink went away, or the payload itself is unusable.

use std::fmt;

/// High-level categorization of encoding errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The sink rejected a write (closed stream, broken connection).
    Transport,

    /// The payload could not be serialized.
    Payload,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Payload => "payload",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
