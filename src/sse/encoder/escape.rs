//! Line-break escaping for field values.
//!
//! Values are streamed to the sink in slices between special characters,
//! so no intermediate copy of the value is built.

use std::io::{self, Write};

/// How line breaks inside a value are rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// Single-line fields (`id`, `event`): line feed and carriage return
    /// become a backslash followed by `n` or `r`.
    Field,
    /// Scalar `data`: a line feed starts a continuation `data:` line and a
    /// carriage return becomes a backslash followed by `r`.
    Data,
}

impl Escape {
    fn newline(self) -> &'static [u8] {
        match self {
            Escape::Field => b"\\n",
            Escape::Data => b"\ndata:",
        }
    }

    fn carriage_return(self) -> &'static [u8] {
        b"\\r"
    }

    /// Write `value` to `w` with line breaks rewritten.
    pub fn write_to<W: Write + ?Sized>(self, w: &mut W, value: &str) -> io::Result<()> {
        let bytes = value.as_bytes();
        let mut start = 0;

        for (i, byte) in bytes.iter().enumerate() {
            let replacement = match byte {
                b'\n' => self.newline(),
                b'\r' => self.carriage_return(),
                _ => continue,
            };
            if start < i {
                w.write_all(&bytes[start..i])?;
            }
            w.write_all(replacement)?;
            start = i + 1;
        }

        if start < bytes.len() {
            w.write_all(&bytes[start..])?;
        }
        Ok(())
    }
}
