//! FailingWriter: a write-to source that never writes anything.

use crate::capability::{Renderable, Source, WriteTo};
use std::io::{self, Write};

/// A value whose [`WriteTo`] fails before writing a byte.
#[derive(Debug, Clone)]
pub struct FailingWriter {
    message: String,
}

impl FailingWriter {
    /// Create a writer failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl WriteTo for FailingWriter {
    fn write_to(&self, _out: &mut dyn Write) -> io::Result<u64> {
        Err(io::Error::other(self.message.clone()))
    }
}

impl Renderable for FailingWriter {
    fn plain_text(&self) -> String {
        "FailingWriter".into()
    }

    fn as_source(&self) -> Option<Source<'_>> {
        Some(Source::Writer(self))
    }
}
