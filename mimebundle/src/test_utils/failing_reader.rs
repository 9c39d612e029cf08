//! FailingReader: a stream source whose reads always fail.

use crate::capability::{Renderable, Source};
use std::io::{self, Read};

/// A value exposing a stream that errors on the first read.
#[derive(Debug, Clone)]
pub struct FailingReader {
    message: String,
}

impl FailingReader {
    /// Create a reader failing with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

struct Broken<'a>(&'a str);

impl Read for Broken<'_> {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other(self.0.to_owned()))
    }
}

impl Renderable for FailingReader {
    fn plain_text(&self) -> String {
        "FailingReader".into()
    }

    fn as_source(&self) -> Option<Source<'_>> {
        Some(Source::Reader(Box::new(Broken(&self.message))))
    }
}
