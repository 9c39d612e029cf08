//! In-memory implementations for testing.
//!
//! Available behind the `test-utils` feature flag.

mod failing_reader;
mod failing_writer;
mod recording_sink;
mod showcase;

pub use failing_reader::FailingReader;
pub use failing_writer::FailingWriter;
pub use recording_sink::RecordingSink;
pub use showcase::Showcase;
