//! RecordingSink: keeps every delivered bundle.

use crate::bundle::Bundle;
use crate::error::SinkError;
use crate::sink::Sink;
use async_trait::async_trait;
use std::sync::Mutex;

/// A sink that records every bundle and always succeeds.
/// Use `.bundles()` to inspect what was delivered.
#[derive(Debug, Default)]
pub struct RecordingSink {
    bundles: Mutex<Vec<Bundle>>,
}

impl RecordingSink {
    /// Create an empty RecordingSink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a snapshot of all delivered bundles, oldest first.
    pub fn bundles(&self) -> Vec<Bundle> {
        self.bundles.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sink for RecordingSink {
    async fn deliver(&self, bundle: Bundle) -> Result<(), SinkError> {
        self.bundles.lock().unwrap().push(bundle);
        Ok(())
    }
}
