//! The Sink interface: delivery of finished bundles to the client.

use crate::bundle::Bundle;
use crate::error::SinkError;
use async_trait::async_trait;
use std::sync::Arc;

/// Accepts a finished [`Bundle`] and delivers it to the client transport.
///
/// Implemented by the surrounding kernel, not by the rendering engine. The
/// engine only returns bundles; whoever owns the transport binds a sink once
/// at startup and hands bundles to it.
#[async_trait]
pub trait Sink: Send + Sync {
    /// Deliver one bundle. Ownership passes to the sink.
    async fn deliver(&self, bundle: Bundle) -> Result<(), SinkError>;
}

#[async_trait]
impl<S: Sink + ?Sized> Sink for Arc<S> {
    async fn deliver(&self, bundle: Bundle) -> Result<(), SinkError> {
        (**self).deliver(bundle).await
    }
}

/// Placeholder sink for when no client connection exists yet.
/// Every delivery fails with [`SinkError::Unavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTransport;

#[async_trait]
impl Sink for NoTransport {
    async fn deliver(&self, _bundle: Bundle) -> Result<(), SinkError> {
        Err(SinkError::Unavailable("no transport available".into()))
    }
}
