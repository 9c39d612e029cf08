//! Rendering bound to a delivery sink.

use crate::dispatch::Dispatcher;
use mimebundle::{Bundle, Renderable, Sink, SinkError};

/// A dispatcher paired with the sink its bundles go to.
///
/// Built once when the transport comes up; the sink is never swapped
/// afterwards. Until a real transport exists, bind
/// [`NoTransport`](mimebundle::NoTransport).
pub struct Publisher<S: Sink> {
    sink: S,
    dispatcher: Dispatcher,
}

impl<S: Sink> Publisher<S> {
    /// Bind `sink` with a default dispatcher.
    pub fn new(sink: S) -> Self {
        Self::with_dispatcher(sink, Dispatcher::new())
    }

    /// Bind `sink` with a specific dispatcher.
    pub fn with_dispatcher(sink: S, dispatcher: Dispatcher) -> Self {
        Self { sink, dispatcher }
    }

    /// The bound sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Render `value` and deliver the result.
    ///
    /// Rendering happens before the returned future is first polled, so
    /// `value` is not held across the delivery and need not be `Sync`.
    pub fn display<'a>(
        &'a self,
        value: &dyn Renderable,
    ) -> impl Future<Output = Result<(), SinkError>> + Send + use<'a, S> {
        let bundle = self.dispatcher.render(value);
        self.publish(bundle)
    }

    /// Deliver a bundle that is already built.
    pub async fn publish(&self, bundle: Bundle) -> Result<(), SinkError> {
        tracing::debug!(
            media_types = ?bundle.representations.keys().collect::<Vec<_>>(),
            "delivering bundle"
        );
        self.sink.deliver(bundle).await
    }
}
