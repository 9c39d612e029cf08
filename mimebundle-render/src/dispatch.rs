//! The capability dispatch engine.

use crate::config::RenderConfig;
use crate::fallback;
use crate::funnel;
use crate::registry::{Capability, capabilities};
use mimebundle::media_type::TEXT;
use mimebundle::{Bundle, RenderError, Renderable};

/// Turns arbitrary values into bundles.
///
/// Walks the [registry](crate::registry::CAPABILITIES) in priority order,
/// merging the partial bundle of every capability the value has. A key set
/// by a higher-priority capability is never overwritten, and metadata is
/// only taken along with the data it describes. The first failure, or a
/// capability handing back an error bundle, discards everything merged so
/// far; the error bundle is returned untouched.
/// Values with no capability at all go through the
/// [fallback renderer](crate::fallback), and failing that become plain text.
///
/// Holds no mutable state, so one dispatcher can serve any number of
/// threads.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    config: RenderConfig,
    registry: &'static [Capability],
}

impl Dispatcher {
    /// Dispatcher with default configuration.
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    /// Dispatcher with the given configuration.
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            config,
            registry: capabilities(),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Best-effort bundle for `value`. Never fails.
    pub fn render(&self, value: &dyn Renderable) -> Bundle {
        let mut bundle = Bundle::default();
        let mut satisfied = false;

        for capability in self.registry {
            let Some(partial) = capability.apply(value) else {
                continue;
            };
            satisfied = true;
            match partial {
                Ok(partial) if partial.is_error() => {
                    tracing::debug!(
                        capability = capability.name(),
                        value = value.type_name(),
                        "capability produced an error bundle"
                    );
                    return partial;
                }
                Ok(partial) => {
                    tracing::debug!(
                        capability = capability.name(),
                        value = value.type_name(),
                        "capability satisfied"
                    );
                    if partial.representations.contains_key("") {
                        tracing::debug!(
                            capability = capability.name(),
                            "skipping representation with empty media type"
                        );
                    }
                    bundle.merge_missing(partial);
                }
                Err(err) => {
                    tracing::debug!(
                        capability = capability.name(),
                        value = value.type_name(),
                        "capability failed"
                    );
                    return funnel::to_error_bundle(&err);
                }
            }
        }

        if !satisfied {
            return self.fallback(value);
        }

        let wants_text = self.config.plain_text_fallback || bundle.is_empty();
        if wants_text && !bundle.representations.contains_key(TEXT) {
            bundle
                .representations
                .insert(TEXT.to_owned(), value.plain_text().into());
        }
        bundle
    }

    /// Bundle for the results of one evaluation.
    ///
    /// A single value is dispatched normally. Any other count becomes one
    /// `text/plain` entry: the values' plain text separated by spaces.
    pub fn render_results(&self, values: &[&dyn Renderable]) -> Bundle {
        if let [value] = values {
            return self.render(*value);
        }
        let text = values
            .iter()
            .map(|value| value.plain_text())
            .collect::<Vec<_>>()
            .join(" ");
        Bundle::new(TEXT, text)
    }

    fn fallback(&self, value: &dyn Renderable) -> Bundle {
        match fallback::render(&self.config, None, value) {
            Ok(bundle) => bundle,
            Err(RenderError::UnsupportedType(_)) => Bundle::new(TEXT, value.plain_text()),
            Err(err) => funnel::to_error_bundle(&err),
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Render `value` with a default [`Dispatcher`].
pub fn render(value: &dyn Renderable) -> Bundle {
    Dispatcher::new().render(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn dispatcher_is_send_sync() {
        _assert_send_sync::<Dispatcher>();
    }

    #[test]
    fn numbers_become_plain_text() {
        let bundle = render(&42_u32);
        assert_eq!(bundle.representations.len(), 1);
        assert_eq!(bundle.text(), Some("42"));
    }

    #[test]
    fn empty_results_render_empty_text() {
        let bundle = Dispatcher::new().render_results(&[]);
        assert_eq!(bundle.text(), Some(""));
    }
}
