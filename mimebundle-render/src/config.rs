//! Configuration for the rendering engine.

/// Static configuration shared by the dispatcher and the fallback renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Detect the media type of unhinted bytes from their leading bytes.
    /// When off, such bytes are stored as `application/octet-stream`.
    pub sniff_content: bool,

    /// Add a `text/plain` entry to dispatch results that lack one.
    pub plain_text_fallback: bool,
}

impl RenderConfig {
    /// Toggle content sniffing.
    pub fn with_sniff_content(mut self, enabled: bool) -> Self {
        self.sniff_content = enabled;
        self
    }

    /// Toggle the plain-text fallback for dispatch results.
    pub fn with_plain_text_fallback(mut self, enabled: bool) -> Self {
        self.plain_text_fallback = enabled;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            sniff_content: true,
            plain_text_fallback: true,
        }
    }
}
