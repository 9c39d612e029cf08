//! Media-type identifiers understood by rich clients.

/// Plain text. Every bundle a client receives should carry one.
pub const TEXT: &str = "text/plain";
/// HTML fragment.
pub const HTML: &str = "text/html";
/// JavaScript executed by the frontend.
pub const JAVASCRIPT: &str = "application/javascript";
/// JPEG image bytes.
pub const JPEG: &str = "image/jpeg";
/// PNG image bytes.
pub const PNG: &str = "image/png";
/// Structured JSON data.
pub const JSON: &str = "application/json";
/// LaTeX markup, rendered by the frontend's math engine.
pub const LATEX: &str = "text/latex";
/// Markdown text.
pub const MARKDOWN: &str = "text/markdown";
/// PDF document bytes.
pub const PDF: &str = "application/pdf";
/// SVG image markup.
pub const SVG: &str = "image/svg+xml";

/// Opaque binary data. Produced by content sniffing when nothing more
/// specific matches; not a display format of its own.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// The built-in media types, in no particular order.
pub const RECOGNIZED: [&str; 10] = [
    TEXT, HTML, JAVASCRIPT, JPEG, PNG, JSON, LATEX, MARKDOWN, PDF, SVG,
];

/// Whether `media_type` is one of the [`RECOGNIZED`] built-ins.
///
/// Custom media types are still allowed in a bundle; this only tells the
/// two apart.
pub fn is_recognized(media_type: &str) -> bool {
    RECOGNIZED.contains(&media_type)
}
