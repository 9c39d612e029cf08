//! Format builders: one bundle per well-known media type.
//!
//! Every builder is total except [`file`], which reads from disk first.
//! Each result carries a `text/plain` entry.

use crate::fallback;
use mimebundle::media_type::{
    HTML, JAVASCRIPT, JPEG, JSON, LATEX, MARKDOWN, PDF, PNG, SVG,
};
use mimebundle::{Bundle, MetadataMap, MimeMap, RenderError};
use std::path::Path;

/// Delimiter trimmed from, and wrapped around, LaTeX input.
pub const DEFAULT_DELIMITER: char = '$';

/// `text/html` bundle.
pub fn html(html: impl Into<String>) -> Bundle {
    Bundle::new(HTML, html.into())
}

/// `application/javascript` bundle.
pub fn javascript(javascript: impl Into<String>) -> Bundle {
    Bundle::new(JAVASCRIPT, javascript.into())
}

/// `image/jpeg` bundle from encoded bytes.
pub fn jpeg(jpeg: impl Into<Vec<u8>>) -> Bundle {
    Bundle::new(JPEG, jpeg.into())
}

/// `application/json` bundle. The plain text is the compact JSON.
pub fn json(json: serde_json::Value) -> Bundle {
    Bundle::new(JSON, json)
}

/// `text/markdown` bundle.
pub fn markdown(markdown: impl Into<String>) -> Bundle {
    Bundle::new(MARKDOWN, markdown.into())
}

/// `application/pdf` bundle from document bytes.
pub fn pdf(pdf: impl Into<Vec<u8>>) -> Bundle {
    Bundle::new(PDF, pdf.into())
}

/// `image/png` bundle from encoded bytes.
pub fn png(png: impl Into<Vec<u8>>) -> Bundle {
    Bundle::new(PNG, png.into())
}

/// `image/svg+xml` bundle.
pub fn svg(svg: impl Into<String>) -> Bundle {
    Bundle::new(SVG, svg.into())
}

/// Inline LaTeX, delimited by `$`.
///
/// `latex("x^2")` stores `x^2` as `text/latex` and `$x^2$` as plain text.
pub fn latex(latex: &str) -> Bundle {
    latex_delimited(latex, DEFAULT_DELIMITER)
}

/// Inline LaTeX with a custom delimiter.
///
/// Any run of `delimiter` around the input is trimmed first.
pub fn latex_delimited(latex: &str, delimiter: char) -> Bundle {
    let body = latex.trim_matches(delimiter);
    Bundle::with_plain_text(LATEX, format!("{delimiter}{body}{delimiter}"), body)
}

/// Display-mode math, delimited by `$$`.
///
/// `math("x^2")` and `math("$x^2$")` both store `$$x^2$$` as `text/latex`;
/// the plain text is the input as given.
pub fn math(latex: &str) -> Bundle {
    math_delimited(latex, DEFAULT_DELIMITER)
}

/// Display-mode math with a custom delimiter, doubled on each side.
pub fn math_delimited(latex: &str, delimiter: char) -> Bundle {
    let body = latex.trim_matches(delimiter);
    Bundle::with_plain_text(
        LATEX,
        latex,
        format!("{delimiter}{delimiter}{body}{delimiter}{delimiter}"),
    )
}

/// Fully formed maps, wrapped verbatim with no plain-text injection.
///
/// The escape hatch for media types and metadata the other builders do not
/// cover; `representations` should hold at least one entry.
pub fn raw(representations: MimeMap, metadata: MetadataMap) -> Bundle {
    Bundle::from_raw(representations, metadata)
}

/// Bundle from a file's contents, sniffed when `media_type` is `None`.
///
/// # Errors
///
/// [`RenderError::Io`] when the file cannot be read. Callers turn it into
/// an error bundle with [`funnel::or_error_bundle`](crate::funnel::or_error_bundle).
pub fn file(media_type: Option<&str>, path: impl AsRef<Path>) -> Result<Bundle, RenderError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "loaded file for display");
    match media_type {
        Some(mt) => fallback::any(mt, &bytes),
        None => fallback::auto(&bytes),
    }
}
