//! Fallback renderer for values without an explicit capability.
//!
//! Handles the raw input shapes of [`Source`]: text, bytes, streams and
//! write-to objects. Bytes without a media-type hint are sniffed. The
//! result always carries a `text/plain` entry; for UTF-8 bytes resolved as
//! `text/plain` it is the decoded text.

use crate::config::RenderConfig;
use crate::funnel;
use crate::sniff;
use mimebundle::media_type::{OCTET_STREAM, TEXT};
use mimebundle::{Bundle, MediaValue, RenderError, Renderable, Source};
use std::io::Read;

/// Render `value` from its raw [`Source`], optionally as `media_type`.
///
/// # Errors
///
/// Only [`RenderError::UnsupportedType`], when `value` exposes no source.
/// A stream that fails mid-drain yields `Ok` with an error bundle.
pub fn render(
    config: &RenderConfig,
    media_type: Option<&str>,
    value: &dyn Renderable,
) -> Result<Bundle, RenderError> {
    let media_type = media_type.filter(|mt| !mt.is_empty());
    let source = value
        .as_source()
        .ok_or_else(|| RenderError::UnsupportedType(value.type_name().to_owned()))?;

    let drained = match source {
        Source::Text(text) => return Ok(from_text(media_type, text, value)),
        Source::Bytes(bytes) => return Ok(from_bytes(config, media_type, bytes, value)),
        Source::Reader(mut reader) => {
            let mut buffer = Vec::new();
            reader.read_to_end(&mut buffer).map(|_| buffer)
        }
        Source::Writer(writer) => {
            let mut buffer = Vec::new();
            writer.write_to(&mut buffer).map(|_| buffer)
        }
    };

    match drained {
        Ok(bytes) => Ok(from_bytes(config, media_type, &bytes, value)),
        Err(err) => Ok(funnel::to_error_bundle(&RenderError::Io(err))),
    }
}

/// Render `value` as `media_type`, with default configuration.
pub fn any(media_type: &str, value: &dyn Renderable) -> Result<Bundle, RenderError> {
    render(&RenderConfig::default(), Some(media_type), value)
}

/// Render `value` with its media type detected, with default configuration.
pub fn auto(value: &dyn Renderable) -> Result<Bundle, RenderError> {
    render(&RenderConfig::default(), None, value)
}

fn from_text(media_type: Option<&str>, text: &str, value: &dyn Renderable) -> Bundle {
    let mut bundle = Bundle::default();
    // text carries no signature, only an explicit hint can place it
    if let (Some(mt), false) = (media_type, text.is_empty()) {
        bundle.representations.insert(mt.to_owned(), text.into());
    }
    bundle
        .representations
        .entry(TEXT.to_owned())
        .or_insert_with(|| {
            if text.is_empty() {
                value.plain_text().into()
            } else {
                text.into()
            }
        });
    bundle
}

fn from_bytes(
    config: &RenderConfig,
    media_type: Option<&str>,
    bytes: &[u8],
    value: &dyn Renderable,
) -> Bundle {
    let mut bundle = Bundle::new(TEXT, value.plain_text());
    if bytes.is_empty() {
        return bundle;
    }

    let media_type = match media_type {
        Some(mt) => mt,
        None if config.sniff_content => {
            let sniffed = sniff::content_type(bytes);
            tracing::debug!(media_type = sniffed, len = bytes.len(), "sniffed content type");
            sniffed
        }
        None => OCTET_STREAM,
    };
    if media_type != TEXT {
        bundle
            .representations
            .insert(media_type.to_owned(), MediaValue::Binary(bytes.to_vec()));
    } else if let Ok(text) = std::str::from_utf8(bytes) {
        // textual payloads show their contents, not their size
        bundle.representations.insert(TEXT.to_owned(), text.into());
    }
    bundle
}
