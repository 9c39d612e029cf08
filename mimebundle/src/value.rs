//! The representation stored under one media type.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One representation inside a [`Bundle`](crate::Bundle).
///
/// On the wire text and JSON are written as-is and binary payloads are
/// base64 encoded, which is what notebook frontends expect for images and
/// PDFs. Deserialization cannot tell base64 apart from ordinary text, so
/// every string comes back as [`MediaValue::Text`].
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub enum MediaValue {
    /// Textual representation (HTML, markdown, LaTeX, SVG, plain text).
    Text(String),
    /// Binary payload (PNG, JPEG, PDF, sniffed bytes).
    Binary(Vec<u8>),
    /// Any JSON-serializable structure.
    Json(serde_json::Value),
}

impl MediaValue {
    /// The text, if this is a textual representation.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MediaValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The bytes, if this is a binary representation.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            MediaValue::Binary(b) => Some(b),
            _ => None,
        }
    }

    /// The JSON structure, if this is a structured representation.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            MediaValue::Json(v) => Some(v),
            _ => None,
        }
    }
}

/// The generic string form used for plain-text fallbacks.
///
/// Binary payloads print their size rather than their contents.
impl fmt::Display for MediaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaValue::Text(s) => f.write_str(s),
            MediaValue::Binary(b) => write!(f, "[{} bytes]", b.len()),
            MediaValue::Json(v) => write!(f, "{v}"),
        }
    }
}

impl Serialize for MediaValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            MediaValue::Text(s) => serializer.serialize_str(s),
            MediaValue::Binary(b) => serializer.serialize_str(&STANDARD.encode(b)),
            MediaValue::Json(v) => v.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for MediaValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(s) => MediaValue::Text(s),
            other => MediaValue::Json(other),
        })
    }
}

impl From<String> for MediaValue {
    fn from(s: String) -> Self {
        MediaValue::Text(s)
    }
}

impl From<&str> for MediaValue {
    fn from(s: &str) -> Self {
        MediaValue::Text(s.to_owned())
    }
}

impl From<Vec<u8>> for MediaValue {
    fn from(b: Vec<u8>) -> Self {
        MediaValue::Binary(b)
    }
}

impl From<&[u8]> for MediaValue {
    fn from(b: &[u8]) -> Self {
        MediaValue::Binary(b.to_vec())
    }
}

impl From<serde_json::Value> for MediaValue {
    fn from(v: serde_json::Value) -> Self {
        MediaValue::Json(v)
    }
}
