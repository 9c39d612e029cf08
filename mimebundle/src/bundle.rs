//! The bundle delivered to a rich client.

use crate::media_type::TEXT;
use crate::value::MediaValue;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Media type → representation.
pub type MimeMap = BTreeMap<String, MediaValue>;

/// Media type (or hint name) → auxiliary structure.
pub type MetadataMap = BTreeMap<String, serde_json::Value>;

/// `ename` of every error bundle.
pub const ERROR_NAME: &str = "ERROR";

/// `status` of every error bundle.
pub const ERROR_STATUS: &str = "error";

/// Alternative representations of one value, one per media type.
///
/// The client picks the richest representation it can show and falls back
/// to `text/plain` otherwise. Maps are ordered only so that serialization is
/// deterministic; order carries no meaning.
///
/// Wire shape:
///
/// ```json
/// { "data": { "text/plain": "...", "image/png": "<base64>" },
///   "metadata": { "image/png": { "width": 4, "height": 3 } },
///   "transient": { } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    /// Media type → representation.
    #[serde(rename = "data")]
    pub representations: MimeMap,
    /// Per-media-type auxiliary data, such as image dimensions.
    #[serde(default)]
    pub metadata: MetadataMap,
    /// Delivery hints that must not be persisted. Omitted when empty.
    #[serde(default, skip_serializing_if = "MetadataMap::is_empty")]
    pub transient: MetadataMap,
}

impl Bundle {
    /// Bundle with a single primary representation.
    ///
    /// Unless `media_type` is `text/plain` itself, a `text/plain` entry
    /// holding the generic string form of `value` is added next to it. An
    /// empty `media_type` is not a key; only the `text/plain` entry remains.
    pub fn new(media_type: impl Into<String>, value: impl Into<MediaValue>) -> Self {
        let media_type = media_type.into();
        let value = value.into();
        let mut representations = MimeMap::new();
        if media_type != TEXT {
            representations.insert(TEXT.to_owned(), value.to_string().into());
        }
        if !media_type.is_empty() {
            representations.insert(media_type, value);
        }
        Self::from_raw(representations, MetadataMap::new())
    }

    /// Bundle with a primary representation and an explicit plain-text form.
    ///
    /// Use this when the generic string form of `value` would be unreadable.
    /// If `media_type` is `text/plain`, `value` wins over `plain_text`. An
    /// empty `media_type` leaves only the plain text.
    pub fn with_plain_text(
        media_type: impl Into<String>,
        plain_text: impl Into<String>,
        value: impl Into<MediaValue>,
    ) -> Self {
        let media_type = media_type.into();
        let mut representations = MimeMap::new();
        representations.insert(
            TEXT.to_owned(),
            MediaValue::Text(plain_text.into()),
        );
        if !media_type.is_empty() {
            representations.insert(media_type, value.into());
        }
        Self::from_raw(representations, MetadataMap::new())
    }

    /// Wrap fully formed maps verbatim. No plain-text entry is injected and
    /// keys are not checked.
    pub fn from_raw(representations: MimeMap, metadata: MetadataMap) -> Self {
        Self {
            representations,
            metadata,
            transient: MetadataMap::new(),
        }
    }

    /// The fixed-shape error bundle for a failure.
    ///
    /// `representations` holds exactly `ename`, `evalue`, `traceback` and
    /// `status`; metadata and transient hints are empty.
    pub fn from_error<E: fmt::Display + ?Sized>(err: &E) -> Self {
        let mut representations = MimeMap::new();
        representations.insert("ename".into(), ERROR_NAME.into());
        representations.insert("evalue".into(), err.to_string().into());
        representations.insert("traceback".into(), serde_json::Value::Null.into());
        representations.insert("status".into(), ERROR_STATUS.into());
        Self::from_raw(representations, MetadataMap::new())
    }

    /// Representation stored under `media_type`.
    pub fn get(&self, media_type: &str) -> Option<&MediaValue> {
        self.representations.get(media_type)
    }

    /// The `text/plain` representation, if present and textual.
    pub fn text(&self) -> Option<&str> {
        self.get(TEXT).and_then(MediaValue::as_text)
    }

    /// Whether this is an error bundle.
    pub fn is_error(&self) -> bool {
        self.get("status").and_then(MediaValue::as_text) == Some(ERROR_STATUS)
            && self.representations.contains_key("ename")
    }

    /// Whether no representation is present.
    pub fn is_empty(&self) -> bool {
        self.representations.is_empty()
    }

    /// Merge `other` into `self` without overwriting existing keys.
    ///
    /// Metadata follows its data: when a representation of `other` loses to
    /// one already present, its metadata entry is dropped with it. Empty
    /// media-type keys are skipped.
    pub fn merge_missing(&mut self, other: Bundle) {
        let mut lost = BTreeSet::new();
        for (key, value) in other.representations {
            if key.is_empty() {
                continue;
            }
            match self.representations.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(value);
                }
                Entry::Occupied(slot) => {
                    lost.insert(slot.key().clone());
                }
            }
        }
        for (key, value) in other.metadata {
            if !key.is_empty() && !lost.contains(&key) {
                self.metadata.entry(key).or_insert(value);
            }
        }
        merge_missing(&mut self.transient, other.transient);
    }
}

fn merge_missing<V>(into: &mut BTreeMap<String, V>, from: BTreeMap<String, V>) {
    for (key, value) in from {
        into.entry(key).or_insert(value);
    }
}
