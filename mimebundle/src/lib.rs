//! # mimebundle: display data for rich clients
//!
//! This crate defines the value a rich client (a notebook frontend) receives
//! when asked to show something: a [`Bundle`] holding one representation per
//! media type, plus the capability traits a Rust value implements to take
//! part in producing one.
//!
//! ## The Pieces
//!
//! | Piece | Types | What it does |
//! |-------|-------|-------------|
//! | Bundle | [`Bundle`], [`MediaValue`] | Media type → representation, plus metadata |
//! | Media types | [`media_type`] | Identifiers the frontend understands |
//! | Capabilities | [`Renderable`], [`Render`], [`Html`], ... | Optional rendering behaviors of a value |
//! | Sources | [`Source`], [`WriteTo`] | Raw text, bytes and streams for content sniffing |
//! | Sink | [`Sink`], [`NoTransport`] | Delivery of a finished bundle to the client |
//!
//! ## Capabilities are opt-in
//!
//! Rust cannot ask at runtime whether an arbitrary value implements a trait.
//! A value instead implements [`Renderable`] and answers `Some(self)` from the
//! `as_*` accessor of every capability it supports. All accessors default to
//! `None`, so a type only spells out what it actually renders.
//!
//! Rendering itself (dispatching over capabilities, sniffing, encoding
//! images) lives in `mimebundle-render`. This crate stays free of any
//! engine logic so that libraries can implement the traits cheaply.

#![deny(missing_docs)]

pub mod bundle;
pub mod capability;
pub mod error;
pub mod media_type;
pub mod sink;
pub mod value;

#[cfg(feature = "test-utils")]
pub mod test_utils;

// Re-exports for convenience
pub use bundle::{Bundle, MetadataMap, MimeMap};
pub use capability::{
    Html, JavaScript, Jpeg, Json, Latex, Markdown, Pdf, Png, Render, Renderable, SimpleRender,
    Source, Svg, WriteTo,
};
pub use error::{RenderError, SinkError};
pub use sink::{NoTransport, Sink};
pub use value::MediaValue;
