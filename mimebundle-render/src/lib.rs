//! Rendering engine for [`mimebundle`] display data.
//!
//! Three ways in:
//!
//! - [`Dispatcher::render`] takes any [`Renderable`](mimebundle::Renderable)
//!   and merges whatever capabilities it has into one bundle.
//! - The [`builders`] wrap one known format, such as [`builders::html`] or
//!   [`builders::math`].
//! - [`fallback::any`] and [`fallback::auto`] render raw text, bytes and
//!   streams, sniffing the media type of unhinted bytes.
//!
//! Failures never escape as panics. Every operation here returns a bundle,
//! an error bundle from the [`funnel`] when something went wrong, except
//! [`builders::file`] which hands its I/O error to the caller.
//!
//! ```
//! use mimebundle_render::{Dispatcher, builders};
//!
//! let bundle = Dispatcher::new().render(&"hello");
//! assert_eq!(bundle.text(), Some("hello"));
//!
//! let bundle = builders::math("x^2");
//! assert_eq!(bundle.text(), Some("x^2"));
//! ```

#![deny(missing_docs)]

pub mod builders;
pub mod codec;
pub mod config;
pub mod dispatch;
pub mod fallback;
pub mod funnel;
pub mod publish;
pub mod registry;
pub mod sniff;

pub use config::RenderConfig;
pub use dispatch::{Dispatcher, render};
pub use funnel::{or_error_bundle, to_error_bundle};
pub use publish::Publisher;
pub use registry::{CAPABILITIES, Capability, capabilities};
