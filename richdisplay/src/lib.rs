#![deny(missing_docs)]
//! # richdisplay: umbrella crate
//!
//! One import surface for rich display data. The protocol types always come
//! along; the rendering engine sits behind the `render` feature (on by
//! default). The `prelude` covers the usual path from a value to a
//! delivered bundle.

pub use mimebundle;
#[cfg(feature = "render")]
pub use mimebundle_render;

/// Happy-path imports for rendering and publishing display data.
pub mod prelude {
    pub use mimebundle::media_type;
    pub use mimebundle::{
        Bundle, MediaValue, MetadataMap, MimeMap, NoTransport, RenderError, Renderable, Sink,
        SinkError, Source,
    };

    pub use mimebundle::{
        Html, Jpeg, JavaScript, Json, Latex, Markdown, Pdf, Png, Render, SimpleRender, Svg,
        WriteTo,
    };

    #[cfg(feature = "render")]
    pub use mimebundle_render::{
        Dispatcher, Publisher, RenderConfig, builders, fallback, or_error_bundle, render,
        to_error_bundle,
    };
}
