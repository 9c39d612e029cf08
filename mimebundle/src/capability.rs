//! Rendering capabilities a value may opt into.
//!
//! Each capability is its own trait so that a type implements exactly the
//! formats it supports. [`Renderable`] ties them together: its `as_*`
//! accessors are how the engine discovers, per value, which capabilities
//! are present.

use crate::bundle::{Bundle, MimeMap};
use crate::error::RenderError;
use image::DynamicImage;
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, Read, Write};

/// Full control over the produced bundle, metadata and transient hints
/// included. Takes precedence over every other capability.
pub trait Render {
    /// Produce the complete bundle.
    fn render(&self) -> Result<Bundle, RenderError>;
}

/// Representations only, no metadata.
pub trait SimpleRender {
    /// Produce media type → representation entries.
    fn simple_render(&self) -> Result<MimeMap, RenderError>;
}

/// Produces `text/html`.
pub trait Html {
    /// HTML fragment.
    fn html(&self) -> String;
}

/// Produces `application/javascript`.
pub trait JavaScript {
    /// Script source.
    fn javascript(&self) -> String;
}

/// Produces `image/jpeg`.
pub trait Jpeg {
    /// Encoded JPEG bytes.
    fn jpeg(&self) -> Vec<u8>;
}

/// Produces `application/json`.
pub trait Json {
    /// Structured data. Fails when the value cannot be encoded.
    fn json(&self) -> Result<serde_json::Value, RenderError>;
}

/// Produces `text/latex`.
pub trait Latex {
    /// LaTeX markup.
    fn latex(&self) -> String;
}

/// Produces `text/markdown`.
pub trait Markdown {
    /// Markdown text.
    fn markdown(&self) -> String;
}

/// Produces `image/png`.
pub trait Png {
    /// Encoded PNG bytes.
    fn png(&self) -> Vec<u8>;
}

/// Produces `application/pdf`.
pub trait Pdf {
    /// PDF document bytes.
    fn pdf(&self) -> Vec<u8>;
}

/// Produces `image/svg+xml`.
pub trait Svg {
    /// SVG markup.
    fn svg(&self) -> String;
}

/// Serializes itself into a writer, like a buffer that knows its contents.
pub trait WriteTo {
    /// Write everything to `out`, returning the number of bytes written.
    fn write_to(&self, out: &mut dyn Write) -> io::Result<u64>;
}

/// Raw input shapes the fallback renderer accepts.
pub enum Source<'a> {
    /// A text string.
    Text(&'a str),
    /// An opaque byte sequence.
    Bytes(&'a [u8]),
    /// A stream, drained completely before rendering.
    Reader(Box<dyn Read + 'a>),
    /// An object that writes its bytes into a sink.
    Writer(&'a dyn WriteTo),
}

/// A value that can be shown to a rich client.
///
/// `plain_text` is the generic string form every bundle falls back to.
/// Every other method advertises an optional capability and defaults to
/// `None`:
///
/// ```
/// use mimebundle::{Html, Renderable};
///
/// struct Badge(&'static str);
///
/// impl Html for Badge {
///     fn html(&self) -> String {
///         format!("<span class=\"badge\">{}</span>", self.0)
///     }
/// }
///
/// impl Renderable for Badge {
///     fn plain_text(&self) -> String {
///         self.0.to_owned()
///     }
///
///     fn as_html(&self) -> Option<&dyn Html> {
///         Some(self)
///     }
/// }
///
/// assert!(Badge("ok").as_html().is_some());
/// assert!(Badge("ok").as_markdown().is_none());
/// ```
pub trait Renderable {
    /// Generic string form of the value.
    fn plain_text(&self) -> String;

    /// Name used in diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Full-bundle capability.
    fn as_render(&self) -> Option<&dyn Render> {
        None
    }

    /// Representation-map capability.
    fn as_simple_render(&self) -> Option<&dyn SimpleRender> {
        None
    }

    /// `text/html` capability.
    fn as_html(&self) -> Option<&dyn Html> {
        None
    }

    /// `application/javascript` capability.
    fn as_javascript(&self) -> Option<&dyn JavaScript> {
        None
    }

    /// `image/jpeg` capability.
    fn as_jpeg(&self) -> Option<&dyn Jpeg> {
        None
    }

    /// `application/json` capability.
    fn as_json(&self) -> Option<&dyn Json> {
        None
    }

    /// `text/latex` capability.
    fn as_latex(&self) -> Option<&dyn Latex> {
        None
    }

    /// `text/markdown` capability.
    fn as_markdown(&self) -> Option<&dyn Markdown> {
        None
    }

    /// `image/png` capability.
    fn as_png(&self) -> Option<&dyn Png> {
        None
    }

    /// `application/pdf` capability.
    fn as_pdf(&self) -> Option<&dyn Pdf> {
        None
    }

    /// `image/svg+xml` capability.
    fn as_svg(&self) -> Option<&dyn Svg> {
        None
    }

    /// Generic in-memory image, in any pixel format.
    fn as_image(&self) -> Option<&DynamicImage> {
        None
    }

    /// Raw input for the fallback renderer.
    fn as_source(&self) -> Option<Source<'_>> {
        None
    }
}

macro_rules! display_renderable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Renderable for $ty {
                fn plain_text(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_renderable!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    serde_json::Value,
);

impl Renderable for str {
    fn plain_text(&self) -> String {
        self.to_owned()
    }

    fn as_source(&self) -> Option<Source<'_>> {
        Some(Source::Text(self))
    }
}

impl Renderable for String {
    fn plain_text(&self) -> String {
        self.clone()
    }

    fn as_source(&self) -> Option<Source<'_>> {
        Some(Source::Text(self))
    }
}

impl Renderable for Cow<'_, str> {
    fn plain_text(&self) -> String {
        self.to_string()
    }

    fn as_source(&self) -> Option<Source<'_>> {
        Some(Source::Text(self))
    }
}

impl Renderable for [u8] {
    fn plain_text(&self) -> String {
        format!("[{} bytes]", self.len())
    }

    fn as_source(&self) -> Option<Source<'_>> {
        Some(Source::Bytes(self))
    }
}

impl Renderable for Vec<u8> {
    fn plain_text(&self) -> String {
        self.as_slice().plain_text()
    }

    fn as_source(&self) -> Option<Source<'_>> {
        Some(Source::Bytes(self))
    }
}

impl Renderable for File {
    fn plain_text(&self) -> String {
        format!("{self:?}")
    }

    fn as_source(&self) -> Option<Source<'_>> {
        Some(Source::Reader(Box::new(self)))
    }
}

impl Renderable for DynamicImage {
    fn plain_text(&self) -> String {
        format!("{}x{} image", self.width(), self.height())
    }

    fn as_image(&self) -> Option<&DynamicImage> {
        Some(self)
    }
}

/// A finished bundle renders as itself.
impl Render for Bundle {
    fn render(&self) -> Result<Bundle, RenderError> {
        Ok(self.clone())
    }
}

impl Renderable for Bundle {
    fn plain_text(&self) -> String {
        self.text().unwrap_or_default().to_owned()
    }

    fn as_render(&self) -> Option<&dyn Render> {
        Some(self)
    }
}

macro_rules! forward_renderable {
    () => {
        fn plain_text(&self) -> String {
            (**self).plain_text()
        }
        fn type_name(&self) -> &'static str {
            (**self).type_name()
        }
        fn as_render(&self) -> Option<&dyn Render> {
            (**self).as_render()
        }
        fn as_simple_render(&self) -> Option<&dyn SimpleRender> {
            (**self).as_simple_render()
        }
        fn as_html(&self) -> Option<&dyn Html> {
            (**self).as_html()
        }
        fn as_javascript(&self) -> Option<&dyn JavaScript> {
            (**self).as_javascript()
        }
        fn as_jpeg(&self) -> Option<&dyn Jpeg> {
            (**self).as_jpeg()
        }
        fn as_json(&self) -> Option<&dyn Json> {
            (**self).as_json()
        }
        fn as_latex(&self) -> Option<&dyn Latex> {
            (**self).as_latex()
        }
        fn as_markdown(&self) -> Option<&dyn Markdown> {
            (**self).as_markdown()
        }
        fn as_png(&self) -> Option<&dyn Png> {
            (**self).as_png()
        }
        fn as_pdf(&self) -> Option<&dyn Pdf> {
            (**self).as_pdf()
        }
        fn as_svg(&self) -> Option<&dyn Svg> {
            (**self).as_svg()
        }
        fn as_image(&self) -> Option<&DynamicImage> {
            (**self).as_image()
        }
        fn as_source(&self) -> Option<Source<'_>> {
            (**self).as_source()
        }
    };
}

impl<T: Renderable + ?Sized> Renderable for &T {
    forward_renderable!();
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    forward_renderable!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn Renderable) {}

    #[test]
    fn primitives_only_offer_plain_text() {
        let value: &dyn Renderable = &42_i64;
        assert_eq!(value.plain_text(), "42");
        assert!(value.as_source().is_none());
        assert!(value.as_html().is_none());
        assert_eq!(value.type_name(), "i64");
    }

    #[test]
    fn strings_and_bytes_are_sources() {
        assert!(matches!("hi".as_source(), Some(Source::Text("hi"))));
        let bytes = vec![1_u8, 2, 3];
        assert!(matches!(bytes.as_source(), Some(Source::Bytes(&[1, 2, 3]))));
        assert_eq!(bytes.plain_text(), "[3 bytes]");
    }

    #[test]
    fn references_forward_type_name() {
        let boxed: Box<dyn Renderable> = Box::new(String::from("x"));
        assert_eq!(boxed.type_name(), "alloc::string::String");
        assert_eq!((&&boxed).plain_text(), "x");
    }

    #[test]
    fn bundle_renders_as_itself() {
        let bundle = Bundle::new(crate::media_type::HTML, "<i>x</i>");
        let rendered = bundle.as_render().unwrap().render().unwrap();
        assert_eq!(rendered, bundle);
        assert_eq!(bundle.plain_text(), "<i>x</i>");
    }
}
