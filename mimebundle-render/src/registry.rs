//! The capability registry.
//!
//! A fixed, ordered list of probe-and-apply entries, one per capability.
//! The order is the merge priority: earlier entries win key conflicts.

use crate::codec;
use mimebundle::media_type::{
    HTML, JAVASCRIPT, JPEG, JSON, LATEX, MARKDOWN, PDF, PNG, SVG,
};
use mimebundle::{Bundle, MediaValue, MetadataMap, MimeMap, RenderError, Renderable};
use std::fmt;

/// Outcome of applying one capability: `None` if the value lacks it.
pub type Applied = Option<Result<Bundle, RenderError>>;

/// One registry entry.
#[derive(Clone, Copy)]
pub struct Capability {
    name: &'static str,
    media_type: Option<&'static str>,
    apply: fn(&dyn Renderable) -> Applied,
}

impl Capability {
    /// Capability name, for diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The single key this capability owns, if it is a single-format one.
    pub fn media_type(&self) -> Option<&'static str> {
        self.media_type
    }

    /// Probe `value` and, if it has this capability, produce its partial bundle.
    pub fn apply(&self, value: &dyn Renderable) -> Applied {
        (self.apply)(value)
    }
}

impl fmt::Debug for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Capability")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .finish()
    }
}

/// Every capability, highest priority first.
///
/// Full custom rendering, then the representation map, then the
/// single-format capabilities, then the generic image last.
pub static CAPABILITIES: [Capability; 12] = [
    Capability {
        name: "Render",
        media_type: None,
        apply: apply_render,
    },
    Capability {
        name: "SimpleRender",
        media_type: None,
        apply: apply_simple_render,
    },
    Capability {
        name: "Html",
        media_type: Some(HTML),
        apply: apply_html,
    },
    Capability {
        name: "JavaScript",
        media_type: Some(JAVASCRIPT),
        apply: apply_javascript,
    },
    Capability {
        name: "Jpeg",
        media_type: Some(JPEG),
        apply: apply_jpeg,
    },
    Capability {
        name: "Json",
        media_type: Some(JSON),
        apply: apply_json,
    },
    Capability {
        name: "Latex",
        media_type: Some(LATEX),
        apply: apply_latex,
    },
    Capability {
        name: "Markdown",
        media_type: Some(MARKDOWN),
        apply: apply_markdown,
    },
    Capability {
        name: "Png",
        media_type: Some(PNG),
        apply: apply_png,
    },
    Capability {
        name: "Pdf",
        media_type: Some(PDF),
        apply: apply_pdf,
    },
    Capability {
        name: "Svg",
        media_type: Some(SVG),
        apply: apply_svg,
    },
    Capability {
        name: "Image",
        media_type: None,
        apply: apply_image,
    },
];

/// Every capability, highest priority first.
pub fn capabilities() -> &'static [Capability] {
    &CAPABILITIES
}

/// Partial bundle with one entry and nothing else.
fn single(media_type: &str, value: impl Into<MediaValue>) -> Bundle {
    let mut representations = MimeMap::new();
    representations.insert(media_type.to_owned(), value.into());
    Bundle::from_raw(representations, MetadataMap::new())
}

fn apply_render(value: &dyn Renderable) -> Applied {
    value.as_render().map(|r| r.render())
}

fn apply_simple_render(value: &dyn Renderable) -> Applied {
    value.as_simple_render().map(|r| {
        r.simple_render()
            .map(|data| Bundle::from_raw(data, MetadataMap::new()))
    })
}

fn apply_html(value: &dyn Renderable) -> Applied {
    value.as_html().map(|r| Ok(single(HTML, r.html())))
}

fn apply_javascript(value: &dyn Renderable) -> Applied {
    value.as_javascript().map(|r| Ok(single(JAVASCRIPT, r.javascript())))
}

fn apply_jpeg(value: &dyn Renderable) -> Applied {
    value.as_jpeg().map(|r| Ok(single(JPEG, r.jpeg())))
}

fn apply_json(value: &dyn Renderable) -> Applied {
    value.as_json().map(|r| r.json().map(|v| single(JSON, v)))
}

fn apply_latex(value: &dyn Renderable) -> Applied {
    value.as_latex().map(|r| Ok(single(LATEX, r.latex())))
}

fn apply_markdown(value: &dyn Renderable) -> Applied {
    value.as_markdown().map(|r| Ok(single(MARKDOWN, r.markdown())))
}

fn apply_png(value: &dyn Renderable) -> Applied {
    value.as_png().map(|r| Ok(single(PNG, r.png())))
}

fn apply_pdf(value: &dyn Renderable) -> Applied {
    value.as_pdf().map(|r| Ok(single(PDF, r.pdf())))
}

fn apply_svg(value: &dyn Renderable) -> Applied {
    value.as_svg().map(|r| Ok(single(SVG, r.svg())))
}

fn apply_image(value: &dyn Renderable) -> Applied {
    value.as_image().map(codec::encode_png)
}
