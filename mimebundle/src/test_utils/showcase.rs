//! Showcase: a value satisfying several capabilities at once.

use crate::bundle::{Bundle, MimeMap};
use crate::capability::{Html, Markdown, Render, Renderable, SimpleRender};
use crate::error::RenderError;
use crate::media_type;

/// Implements [`Render`], [`SimpleRender`], [`Html`] and [`Markdown`], each
/// producing distinguishable output.
///
/// `Render` covers `text/html` and `text/plain`; `SimpleRender` covers
/// `text/html` and `text/latex`; `Html` and `Markdown` cover their own key.
/// Every capability can be switched off to exercise precedence.
#[derive(Debug, Clone)]
pub struct Showcase {
    /// Answer `as_render`.
    pub render: bool,
    /// Answer `as_simple_render`.
    pub simple: bool,
    /// Answer `as_html`.
    pub html: bool,
    /// Answer `as_markdown`.
    pub markdown: bool,
}

impl Showcase {
    /// All capabilities enabled.
    pub fn new() -> Self {
        Self {
            render: true,
            simple: true,
            html: true,
            markdown: true,
        }
    }
}

impl Default for Showcase {
    fn default() -> Self {
        Self::new()
    }
}

impl Render for Showcase {
    fn render(&self) -> Result<Bundle, RenderError> {
        let mut bundle = Bundle::with_plain_text(media_type::HTML, "from render", "<p>render</p>");
        bundle
            .metadata
            .insert(media_type::HTML.into(), serde_json::json!({"isolated": true}));
        Ok(bundle)
    }
}

impl SimpleRender for Showcase {
    fn simple_render(&self) -> Result<MimeMap, RenderError> {
        let mut map = MimeMap::new();
        map.insert(media_type::HTML.into(), "<p>simple</p>".into());
        map.insert(media_type::LATEX.into(), "$simple$".into());
        Ok(map)
    }
}

impl Html for Showcase {
    fn html(&self) -> String {
        "<p>html</p>".into()
    }
}

impl Markdown for Showcase {
    fn markdown(&self) -> String {
        "**markdown**".into()
    }
}

impl Renderable for Showcase {
    fn plain_text(&self) -> String {
        "Showcase".into()
    }

    fn as_render(&self) -> Option<&dyn Render> {
        self.render.then_some(self as &dyn Render)
    }

    fn as_simple_render(&self) -> Option<&dyn SimpleRender> {
        self.simple.then_some(self as &dyn SimpleRender)
    }

    fn as_html(&self) -> Option<&dyn Html> {
        self.html.then_some(self as &dyn Html)
    }

    fn as_markdown(&self) -> Option<&dyn Markdown> {
        self.markdown.then_some(self as &dyn Markdown)
    }
}
