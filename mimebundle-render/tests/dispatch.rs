use image::{DynamicImage, GrayImage, RgbImage};
use mimebundle::media_type::{HTML, JSON, LATEX, MARKDOWN, PNG, TEXT};
use mimebundle::test_utils::{FailingReader, Showcase};
use mimebundle::{
    Bundle, Html, Json, MediaValue, MimeMap, Png, Render, RenderError, Renderable, SimpleRender,
};
use mimebundle_render::{Dispatcher, RenderConfig, funnel, render};
use serde_json::json;
use std::io;

fn text_of<'a>(bundle: &'a Bundle, key: &str) -> Option<&'a str> {
    bundle.get(key).and_then(MediaValue::as_text)
}

// --- Priority ---

#[test]
fn render_capability_wins_shared_keys() {
    let bundle = render(&Showcase::new());
    assert_eq!(text_of(&bundle, HTML), Some("<p>render</p>"));
    assert_eq!(bundle.text(), Some("from render"));
    assert_eq!(bundle.metadata[HTML], json!({"isolated": true}));
    // keys nobody higher claimed still arrive
    assert_eq!(text_of(&bundle, LATEX), Some("$simple$"));
    assert_eq!(text_of(&bundle, MARKDOWN), Some("**markdown**"));
}

#[test]
fn simple_render_beats_single_format() {
    let value = Showcase {
        render: false,
        ..Showcase::new()
    };
    let bundle = render(&value);
    assert_eq!(text_of(&bundle, HTML), Some("<p>simple</p>"));
    assert_eq!(bundle.text(), Some("Showcase"));
    assert!(bundle.metadata.is_empty());
}

#[test]
fn single_formats_combine() {
    let value = Showcase {
        render: false,
        simple: false,
        ..Showcase::new()
    };
    let bundle = render(&value);
    assert_eq!(text_of(&bundle, HTML), Some("<p>html</p>"));
    assert_eq!(text_of(&bundle, MARKDOWN), Some("**markdown**"));
    assert_eq!(bundle.text(), Some("Showcase"));
    assert_eq!(bundle.representations.len(), 3);
}

#[test]
fn dispatch_is_idempotent() {
    let value = Showcase::new();
    let dispatcher = Dispatcher::new();
    assert_eq!(dispatcher.render(&value), dispatcher.render(&value));
}

// --- Failures ---

struct Broken {
    fail_render: bool,
}

impl Render for Broken {
    fn render(&self) -> Result<Bundle, RenderError> {
        if self.fail_render {
            Err(RenderError::Encode("render exploded".into()))
        } else {
            Ok(Bundle::new(HTML, "<p>partial</p>"))
        }
    }
}

impl Json for Broken {
    fn json(&self) -> Result<serde_json::Value, RenderError> {
        Ok(serde_json::from_str::<serde_json::Value>("{not json")?)
    }
}

impl Renderable for Broken {
    fn plain_text(&self) -> String {
        "Broken".into()
    }

    fn as_render(&self) -> Option<&dyn Render> {
        Some(self)
    }

    fn as_json(&self) -> Option<&dyn Json> {
        Some(self)
    }
}

#[test]
fn failure_replaces_partial_results() {
    let bundle = render(&Broken { fail_render: false });
    assert!(bundle.is_error());
    assert!(bundle.get(HTML).is_none());
    assert_eq!(bundle.representations.len(), 4);
    assert!(text_of(&bundle, "evalue").unwrap().starts_with("encode failed"));
}

#[test]
fn first_failure_is_reported() {
    let bundle = render(&Broken { fail_render: true });
    assert_eq!(
        text_of(&bundle, "evalue"),
        Some("encode failed: render exploded")
    );
}

#[test]
fn error_bundles_pass_through_untouched() {
    let error = funnel::to_error_bundle(&io::Error::other("boom"));
    let bundle = render(&error);
    assert_eq!(bundle, error);
    assert_eq!(bundle.representations.len(), 4);
    assert!(bundle.get(TEXT).is_none());
}

struct Refusing;

impl Render for Refusing {
    fn render(&self) -> Result<Bundle, RenderError> {
        Ok(Bundle::from_error("refused to render"))
    }
}

impl Html for Refusing {
    fn html(&self) -> String {
        "<p>never shown</p>".into()
    }
}

impl Renderable for Refusing {
    fn plain_text(&self) -> String {
        "Refusing".into()
    }

    fn as_render(&self) -> Option<&dyn Render> {
        Some(self)
    }

    fn as_html(&self) -> Option<&dyn Html> {
        Some(self)
    }
}

#[test]
fn error_bundle_from_a_capability_ends_the_walk() {
    let bundle = render(&Refusing);
    assert!(bundle.is_error());
    assert_eq!(bundle.representations.len(), 4);
    assert!(bundle.get(HTML).is_none());
    assert_eq!(text_of(&bundle, "evalue"), Some("refused to render"));
}

#[test]
fn stream_failure_in_fallback_is_funneled() {
    let bundle = render(&FailingReader::new("disk gone"));
    assert!(bundle.is_error());
}

// --- Images ---

#[test]
fn images_are_encoded_with_dimensions() {
    let image = DynamicImage::ImageRgb8(RgbImage::new(5, 7));
    let bundle = render(&image);

    let bytes = bundle.get(PNG).and_then(MediaValue::as_bytes).unwrap();
    assert!(bytes.starts_with(b"\x89PNG"));
    assert_eq!(bundle.metadata[PNG], json!({"width": 5, "height": 7}));
    assert_eq!(bundle.text(), Some("5x7 image"));
}

struct Thumbnail {
    image: DynamicImage,
}

impl Png for Thumbnail {
    fn png(&self) -> Vec<u8> {
        b"precomputed".to_vec()
    }
}

impl Renderable for Thumbnail {
    fn plain_text(&self) -> String {
        "Thumbnail".into()
    }

    fn as_png(&self) -> Option<&dyn Png> {
        Some(self)
    }

    fn as_image(&self) -> Option<&DynamicImage> {
        Some(&self.image)
    }
}

#[test]
fn explicit_png_beats_generic_image() {
    let value = Thumbnail {
        image: DynamicImage::ImageLuma8(GrayImage::new(3, 3)),
    };
    let bundle = render(&value);
    assert_eq!(bundle.get(PNG), Some(&MediaValue::Binary(b"precomputed".to_vec())));
    // the image's dimensions describe bytes that were not kept
    assert!(!bundle.metadata.contains_key(PNG));
}

// --- Fallback ---

#[test]
fn plain_values_fall_back_to_text() {
    assert_eq!(render(&"hello").text(), Some("hello"));
    assert_eq!(render(&String::from("owned")).text(), Some("owned"));
    assert_eq!(render(&-3_i32).text(), Some("-3"));
    assert_eq!(render(&json!({"a": 1})).text(), Some(r#"{"a":1}"#));
}

#[test]
fn bytes_fall_back_to_sniffing() {
    let bytes = b"%PDF-1.7\n%\xe2\xe3\xcf\xd3\n".to_vec();
    let bundle = render(&bytes);
    assert!(bundle.get("application/pdf").is_some());
    assert_eq!(bundle.text(), Some("[15 bytes]"));
}

// --- Plain-text fallback ---

struct OnlyHtml;

impl Html for OnlyHtml {
    fn html(&self) -> String {
        "<hr>".into()
    }
}

impl Renderable for OnlyHtml {
    fn plain_text(&self) -> String {
        "OnlyHtml".into()
    }

    fn as_html(&self) -> Option<&dyn Html> {
        Some(self)
    }
}

#[test]
fn plain_text_fallback_is_configurable() {
    let bundle = render(&OnlyHtml);
    assert_eq!(bundle.text(), Some("OnlyHtml"));

    let dispatcher = Dispatcher::with_config(RenderConfig::default().with_plain_text_fallback(false));
    let bundle = dispatcher.render(&OnlyHtml);
    assert!(bundle.get(TEXT).is_none());
    assert_eq!(bundle.representations.len(), 1);
}

struct Empty;

impl SimpleRender for Empty {
    fn simple_render(&self) -> Result<MimeMap, RenderError> {
        Ok(MimeMap::new())
    }
}

impl Renderable for Empty {
    fn plain_text(&self) -> String {
        "Empty".into()
    }

    fn as_simple_render(&self) -> Option<&dyn SimpleRender> {
        Some(self)
    }
}

struct Nameless;

impl SimpleRender for Nameless {
    fn simple_render(&self) -> Result<MimeMap, RenderError> {
        let mut map = MimeMap::new();
        map.insert(String::new(), "orphan".into());
        map.insert(MARKDOWN.into(), "*named*".into());
        Ok(map)
    }
}

impl Renderable for Nameless {
    fn plain_text(&self) -> String {
        "Nameless".into()
    }

    fn as_simple_render(&self) -> Option<&dyn SimpleRender> {
        Some(self)
    }
}

#[test]
fn empty_media_types_are_dropped() {
    let bundle = render(&Nameless);
    assert!(bundle.get("").is_none());
    assert_eq!(text_of(&bundle, MARKDOWN), Some("*named*"));
    assert_eq!(bundle.text(), Some("Nameless"));
}

#[test]
fn result_is_never_empty() {
    let dispatcher = Dispatcher::with_config(RenderConfig::default().with_plain_text_fallback(false));
    let bundle = dispatcher.render(&Empty);
    assert_eq!(bundle.text(), Some("Empty"));
}

// --- Bundles and result lists ---

#[test]
fn bundles_render_as_themselves() {
    let mut bundle = Bundle::new(JSON, json!([1, 2, 3]));
    bundle.transient.insert("display_id".into(), json!("out-1"));
    assert_eq!(render(&bundle), bundle);
}

#[test]
fn result_lists() {
    let dispatcher = Dispatcher::new();

    let single = dispatcher.render_results(&[&OnlyHtml]);
    assert!(single.get(HTML).is_some());

    let many = dispatcher.render_results(&[&1_i32, &"two", &3.5_f64]);
    assert_eq!(many.representations.len(), 1);
    assert_eq!(many.text(), Some("1 two 3.5"));
}

// --- Concurrency ---

#[test]
fn concurrent_dispatch_is_independent() {
    let dispatcher = Dispatcher::new();
    let expected = dispatcher.render(&Showcase::new());

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| scope.spawn(|| dispatcher.render(&Showcase::new())))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
