//! Image codec adapter: in-memory images to `image/png`.

use image::{ColorType, DynamicImage, ImageFormat};
use mimebundle::media_type::PNG;
use mimebundle::{Bundle, MediaValue, MetadataMap, MimeMap, RenderError};
use serde_json::json;
use std::borrow::Cow;
use std::io::Cursor;

/// Encode `image` as PNG.
///
/// The returned partial bundle holds only the `image/png` entry, with its
/// `{width, height}` under the same key in metadata. Pixel formats PNG
/// cannot store (floating point) are widened to 16-bit channels first.
pub fn encode_png(image: &DynamicImage) -> Result<Bundle, RenderError> {
    let encodable = png_compatible(image);
    let mut buffer = Cursor::new(Vec::new());
    encodable.write_to(&mut buffer, ImageFormat::Png)?;

    let mut representations = MimeMap::new();
    representations.insert(PNG.into(), MediaValue::Binary(buffer.into_inner()));
    let mut metadata = MetadataMap::new();
    metadata.insert(PNG.into(), dimensions(image));
    Ok(Bundle::from_raw(representations, metadata))
}

/// `{ "width": w, "height": h }` of an image, in pixels.
pub fn dimensions(image: &DynamicImage) -> serde_json::Value {
    json!({ "width": image.width(), "height": image.height() })
}

fn png_compatible(image: &DynamicImage) -> Cow<'_, DynamicImage> {
    match image.color() {
        ColorType::Rgb32F => Cow::Owned(DynamicImage::ImageRgb16(image.to_rgb16())),
        ColorType::Rgba32F => Cow::Owned(DynamicImage::ImageRgba16(image.to_rgba16())),
        _ => Cow::Borrowed(image),
    }
}
