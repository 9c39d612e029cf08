//! Content-type sniffing for unhinted byte payloads.

use mimebundle::media_type::{HTML, OCTET_STREAM, SVG, TEXT};

/// How far into a text payload the markup checks look.
const TEXT_PROBE_CHARS: usize = 512;

/// Best-guess media type of `bytes`.
///
/// Binary signatures (images, documents, archives) come from their magic
/// bytes. Readable UTF-8 is classified as SVG, HTML or plain text by its
/// leading markup. Anything else is `application/octet-stream`.
pub fn content_type(bytes: &[u8]) -> &'static str {
    if let Some(kind) = infer::get(bytes) {
        if kind.matcher_type() != infer::MatcherType::Text {
            return kind.mime_type();
        }
    }
    match std::str::from_utf8(bytes) {
        Ok(text) if is_readable(text) => classify_text(text),
        _ => OCTET_STREAM,
    }
}

fn is_readable(text: &str) -> bool {
    !text
        .chars()
        .any(|c| c.is_control() && !matches!(c, '\t' | '\n' | '\r' | '\x0c'))
}

fn classify_text(text: &str) -> &'static str {
    let head: String = text
        .trim_start()
        .chars()
        .take(TEXT_PROBE_CHARS)
        .collect::<String>()
        .to_ascii_lowercase();

    if head.starts_with("<svg") || (head.starts_with("<?xml") && head.contains("<svg")) {
        SVG
    } else if head.starts_with("<!doctype html") || head.starts_with("<html") {
        HTML
    } else {
        TEXT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mimebundle::media_type::{JPEG, PDF, PNG};

    #[test]
    fn binary_signatures() {
        assert_eq!(content_type(b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR"), PNG);
        assert_eq!(content_type(&[0xff, 0xd8, 0xff, 0xe0, 0, 0x10]), JPEG);
        assert_eq!(content_type(b"%PDF-1.7\n%\xe2\xe3\xcf\xd3\n"), PDF);
    }

    #[test]
    fn markup_is_classified() {
        assert_eq!(content_type(b"  <svg xmlns=\"http://www.w3.org/2000/svg\"/>"), SVG);
        assert_eq!(
            content_type(b"<?xml version=\"1.0\"?>\n<svg width=\"1\"></svg>"),
            SVG
        );
        assert_eq!(content_type(b"<!DOCTYPE html><html></html>"), HTML);
        assert_eq!(content_type(b"<HTML><body>hi</body></HTML>"), HTML);
    }

    #[test]
    fn readable_text_is_plain() {
        assert_eq!(content_type(b"hello\tworld\r\n"), TEXT);
        assert_eq!(content_type("grüße".as_bytes()), TEXT);
    }

    #[test]
    fn unreadable_bytes_are_opaque() {
        assert_eq!(content_type(&[0x00, 0x01, 0x02, 0x03]), OCTET_STREAM);
        assert_eq!(content_type(&[0xc3, 0x28]), OCTET_STREAM);
    }
}
