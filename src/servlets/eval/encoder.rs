//! Result encoder: raw execution output to content items.
//!
//! Code handed to the eval servlet may print text, emit a binary image, do
//! both, or produce nothing at all. Two independent sinks capture the
//! channels so interleaved writes cannot corrupt either, and encoding
//! handles every combination deterministically without losing output.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

use crate::protocol::{CallToolResult, ContentItem};
use crate::servlets::error::ServletError;

// ============================================================================
// Output sinks
// ============================================================================

/// Per-invocation output capture: a text channel and a binary channel.
///
/// String writes always land in the text sink and byte writes in the binary
/// sink, regardless of call order. Sinks are owned by one invocation and
/// discarded with it.
#[derive(Debug, Default)]
pub struct OutputSinks {
    text: String,
    binary: Vec<u8>,
}

impl OutputSinks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the text channel.
    pub fn write_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    /// Append to the binary channel.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.binary.extend_from_slice(bytes);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn binary(&self) -> &[u8] {
        &self.binary
    }
}

// ============================================================================
// Signature sniffing
// ============================================================================

/// Known binary signatures, checked in order; first prefix match wins.
const SIGNATURES: &[(&[u8], &str)] = &[
    (&[0xFF, 0xD8, 0xFF], "image/jpeg"),
    (&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A], "image/png"),
    (b"GIF87a", "image/gif"),
    (b"GIF89a", "image/gif"),
    (b"BM", "image/bmp"),
    (&[0x00, 0x00, 0x01, 0x00], "image/x-icon"),
    (b"RIFF", "image/webp"),
];

/// Sniff a MIME type from the payload's leading bytes.
pub fn detect_mime(data: &[u8]) -> Option<&'static str> {
    SIGNATURES
        .iter()
        .find(|(magic, _)| data.starts_with(magic))
        .map(|(_, mime)| *mime)
}

/// Hex excerpt of the payload head for the unrecognized-format message.
fn payload_preview(data: &[u8]) -> String {
    const PREVIEW_LEN: usize = 8;

    let head: Vec<String> = data
        .iter()
        .take(PREVIEW_LEN)
        .map(|b| format!("{b:02x}"))
        .collect();
    let mut preview = head.join(" ");
    if data.len() > PREVIEW_LEN {
        preview.push_str(&format!(" ... ({} bytes)", data.len()));
    }
    preview
}

// ============================================================================
// Encoding
// ============================================================================

/// Encode captured sinks into an ordered content sequence.
///
/// Text precedes binary so transcript renderers show narrative first. A run
/// that produced no output on either channel yields a single empty text item
/// rather than an empty content sequence. Binary output with no recognized
/// signature is reported as an error condition, never dropped.
pub fn encode_output(sinks: OutputSinks) -> CallToolResult {
    let OutputSinks { text, binary } = sinks;

    let mut content = Vec::new();
    let mut is_error = false;

    if !text.is_empty() || binary.is_empty() {
        content.push(ContentItem::text(text));
    }

    if !binary.is_empty() {
        match detect_mime(&binary) {
            Some(mime) => content.push(ContentItem::image(BASE64.encode(&binary), mime)),
            None => {
                let err = ServletError::UnknownImageFormat(payload_preview(&binary));
                content.push(ContentItem::text(err.to_string()));
                is_error = true;
            }
        }
    }

    CallToolResult { content, is_error }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_text_only() {
        let mut sinks = OutputSinks::new();
        sinks.write_str("hello\n");

        let result = encode_output(sinks);
        assert!(!result.is_error);
        assert_eq!(result.content.len(), 1);
        assert_eq!(result.content[0].as_text().unwrap(), "hello\n");
    }

    #[test]
    fn test_binary_only_png() {
        let mut sinks = OutputSinks::new();
        sinks.write_bytes(PNG_MAGIC);

        let result = encode_output(sinks);
        assert!(!result.is_error);
        assert_eq!(result.content.len(), 1);
        match &result.content[0] {
            ContentItem::Image { data, mime_type, .. } => {
                assert_eq!(mime_type, "image/png");
                assert_eq!(data, &BASE64.encode(PNG_MAGIC));
            }
            other => panic!("expected image item, got {other:?}"),
        }
    }

    #[test]
    fn test_both_channels_text_first() {
        let mut sinks = OutputSinks::new();
        sinks.write_bytes(PNG_MAGIC);
        sinks.write_str("ok\n");

        let result = encode_output(sinks);
        assert!(!result.is_error);
        assert_eq!(result.content.len(), 2);
        assert_eq!(result.content[0].as_text().unwrap(), "ok\n");
        match &result.content[1] {
            ContentItem::Image { mime_type, .. } => assert_eq!(mime_type, "image/png"),
            other => panic!("expected image item, got {other:?}"),
        }
    }

    #[test]
    fn test_no_output_yields_empty_text_item() {
        let result = encode_output(OutputSinks::new());
        assert!(!result.is_error);
        assert_eq!(result.content.len(), 1);
        assert_eq!(result.content[0].as_text().unwrap(), "");
    }

    #[test]
    fn test_unrecognized_binary_is_error() {
        let mut sinks = OutputSinks::new();
        sinks.write_bytes(&[0x01, 0x02, 0x03]);

        let result = encode_output(sinks);
        assert!(result.is_error);
        assert_eq!(result.content.len(), 1);
        let text = result.content[0].as_text().unwrap();
        assert!(text.contains("Unknown image format"));
        assert!(text.contains("01 02 03"));
    }

    #[test]
    fn test_interleaved_writes_do_not_mix_channels() {
        let mut sinks = OutputSinks::new();
        sinks.write_str("a");
        sinks.write_bytes(&[0xFF, 0xD8, 0xFF]);
        sinks.write_str("b");
        sinks.write_bytes(&[0x00]);

        assert_eq!(sinks.text(), "ab");
        assert_eq!(sinks.binary(), &[0xFF, 0xD8, 0xFF, 0x00]);
    }

    #[test]
    fn test_signature_table() {
        assert_eq!(detect_mime(&[0xFF, 0xD8, 0xFF, 0xE0]), Some("image/jpeg"));
        assert_eq!(detect_mime(PNG_MAGIC), Some("image/png"));
        assert_eq!(detect_mime(b"GIF87a..."), Some("image/gif"));
        assert_eq!(detect_mime(b"GIF89a..."), Some("image/gif"));
        assert_eq!(detect_mime(b"BM\x00\x00"), Some("image/bmp"));
        assert_eq!(detect_mime(&[0x00, 0x00, 0x01, 0x00]), Some("image/x-icon"));
        assert_eq!(detect_mime(b"RIFF....WEBP"), Some("image/webp"));
        assert_eq!(detect_mime(&[0x01, 0x02, 0x03]), None);
        assert_eq!(detect_mime(&[]), None);
    }

    #[test]
    fn test_payload_preview_truncates() {
        let preview = payload_preview(&[0x01; 20]);
        assert!(preview.starts_with("01 01 01 01 01 01 01 01"));
        assert!(preview.ends_with("(20 bytes)"));

        assert_eq!(payload_preview(&[0x01, 0x02, 0x03]), "01 02 03");
    }
}
