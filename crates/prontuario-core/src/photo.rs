//! Photo embedding: raw image bytes become a base64 data URI stored inside
//! the record itself.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Encode image bytes as a `data:<mime>;base64,...` URI.
///
/// The record is only ever persisted after this completes, so the store never
/// sees a half-attached photo.
pub fn to_data_uri(bytes: &[u8]) -> String {
    format!("data:{};base64,{}", sniff_mime(bytes), STANDARD.encode(bytes))
}

/// Best-effort content type from magic bytes.
fn sniff_mime(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(&[0x89, b'P', b'N', b'G']) {
        "image/png"
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if bytes.starts_with(b"GIF8") {
        "image/gif"
    } else if bytes.len() >= 12 && &bytes[0..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        "image/webp"
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_png_data_uri() {
        let uri = to_data_uri(&PNG_HEADER);
        assert!(uri.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_jpeg_detection() {
        assert_eq!(sniff_mime(&[0xFF, 0xD8, 0xFF, 0xE0]), "image/jpeg");
    }

    #[test]
    fn test_unknown_bytes_fall_back() {
        assert_eq!(sniff_mime(b"plain text"), "application/octet-stream");
    }

    #[test]
    fn test_base64_payload_decodes_back() {
        let uri = to_data_uri(&PNG_HEADER);
        let payload = uri.split(',').nth(1).unwrap();
        assert_eq!(STANDARD.decode(payload).unwrap(), PNG_HEADER);
    }
}
