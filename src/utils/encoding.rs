//! Encoding detection for CSV input.
//!
//! Decoding is strict: content that cannot be decoded as text (binary data,
//! broken encodings) is rejected so the caller can skip the file, rather than
//! being papered over with replacement characters.

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, UTF_8};

/// Decode raw file bytes into text.
///
/// Strategy:
/// 1. BOM markers first (UTF-8, UTF-16 LE/BE) — most reliable
/// 2. Strict UTF-8 (fast path for most files)
/// 3. chardetng guess for legacy encodings
///
/// Returns the decoded text and an encoding label, or `None` when the bytes
/// are not decodable text.
pub fn decode_text(bytes: &[u8]) -> Option<(String, &'static str)> {
    if bytes.is_empty() {
        return Some((String::new(), "utf-8"));
    }

    if let Some(rest) = bytes.strip_prefix(&[0xef, 0xbb, 0xbf]) {
        return decode_with(UTF_8, rest).map(|text| (text, "utf-8-sig"));
    }
    if bytes.starts_with(&[0xff, 0xfe]) {
        return decode_with(UTF_16LE, &bytes[2..]).map(|text| (text, "utf-16-le"));
    }
    if bytes.starts_with(&[0xfe, 0xff]) {
        return decode_with(UTF_16BE, &bytes[2..]).map(|text| (text, "utf-16-be"));
    }

    // Null bytes past the BOM checks mean binary, not text. Single-byte
    // legacy encodings would otherwise decode them without complaint.
    if bytes.contains(&0) {
        return None;
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return Some((text.to_string(), "utf-8"));
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);
    decode_with(encoding, bytes).map(|text| (text, encoding.name()))
}

fn decode_with(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|cow| cow.into_owned())
}
