//! Best-effort encoding sniffing, used for diagnostics only

use crate::error::Result;
use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use std::path::Path;

pub fn detect_encoding(path: &Path) -> Result<&'static Encoding> {
    let bytes = std::fs::read(path)?;
    Ok(detect_bytes(&bytes))
}

/// Byte-order mark first, then UTF-8 validity, then a chardetng guess
pub fn detect_bytes(bytes: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    if std::str::from_utf8(bytes).is_ok() {
        return UTF_8;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}
