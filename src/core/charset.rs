// src/core/charset.rs
// The results page is served as EUC-KR; UTF-8 decoding would mangle every
// Korean marker the parser looks for.

use encoding_rs::EUC_KR;

/// Strict EUC-KR decode. Any malformed sequence → `None` (no replacement chars).
pub fn decode_euc_kr(bytes: &[u8]) -> Option<String> {
    EUC_KR
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_hangul() {
        // "1197회" in EUC-KR
        let bytes = [b'1', b'1', b'9', b'7', 0xC8, 0xB8];
        assert_eq!(decode_euc_kr(&bytes).as_deref(), Some("1197회"));
    }

    #[test]
    fn rejects_malformed() {
        assert!(decode_euc_kr(&[0xFF, 0xFF]).is_none());
        assert!(decode_euc_kr(&[b'a', 0xB0]).is_none()); // truncated lead byte
    }

    #[test]
    fn ascii_passes_through() {
        assert_eq!(decode_euc_kr(b"<html></html>").as_deref(), Some("<html></html>"));
    }
}
