//! Unpadded base64url encoding as used by JWT segments

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use crate::error::{self, InvalidEncoding};

/// Encodes bytes using the RFC 4648 base64url alphabet, without padding
#[must_use]
pub fn encode(data: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(data)
}

/// Decodes a base64url segment
///
/// Up to two trailing `=` padding characters are tolerated, since tokens in
/// the wild are sometimes produced by padded encoders.
///
/// # Errors
///
/// Returns an error if the input contains characters outside the base64url
/// alphabet, carries more than two trailing `=`, or has an unpadded length
/// congruent to 1 modulo 4 (never valid base64).
pub fn decode(encoded: &str) -> Result<Vec<u8>, InvalidEncoding> {
    let trimmed = encoded.trim_end_matches('=');
    if encoded.len() - trimmed.len() > 2 {
        return Err(error::invalid_encoding("more than two padding characters"));
    }

    URL_SAFE_NO_PAD.decode(trimmed).map_err(error::invalid_encoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_emits_no_padding() {
        assert_eq!(encode(b"hello world"), "aGVsbG8gd29ybGQ");
        assert_eq!(encode(b""), "");
    }

    #[test]
    fn encode_uses_url_safe_alphabet() {
        assert_eq!(encode(&[0xfb, 0xff, 0xfe]), "-__-");
    }

    #[test]
    fn decode_accepts_unpadded_input() {
        assert_eq!(decode("aGVsbG8gd29ybGQ").unwrap(), b"hello world");
    }

    #[test]
    fn decode_tolerates_trailing_padding() {
        assert_eq!(decode("aGk=").unwrap(), b"hi");
        assert_eq!(decode("aA==").unwrap(), b"h");
    }

    #[test]
    fn decode_rejects_excess_padding() {
        assert!(decode("aA===").is_err());
    }

    #[test]
    fn decode_rejects_non_alphabet_characters() {
        assert!(decode("a+b/").is_err());
        assert!(decode("a b").is_err());
    }

    #[test]
    fn decode_rejects_impossible_length() {
        // length % 4 == 1 would require a single padding character
        assert!(decode("aaaaa").is_err());
    }
}
