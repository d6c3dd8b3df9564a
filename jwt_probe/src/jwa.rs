//! Signature algorithms understood by the audit engine

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{self, UnknownAlgorithm};

/// A JWT signature algorithm
///
/// Only the symmetric HMAC family and the degenerate `none` algorithm are
/// supported. This list may be expanded in the future.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
#[non_exhaustive]
pub enum Algorithm {
    /// No signature at all (`alg: none`)
    #[serde(rename = "none")]
    None,
    /// HMAC using SHA-256
    HS256,
    /// HMAC using SHA-384
    HS384,
    /// HMAC using SHA-512
    HS512,
}

impl Algorithm {
    /// Resolves an `alg` header value, case-sensitively
    ///
    /// # Errors
    ///
    /// Returns an error for any name that is not a supported algorithm.
    /// Unrecognized names are never treated as `none`.
    pub fn from_name(name: &str) -> Result<Self, UnknownAlgorithm> {
        match name {
            "none" => Ok(Self::None),
            "HS256" => Ok(Self::HS256),
            "HS384" => Ok(Self::HS384),
            "HS512" => Ok(Self::HS512),
            _ => Err(error::unknown_algorithm(name.to_owned())),
        }
    }

    /// The canonical `alg` header value for this algorithm
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::HS256 => "HS256",
            Self::HS384 => "HS384",
            Self::HS512 => "HS512",
        }
    }

    /// The size in bytes of a signature produced by this algorithm
    #[must_use]
    pub fn signature_size(self) -> usize {
        match self {
            Self::None => 0,
            Self::HS256 => 256 / 8,
            Self::HS384 => 384 / 8,
            Self::HS512 => 512 / 8,
        }
    }

    /// Whether this algorithm requires a secret
    #[must_use]
    pub fn is_keyed(self) -> bool {
        !matches!(self, Self::None)
    }

    pub(crate) fn ring_hmac(self) -> Option<ring::hmac::Algorithm> {
        match self {
            Self::None => None,
            Self::HS256 => Some(ring::hmac::HMAC_SHA256),
            Self::HS384 => Some(ring::hmac::HMAC_SHA384),
            Self::HS512 => Some(ring::hmac::HMAC_SHA512),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_supported_names() {
        assert_eq!(Algorithm::from_name("none").unwrap(), Algorithm::None);
        assert_eq!(Algorithm::from_name("HS256").unwrap(), Algorithm::HS256);
        assert_eq!(Algorithm::from_name("HS384").unwrap(), Algorithm::HS384);
        assert_eq!(Algorithm::from_name("HS512").unwrap(), Algorithm::HS512);
    }

    #[test]
    fn resolution_is_case_sensitive() {
        assert!(Algorithm::from_name("hs256").is_err());
        assert!(Algorithm::from_name("NONE").is_err());
        assert!(Algorithm::from_name("None").is_err());
    }

    #[test]
    fn rejects_asymmetric_names() {
        let err = Algorithm::from_name("RS256").unwrap_err();
        assert_eq!(err.alg(), "RS256");
        assert!(Algorithm::from_name("ES384").is_err());
        assert!(Algorithm::from_name("PS512").is_err());
    }

    #[test]
    fn signature_sizes() {
        assert_eq!(Algorithm::None.signature_size(), 0);
        assert_eq!(Algorithm::HS256.signature_size(), 32);
        assert_eq!(Algorithm::HS384.signature_size(), 48);
        assert_eq!(Algorithm::HS512.signature_size(), 64);
    }

    #[test]
    fn serde_round_trip() {
        let alg: Algorithm = serde_json::from_str(r#""none""#).unwrap();
        assert_eq!(alg, Algorithm::None);
        assert_eq!(serde_json::to_string(&Algorithm::HS256).unwrap(), r#""HS256""#);
    }
}
