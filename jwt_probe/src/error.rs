//! Common errors

#![allow(missing_copy_implementations)]

use std::error::Error as StdError;

use thiserror::Error;

/// The input is not valid unpadded base64url
#[derive(Debug, Error)]
#[error("invalid base64url encoding")]
pub struct InvalidEncoding {
    #[from]
    source: Box<dyn StdError + Send + Sync + 'static>,
}

pub(crate) fn invalid_encoding(
    source: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
) -> InvalidEncoding {
    InvalidEncoding {
        source: source.into(),
    }
}

/// The raw string does not split into exactly three dot-separated segments
#[derive(Clone, Copy, Debug, Error)]
#[error("expected 3 dot-separated segments, found {found}")]
pub struct IncorrectSegmentCount {
    found: usize,
}

pub(crate) const fn incorrect_segment_count(found: usize) -> IncorrectSegmentCount {
    IncorrectSegmentCount { found }
}

impl IncorrectSegmentCount {
    /// The number of segments actually present
    #[must_use]
    pub fn found(&self) -> usize {
        self.found
    }
}

/// The token header segment is malformed
#[derive(Debug, Error)]
#[error("malformed token header")]
pub struct MalformedHeader {
    #[from]
    source: Box<dyn StdError + Send + Sync + 'static>,
}

pub(crate) fn malformed_header(
    source: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
) -> MalformedHeader {
    MalformedHeader {
        source: source.into(),
    }
}

/// The token payload segment is malformed
#[derive(Debug, Error)]
#[error("malformed token payload")]
pub struct MalformedPayload {
    #[from]
    source: Box<dyn StdError + Send + Sync + 'static>,
}

pub(crate) fn malformed_payload(
    source: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
) -> MalformedPayload {
    MalformedPayload {
        source: source.into(),
    }
}

/// The token signature segment is malformed
#[derive(Debug, Error)]
#[error("malformed token signature")]
pub struct MalformedSignature {
    #[from]
    source: Box<dyn StdError + Send + Sync + 'static>,
}

pub(crate) fn malformed_signature(
    source: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
) -> MalformedSignature {
    MalformedSignature {
        source: source.into(),
    }
}

/// The header does not declare an `alg` string
#[derive(Clone, Copy, Debug, Error)]
#[error("header does not declare an `alg` value")]
pub struct MissingAlgorithm {
    _p: (),
}

pub(crate) const fn missing_algorithm() -> MissingAlgorithm {
    MissingAlgorithm { _p: () }
}

/// The provided name could not be matched with supported algorithms
#[derive(Debug, Error)]
#[error("'{alg}' does not match supported algorithms")]
pub struct UnknownAlgorithm {
    alg: String,
}

pub(crate) fn unknown_algorithm(alg: String) -> UnknownAlgorithm {
    UnknownAlgorithm { alg }
}

impl UnknownAlgorithm {
    /// The rejected `alg` value
    #[must_use]
    pub fn alg(&self) -> &str {
        &self.alg
    }
}

/// The forger was asked to sign with a keyed algorithm but given no secret
#[derive(Clone, Copy, Debug, Error)]
#[error("cannot sign with a keyed algorithm without a secret")]
pub struct MissingSecret {
    _p: (),
}

pub(crate) const fn missing_secret() -> MissingSecret {
    MissingSecret { _p: () }
}

/// The forger's header override JSON was rejected
#[derive(Debug, Error)]
#[error("invalid header")]
pub struct InvalidHeader {
    #[from]
    source: Box<dyn StdError + Send + Sync + 'static>,
}

pub(crate) fn invalid_header(
    source: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
) -> InvalidHeader {
    InvalidHeader {
        source: source.into(),
    }
}

/// The forger's payload JSON was rejected
#[derive(Debug, Error)]
#[error("invalid payload")]
pub struct InvalidPayload {
    #[from]
    source: Box<dyn StdError + Send + Sync + 'static>,
}

pub(crate) fn invalid_payload(
    source: impl Into<Box<dyn StdError + Send + Sync + 'static>>,
) -> InvalidPayload {
    InvalidPayload {
        source: source.into(),
    }
}

/// The compact serialization could not be parsed into a token
#[derive(Debug, Error)]
pub enum MalformedToken {
    /// The string does not have exactly three segments
    #[error(transparent)]
    IncorrectSegmentCount(#[from] IncorrectSegmentCount),

    /// The header segment is not base64url-encoded JSON
    #[error(transparent)]
    Header(#[from] MalformedHeader),

    /// The payload segment is not base64url-encoded JSON
    #[error(transparent)]
    Payload(#[from] MalformedPayload),

    /// The signature segment is not valid base64url
    #[error(transparent)]
    Signature(#[from] MalformedSignature),
}

/// The header's algorithm could not be resolved
#[derive(Debug, Error)]
pub enum AlgorithmError {
    /// No `alg` string is present in the header
    #[error(transparent)]
    Missing(#[from] MissingAlgorithm),

    /// The declared `alg` is not a supported algorithm
    #[error(transparent)]
    Unknown(#[from] UnknownAlgorithm),
}

impl AlgorithmError {
    /// Whether the error is an unrecognized `alg` value
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }
}

/// An error occurring while forging a token
#[derive(Debug, Error)]
pub enum ForgeError {
    /// The header override JSON is malformed or not an object
    #[error(transparent)]
    InvalidHeader(#[from] InvalidHeader),

    /// The payload JSON is malformed or not an object
    #[error(transparent)]
    InvalidPayload(#[from] InvalidPayload),

    /// The resolved algorithm needs a secret, but none was supplied
    #[error(transparent)]
    MissingSecret(#[from] MissingSecret),

    /// The resolved `alg` is not a supported algorithm
    #[error(transparent)]
    UnknownAlgorithm(#[from] UnknownAlgorithm),
}
