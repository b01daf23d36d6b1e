#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Error types for arc-p256 operations.
//!
//! Malformed inputs (bad lengths, bad prefix bytes) are reported before any
//! cryptographic computation runs. Negative cryptographic outcomes such as a
//! failed verification or an off-curve point passed to validation are `Ok`
//! booleans, not errors.

/// Errors that can occur in P-256 key and signature operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The public key length matches none of the accepted encodings.
    #[error("Invalid public key length: {got} bytes (expected 64, 65, or 33)")]
    InvalidKeyLength {
        /// Length of the rejected input.
        got: usize,
    },

    /// The public key prefix byte does not match its encoding.
    #[error("Invalid public key prefix: expected {expected}, got {got:#04x}")]
    InvalidEncoding {
        /// Prefix byte(s) the encoding requires.
        expected: &'static str,
        /// Prefix byte that was found.
        got: u8,
    },

    /// The secret key is not the required length.
    #[error("Invalid secret key length: {got} bytes (expected {expected})")]
    InvalidSecretKey {
        /// Required secret key length in bytes.
        expected: usize,
        /// Length of the rejected input.
        got: usize,
    },

    /// The signature is not the required length.
    #[error("Invalid signature length: {got} bytes (expected {expected})")]
    InvalidSignatureLength {
        /// Required signature length in bytes.
        expected: usize,
        /// Length of the rejected input.
        got: usize,
    },

    /// No curve point exists for the given compressed X coordinate.
    #[error("Point decompression failed")]
    DecompressionFailed,

    /// The curve engine rejected the point during compression.
    #[error("Point compression failed")]
    CompressionFailed,

    /// The curve engine rejected the secret scalar.
    #[error("Public key derivation failed: {0}")]
    DerivationFailed(String),

    /// The curve engine failed to produce a signature.
    #[error("Signing failed: {0}")]
    SigningFailed(String),

    /// The curve engine failed to generate a keypair.
    #[error("Key generation failed: {0}")]
    KeyGenerationFailed(String),

    /// A freshly generated keypair failed its sign/verify consistency check.
    #[error("Key pair failed pairwise consistency check")]
    KeyPairInconsistent,

    /// ECDH shared secret derivation failed.
    #[error("Key agreement failed")]
    AgreementFailed,
}

/// Result type alias for arc-p256 operations.
pub type Result<T> = std::result::Result<T, Error>;
