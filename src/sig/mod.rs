#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # Signatures
//!
//! ECDSA over P-256 with SHA-256 digests, raw 64-byte r||s signatures.

/// ECDSA signing and verification
pub mod ecdsa;

// Re-exports
pub use self::ecdsa::*;
