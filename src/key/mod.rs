#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # Key Management
//!
//! Keypair generation, public key derivation and validation, and conversion
//! between the three accepted public key encodings. The raw 64-byte X||Y
//! form is the canonical one; every operation normalizes into it first.

/// Public key encodings and normalization
pub mod encoding;

/// Keypair generation, derivation, validation
pub mod lifecycle;

// Re-exports
pub use encoding::*;
pub use lifecycle::*;
