#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # Key Agreement
//!
//! ECDH shared secret derivation on P-256.

/// ECDH key agreement
pub mod ecdh;

// Re-exports
pub use ecdh::*;
