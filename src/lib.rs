#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! # arc-p256
//!
//! NIST P-256 key management and ECDSA signatures over opaque byte buffers.
//!
//! All operations are stateless: inputs and outputs are plain byte buffers,
//! and the raw 64-byte X||Y form is the canonical public key representation.
//! Curve and field arithmetic is delegated to the `p256` crate; SHA-256 is
//! the `sha2` crate.
//!
//! ## Operations
//!
//! - **key::lifecycle**: keypair generation, public key derivation from a
//!   secret, on-curve validation
//! - **key::encoding**: normalization across raw (64), SEC1 uncompressed
//!   (65), and SEC1 compressed (33) encodings; coordinate extraction; point
//!   compression
//! - **sig::ecdsa**: sign and verify over SHA-256 digests, with an optional
//!   caller-supplied ephemeral nonce for deterministic signing
//! - **kem::ecdh**: ECDH shared secret derivation
//! - **pct**: pairwise consistency test for freshly generated keypairs
//! - **hash**: the SHA-256 digest stage shared by sign and verify
//!
//! ## Example
//!
//! ```
//! use arc_p256::{sign, verify, Keypair};
//!
//! # fn main() -> arc_p256::Result<()> {
//! let keypair = Keypair::generate()?;
//! let signature = sign(keypair.secret_key_bytes(), b"message")?;
//! assert!(verify(keypair.public_key_bytes(), b"message", &signature)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error handling
//!
//! Malformed inputs (wrong lengths, bad prefix bytes) are [`Error`] values.
//! Negative cryptographic outcomes, a signature that does not verify or a
//! point that is not on the curve, are `Ok(false)` booleans.

// Core cryptographic modules
pub mod hash;
pub mod kem;
pub mod key;
pub mod sig;

// Supporting modules
pub mod error;
pub mod pct;

pub use error::{Error, Result};
pub use hash::*;
pub use kem::*;
pub use key::*;
pub use pct::*;
pub use sig::*;
