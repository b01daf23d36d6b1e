#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Pairwise consistency test for generated keypairs.
//!
//! FIPS 140-3 style conditional self-test: sign a fixed test message with the
//! secret key and verify the signature with the public key. Callers that need
//! the check run it explicitly after generation; it is not wired into
//! [`Keypair::generate`].

use tracing::instrument;

use crate::error::{Error, Result};
use crate::key::lifecycle::Keypair;
use crate::sig::ecdsa::{sign, verify};

/// Fixed test message for PCT operations
///
/// Using a fixed message keeps the check deterministic apart from the
/// signature nonce.
pub const PCT_TEST_MESSAGE: &[u8] = b"arc-p256 pairwise consistency test";

/// Checks that a secret key and public key form a consistent pair by signing
/// and verifying the fixed test message.
///
/// The public key is accepted in any of the three encodings.
///
/// # Errors
/// Returns `Error::KeyPairInconsistent` if verification returns false, and
/// propagates signing and normalization errors.
#[instrument(level = "debug", skip_all)]
pub fn pairwise_consistency(public_key: &[u8], secret: &[u8]) -> Result<()> {
    let signature = sign(secret, PCT_TEST_MESSAGE)?;
    if verify(public_key, PCT_TEST_MESSAGE, &signature)? {
        Ok(())
    } else {
        Err(Error::KeyPairInconsistent)
    }
}

/// Convenience form of [`pairwise_consistency`] for a [`Keypair`].
///
/// # Errors
/// Same as [`pairwise_consistency`].
pub fn pairwise_consistency_keypair(keypair: &Keypair) -> Result<()> {
    pairwise_consistency(keypair.public_key_bytes(), keypair.secret_key_bytes())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Tests use unwrap for simplicity
mod tests {
    use super::*;

    #[test]
    fn test_pct_passes_for_generated_keypair() {
        let keypair = Keypair::generate().unwrap();
        pairwise_consistency_keypair(&keypair).unwrap();
    }

    #[test]
    fn test_pct_fails_for_mismatched_keys() {
        let a = Keypair::generate().unwrap();
        let b = Keypair::generate().unwrap();
        let result = pairwise_consistency(a.public_key_bytes(), b.secret_key_bytes());
        assert!(matches!(result, Err(Error::KeyPairInconsistent)));
    }
}
