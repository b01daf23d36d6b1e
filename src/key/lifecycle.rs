#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Keypair generation, public key derivation, and key validation.

use p256::SecretKey;
use rand::rngs::OsRng;
use tracing::instrument;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};
use crate::key::encoding::{
    decode_raw_point, normalize_public_key, raw_from_public, RAW_PUBLIC_KEY_SIZE,
};

/// Size of a secret key in bytes.
pub const SECRET_KEY_SIZE: usize = 32;

/// A P-256 keypair.
///
/// The secret scalar is zeroized when the keypair is dropped and redacted
/// from `Debug` output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Keypair {
    secret: [u8; SECRET_KEY_SIZE],
    public: [u8; RAW_PUBLIC_KEY_SIZE],
}

impl Keypair {
    /// Generates a fresh keypair from the operating system CSPRNG.
    ///
    /// # Errors
    /// Returns `Error::KeyGenerationFailed` if the curve engine cannot
    /// produce a key.
    #[instrument(level = "debug")]
    pub fn generate() -> Result<Self> {
        let secret_key = SecretKey::random(&mut OsRng);
        let public = raw_from_public(&secret_key.public_key());
        let mut secret = [0u8; SECRET_KEY_SIZE];
        secret.copy_from_slice(&secret_key.to_bytes());
        Ok(Self { secret, public })
    }

    /// The 32-byte secret scalar.
    pub fn secret_key_bytes(&self) -> &[u8; SECRET_KEY_SIZE] {
        &self.secret
    }

    /// The raw 64-byte X||Y public key.
    pub fn public_key_bytes(&self) -> &[u8; RAW_PUBLIC_KEY_SIZE] {
        &self.public
    }
}

impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keypair")
            .field("secret", &"[REDACTED]")
            .field("public", &self.public)
            .finish()
    }
}

/// Derives the raw 64-byte public key from a 32-byte secret key.
///
/// Deterministic: the same secret always yields the same public key.
///
/// # Errors
/// Returns `Error::InvalidSecretKey` if the input is not exactly 32 bytes,
/// before the engine sees it, and `Error::DerivationFailed` if the engine
/// rejects the scalar (zero, or not below the group order).
#[instrument(level = "debug", skip(secret), fields(secret_len = secret.len()))]
pub fn derive_public_key(secret: &[u8]) -> Result<[u8; RAW_PUBLIC_KEY_SIZE]> {
    if secret.len() != SECRET_KEY_SIZE {
        return Err(Error::InvalidSecretKey {
            expected: SECRET_KEY_SIZE,
            got: secret.len(),
        });
    }
    let secret_key =
        SecretKey::from_slice(secret).map_err(|e| Error::DerivationFailed(e.to_string()))?;
    Ok(raw_from_public(&secret_key.public_key()))
}

/// Checks whether a public key in any accepted encoding names a point on the
/// curve.
///
/// An off-curve point is a normal `Ok(false)` outcome, not an error.
///
/// # Errors
/// Propagates normalization errors for malformed inputs.
#[instrument(level = "debug", skip(input), fields(input_len = input.len()))]
pub fn validate_public_key(input: &[u8]) -> Result<bool> {
    let raw = normalize_public_key(input)?;
    Ok(decode_raw_point(&raw).is_some())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Tests use unwrap for simplicity
mod tests {
    use super::*;

    #[test]
    fn test_generate_produces_valid_keypair() {
        let keypair = Keypair::generate().unwrap();
        assert!(validate_public_key(keypair.public_key_bytes()).unwrap());
        assert_eq!(
            derive_public_key(keypair.secret_key_bytes()).unwrap(),
            *keypair.public_key_bytes()
        );
    }

    #[test]
    fn test_generate_is_randomized() {
        let a = Keypair::generate().unwrap();
        let b = Keypair::generate().unwrap();
        assert_ne!(a.public_key_bytes(), b.public_key_bytes());
    }

    #[test]
    fn test_derive_is_deterministic() {
        let keypair = Keypair::generate().unwrap();
        let first = derive_public_key(keypair.secret_key_bytes()).unwrap();
        let second = derive_public_key(keypair.secret_key_bytes()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_derive_rejects_short_secret() {
        assert!(matches!(
            derive_public_key(&[0x42; 16]),
            Err(Error::InvalidSecretKey {
                expected: 32,
                got: 16
            })
        ));
    }

    #[test]
    fn test_derive_rejects_zero_secret() {
        assert!(matches!(
            derive_public_key(&[0u8; 32]),
            Err(Error::DerivationFailed(_))
        ));
    }

    #[test]
    fn test_validate_rejects_off_curve_point() {
        let keypair = Keypair::generate().unwrap();
        let mut raw = *keypair.public_key_bytes();
        raw[63] ^= 0x01;
        assert!(!validate_public_key(&raw).unwrap());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let keypair = Keypair::generate().unwrap();
        let rendered = format!("{keypair:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains(&format!("{:?}", keypair.secret_key_bytes())));
    }
}
