#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! ECDH key agreement on P-256.
//!
//! The shared secret is the x-coordinate of the Diffie-Hellman point. It is
//! raw keying material and should be fed through a KDF before use as a
//! symmetric key.

use p256::SecretKey;
use tracing::instrument;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};
use crate::key::encoding::{decode_raw_point, normalize_public_key};
use crate::key::lifecycle::SECRET_KEY_SIZE;

/// Size of an ECDH shared secret in bytes.
pub const SHARED_SECRET_SIZE: usize = 32;

/// An ECDH shared secret, zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret {
    bytes: [u8; SHARED_SECRET_SIZE],
}

impl SharedSecret {
    /// The 32-byte shared secret.
    pub fn as_bytes(&self) -> &[u8; SHARED_SECRET_SIZE] {
        &self.bytes
    }
}

impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSecret")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Derives the ECDH shared secret between a secret key and a peer public key.
///
/// The peer key is accepted in any of the three encodings. Agreement is
/// symmetric: `shared_secret(a, B) == shared_secret(b, A)`.
///
/// # Errors
/// Returns `Error::InvalidSecretKey` for a wrong-size secret,
/// `Error::DerivationFailed` if the engine rejects the scalar, normalization
/// errors for a malformed peer key, and `Error::AgreementFailed` if the peer
/// bytes name no curve point.
#[instrument(level = "debug", skip_all, fields(public_key_len = public_key.len()))]
pub fn shared_secret(secret: &[u8], public_key: &[u8]) -> Result<SharedSecret> {
    if secret.len() != SECRET_KEY_SIZE {
        return Err(Error::InvalidSecretKey {
            expected: SECRET_KEY_SIZE,
            got: secret.len(),
        });
    }
    let raw = normalize_public_key(public_key)?;

    let secret_key =
        SecretKey::from_slice(secret).map_err(|e| Error::DerivationFailed(e.to_string()))?;
    let peer = decode_raw_point(&raw).ok_or(Error::AgreementFailed)?;

    let shared = p256::ecdh::diffie_hellman(secret_key.to_nonzero_scalar(), peer.as_affine());
    let mut bytes = [0u8; SHARED_SECRET_SIZE];
    bytes.copy_from_slice(shared.raw_secret_bytes());
    Ok(SharedSecret { bytes })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Tests use unwrap for simplicity
mod tests {
    use super::*;
    use crate::key::lifecycle::Keypair;

    #[test]
    fn test_agreement_is_symmetric() {
        let alice = Keypair::generate().unwrap();
        let bob = Keypair::generate().unwrap();
        let ab = shared_secret(alice.secret_key_bytes(), bob.public_key_bytes()).unwrap();
        let ba = shared_secret(bob.secret_key_bytes(), alice.public_key_bytes()).unwrap();
        assert_eq!(ab.as_bytes(), ba.as_bytes());
    }

    #[test]
    fn test_distinct_peers_distinct_secrets() {
        let alice = Keypair::generate().unwrap();
        let bob = Keypair::generate().unwrap();
        let carol = Keypair::generate().unwrap();
        let ab = shared_secret(alice.secret_key_bytes(), bob.public_key_bytes()).unwrap();
        let ac = shared_secret(alice.secret_key_bytes(), carol.public_key_bytes()).unwrap();
        assert_ne!(ab.as_bytes(), ac.as_bytes());
    }

    #[test]
    fn test_rejects_short_secret() {
        let bob = Keypair::generate().unwrap();
        assert!(matches!(
            shared_secret(&[0x42; 16], bob.public_key_bytes()),
            Err(Error::InvalidSecretKey {
                expected: 32,
                got: 16
            })
        ));
    }

    #[test]
    fn test_rejects_off_curve_peer() {
        let alice = Keypair::generate().unwrap();
        assert!(matches!(
            shared_secret(alice.secret_key_bytes(), &[0xaa; 64]),
            Err(Error::AgreementFailed)
        ));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let alice = Keypair::generate().unwrap();
        let bob = Keypair::generate().unwrap();
        let shared = shared_secret(alice.secret_key_bytes(), bob.public_key_bytes()).unwrap();
        assert!(format!("{shared:?}").contains("[REDACTED]"));
    }
}
