#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! ECDSA signing and verification over SHA-256 digests.
//!
//! Signatures are raw 64-byte r||s. The nonce is either drawn from the
//! operating system CSPRNG or supplied by the caller as a 32-byte scalar;
//! a caller supplying nonces must never reuse one across messages with the
//! same key.

use ecdsa::hazmat::SignPrimitive;
use p256::ecdsa::signature::hazmat::PrehashVerifier;
use p256::ecdsa::{Signature, VerifyingKey};
use p256::elliptic_curve::ff::PrimeField;
use p256::{FieldBytes, NonZeroScalar, Scalar, SecretKey};
use rand::rngs::OsRng;
use tracing::instrument;

use crate::error::{Error, Result};
use crate::hash;
use crate::key::encoding::{decode_raw_point, normalize_public_key};
use crate::key::lifecycle::SECRET_KEY_SIZE;

/// Size of a raw r||s signature in bytes.
pub const SIGNATURE_SIZE: usize = 64;

/// Size of a caller-supplied ephemeral nonce in bytes.
pub const EPHEMERAL_SIZE: usize = 32;

/// Signs a message with a fresh random nonce.
///
/// The message is hashed with SHA-256 and the digest is signed; the nonce is
/// a uniformly random nonzero scalar from the OS CSPRNG, so two signatures
/// over the same message differ.
///
/// # Errors
/// Returns `Error::InvalidSecretKey` if the secret is not exactly 32 bytes
/// (checked before any engine call or randomness draw) and
/// `Error::SigningFailed` if the engine rejects the scalar or the signature
/// degenerates.
#[instrument(level = "debug", skip_all, fields(message_len = message.len()))]
pub fn sign(secret: &[u8], message: &[u8]) -> Result<[u8; SIGNATURE_SIZE]> {
    sign_inner(secret, message, None)
}

/// Signs a message with a caller-supplied ephemeral nonce.
///
/// Deterministic: the same `(secret, message, ephemeral)` triple always
/// yields the same signature. The nonce must be a valid nonzero scalar below
/// the group order, and must never be reused across messages with the same
/// key.
///
/// # Errors
/// Returns `Error::InvalidSecretKey` for a wrong-size secret and
/// `Error::SigningFailed` if the nonce is the wrong size, zero, or not a
/// valid scalar.
#[instrument(
    level = "debug",
    skip_all,
    fields(message_len = message.len(), ephemeral_len = ephemeral.len())
)]
pub fn sign_with_ephemeral(
    secret: &[u8],
    message: &[u8],
    ephemeral: &[u8],
) -> Result<[u8; SIGNATURE_SIZE]> {
    sign_inner(secret, message, Some(ephemeral))
}

fn sign_inner(
    secret: &[u8],
    message: &[u8],
    ephemeral: Option<&[u8]>,
) -> Result<[u8; SIGNATURE_SIZE]> {
    if secret.len() != SECRET_KEY_SIZE {
        return Err(Error::InvalidSecretKey {
            expected: SECRET_KEY_SIZE,
            got: secret.len(),
        });
    }

    let secret_key =
        SecretKey::from_slice(secret).map_err(|e| Error::SigningFailed(e.to_string()))?;
    let nonce: Scalar = match ephemeral {
        Some(bytes) => parse_ephemeral(bytes)?,
        None => *NonZeroScalar::random(&mut OsRng),
    };

    let digest = hash::sha256(message);
    let prehash = FieldBytes::clone_from_slice(&digest);
    let (signature, _) = secret_key
        .to_nonzero_scalar()
        .try_sign_prehashed(nonce, &prehash)
        .map_err(|e| Error::SigningFailed(e.to_string()))?;

    let mut out = [0u8; SIGNATURE_SIZE];
    out.copy_from_slice(&signature.to_bytes());
    Ok(out)
}

/// Parses a caller-supplied nonce into a curve scalar.
///
/// A zero scalar parses successfully here and is rejected by the engine at
/// the point of use.
fn parse_ephemeral(bytes: &[u8]) -> Result<Scalar> {
    if bytes.len() != EPHEMERAL_SIZE {
        return Err(Error::SigningFailed(format!(
            "ephemeral nonce must be {EPHEMERAL_SIZE} bytes, got {}",
            bytes.len()
        )));
    }
    let repr = FieldBytes::clone_from_slice(bytes);
    Option::<Scalar>::from(Scalar::from_repr(repr))
        .ok_or_else(|| Error::SigningFailed("ephemeral nonce is not a valid scalar".into()))
}

/// Verifies a 64-byte r||s signature over a message.
///
/// The public key is accepted in any of the three encodings. Off-curve
/// points, out-of-range signature scalars, and plain mismatches are all
/// `Ok(false)`; only malformed inputs are errors.
///
/// # Errors
/// Propagates normalization errors and returns
/// `Error::InvalidSignatureLength` if the signature is not 64 bytes.
#[instrument(
    level = "debug",
    skip_all,
    fields(
        public_key_len = public_key.len(),
        message_len = message.len(),
        signature_len = signature.len()
    )
)]
pub fn verify(public_key: &[u8], message: &[u8], signature: &[u8]) -> Result<bool> {
    let raw = normalize_public_key(public_key)?;
    if signature.len() != SIGNATURE_SIZE {
        return Err(Error::InvalidSignatureLength {
            expected: SIGNATURE_SIZE,
            got: signature.len(),
        });
    }

    let public = match decode_raw_point(&raw) {
        Some(public) => public,
        None => return Ok(false),
    };
    let signature = match Signature::from_slice(signature) {
        Ok(signature) => signature,
        Err(_) => return Ok(false),
    };

    let digest = hash::sha256(message);
    Ok(VerifyingKey::from(public)
        .verify_prehash(&digest, &signature)
        .is_ok())
}
