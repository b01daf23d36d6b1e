#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Public key encodings and normalization.
//!
//! Three wire encodings are accepted: raw 64-byte X||Y, 65-byte SEC1
//! uncompressed (`0x04` prefix), and 33-byte SEC1 compressed (`0x02`/`0x03`
//! prefix). Every operation in the crate normalizes into the raw form first.
//! The encoding is determined purely by length and prefix byte; curve
//! membership is checked only by [`validate_public_key`] and by operations
//! that hand the point to the curve engine.
//!
//! [`validate_public_key`]: crate::key::lifecycle::validate_public_key

use p256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use p256::{EncodedPoint, FieldBytes, PublicKey};
use tracing::instrument;

use crate::error::{Error, Result};

/// Size of a raw X||Y public key in bytes.
pub const RAW_PUBLIC_KEY_SIZE: usize = 64;

/// Size of a SEC1 uncompressed public key in bytes.
pub const UNCOMPRESSED_PUBLIC_KEY_SIZE: usize = 65;

/// Size of a SEC1 compressed public key in bytes.
pub const COMPRESSED_PUBLIC_KEY_SIZE: usize = 33;

/// Size of a single affine coordinate in bytes.
pub const COORDINATE_SIZE: usize = 32;

/// SEC1 prefix byte of an uncompressed public key.
pub const UNCOMPRESSED_TAG: u8 = 0x04;

/// SEC1 prefix byte of a compressed public key with even Y.
pub const COMPRESSED_EVEN_TAG: u8 = 0x02;

/// SEC1 prefix byte of a compressed public key with odd Y.
pub const COMPRESSED_ODD_TAG: u8 = 0x03;

/// Wire encoding of a public key, classified by length and prefix alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicKeyEncoding {
    /// 64-byte X||Y, no prefix.
    Raw,
    /// 65-byte SEC1 uncompressed, `0x04` prefix.
    Uncompressed,
    /// 33-byte SEC1 compressed, `0x02` or `0x03` prefix.
    Compressed,
}

impl PublicKeyEncoding {
    /// Classifies a public key buffer by length and prefix byte.
    ///
    /// # Errors
    /// Returns `Error::InvalidKeyLength` for unrecognized lengths and
    /// `Error::InvalidEncoding` for a recognized length with a bad prefix.
    pub fn classify(input: &[u8]) -> Result<Self> {
        match input.len() {
            RAW_PUBLIC_KEY_SIZE => Ok(Self::Raw),
            UNCOMPRESSED_PUBLIC_KEY_SIZE => match input[0] {
                UNCOMPRESSED_TAG => Ok(Self::Uncompressed),
                got => Err(Error::InvalidEncoding {
                    expected: "0x04",
                    got,
                }),
            },
            COMPRESSED_PUBLIC_KEY_SIZE => match input[0] {
                COMPRESSED_EVEN_TAG | COMPRESSED_ODD_TAG => Ok(Self::Compressed),
                got => Err(Error::InvalidEncoding {
                    expected: "0x02 or 0x03",
                    got,
                }),
            },
            got => Err(Error::InvalidKeyLength { got }),
        }
    }
}

/// Normalizes a public key in any accepted encoding to raw 64-byte X||Y.
///
/// Raw and uncompressed inputs are copied through without curve membership
/// checks. Compressed inputs go through engine decompression, which recovers
/// the Y coordinate or fails if no point exists for the given X.
///
/// # Errors
/// Returns `Error::InvalidKeyLength`, `Error::InvalidEncoding`, or
/// `Error::DecompressionFailed`.
#[instrument(level = "debug", skip(input), fields(input_len = input.len()))]
pub fn normalize_public_key(input: &[u8]) -> Result<[u8; RAW_PUBLIC_KEY_SIZE]> {
    let mut raw = [0u8; RAW_PUBLIC_KEY_SIZE];
    match PublicKeyEncoding::classify(input)? {
        PublicKeyEncoding::Raw => raw.copy_from_slice(input),
        PublicKeyEncoding::Uncompressed => raw.copy_from_slice(&input[1..]),
        PublicKeyEncoding::Compressed => {
            let point =
                EncodedPoint::from_bytes(input).map_err(|_| Error::DecompressionFailed)?;
            let public = Option::<PublicKey>::from(PublicKey::from_encoded_point(&point))
                .ok_or(Error::DecompressionFailed)?;
            raw = raw_from_public(&public);
        }
    }
    Ok(raw)
}

/// Splits a public key into its affine X and Y coordinates.
///
/// The input is normalized first, then split at the midpoint; no engine call
/// is made beyond what normalization needs.
///
/// # Errors
/// Propagates normalization errors.
#[instrument(level = "debug", skip(input), fields(input_len = input.len()))]
pub fn coordinates(input: &[u8]) -> Result<([u8; COORDINATE_SIZE], [u8; COORDINATE_SIZE])> {
    let raw = normalize_public_key(input)?;
    let mut x = [0u8; COORDINATE_SIZE];
    let mut y = [0u8; COORDINATE_SIZE];
    x.copy_from_slice(&raw[..COORDINATE_SIZE]);
    y.copy_from_slice(&raw[COORDINATE_SIZE..]);
    Ok((x, y))
}

/// Compresses a public key in any accepted encoding to 33-byte SEC1 form.
///
/// The output is built only after the engine accepts the point, so no
/// partially written buffer is ever returned.
///
/// # Errors
/// Propagates normalization errors; returns `Error::CompressionFailed` if the
/// normalized bytes do not name a curve point.
#[instrument(level = "debug", skip(input), fields(input_len = input.len()))]
pub fn compress_public_key(input: &[u8]) -> Result<[u8; COMPRESSED_PUBLIC_KEY_SIZE]> {
    let raw = normalize_public_key(input)?;
    let public = decode_raw_point(&raw).ok_or(Error::CompressionFailed)?;
    let point = public.to_encoded_point(true);
    let mut compressed = [0u8; COMPRESSED_PUBLIC_KEY_SIZE];
    compressed.copy_from_slice(point.as_bytes());
    Ok(compressed)
}

/// Decodes raw X||Y bytes into an engine public key, `None` if off-curve.
pub(crate) fn decode_raw_point(raw: &[u8; RAW_PUBLIC_KEY_SIZE]) -> Option<PublicKey> {
    let x = FieldBytes::clone_from_slice(&raw[..COORDINATE_SIZE]);
    let y = FieldBytes::clone_from_slice(&raw[COORDINATE_SIZE..]);
    let point = EncodedPoint::from_affine_coordinates(&x, &y, false);
    Option::from(PublicKey::from_encoded_point(&point))
}

/// Serializes an engine public key to raw X||Y bytes.
pub(crate) fn raw_from_public(public: &PublicKey) -> [u8; RAW_PUBLIC_KEY_SIZE] {
    let point = public.to_encoded_point(false);
    let mut raw = [0u8; RAW_PUBLIC_KEY_SIZE];
    raw.copy_from_slice(&point.as_bytes()[1..]);
    raw
}
