//! Support for verifying GOST R 34.10 signatures.

use super::{hazmat, Signature};
use crate::{CurveGroup, PublicKey, Result};
use num_bigint::BigUint;
use signature::hazmat::PrehashVerifier;
use weierstrass::AffinePoint;

/// GOST R 34.10 public key used for verifying signatures are valid for a
/// given message digest.
///
/// ## Usage
///
/// The [`signature`] crate defines the following trait which is the primary
/// API for verifying:
///
/// - [`PrehashVerifier`]: verify the raw output bytes of a message digest
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifyingKey {
    /// Signer's public key.
    public_key: PublicKey,
}

impl VerifyingKey {
    /// Initialize [`VerifyingKey`] from a public key.
    pub fn new(public_key: PublicKey) -> Self {
        Self { public_key }
    }

    /// Initialize [`VerifyingKey`] from affine coordinates.
    ///
    /// Returns an error if the point is not on the curve or not in the
    /// subgroup of order `q`.
    pub fn from_affine(group: &CurveGroup, x: BigUint, y: BigUint) -> Result<Self> {
        PublicKey::from_affine(group, x, y).map(Self::new)
    }

    /// Borrow the inner [`AffinePoint`] for this public key.
    pub fn as_affine(&self) -> &AffinePoint {
        self.public_key.as_affine()
    }

    /// Borrow the [`PublicKey`] for this key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Group this key belongs to.
    pub fn group(&self) -> &CurveGroup {
        self.public_key.group()
    }

    /// Verify a signature over a message digest, distinguishing an invalid
    /// signature ([`Error::SignatureMismatch`][crate::Error::SignatureMismatch])
    /// from out of range components and malformed digests.
    pub fn verify_digest(&self, prehash: &[u8], signature: &Signature) -> Result<()> {
        hazmat::verify_prehashed(self.group(), self.as_affine(), prehash, signature)
    }
}

//
// `*Verifier` trait impls
//

impl PrehashVerifier<Signature> for VerifyingKey {
    fn verify_prehash(&self, prehash: &[u8], signature: &Signature) -> signature::Result<()> {
        Ok(self.verify_digest(prehash, signature)?)
    }
}

//
// Other trait impls
//

impl AsRef<AffinePoint> for VerifyingKey {
    fn as_ref(&self) -> &AffinePoint {
        self.as_affine()
    }
}

impl From<PublicKey> for VerifyingKey {
    fn from(public_key: PublicKey) -> VerifyingKey {
        VerifyingKey::new(public_key)
    }
}

impl From<VerifyingKey> for PublicKey {
    fn from(verifying_key: VerifyingKey) -> PublicKey {
        verifying_key.public_key
    }
}

impl From<&VerifyingKey> for PublicKey {
    fn from(verifying_key: &VerifyingKey) -> PublicKey {
        verifying_key.public_key.clone()
    }
}
