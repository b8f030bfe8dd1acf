//! Support for GOST R 34.10 signing.

use super::{hazmat, Signature, VerifyingKey};
use crate::{CurveGroup, Result, SecretKey};
use core::fmt::{self, Debug};
use rand_core::CryptoRngCore;
use signature::{hazmat::RandomizedPrehashSigner, Keypair};
use subtle::{Choice, ConstantTimeEq};

#[cfg(feature = "getrandom")]
use signature::hazmat::PrehashSigner;

/// GOST R 34.10 secret key used for signing message digests and producing
/// signatures.
///
/// ## Usage
///
/// The [`signature`] crate defines the following traits which are the
/// primary API for signing:
///
/// - [`RandomizedPrehashSigner`]: sign the raw output bytes of a message
///   digest with a caller-provided random number generator
/// - [`PrehashSigner`][signature::hazmat::PrehashSigner]: same, using the
///   operating system's random number generator (requires the `getrandom`
///   feature)
#[derive(Clone)]
pub struct SigningKey {
    /// Secret key.
    secret_key: SecretKey,

    /// Verifying key for this signing key.
    verifying_key: VerifyingKey,
}

impl SigningKey {
    /// Generate a random [`SigningKey`] in the given group.
    pub fn random(group: &CurveGroup, rng: &mut impl CryptoRngCore) -> Result<Self> {
        SecretKey::random(group, rng).map(Self::from_secret_key)
    }

    /// Create a signing key from a secret key, deriving its public key.
    pub fn from_secret_key(secret_key: SecretKey) -> Self {
        let verifying_key = VerifyingKey::new(secret_key.public_key());
        Self {
            secret_key,
            verifying_key,
        }
    }

    /// Parse signing key from a big endian-encoded byte slice containing a
    /// secret scalar value.
    pub fn from_slice(group: &CurveGroup, slice: &[u8]) -> Result<Self> {
        SecretKey::from_slice(group, slice).map(Self::from_secret_key)
    }

    /// Borrow the [`SecretKey`] for this key.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn as_secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Get the [`VerifyingKey`] which corresponds to this [`SigningKey`].
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Group this key belongs to.
    pub fn group(&self) -> &CurveGroup {
        self.secret_key.group()
    }
}

//
// `*Signer` trait impls
//

impl RandomizedPrehashSigner<Signature> for SigningKey {
    fn sign_prehash_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        prehash: &[u8],
    ) -> signature::Result<Signature> {
        Ok(hazmat::sign_prehashed(
            self.secret_key.group(),
            self.secret_key.as_scalar(),
            prehash,
            rng,
        )?)
    }
}

#[cfg(feature = "getrandom")]
impl PrehashSigner<Signature> for SigningKey {
    fn sign_prehash(&self, prehash: &[u8]) -> signature::Result<Signature> {
        self.sign_prehash_with_rng(&mut rand_core::OsRng, prehash)
    }
}

//
// Other trait impls
//

impl AsRef<VerifyingKey> for SigningKey {
    fn as_ref(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}

impl ConstantTimeEq for SigningKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.secret_key.ct_eq(&other.secret_key)
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

/// Constant-time comparison
impl Eq for SigningKey {}
impl PartialEq for SigningKey {
    fn eq(&self, other: &SigningKey) -> bool {
        self.ct_eq(other).into()
    }
}

impl Keypair for SigningKey {
    type VerifyingKey = VerifyingKey;

    fn verifying_key(&self) -> VerifyingKey {
        self.verifying_key.clone()
    }
}

impl From<SecretKey> for SigningKey {
    fn from(secret_key: SecretKey) -> SigningKey {
        SigningKey::from_secret_key(secret_key)
    }
}
