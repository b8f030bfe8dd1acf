//! Secret keys.

use crate::{CurveGroup, Error, PublicKey, Result};
use alloc::{vec, vec::Vec};
use core::fmt::{self, Debug};
use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::CryptoRngCore;
use subtle::{Choice, ConstantTimeEq};
use weierstrass::utils::random_below;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Secret scalar `d` in `[1, q-1]` together with the group it belongs to.
///
/// The scalar is zeroized when the key is dropped.
#[derive(Clone)]
pub struct SecretKey {
    group: CurveGroup,
    scalar: BigUint,
}

impl SecretKey {
    /// Generate a random [`SecretKey`].
    ///
    /// The scalar is drawn uniformly from `[0, q)`, redrawing while it is
    /// zero.
    pub fn random(group: &CurveGroup, rng: &mut impl CryptoRngCore) -> Result<Self> {
        loop {
            let mut scalar = random_below(rng, group.order())?;
            if !scalar.is_zero() {
                return Ok(Self {
                    group: group.clone(),
                    scalar,
                });
            }
            scalar.zeroize();
        }
    }

    /// Create a secret key from a scalar.
    ///
    /// Returns [`Error::InvalidInput`] unless `1 <= scalar < q`.
    pub fn from_scalar(group: &CurveGroup, mut scalar: BigUint) -> Result<Self> {
        if scalar.is_zero() || &scalar >= group.order() {
            scalar.zeroize();
            return Err(Error::InvalidInput);
        }

        Ok(Self {
            group: group.clone(),
            scalar,
        })
    }

    /// Deserialize a secret key from a big endian scalar of exactly
    /// [`CurveGroup::scalar_size`] bytes.
    pub fn from_slice(group: &CurveGroup, slice: &[u8]) -> Result<Self> {
        if slice.len() != group.scalar_size() {
            return Err(Error::InvalidInput);
        }

        Self::from_scalar(group, BigUint::from_bytes_be(slice))
    }

    /// Serialize the secret scalar as a big endian integer of
    /// [`CurveGroup::scalar_size`] bytes.
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        let bytes = Zeroizing::new(self.scalar.to_bytes_be());
        let mut out = Zeroizing::new(vec![0u8; self.group.scalar_size()]);
        // `scalar < q` always fits in `scalar_size` bytes.
        let offset = out.len() - bytes.len();
        out[offset..].copy_from_slice(&bytes);
        out
    }

    /// Borrow the secret scalar value for this key.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn as_scalar(&self) -> &BigUint {
        &self.scalar
    }

    /// Group this key belongs to.
    pub fn group(&self) -> &CurveGroup {
        &self.group
    }

    /// Get the [`PublicKey`] which corresponds to this secret key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_secret_key(self)
    }
}

impl ConstantTimeEq for SecretKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        let same_group = Choice::from(u8::from(self.group == other.group));
        same_group & self.to_bytes().as_slice().ct_eq(other.to_bytes().as_slice())
    }
}

impl Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("group", &self.group.params().name)
            .finish_non_exhaustive()
    }
}

/// Constant-time comparison
impl Eq for SecretKey {}
impl PartialEq for SecretKey {
    fn eq(&self, other: &SecretKey) -> bool {
        self.ct_eq(other).into()
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.scalar.zeroize();
    }
}

impl ZeroizeOnDrop for SecretKey {}
