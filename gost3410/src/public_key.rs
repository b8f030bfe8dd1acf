//! Public keys.

use crate::{CurveGroup, Error, Result, SecretKey};
use num_bigint::BigUint;
use weierstrass::AffinePoint;

/// Public point `Q = [d] G` together with the group it belongs to.
///
/// A [`PublicKey`] is never the identity and always lies in the subgroup of
/// order `q`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    group: CurveGroup,
    point: AffinePoint,
}

impl PublicKey {
    /// Compute the public key `[d] G` of a secret key.
    pub fn from_secret_key(secret_key: &SecretKey) -> Self {
        let group = secret_key.group();
        let point = group
            .arithmetic()
            .to_affine(&group.arithmetic().mul_generator(secret_key.as_scalar()));

        Self {
            group: group.clone(),
            point,
        }
    }

    /// Create a public key from affine coordinates.
    ///
    /// Returns [`Error::InvalidInput`] if `(x, y)` is not on the curve or is
    /// not in the subgroup of order `q`.
    pub fn from_affine(group: &CurveGroup, x: BigUint, y: BigUint) -> Result<Self> {
        let point = group
            .arithmetic()
            .curve()
            .point(x, y)
            .map_err(|_| Error::InvalidInput)?;

        if !group.arithmetic().contains(&point) {
            return Err(Error::InvalidInput);
        }

        Ok(Self {
            group: group.clone(),
            point,
        })
    }

    /// Borrow the inner [`AffinePoint`] for this public key.
    pub fn as_affine(&self) -> &AffinePoint {
        &self.point
    }

    /// Group this key belongs to.
    pub fn group(&self) -> &CurveGroup {
        &self.group
    }
}

impl AsRef<AffinePoint> for PublicKey {
    fn as_ref(&self) -> &AffinePoint {
        self.as_affine()
    }
}
