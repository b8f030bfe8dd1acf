//! Affine curve points.

use num_bigint::BigUint;
use num_traits::Zero;
use zeroize::Zeroize;

/// Point on a Weierstrass curve in affine coordinates.
///
/// Points are only constructed through [`Curve::point`][crate::Curve::point]
/// (which checks the curve equation) or by converting a
/// [`ProjectivePoint`][crate::ProjectivePoint], so the coordinates of a
/// non-identity point always satisfy the equation of the curve they came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffinePoint {
    /// x-coordinate
    pub(crate) x: BigUint,

    /// y-coordinate
    pub(crate) y: BigUint,

    /// Is this point the point at infinity?
    pub(crate) infinity: bool,
}

impl AffinePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity() -> Self {
        Self {
            x: BigUint::zero(),
            y: BigUint::zero(),
            infinity: true,
        }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.infinity
    }

    /// Affine x-coordinate, or `None` for the point at infinity.
    pub fn x(&self) -> Option<&BigUint> {
        (!self.infinity).then_some(&self.x)
    }

    /// Affine y-coordinate, or `None` for the point at infinity.
    pub fn y(&self) -> Option<&BigUint> {
        (!self.infinity).then_some(&self.y)
    }
}

impl Default for AffinePoint {
    fn default() -> Self {
        Self::identity()
    }
}

impl Zeroize for AffinePoint {
    fn zeroize(&mut self) {
        self.x.zeroize();
        self.y.zeroize();
        self.infinity = true;
    }
}
