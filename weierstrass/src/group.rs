//! Prime order subgroup generated by a base point.

use crate::{utils, AffinePoint, Curve, Error, ProjectivePoint, Result};
use num_bigint::BigUint;
use num_integer::Integer;

/// Cyclic subgroup of prime order `q` of a [`Curve`], together with its
/// generator `G`.
///
/// Holds no mutable state: all temporaries used by the arithmetic live in the
/// stack frame of the calling operation, so a `Group` can be shared freely
/// between threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Group {
    curve: Curve,
    generator: AffinePoint,
    order: BigUint,
}

impl Group {
    /// Set the generator and order of a curve group.
    ///
    /// Fails if the generator is the identity or not on the curve, if `order`
    /// is not an odd probable prime, or if `[order] G` is not the identity.
    pub fn new(curve: Curve, generator: AffinePoint, order: BigUint) -> Result<Self> {
        if generator.is_identity() {
            return Err(Error::Identity);
        }

        if !curve.contains(&generator) {
            return Err(Error::PointNotOnCurve);
        }

        if order <= BigUint::from(2u32) || order.is_even() || !utils::is_probable_prime(&order) {
            return Err(Error::InvalidOrder);
        }

        if !ProjectivePoint::from(&generator)
            .mul(&order, &curve)
            .is_identity()
        {
            return Err(Error::InvalidOrder);
        }

        Ok(Self {
            curve,
            generator,
            order,
        })
    }

    /// Underlying curve.
    pub fn curve(&self) -> &Curve {
        &self.curve
    }

    /// Generator `G`.
    pub fn generator(&self) -> &AffinePoint {
        &self.generator
    }

    /// Subgroup order `q`.
    pub fn order(&self) -> &BigUint {
        &self.order
    }

    /// Is `point` a non-identity element of this subgroup?
    pub fn contains(&self, point: &AffinePoint) -> bool {
        !point.is_identity()
            && self.curve.contains(point)
            && self.mul(point, &self.order).is_identity()
    }

    /// Returns `[k] G`.
    pub fn mul_generator(&self, k: &BigUint) -> ProjectivePoint {
        self.mul(&self.generator, k)
    }

    /// Returns `[k] point`.
    pub fn mul(&self, point: &AffinePoint, k: &BigUint) -> ProjectivePoint {
        ProjectivePoint::from(point).mul(k, &self.curve)
    }

    /// Returns `[k1] G + [k2] point`.
    pub fn lincomb(&self, k1: &BigUint, point: &AffinePoint, k2: &BigUint) -> ProjectivePoint {
        ProjectivePoint::lincomb(
            &ProjectivePoint::from(&self.generator),
            k1,
            &ProjectivePoint::from(point),
            k2,
            &self.curve,
        )
    }

    /// Convert a projective point of this group to affine coordinates.
    pub fn to_affine(&self, point: &ProjectivePoint) -> AffinePoint {
        point.to_affine(&self.curve)
    }

    /// Affine x-coordinate of `point`.
    ///
    /// Returns [`Error::Identity`] for the point at infinity.
    pub fn affine_x(&self, point: &ProjectivePoint) -> Result<BigUint> {
        let affine = self.to_affine(point);
        affine.x().cloned().ok_or(Error::Identity)
    }
}
