//! Curve equation.

use crate::{AffinePoint, Error, PrimeField, Result};
use num_bigint::BigUint;
use num_traits::Zero;

/// Elliptic curve in short Weierstrass form, `y² = x³ + ax + b` over 𝔽ₚ.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Curve {
    field: PrimeField,

    /// Coefficient `a` in the curve equation.
    a: BigUint,

    /// Coefficient `b` in the curve equation.
    b: BigUint,

    /// `3b`, used by the complete addition formulas.
    b3: BigUint,
}

impl Curve {
    /// Construct the curve `y² = x³ + ax + b` over the prime field of order `p`.
    ///
    /// Fails if `p` is not an odd prime, if either coefficient is not reduced
    /// modulo `p`, or if the curve is singular.
    pub fn new(p: BigUint, a: BigUint, b: BigUint) -> Result<Self> {
        let field = PrimeField::new(p)?;

        if !field.contains(&a) || !field.contains(&b) {
            return Err(Error::InvalidCoefficient);
        }

        // 4a³ + 27b² ≠ 0
        let a3 = field.mul(&field.square(&a), &a);
        let discriminant = field.add(
            &field.mul(&field.from_u32(4), &a3),
            &field.mul(&field.from_u32(27), &field.square(&b)),
        );
        if discriminant.is_zero() {
            return Err(Error::SingularCurve);
        }

        let b3 = field.mul(&field.from_u32(3), &b);
        Ok(Self { field, a, b, b3 })
    }

    /// Base field of the curve.
    pub fn field(&self) -> &PrimeField {
        &self.field
    }

    /// Coefficient `a` in the curve equation.
    pub fn a(&self) -> &BigUint {
        &self.a
    }

    /// Coefficient `b` in the curve equation.
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    pub(crate) fn b3(&self) -> &BigUint {
        &self.b3
    }

    /// Do `(x, y)` satisfy the curve equation?
    pub fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        let f = &self.field;
        if !f.contains(x) || !f.contains(y) {
            return false;
        }

        let lhs = f.square(y);
        let rhs = f.add(&f.mul(&f.add(&f.square(x), &self.a), x), &self.b);
        lhs == rhs
    }

    /// Construct an affine point from its coordinates, checking that it lies
    /// on the curve.
    pub fn point(&self, x: BigUint, y: BigUint) -> Result<AffinePoint> {
        if !self.is_on_curve(&x, &y) {
            return Err(Error::PointNotOnCurve);
        }

        Ok(AffinePoint {
            x,
            y,
            infinity: false,
        })
    }

    /// Does `point` lie on this curve? The identity always does.
    pub fn contains(&self, point: &AffinePoint) -> bool {
        point.is_identity() || self.is_on_curve(&point.x, &point.y)
    }
}
