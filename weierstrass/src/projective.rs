//! Projective curve points.

#![allow(clippy::many_single_char_names)]

use crate::{utils::bit, AffinePoint, Curve};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use zeroize::Zeroizing;

/// Point on a Weierstrass curve in homogeneous projective coordinates
/// `(X : Y : Z)`, representing the affine point `(X/Z, Y/Z)`.
///
/// The point at infinity is any point with `Z = 0`.
#[derive(Clone, Debug)]
pub struct ProjectivePoint {
    pub(crate) x: BigUint,
    pub(crate) y: BigUint,
    pub(crate) z: BigUint,
}

impl ProjectivePoint {
    /// Additive identity of the group a.k.a. the point at infinity.
    pub fn identity() -> Self {
        Self {
            x: BigUint::zero(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }

    /// Is this point the point at infinity?
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Returns the affine representation of this point.
    pub fn to_affine(&self, curve: &Curve) -> AffinePoint {
        match curve.field().invert(&self.z) {
            Ok(zinv) => AffinePoint {
                x: curve.field().mul(&self.x, &zinv),
                y: curve.field().mul(&self.y, &zinv),
                infinity: false,
            },
            Err(_) => AffinePoint::identity(),
        }
    }

    /// Returns `-self`.
    pub fn neg(&self, curve: &Curve) -> Self {
        Self {
            x: self.x.clone(),
            y: curve.field().neg(&self.y),
            z: self.z.clone(),
        }
    }

    /// Returns `self + other`.
    ///
    /// Implements the complete addition formula from [Renes-Costello-Batina 2015]
    /// (Algorithm 1). The comments after each line indicate which algorithm steps
    /// are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    pub fn add(&self, other: &Self, curve: &Curve) -> Self {
        let f = curve.field();
        let a = curve.a();
        let b3 = curve.b3();

        let t0 = f.mul(&self.x, &other.x); // 1
        let t1 = f.mul(&self.y, &other.y); // 2
        let t2 = f.mul(&self.z, &other.z); // 3
        let t3 = f.add(&self.x, &self.y); // 4
        let t4 = f.add(&other.x, &other.y); // 5
        let t3 = f.mul(&t3, &t4); // 6
        let t4 = f.add(&t0, &t1); // 7
        let t3 = f.sub(&t3, &t4); // 8
        let t4 = f.add(&self.x, &self.z); // 9
        let t5 = f.add(&other.x, &other.z); // 10
        let t4 = f.mul(&t4, &t5); // 11
        let t5 = f.add(&t0, &t2); // 12
        let t4 = f.sub(&t4, &t5); // 13
        let t5 = f.add(&self.y, &self.z); // 14
        let x3 = f.add(&other.y, &other.z); // 15
        let t5 = f.mul(&t5, &x3); // 16
        let x3 = f.add(&t1, &t2); // 17
        let t5 = f.sub(&t5, &x3); // 18
        let z3 = f.mul(a, &t4); // 19
        let x3 = f.mul(b3, &t2); // 20
        let z3 = f.add(&x3, &z3); // 21
        let x3 = f.sub(&t1, &z3); // 22
        let z3 = f.add(&t1, &z3); // 23
        let y3 = f.mul(&x3, &z3); // 24
        let t1 = f.add(&t0, &t0); // 25
        let t1 = f.add(&t1, &t0); // 26
        let t2 = f.mul(a, &t2); // 27
        let t4 = f.mul(b3, &t4); // 28
        let t1 = f.add(&t1, &t2); // 29
        let t2 = f.sub(&t0, &t2); // 30
        let t2 = f.mul(a, &t2); // 31
        let t4 = f.add(&t4, &t2); // 32
        let t0 = f.mul(&t1, &t4); // 33
        let y3 = f.add(&y3, &t0); // 34
        let t0 = f.mul(&t5, &t4); // 35
        let x3 = f.mul(&t3, &x3); // 36
        let x3 = f.sub(&x3, &t0); // 37
        let t0 = f.mul(&t3, &t1); // 38
        let z3 = f.mul(&t5, &z3); // 39
        let z3 = f.add(&z3, &t0); // 40

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Returns `self + self`.
    ///
    /// Implements the exception-free point doubling formula from
    /// [Renes-Costello-Batina 2015] (Algorithm 3). The comments after each line
    /// indicate which algorithm steps are being performed.
    ///
    /// [Renes-Costello-Batina 2015]: https://eprint.iacr.org/2015/1060
    pub fn double(&self, curve: &Curve) -> Self {
        let f = curve.field();
        let a = curve.a();
        let b3 = curve.b3();

        let t0 = f.square(&self.x); // 1
        let t1 = f.square(&self.y); // 2
        let t2 = f.square(&self.z); // 3
        let t3 = f.mul(&self.x, &self.y); // 4
        let t3 = f.add(&t3, &t3); // 5
        let z3 = f.mul(&self.x, &self.z); // 6
        let z3 = f.add(&z3, &z3); // 7
        let x3 = f.mul(a, &z3); // 8
        let y3 = f.mul(b3, &t2); // 9
        let y3 = f.add(&x3, &y3); // 10
        let x3 = f.sub(&t1, &y3); // 11
        let y3 = f.add(&t1, &y3); // 12
        let y3 = f.mul(&x3, &y3); // 13
        let x3 = f.mul(&t3, &x3); // 14
        let z3 = f.mul(b3, &z3); // 15
        let t2 = f.mul(a, &t2); // 16
        let t3 = f.sub(&t0, &t2); // 17
        let t3 = f.mul(a, &t3); // 18
        let t3 = f.add(&t3, &z3); // 19
        let z3 = f.add(&t0, &t0); // 20
        let t0 = f.add(&z3, &t0); // 21
        let t0 = f.add(&t0, &t2); // 22
        let t0 = f.mul(&t0, &t3); // 23
        let y3 = f.add(&y3, &t0); // 24
        let t2 = f.mul(&self.y, &self.z); // 25
        let t2 = f.add(&t2, &t2); // 26
        let t0 = f.mul(&t2, &t3); // 27
        let x3 = f.sub(&x3, &t0); // 28
        let z3 = f.mul(&t2, &t1); // 29
        let z3 = f.add(&z3, &z3); // 30
        let z3 = f.add(&z3, &z3); // 31

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Returns `[k] self`.
    ///
    /// Double-and-always-add over the bits of `k`, most significant first.
    /// The number of point operations depends only on the bit length of `k`.
    pub fn mul(&self, k: &BigUint, curve: &Curve) -> Self {
        let k_bytes = Zeroizing::new(k.to_bytes_le());
        let mut acc = Self::identity();

        for i in (0..k.bits()).rev() {
            acc = acc.double(curve);
            let sum = acc.add(self, curve);
            if bit(&k_bytes, i) {
                acc = sum;
            }
        }

        acc
    }

    /// Returns `[k1] p1 + [k2] p2` using Shamir's trick.
    pub fn lincomb(p1: &Self, k1: &BigUint, p2: &Self, k2: &BigUint, curve: &Curve) -> Self {
        let both = p1.add(p2, curve);
        let k1_bytes = k1.to_bytes_le();
        let k2_bytes = k2.to_bytes_le();
        let mut acc = Self::identity();

        for i in (0..k1.bits().max(k2.bits())).rev() {
            acc = acc.double(curve);
            acc = match (bit(&k1_bytes, i), bit(&k2_bytes, i)) {
                (true, true) => acc.add(&both, curve),
                (true, false) => acc.add(p1, curve),
                (false, true) => acc.add(p2, curve),
                (false, false) => acc,
            };
        }

        acc
    }

    /// Projective equality: `X₁Z₂ = X₂Z₁` and `Y₁Z₂ = Y₂Z₁`.
    pub fn equals(&self, other: &Self, curve: &Curve) -> bool {
        let f = curve.field();
        match (self.is_identity(), other.is_identity()) {
            (true, true) => true,
            (false, false) => {
                f.mul(&self.x, &other.z) == f.mul(&other.x, &self.z)
                    && f.mul(&self.y, &other.z) == f.mul(&other.y, &self.z)
            }
            _ => false,
        }
    }
}

impl From<&AffinePoint> for ProjectivePoint {
    fn from(p: &AffinePoint) -> Self {
        if p.is_identity() {
            Self::identity()
        } else {
            Self {
                x: p.x.clone(),
                y: p.y.clone(),
                z: BigUint::one(),
            }
        }
    }
}

impl From<AffinePoint> for ProjectivePoint {
    fn from(p: AffinePoint) -> Self {
        Self::from(&p)
    }
}
