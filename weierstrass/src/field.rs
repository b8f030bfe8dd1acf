//! Prime field arithmetic with a modulus chosen at runtime.

use crate::{utils, Error, Result};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

/// Prime field 𝔽ₚ whose modulus is only known at runtime.
///
/// Field elements are plain [`BigUint`] values in canonical form, i.e. in
/// the range `[0, p)`. All operations expect canonical inputs and return
/// canonical outputs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeField {
    modulus: BigUint,

    /// p - 2
    modulus_minus_two: BigUint,
}

impl PrimeField {
    /// Create the field of integers modulo `modulus`.
    ///
    /// Returns [`Error::InvalidModulus`] unless `modulus` is an odd probable
    /// prime greater than 3.
    pub fn new(modulus: BigUint) -> Result<Self> {
        if modulus <= BigUint::from(3u32)
            || modulus.is_even()
            || !utils::is_probable_prime(&modulus)
        {
            return Err(Error::InvalidModulus);
        }

        let modulus_minus_two = &modulus - &BigUint::from(2u32);
        Ok(Self {
            modulus,
            modulus_minus_two,
        })
    }

    /// The field modulus `p`.
    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    /// Size of a serialized field element in bytes.
    pub fn byte_len(&self) -> usize {
        (self.modulus.bits() + 7) / 8
    }

    /// Is `value` a canonical field element?
    pub fn contains(&self, value: &BigUint) -> bool {
        value < &self.modulus
    }

    /// Reduce an arbitrary integer into the field.
    pub fn reduce(&self, value: &BigUint) -> BigUint {
        value % &self.modulus
    }

    /// Small integer constant as a field element.
    pub fn from_u32(&self, value: u32) -> BigUint {
        self.reduce(&BigUint::from(value))
    }

    /// Returns `lhs + rhs mod p`.
    pub fn add(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        let sum = lhs + rhs;
        if sum >= self.modulus {
            sum - &self.modulus
        } else {
            sum
        }
    }

    /// Returns `lhs - rhs mod p`.
    pub fn sub(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        if lhs >= rhs {
            lhs - rhs
        } else {
            &self.modulus - &(rhs - lhs)
        }
    }

    /// Returns `lhs * rhs mod p`.
    pub fn mul(&self, lhs: &BigUint, rhs: &BigUint) -> BigUint {
        (lhs * rhs) % &self.modulus
    }

    /// Returns `value² mod p`.
    pub fn square(&self, value: &BigUint) -> BigUint {
        self.mul(value, value)
    }

    /// Returns `-value mod p`.
    pub fn neg(&self, value: &BigUint) -> BigUint {
        if value.is_zero() {
            BigUint::zero()
        } else {
            &self.modulus - value
        }
    }

    /// Returns `value⁻¹ mod p`, computed as `value^(p-2)`.
    pub fn invert(&self, value: &BigUint) -> Result<BigUint> {
        if value.is_zero() {
            return Err(Error::NotInvertible);
        }
        Ok(value.modpow(&self.modulus_minus_two, &self.modulus))
    }
}
