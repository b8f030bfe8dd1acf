//! Curve group bound to a named parameter set.

use crate::{params, DomainParameters, Result};
use const_oid::ObjectIdentifier;
use num_bigint::BigUint;
use weierstrass::{utils::from_hex, Curve, Group};

/// Prime order subgroup of a GOST R 34.10 curve, tagged with the parameter
/// set it was constructed from.
#[derive(Clone, Debug)]
pub struct CurveGroup {
    params: DomainParameters,
    group: Group,
}

impl CurveGroup {
    /// Construct the curve group described by `params`.
    ///
    /// Returns [`Error::ArithmeticFailure`][crate::Error::ArithmeticFailure]
    /// if a parameter fails to parse or does not describe a valid prime order
    /// group.
    pub fn new(params: &DomainParameters) -> Result<Self> {
        let curve = Curve::new(from_hex(params.p)?, from_hex(params.a)?, from_hex(params.b)?)?;
        let generator = curve.point(from_hex(params.x)?, from_hex(params.y)?)?;
        let group = Group::new(curve, generator, from_hex(params.q)?)?;

        let group = Self {
            params: *params,
            group,
        };

        debug!(
            name = params.name,
            field_size = group.field_size(),
            "bound curve group"
        );

        Ok(group)
    }

    /// Resolve a parameter set by object identifier and construct its group.
    pub fn from_oid(oid: &ObjectIdentifier) -> Result<Self> {
        Self::new(params::resolve(oid)?)
    }

    /// Parameter set this group was constructed from.
    pub fn params(&self) -> &DomainParameters {
        &self.params
    }

    /// Object identifier of the parameter set.
    pub fn oid(&self) -> ObjectIdentifier {
        self.params.oid
    }

    /// Order `q` of the base point.
    pub fn order(&self) -> &BigUint {
        self.group.order()
    }

    /// Size of a field element in bytes: 32 or 64.
    pub fn field_size(&self) -> usize {
        self.group.curve().field().byte_len()
    }

    /// Bit length of the order `q`.
    pub fn order_bits(&self) -> usize {
        self.group.order().bits()
    }

    /// Size of a serialized scalar in bytes.
    pub fn scalar_size(&self) -> usize {
        (self.order_bits() + 7) / 8
    }

    /// Underlying curve arithmetic.
    pub(crate) fn arithmetic(&self) -> &Group {
        &self.group
    }
}

impl PartialEq for CurveGroup {
    fn eq(&self, other: &Self) -> bool {
        self.group == other.group
    }
}

impl Eq for CurveGroup {}
