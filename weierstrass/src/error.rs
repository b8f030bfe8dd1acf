//! Error type

use core::fmt::{self, Display};

/// Result type with the `weierstrass` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Curve arithmetic errors
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// Integer encoding could not be parsed or does not fit the requested width
    InvalidEncoding,
    /// Field modulus is not an odd prime greater than 3
    InvalidModulus,
    /// Curve coefficient is not a reduced field element
    InvalidCoefficient,
    /// Curve discriminant `4a³ + 27b²` vanishes
    SingularCurve,
    /// Coordinates do not satisfy the curve equation
    PointNotOnCurve,
    /// Group order is not prime or does not annihilate the generator
    InvalidOrder,
    /// Attempted to invert zero
    NotInvertible,
    /// Operation is undefined for the point at infinity
    Identity,
    /// Random number generator failed or never produced a value in range
    RandomSource,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidEncoding => f.write_str("invalid integer encoding"),
            Error::InvalidModulus => f.write_str("field modulus is not an odd prime"),
            Error::InvalidCoefficient => f.write_str("curve coefficient out of range"),
            Error::SingularCurve => f.write_str("curve is singular"),
            Error::PointNotOnCurve => f.write_str("point is not on the curve"),
            Error::InvalidOrder => f.write_str("invalid group order"),
            Error::NotInvertible => f.write_str("element is not invertible"),
            Error::Identity => f.write_str("point at infinity"),
            Error::RandomSource => f.write_str("random number generator failure"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
