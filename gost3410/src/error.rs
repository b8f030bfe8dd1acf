//! Error type

use core::fmt::{self, Display};

/// Result type with the `gost3410` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// GOST R 34.10 errors
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// Domain parameter identifier is not in any known table
    UnsupportedParameterSet,
    /// Digest length, key material or point is invalid
    InvalidInput,
    /// Random number generator failed
    RandomSourceFailure,
    /// Curve or integer arithmetic failed
    ArithmeticFailure,
    /// Signature component `r` or `s` is outside of `[1, q-1]`
    SignatureRangeError,
    /// Signature does not match the digest and public key
    SignatureMismatch,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedParameterSet => f.write_str("unsupported parameter set"),
            Error::InvalidInput => f.write_str("invalid input"),
            Error::RandomSourceFailure => f.write_str("random number generator failure"),
            Error::ArithmeticFailure => f.write_str("arithmetic failure"),
            Error::SignatureRangeError => f.write_str("signature component out of range"),
            Error::SignatureMismatch => f.write_str("signature verification failed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<weierstrass::Error> for Error {
    fn from(err: weierstrass::Error) -> Self {
        match err {
            weierstrass::Error::RandomSource => Error::RandomSourceFailure,
            _ => Error::ArithmeticFailure,
        }
    }
}

impl From<Error> for signature::Error {
    #[cfg(feature = "std")]
    fn from(err: Error) -> Self {
        signature::Error::from_source(err)
    }

    #[cfg(not(feature = "std"))]
    fn from(_: Error) -> Self {
        signature::Error::new()
    }
}
