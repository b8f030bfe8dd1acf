//! GOST R 34.10 Digital Signature Algorithm as defined in [RFC 7091 § 6].
//!
//! Signing and verification operate on a message digest computed by the
//! caller (GOST R 34.11-2012 "Streebog" with a 256 or 512 bit output for the
//! corresponding key size), through the [`signature`] crate's prehash traits.
//!
//! ## Usage
//!
#![cfg_attr(all(feature = "getrandom", feature = "std"), doc = "```")]
#![cfg_attr(not(all(feature = "getrandom", feature = "std")), doc = "```ignore")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use gost3410::{
//!     dsa::{signature::hazmat::{PrehashSigner, PrehashVerifier}, Signature, SigningKey},
//!     CurveGroup, ObjectIdentifier,
//! };
//! use rand_core::OsRng; // requires 'getrandom` feature
//!
//! // id-tc26-gost-3410-2012-256-paramSetB
//! let group = CurveGroup::from_oid(&ObjectIdentifier::new("1.2.643.7.1.2.1.1.2")?)?;
//!
//! // Signing
//! let signing_key = SigningKey::random(&group, &mut OsRng)?;
//! let digest = [0x42u8; 32]; // Streebog-256 output of the message
//! let signature: Signature = signing_key.sign_prehash(&digest)?;
//!
//! // Verifying
//! let verifying_key = signing_key.verifying_key();
//! verifying_key.verify_prehash(&digest, &signature)?;
//! # Ok(())
//! # }
//! ```
//!
//! [RFC 7091 § 6]: https://datatracker.ietf.org/doc/html/rfc7091#section-6

pub mod hazmat;

mod signing;
mod verifying;

pub use signature;

pub use self::{signing::SigningKey, verifying::VerifyingKey};

use crate::{Error, Result};
use core::fmt::{self, Debug};
use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Digest lengths accepted by the signer and verifier: Streebog-256 and
/// Streebog-512.
pub const DIGEST_SIZES: [usize; 2] = [32, 64];

/// GOST R 34.10 signature.
///
/// A pair of integers `(r, s)`. Signatures produced by this crate have both
/// components in `[1, q-1]`; arbitrary values may be constructed for
/// verification, which checks the range itself.
#[derive(Clone, Eq, PartialEq)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Create a [`Signature`] from its `r` and `s` components.
    pub fn new(r: BigUint, s: BigUint) -> Self {
        Self { r, s }
    }

    /// Get the `r` component of this signature.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// Get the `s` component of this signature.
    pub fn s(&self) -> &BigUint {
        &self.s
    }

    /// Split the signature into its `r` and `s` components.
    pub fn into_parts(self) -> (BigUint, BigUint) {
        (self.r, self.s)
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gost3410::dsa::Signature(r={:X}, s={:X})", self.r, self.s)
    }
}

/// Interpret a digest as a little endian integer and reduce it modulo the
/// group order, mapping zero to one.
pub(crate) fn digest_to_scalar(digest: &[u8], order: &BigUint) -> Result<BigUint> {
    if !DIGEST_SIZES.contains(&digest.len()) {
        return Err(Error::InvalidInput);
    }

    let md = BigUint::from_bytes_le(digest);
    let mut e = &md % order;
    if e.is_zero() {
        e = BigUint::one();
    }

    trace!("digest as integer: {:X}", md);
    trace!("e: {:X}", e);
    Ok(e)
}
