//! Low-level GOST R 34.10 primitives.
//!
//! # ⚠️ Warning: Hazmat!
//!
//! YOU PROBABLY DON'T WANT TO USE THESE!
//!
//! These primitives are easy-to-misuse low-level interfaces.
//!
//! If you are an end user / non-expert in cryptography, do not use these!
//! Failure to use them correctly can lead to catastrophic failures including
//! FULL PRIVATE KEY RECOVERY!
//!
//! ## Algorithm
//!
//! ```text
//! S1: calculate e = md mod q, where md is the digest read as a little endian
//!     integer; set e = 1 if e = 0
//! S2: pick a random number k in [0, q-1]
//! S3: calculate the point C = [k]G, return to S2 if C = O
//! S4: calculate r = x(C) mod q, return to S2 if r = 0
//! S5: calculate s = (r*d + k*e) mod q, return to S2 if s = 0
//! S6: the digital signature is (r, s)
//!
//! V1: verify whether r, s in [1, q-1], verification failed if not
//! V2: calculate e as in S1
//! V3: calculate v = e^(-1) mod q
//! V4: calculate z1 = s*v mod q and z2 = -r*v mod q
//! V5: calculate the point C = [z1]G + [z2]Q
//! V6: calculate R = x(C) mod q, verification pass if R = r, otherwise failed
//! ```

use super::{digest_to_scalar, Signature};
use crate::{CurveGroup, Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::CryptoRngCore;
use weierstrass::{
    utils::{invert_mod_prime, random_below},
    AffinePoint,
};
use zeroize::Zeroizing;

/// Sign a prehashed message with the secret scalar `d`.
///
/// The ephemeral scalar `k` is drawn from `rng`. Before multiplying the base
/// point, `q` is added to `k` once, or twice if the sum is still no longer
/// than `q`, so the scalar passed to the point multiplication always has the
/// bit length of `q` plus one.
///
/// Returns [`Error::InvalidInput`] if `digest` is not 32 or 64 bytes long or
/// if `d` is not in `[1, q-1]`, and [`Error::RandomSourceFailure`] if `rng`
/// fails.
pub fn sign_prehashed(
    group: &CurveGroup,
    d: &BigUint,
    digest: &[u8],
    rng: &mut impl CryptoRngCore,
) -> Result<Signature> {
    let order = group.order();
    if d.is_zero() || d >= order {
        return Err(Error::InvalidInput);
    }

    // S1: calculate e = md mod q; set e = 1 if e = 0
    let e = digest_to_scalar(digest, order)?;

    loop {
        let (k, r) = loop {
            // S2: pick a random number k in [0, q-1]
            let k = Zeroizing::new(random_below(rng, order)?);

            let mut blinded = Zeroizing::new(&*k + order);
            if blinded.bits() <= order.bits() {
                *blinded += order;
            }

            // S3: calculate the point C = [k]G, return to S2 if C = O
            let point = group.arithmetic().mul_generator(&blinded);
            if point.is_identity() {
                trace!("nonce produced the identity, retrying");
                continue;
            }

            // S4: calculate r = x(C) mod q, return to S2 if r = 0
            let r = group.arithmetic().affine_x(&point)? % order;
            if r.is_zero() {
                trace!("r is zero, retrying");
                continue;
            }

            break (k, r);
        };

        // S5: calculate s = (r*d + k*e) mod q, return to S2 if s = 0
        let rd = Zeroizing::new(&r * d);
        let ke = Zeroizing::new(&*k * &e);
        let s = (&*rd + &*ke) % order;
        if s.is_zero() {
            trace!("s is zero, retrying");
            continue;
        }

        // S6: the digital signature is (r, s)
        return Ok(Signature::new(r, s));
    }
}

/// Verify a signature over a prehashed message against the public point `q`.
///
/// Returns `Ok(())` if the signature is valid,
/// [`Error::SignatureMismatch`] if it is not, and
/// [`Error::SignatureRangeError`] if `r` or `s` is outside of `[1, q-1]`.
/// A combined point at infinity is reported as a mismatch.
///
/// The caller is responsible for `public_key` being a point of `group`'s
/// prime order subgroup, as is the case for every
/// [`PublicKey`][crate::PublicKey].
pub fn verify_prehashed(
    group: &CurveGroup,
    public_key: &AffinePoint,
    digest: &[u8],
    signature: &Signature,
) -> Result<()> {
    let order = group.order();
    let (r, s) = (signature.r(), signature.s());

    // V1: verify whether r, s in [1, q-1], verification failed if not
    if r.is_zero() || r >= order || s.is_zero() || s >= order {
        return Err(Error::SignatureRangeError);
    }

    // V2: calculate e as in S1
    let e = digest_to_scalar(digest, order)?;

    // V3: calculate v = e^(-1) mod q
    let v = invert_mod_prime(&e, order)?;

    // V4: calculate z1 = s*v mod q and z2 = -r*v mod q
    let z1 = (s * &v) % order;
    let z2 = ((order - r) * &v) % order;

    // V5: calculate the point C = [z1]G + [z2]Q
    let point = group.arithmetic().lincomb(&z1, public_key, &z2);
    if point.is_identity() {
        return Err(Error::SignatureMismatch);
    }

    // V6: calculate R = x(C) mod q, verification pass if R = r
    let x = group.arithmetic().affine_x(&point)?;
    let big_r = &x % order;

    trace!("v: {:X}", v);
    trace!("z1: {:X}", z1);
    trace!("z2: {:X}", z2);
    trace!("X: {:X}", x);
    trace!("R: {:X}", big_r);

    if &big_r == r {
        Ok(())
    } else {
        Err(Error::SignatureMismatch)
    }
}
