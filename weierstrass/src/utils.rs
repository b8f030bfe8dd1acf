//! Integer helpers: parsing, fixed-width encoding, sampling and primality.

use crate::{Error, Result};
use alloc::{vec, vec::Vec};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;
use zeroize::{Zeroize, Zeroizing};

/// Number of consecutive out-of-range draws after which the RNG is
/// considered broken.
const RANDOM_ATTEMPTS: usize = 100;

/// Miller-Rabin witnesses. Deterministic below 3.3 × 10²⁴.
const PRIME_BASES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Parse a big-endian hexadecimal string.
pub fn from_hex(hex: &str) -> Result<BigUint> {
    if hex.is_empty() {
        return Err(Error::InvalidEncoding);
    }
    BigUint::parse_bytes(hex.as_bytes(), 16).ok_or(Error::InvalidEncoding)
}

/// Serialize `value` as a big-endian byte string of exactly `len` bytes.
pub fn to_be_bytes_fixed(value: &BigUint, len: usize) -> Result<Vec<u8>> {
    let bytes = value.to_bytes_be();
    let bytes = if value.is_zero() { &[][..] } else { &bytes[..] };

    if bytes.len() > len {
        return Err(Error::InvalidEncoding);
    }

    let mut out = vec![0u8; len];
    out[len - bytes.len()..].copy_from_slice(bytes);
    Ok(out)
}

/// Draw an integer uniformly at random from `[0, bound)`.
///
/// Candidates are sampled with the bit length of `bound` and rejected when
/// they fall outside the range.
pub fn random_below(rng: &mut impl CryptoRngCore, bound: &BigUint) -> Result<BigUint> {
    if bound.is_zero() {
        return Err(Error::InvalidOrder);
    }

    let bits = bound.bits();
    let len = (bits + 7) / 8;
    let mask = 0xffu8 >> (len * 8 - bits);
    let mut buf = Zeroizing::new(vec![0u8; len]);

    for _ in 0..RANDOM_ATTEMPTS {
        rng.try_fill_bytes(&mut buf).map_err(|_| Error::RandomSource)?;
        buf[0] &= mask;

        let mut candidate = BigUint::from_bytes_be(&buf);
        if &candidate < bound {
            return Ok(candidate);
        }
        candidate.zeroize();
    }

    Err(Error::RandomSource)
}

/// Compute `value⁻¹ mod modulus` for a prime `modulus` via Fermat's little
/// theorem.
pub fn invert_mod_prime(value: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    let two = BigUint::from(2u32);
    if *modulus <= two {
        return Err(Error::InvalidModulus);
    }

    let value = value % modulus;
    if value.is_zero() {
        return Err(Error::NotInvertible);
    }

    Ok(value.modpow(&(modulus - &two), modulus))
}

/// Miller-Rabin probable prime test over a fixed set of small bases.
///
/// This is a sanity check for the tabled domain parameters. The bases are
/// public, so a strong pseudoprime can be constructed to pass it; do not rely
/// on it to vet untrusted moduli or orders.
pub fn is_probable_prime(n: &BigUint) -> bool {
    let one = BigUint::one();
    if *n <= one {
        return false;
    }

    for &base in PRIME_BASES.iter() {
        let base = BigUint::from(base);
        if *n == base {
            return true;
        }
        if (n % &base).is_zero() {
            return false;
        }
    }

    let n_minus_1 = n - &one;
    let mut d = n_minus_1.clone();
    let mut s = 0u32;
    while d.is_even() {
        d >>= 1usize;
        s += 1;
    }

    'witness: for &base in PRIME_BASES.iter() {
        let mut x = BigUint::from(base).modpow(&d, n);
        if x == one || x == n_minus_1 {
            continue;
        }

        for _ in 1..s {
            x = (&x * &x) % n;
            if x == n_minus_1 {
                continue 'witness;
            }
        }

        return false;
    }

    true
}

/// Returns bit `i` of a little-endian byte string, `false` past its end.
#[inline]
pub(crate) fn bit(le_bytes: &[u8], i: usize) -> bool {
    le_bytes
        .get(i / 8)
        .map_or(false, |byte| (byte >> (i % 8)) & 1 == 1)
}
