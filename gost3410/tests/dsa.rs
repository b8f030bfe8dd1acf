//! GOST R 34.10 signature tests.

use core::num::NonZeroU32;
use gost3410::{
    dsa::{
        hazmat::{sign_prehashed, verify_prehashed},
        signature::{
            hazmat::{PrehashSigner, PrehashVerifier, RandomizedPrehashSigner},
            Keypair,
        },
        Signature, SigningKey, VerifyingKey,
    },
    params, BigUint, CurveGroup, Error, PublicKey, SecretKey,
};
use hex_literal::hex;
use proptest::prelude::*;
use rand_core::{impls, CryptoRng, OsRng, RngCore};

/// Yields the same big endian integer on every draw, right-aligned in the
/// requested buffer.
struct NonceRng<'a>(&'a [u8]);

impl RngCore for NonceRng<'_> {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
        let offset = dest.len() - self.0.len();
        dest[offset..].copy_from_slice(self.0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for NonceRng<'_> {}

/// Always fails.
struct FailingRng;

impl RngCore for FailingRng {
    fn next_u32(&mut self) -> u32 {
        impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.try_fill_bytes(dest).unwrap()
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
        let code = NonZeroU32::new(rand_core::Error::CUSTOM_START).unwrap();
        Err(rand_core::Error::from(code))
    }
}

impl CryptoRng for FailingRng {}

fn test_group() -> CurveGroup {
    CurveGroup::new(&params::GOST_2001_TEST).unwrap()
}

fn uint(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

// RFC 7091 section 7.1, GOST R 34.10-2001 test parameter set.
const RFC_SECRET: [u8; 32] =
    hex!("7A929ADE789BB9BE10ED359DD39A72C11B60961F49397EEE1D19CE9891EC3B28");
const RFC_NONCE: [u8; 32] =
    hex!("77105C9B20BCD3122823C8CF6FCC7B956DE33814E95B7FE64FED924594DCEAB3");
/// Digest whose little endian value is `e = 2DFBC1B3...2B043EE5`.
const RFC_DIGEST: [u8; 32] =
    hex!("E53E042B67E6EC678E2E02B12A0352CE1FC6EEE0529CC088119AD872B3C1FB2D");
const RFC_PUBLIC_X: [u8; 32] =
    hex!("7F2B49E270DB6D90D8595BEC458B50C58585BA1D4E9B788F6689DBD8E56FD80B");
const RFC_PUBLIC_Y: [u8; 32] =
    hex!("26F1B489D6701DD185C8413A977B3CBBAF64D1C593D26627DFFB101A87FF77DA");
const RFC_R: [u8; 32] = hex!("41AA28D2F1AB148280CD9ED56FEDA41974053554A42767B83AD043FD39DC0493");
const RFC_S: [u8; 32] = hex!("01456C64BA4642A1653C235A98A60249BCD6D3F746B631DF928014F6C5BF9C40");

#[test]
fn rfc7091_known_answer() {
    let group = test_group();
    let sk = SigningKey::from_slice(&group, &RFC_SECRET).unwrap();

    let q = sk.verifying_key().as_affine();
    assert_eq!(q.x().unwrap(), &uint(&RFC_PUBLIC_X));
    assert_eq!(q.y().unwrap(), &uint(&RFC_PUBLIC_Y));

    let signature = sk
        .sign_prehash_with_rng(&mut NonceRng(&RFC_NONCE), &RFC_DIGEST)
        .unwrap();
    assert_eq!(signature.r(), &uint(&RFC_R));
    assert_eq!(signature.s(), &uint(&RFC_S));

    assert!(sk.verifying_key().verify_prehash(&RFC_DIGEST, &signature).is_ok());
}

const TOY_R: [u8; 32] = hex!("6C0AA00CEF1A9E069E5BDC20A7FAF7EC1085582B0932D9DBA49915809006216C");
const TOY_S: [u8; 32] = hex!("7D0EF30C7042CCD0C06CE736D46C560D2E0B68B7A556A0E1931DA927C632E8A4");
const TOY_PUBLIC_X: [u8; 32] =
    hex!("6DA051E7ABB1AF984FA7128D7D4DEAEBEAB478BE37CD923656F843A4F57664AD");
const TOY_PUBLIC_Y: [u8; 32] =
    hex!("39D9214252DA75634A43BB1B41580640ADA175A8DC592118588746DC3C587E29");

fn toy_digest() -> [u8; 32] {
    core::array::from_fn(|i| i as u8 + 1)
}

#[test]
fn small_scalar_known_answer() {
    let group = test_group();
    let d = BigUint::from(5u32);
    let digest = toy_digest();

    let signature = sign_prehashed(&group, &d, &digest, &mut NonceRng(&[7])).unwrap();
    assert_eq!(signature.r(), &uint(&TOY_R));
    assert_eq!(signature.s(), &uint(&TOY_S));

    let public_key = SecretKey::from_scalar(&group, d).unwrap().public_key();
    assert_eq!(public_key.as_affine().x().unwrap(), &uint(&TOY_PUBLIC_X));
    assert_eq!(public_key.as_affine().y().unwrap(), &uint(&TOY_PUBLIC_Y));

    assert_eq!(
        verify_prehashed(&group, public_key.as_affine(), &digest, &signature),
        Ok(())
    );

    let mut perturbed = digest;
    perturbed[31] ^= 1;
    assert_eq!(
        verify_prehashed(&group, public_key.as_affine(), &perturbed, &signature),
        Err(Error::SignatureMismatch)
    );
}

#[test]
fn zero_nonce_is_redrawn() {
    struct SequenceRng(Vec<u8>);

    impl RngCore for SequenceRng {
        fn next_u32(&mut self) -> u32 {
            impls::next_u32_via_fill(self)
        }

        fn next_u64(&mut self) -> u64 {
            impls::next_u64_via_fill(self)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
            if let Some(last) = dest.last_mut() {
                *last = self.0.remove(0);
            }
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
            self.fill_bytes(dest);
            Ok(())
        }
    }

    impl CryptoRng for SequenceRng {}

    // k = 0 yields the identity and must be replaced by the next draw, k = 7.
    let group = test_group();
    let signature = sign_prehashed(
        &group,
        &BigUint::from(5u32),
        &toy_digest(),
        &mut SequenceRng(vec![0, 7]),
    )
    .unwrap();
    assert_eq!(signature.r(), &uint(&TOY_R));
    assert_eq!(signature.s(), &uint(&TOY_S));
}

#[test]
fn digest_length_is_checked() {
    let group = test_group();
    let sk = SigningKey::random(&group, &mut OsRng).unwrap();
    let d = sk.as_secret_key().as_scalar();

    for len in [0usize, 16, 20, 31, 33, 48, 63, 65, 128] {
        let digest = vec![0xa5u8; len];
        assert_eq!(
            sign_prehashed(&group, d, &digest, &mut OsRng).err(),
            Some(Error::InvalidInput),
            "{len}"
        );
    }

    let signature = sk.sign_prehash(&[0xa5u8; 32]).unwrap();
    assert_eq!(
        sk.verifying_key().verify_digest(&[0xa5u8; 31], &signature),
        Err(Error::InvalidInput)
    );
}

#[test]
fn signs_64_byte_digests() {
    let group = test_group();
    let sk = SigningKey::random(&group, &mut OsRng).unwrap();
    let digest = [0x5au8; 64];
    let signature = sk.sign_prehash(&digest).unwrap();
    assert!(sk.verifying_key().verify_prehash(&digest, &signature).is_ok());
}

#[test]
fn signature_range_is_checked() {
    let group = test_group();
    let vk = SigningKey::random(&group, &mut OsRng)
        .unwrap()
        .verifying_key()
        .clone();
    let digest = toy_digest();
    let q = group.order().clone();
    let one = BigUint::from(1u32);

    for signature in [
        Signature::new(BigUint::from(0u32), one.clone()),
        Signature::new(one.clone(), BigUint::from(0u32)),
        Signature::new(q.clone(), one.clone()),
        Signature::new(one.clone(), q.clone()),
        Signature::new(&q + &one, one.clone()),
    ] {
        assert_eq!(
            vk.verify_digest(&digest, &signature),
            Err(Error::SignatureRangeError),
            "{signature:?}"
        );
        assert!(vk.verify_prehash(&digest, &signature).is_err());
    }

    // Range is checked before the digest.
    assert_eq!(
        vk.verify_digest(&[0u8; 7], &Signature::new(BigUint::from(0u32), one)),
        Err(Error::SignatureRangeError)
    );
}

#[test]
fn secret_scalar_range_is_checked() {
    let group = test_group();
    let digest = toy_digest();
    assert_eq!(
        sign_prehashed(&group, &BigUint::from(0u32), &digest, &mut OsRng).err(),
        Some(Error::InvalidInput)
    );
    assert_eq!(
        sign_prehashed(&group, group.order(), &digest, &mut OsRng).err(),
        Some(Error::InvalidInput)
    );
}

#[test]
fn digest_reducing_to_zero_signs_as_one() {
    let group = test_group();
    let d = BigUint::from(5u32);
    let public_key = SecretKey::from_scalar(&group, d.clone()).unwrap().public_key();

    let mut one = [0u8; 32];
    one[0] = 1;
    let expected = sign_prehashed(&group, &d, &one, &mut NonceRng(&[7])).unwrap();

    let mut order_le = group.order().to_bytes_le();
    order_le.resize(32, 0);

    for digest in [[0u8; 32].to_vec(), order_le] {
        let signature = sign_prehashed(&group, &d, &digest, &mut NonceRng(&[7])).unwrap();
        assert_eq!(signature, expected);
        assert_eq!(
            verify_prehashed(&group, public_key.as_affine(), &digest, &signature),
            Ok(())
        );
    }
}

#[test]
fn random_source_failure() {
    let group = test_group();
    let digest = toy_digest();

    assert_eq!(
        sign_prehashed(&group, &BigUint::from(5u32), &digest, &mut FailingRng).err(),
        Some(Error::RandomSourceFailure)
    );
    assert_eq!(
        SecretKey::random(&group, &mut FailingRng).err(),
        Some(Error::RandomSourceFailure)
    );

    let sk = SigningKey::from_slice(&group, &RFC_SECRET).unwrap();
    assert!(sk.sign_prehash_with_rng(&mut FailingRng, &digest).is_err());
}

#[test]
fn random_source_out_of_range() {
    // 0xFF.. is larger than every 256-bit order, so no draw is ever accepted.
    let group = test_group();
    let digest = toy_digest();
    let mut rng = NonceRng(&[0xff; 32]);

    assert_eq!(
        sign_prehashed(&group, &BigUint::from(5u32), &digest, &mut rng).err(),
        Some(Error::RandomSourceFailure)
    );
    assert_eq!(
        SecretKey::random(&group, &mut rng).err(),
        Some(Error::RandomSourceFailure)
    );
}

#[test]
fn two_signatures_differ() {
    let group = test_group();
    let sk = SigningKey::random(&group, &mut OsRng).unwrap();
    let digest = toy_digest();

    let sig1 = sk.sign_prehash(&digest).unwrap();
    let sig2 = sk.sign_prehash(&digest).unwrap();
    assert_ne!(sig1, sig2);
    assert!(sk.verifying_key().verify_prehash(&digest, &sig1).is_ok());
    assert!(sk.verifying_key().verify_prehash(&digest, &sig2).is_ok());
}

#[test]
fn sign_and_verify_every_parameter_set() {
    for params in params::DomainParameters::all() {
        let group = CurveGroup::new(params).unwrap();
        let sk = SigningKey::random(&group, &mut OsRng).unwrap();
        let digest = vec![0x3cu8; group.field_size()];

        let signature = sk.sign_prehash(&digest).unwrap();
        assert_eq!(
            sk.verifying_key().verify_digest(&digest, &signature),
            Ok(()),
            "{}",
            params.name
        );
    }
}

#[test]
fn wrong_key_is_rejected() {
    let group = test_group();
    let sk = SigningKey::random(&group, &mut OsRng).unwrap();
    let other = SigningKey::random(&group, &mut OsRng).unwrap();
    let digest = toy_digest();

    let signature = sk.sign_prehash(&digest).unwrap();
    assert_eq!(
        other.verifying_key().verify_digest(&digest, &signature),
        Err(Error::SignatureMismatch)
    );
}

#[test]
fn keypair_and_conversions() {
    let group = test_group();
    let secret_key = SecretKey::random(&group, &mut OsRng).unwrap();
    let public_key = PublicKey::from_secret_key(&secret_key);
    assert_eq!(public_key, secret_key.public_key());

    let sk = SigningKey::from(secret_key.clone());
    assert_eq!(sk.as_secret_key(), &secret_key);
    assert_eq!(Keypair::verifying_key(&sk), VerifyingKey::new(public_key.clone()));
    assert_eq!(PublicKey::from(sk.verifying_key()), public_key);
    assert_eq!(sk, SigningKey::from_secret_key(secret_key));
}

#[test]
fn public_key_outside_subgroup_is_rejected() {
    // A point on the id-tc26-gost-3410-2012-256-paramSetA curve (cofactor 4)
    // whose order is not q.
    let group = CurveGroup::new(&params::TC26_256_A).unwrap();
    let x = BigUint::from(8u32);
    let y = uint(&hex!(
        "ED3581BEC3A800B4E42F823268B76D5802FF206853353B55A2B91452F2ADFD07"
    ));

    assert_eq!(
        VerifyingKey::from_affine(&group, x, y).err(),
        Some(Error::InvalidInput)
    );
}

prop_compose! {
    fn signing_key()(bytes in any::<[u8; 32]>()) -> SigningKey {
        let group = test_group();
        let mut d = BigUint::from_bytes_be(&bytes) % group.order();
        if d == BigUint::from(0u32) {
            d = BigUint::from(1u32);
        }
        SigningKey::from_secret_key(SecretKey::from_scalar(&group, d).unwrap())
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn sign_and_verify(sk in signing_key(), digest in any::<[u8; 32]>()) {
        let signature = sk.sign_prehash(&digest).unwrap();
        prop_assert!(sk.verifying_key().verify_prehash(&digest, &signature).is_ok());
    }

    #[test]
    fn reject_invalid_signature(
        sk in signing_key(),
        digest in any::<[u8; 32]>(),
        component in 0usize..2,
        bit in 0usize..256,
    ) {
        let signature = sk.sign_prehash(&digest).unwrap();
        let (mut r, mut s) = signature.into_parts();

        // tweak signature to make it invalid
        let flip = BigUint::from(1u32) << bit;
        if component == 0 {
            r ^= &flip;
        } else {
            s ^= &flip;
        }

        let result = sk.verifying_key().verify_digest(&digest, &Signature::new(r, s));
        prop_assert!(matches!(
            result,
            Err(Error::SignatureMismatch) | Err(Error::SignatureRangeError)
        ));
    }

    #[test]
    fn reject_modified_digest(
        sk in signing_key(),
        digest in any::<[u8; 32]>(),
        byte in 0usize..32,
        bit in 0usize..8,
    ) {
        let signature = sk.sign_prehash(&digest).unwrap();

        let mut modified = digest;
        modified[byte] ^= 1 << bit;

        let result = sk.verifying_key().verify_digest(&modified, &signature);
        prop_assert_eq!(result, Err(Error::SignatureMismatch));
    }

    #[test]
    fn generated_keys_are_valid(seed in any::<[u8; 32]>()) {
        // An all-zero source would be redrawn forever.
        prop_assume!(seed != [0u8; 32]);

        let group = test_group();
        let mut rng = NonceRng(&seed);
        match SecretKey::random(&group, &mut rng) {
            Ok(sk) => {
                prop_assert!(sk.as_scalar() > &BigUint::from(0u32));
                prop_assert!(sk.as_scalar() < group.order());
                prop_assert_eq!(sk.as_scalar(), &BigUint::from_bytes_be(&seed));

                let public_key = sk.public_key();
                let x = public_key.as_affine().x().unwrap().clone();
                let y = public_key.as_affine().y().unwrap().clone();
                prop_assert_eq!(PublicKey::from_affine(&group, x, y), Ok(public_key));
            }
            // Out of range on every draw: the sampler gives up.
            Err(err) => prop_assert_eq!(err, Error::RandomSourceFailure),
        }
    }
}
