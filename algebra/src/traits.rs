use crate::prelude::*;
use ark_std::fmt::Debug;
use serde::{Deserialize, Serialize};

/// Elements of a prime field, used both as polynomial coefficients and as
/// exponents of the pairing groups.
pub trait Scalar:
    Copy
    + Default
    + Debug
    + Eq
    + Serialize
    + for<'de> Deserialize<'de>
    + One
    + Zero
    + Add<Self, Output = Self>
    + Mul<Self, Output = Self>
    + Sum<Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> MulAssign<&'a Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> Sum<&'a Self>
    + From<u32>
    + From<u64>
    + Neg<Output = Self>
    + Sync
    + Send
{
    /// Sample a uniform field element.
    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self;

    /// Length of the canonical encoding.
    fn bytes_len() -> usize;

    /// Canonical little-endian encoding.
    fn to_bytes(&self) -> Vec<u8>;

    /// Parse a little-endian encoding of exactly [`Scalar::bytes_len`] bytes.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;

    /// Multiplicative inverse, or [`AlgebraError::InversionError`] for zero.
    fn inv(&self) -> Result<Self>;

    /// Invert every element of `values` in place at the cost of one inversion.
    ///
    /// If any element is zero the call fails with
    /// [`AlgebraError::InversionError`] and `values` is left as it was.
    fn batch_inverse(values: &mut [Self]) -> Result<()>;

    fn square(&self) -> Self;

    /// Raise to an exponent given as little-endian `u64` limbs.
    fn pow(&self, exponent: &[u64]) -> Self {
        let mut result = Self::one();
        let mut base = *self;
        for limb in exponent {
            let mut e = *limb;
            for _ in 0..64 {
                if e & 1 == 1 {
                    result.mul_assign(&base);
                }
                base = base.square();
                e >>= 1;
            }
        }
        result
    }

    /// Map a signed integer into the field, so that `-7` becomes `p - 7`.
    fn from_i64(value: i64) -> Self {
        let magnitude = Self::from(value.unsigned_abs());
        if value < 0 {
            magnitude.neg()
        } else {
            magnitude
        }
    }
}

/// A prime-order group written additively.
pub trait Group:
    Debug
    + Default
    + Copy
    + Eq
    + Send
    + Sync
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self::ScalarType, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + Neg<Output = Self>
    + Serialize
    + for<'de> Deserialize<'de>
{
    /// The field of exponents.
    type ScalarType: Scalar;

    /// Length of the compressed encoding.
    const COMPRESSED_LEN: usize;

    fn double(&self) -> Self;

    /// The neutral element.
    fn get_identity() -> Self;

    /// The standard generator.
    fn get_base() -> Self;

    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self;

    fn is_identity(&self) -> bool {
        *self == Self::get_identity()
    }

    fn to_compressed_bytes(&self) -> Vec<u8>;

    /// Parse a compressed encoding, checking that it names a group element.
    fn from_compressed_bytes(bytes: &[u8]) -> Result<Self>;

    /// Scalar multiplication with a Montgomery ladder.
    ///
    /// Every bit of the full-width scalar encoding costs one addition and one
    /// doubling, and the bit only selects operands through [`cswap`], so no
    /// branch depends on the scalar.
    fn ladder_mul(&self, scalar: &Self::ScalarType) -> Self {
        let mut r0 = Self::get_identity();
        let mut r1 = *self;
        for byte in scalar.to_bytes().iter().rev() {
            for i in (0..8).rev() {
                let bit = (byte >> i) & 1;
                cswap(&mut r0, &mut r1, bit);
                r1 = r0.add(&r1);
                r0 = r0.double();
                cswap(&mut r0, &mut r1, bit);
            }
        }
        r0
    }

    /// `sum_i scalars[i] * points[i]`; extra entries of the longer slice are ignored.
    fn multi_exp(scalars: &[&Self::ScalarType], points: &[&Self]) -> Self {
        scalars
            .iter()
            .zip(points.iter())
            .fold(Self::get_identity(), |acc, (s, p)| acc.add(&(**p).mul(*s)))
    }
}

/// Exchange `a` and `b` when `bit` is one, selecting through an index rather than a branch.
#[inline]
pub fn cswap<T: Copy>(a: &mut T, b: &mut T, bit: u8) {
    let pair = [*a, *b];
    let i = (bit & 1) as usize;
    *a = pair[i];
    *b = pair[i ^ 1];
}

/// Two source groups and a target group joined by a bilinear map.
pub trait Pairing {
    /// The common scalar field.
    type ScalarField: Scalar;

    type G1: Group<ScalarType = Self::ScalarField>;

    type G2: Group<ScalarType = Self::ScalarField>;

    /// The target group, written additively like the others.
    type Gt: Group<ScalarType = Self::ScalarField>;

    fn pairing(a: &Self::G1, b: &Self::G2) -> Self::Gt;

    /// `sum_i e(a[i], b[i])` with a single final exponentiation.
    fn product_of_pairings(a: &[Self::G1], b: &[Self::G2]) -> Self::Gt;
}

#[cfg(test)]
pub(crate) mod group_tests {
    use super::cswap;
    use crate::prelude::*;

    pub(crate) fn test_scalar_operations<S: Scalar>() {
        let forty = S::from(40u32);
        let sixty = S::from(60u32);
        assert_eq!(forty.add(&sixty), S::from(100u32));
        let mut acc = S::zero();
        acc.add_assign(&forty);
        acc.add_assign(&sixty);
        assert_eq!(acc, S::from(100u32));

        let ten = S::from(10u32);
        assert_eq!(ten.mul(&forty), S::from(400u32));
        let mut acc = S::one();
        acc.mul_assign(&ten);
        acc.mul_assign(&forty);
        assert_eq!(acc, S::from(400u32));

        let a = S::from(24u32);
        let b = S::from(13u32);
        assert_eq!(a.sub(&b), S::from(11u32));
        assert_eq!(b.sub(&a), S::from(11u32).neg());
        assert_eq!(b.sub(&a).add(&a), b);

        assert_eq!(S::from_i64(-7), S::from(7u32).neg());
        assert_eq!(S::from_i64(-7).add(&S::from(7u32)), S::zero());
        assert_eq!(S::from_i64(42), S::from(42u32));
        assert_eq!(S::from_i64(i64::MIN).neg(), S::from(1u64 << 63));

        let seven = S::from(7u32);
        assert_eq!(seven.inv().unwrap().mul(&seven), S::one());
        assert_eq!(seven.square(), S::from(49u32));
        assert_eq!(seven.pow(&[3]), S::from(343u32));
        assert_eq!(seven.pow(&[0]), S::one());
        assert_eq!(S::zero().inv(), Err(AlgebraError::InversionError));

        let mut prng = test_rng();
        let r = S::random(&mut prng);
        assert_eq!(r.add(&r.neg()), S::zero());
    }

    pub(crate) fn test_batch_inverse<S: Scalar>() {
        let mut prng = test_rng();
        let values: Vec<S> = (0..17).map(|_| S::random(&mut prng)).collect();
        let mut inverses = values.clone();
        S::batch_inverse(&mut inverses).unwrap();
        for (v, i) in values.iter().zip(inverses.iter()) {
            assert_eq!(v.mul(i), S::one());
            assert_eq!(*i, v.inv().unwrap());
        }

        let mut empty: Vec<S> = vec![];
        assert!(S::batch_inverse(&mut empty).is_ok());

        let mut with_zero = vec![S::from(3u32), S::zero(), S::from(5u32)];
        assert_eq!(
            S::batch_inverse(&mut with_zero),
            Err(AlgebraError::InversionError)
        );
        assert_eq!(with_zero, vec![S::from(3u32), S::zero(), S::from(5u32)]);
    }

    pub(crate) fn test_ladder_mul<G: Group>() {
        let mut prng = test_rng();
        let g = G::random(&mut prng);
        for _ in 0..8 {
            let s = G::ScalarType::random(&mut prng);
            assert_eq!(g.ladder_mul(&s), g.mul(&s));
        }
        assert_eq!(g.ladder_mul(&G::ScalarType::zero()), G::get_identity());
        assert_eq!(g.ladder_mul(&G::ScalarType::one()), g);
        assert_eq!(g.ladder_mul(&G::ScalarType::from(2u32)), g.double());

        // runs of equal bits exercise consecutive swaps in both directions
        for pattern in [u64::MAX, 0xaaaa_aaaa_aaaa_aaaa, 0x8000_0000_0000_0001] {
            let s = G::ScalarType::from(pattern);
            assert_eq!(g.ladder_mul(&s), g.mul(&s));
            let s = s.neg();
            assert_eq!(g.ladder_mul(&s), g.mul(&s));
        }
    }

    pub(crate) fn test_multi_exp<G: Group>() {
        let mut prng = test_rng();
        let scalars: Vec<G::ScalarType> = (0..6).map(|_| G::ScalarType::random(&mut prng)).collect();
        let points: Vec<G> = (0..6).map(|_| G::random(&mut prng)).collect();

        let expected = scalars
            .iter()
            .zip(points.iter())
            .fold(G::get_identity(), |acc, (s, p)| acc.add(&p.mul(s)));
        let result = G::multi_exp(
            &scalars.iter().collect::<Vec<_>>(),
            &points.iter().collect::<Vec<_>>(),
        );
        assert_eq!(result, expected);
        assert_eq!(G::multi_exp(&[], &[]), G::get_identity());
    }

    #[test]
    fn cswap_selects_by_bit() {
        let (mut a, mut b) = (1u32, 2u32);
        cswap(&mut a, &mut b, 0);
        assert_eq!((a, b), (1, 2));
        cswap(&mut a, &mut b, 1);
        assert_eq!((a, b), (2, 1));
    }
}
