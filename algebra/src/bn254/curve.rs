use crate::bn254::BN254Scalar;
use crate::prelude::*;
use ark_bn254::{G1Affine, G1Projective, G2Affine, G2Projective};
use ark_ec::{CurveGroup, Group as ArkGroup, VariableBaseMSM};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Compress, Validate};
use ark_std::fmt::{Debug, Display};

/// Wrap an arkworks short-Weierstrass group, kept in projective form, as a [`Group`].
macro_rules! projective_group {
    ($(#[$doc:meta])* $name:ident, $projective:ty, $affine:ty, $compressed_len:expr) => {
        $(#[$doc])*
        #[derive(Copy, Default, Clone, PartialEq, Eq)]
        pub struct $name(pub(crate) $projective);

        impl Debug for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> ark_std::fmt::Result {
                Display::fmt(&self.0.into_affine(), f)
            }
        }

        impl Group for $name {
            type ScalarType = BN254Scalar;
            const COMPRESSED_LEN: usize = $compressed_len;

            fn double(&self) -> Self {
                Self(ArkGroup::double(&self.0))
            }

            fn get_identity() -> Self {
                Self(<$projective>::zero())
            }

            fn get_base() -> Self {
                Self(<$projective>::generator())
            }

            fn random<R: CryptoRng + RngCore>(prng: &mut R) -> Self {
                Self(<$projective>::rand(prng))
            }

            fn to_compressed_bytes(&self) -> Vec<u8> {
                let mut buf = Vec::with_capacity($compressed_len);
                self.0
                    .into_affine()
                    .serialize_with_mode(&mut buf, Compress::Yes)
                    .unwrap();
                buf
            }

            fn from_compressed_bytes(bytes: &[u8]) -> Result<Self> {
                <$affine>::deserialize_with_mode(bytes, Compress::Yes, Validate::Yes)
                    .map(|point| Self(point.into()))
                    .map_err(|_| AlgebraError::DeserializationError)
            }

            /// Pippenger over the affine forms of `points`.
            fn multi_exp(scalars: &[&BN254Scalar], points: &[&Self]) -> Self {
                let exponents: Vec<_> = scalars.iter().map(|s| s.0).collect();
                let projective: Vec<$projective> = points.iter().map(|p| p.0).collect();
                let bases = <$projective>::normalize_batch(&projective);
                Self(<$projective>::msm_unchecked(&bases, &exponents))
            }
        }

        impl<'a> Add<&'a $name> for $name {
            type Output = $name;

            #[inline]
            fn add(self, rhs: &Self) -> Self {
                Self(self.0 + &rhs.0)
            }
        }

        impl<'a> Sub<&'a $name> for $name {
            type Output = $name;

            #[inline]
            fn sub(self, rhs: &Self) -> Self {
                Self(self.0 - &rhs.0)
            }
        }

        impl<'a> AddAssign<&'a $name> for $name {
            #[inline]
            fn add_assign(&mut self, rhs: &Self) {
                self.0 += &rhs.0;
            }
        }

        impl<'a> SubAssign<&'a $name> for $name {
            #[inline]
            fn sub_assign(&mut self, rhs: &Self) {
                self.0 -= &rhs.0;
            }
        }

        impl<'a> Mul<&'a BN254Scalar> for $name {
            type Output = $name;

            #[inline]
            fn mul(self, rhs: &BN254Scalar) -> Self {
                Self(self.0 * rhs.0)
            }
        }

        impl Neg for $name {
            type Output = $name;

            fn neg(self) -> Self {
                Self(-self.0)
            }
        }
    };
}

projective_group!(
    /// A point of the BN254 group G1 over `F_q`.
    BN254G1,
    G1Projective,
    G1Affine,
    32
);

projective_group!(
    /// A point of the BN254 group G2 over `F_q^2`.
    BN254G2,
    G2Projective,
    G2Affine,
    64
);
