use crate::bn254::{BN254PairingEngine, BN254Scalar, BN254G1, BN254G2};
use crate::prelude::*;
use ark_bn254::Fq12;
use ark_ff::{Field, PrimeField};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Compress, Validate};

/// An element of the pairing target group, the order-`r` subgroup of `F_q^12`.
///
/// The group law is written additively: `+` multiplies in `F_q^12`, `-` multiplies
/// by the conjugate (the inverse on the cyclotomic subgroup) and scalar
/// multiplication is exponentiation.
#[derive(Copy, Default, Clone, PartialEq, Eq, Debug)]
pub struct BN254Gt(pub(crate) Fq12);

impl BN254Gt {
    fn conjugate(&self) -> Fq12 {
        let mut conjugate = self.0;
        conjugate.conjugate_in_place();
        conjugate
    }
}

impl Neg for BN254Gt {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.conjugate())
    }
}

impl<'a> Add<&'a BN254Gt> for BN254Gt {
    type Output = BN254Gt;

    fn add(self, rhs: &Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl<'a> AddAssign<&'a BN254Gt> for BN254Gt {
    fn add_assign(&mut self, rhs: &Self) {
        self.0 *= rhs.0;
    }
}

impl<'a> Sub<&'a BN254Gt> for BN254Gt {
    type Output = BN254Gt;

    fn sub(self, rhs: &Self) -> Self {
        Self(self.0 * rhs.conjugate())
    }
}

impl<'a> SubAssign<&'a BN254Gt> for BN254Gt {
    fn sub_assign(&mut self, rhs: &Self) {
        self.0 *= rhs.conjugate();
    }
}

impl<'a> Mul<&'a BN254Scalar> for BN254Gt {
    type Output = BN254Gt;

    fn mul(self, rhs: &BN254Scalar) -> Self {
        Self(self.0.pow(rhs.0.into_bigint()))
    }
}

impl Group for BN254Gt {
    type ScalarType = BN254Scalar;

    // twelve base-field coordinates of 32 bytes; F_q^12 has no point compression
    const COMPRESSED_LEN: usize = 384;

    fn double(&self) -> Self {
        Self(self.0.square())
    }

    fn get_identity() -> Self {
        Self(Fq12::one())
    }

    fn get_base() -> Self {
        BN254PairingEngine::pairing(&BN254G1::get_base(), &BN254G2::get_base())
    }

    fn random<R: CryptoRng + RngCore>(prng: &mut R) -> Self {
        BN254PairingEngine::pairing(&BN254G1::random(prng), &BN254G2::get_base())
    }

    fn to_compressed_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::COMPRESSED_LEN);
        self.0.serialize_with_mode(&mut buf, Compress::Yes).unwrap();
        buf
    }

    fn from_compressed_bytes(bytes: &[u8]) -> Result<Self> {
        Fq12::deserialize_with_mode(bytes, Compress::Yes, Validate::Yes)
            .map(Self)
            .map_err(|_| AlgebraError::DeserializationError)
    }
}
