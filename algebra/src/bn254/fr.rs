use crate::bn254::BN254_SCALAR_LEN;
use crate::prelude::*;
use ark_bn254::Fr;
use ark_ff::{batch_inversion, BigInteger, Field, PrimeField};
use ark_std::{
    fmt::{Debug, Display},
    result::Result as StdResult,
    str::FromStr,
};
use num_bigint::BigUint;
use num_traits::Num;

/// An element of the BN254 scalar field `F_r`.
#[derive(Copy, Clone, PartialEq, Eq, Default, PartialOrd, Ord, Hash)]
pub struct BN254Scalar(pub(crate) Fr);

/// The BN254 scalar field order, in decimal.
pub const BN254_SCALAR_MODULUS: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495617";

impl BN254Scalar {
    fn to_biguint(self) -> BigUint {
        self.0.into_bigint().into()
    }
}

// Field elements print as their canonical representative in decimal.
impl Debug for BN254Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> ark_std::fmt::Result {
        Display::fmt(&self.to_biguint(), f)
    }
}

impl Display for BN254Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> ark_std::fmt::Result {
        Display::fmt(&self.to_biguint(), f)
    }
}

impl FromStr for BN254Scalar {
    type Err = AlgebraError;

    /// Parse a decimal string, reducing it modulo the field order.
    fn from_str(string: &str) -> StdResult<Self, AlgebraError> {
        BigUint::from_str_radix(string, 10)
            .map(|value| Self(Fr::from(value)))
            .map_err(|_| AlgebraError::DeserializationError)
    }
}

impl One for BN254Scalar {
    fn one() -> Self {
        Self(Fr::one())
    }
}

impl Zero for BN254Scalar {
    fn zero() -> Self {
        Self(Fr::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

macro_rules! scalar_binop {
    ($op:ident, $method:ident, $op_assign:ident, $method_assign:ident) => {
        impl $op for BN254Scalar {
            type Output = BN254Scalar;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                Self(self.0.$method(&rhs.0))
            }
        }

        impl<'a> $op<&'a BN254Scalar> for BN254Scalar {
            type Output = BN254Scalar;

            #[inline]
            fn $method(self, rhs: &Self) -> Self {
                Self(self.0.$method(&rhs.0))
            }
        }

        impl<'a> $op_assign<&'a BN254Scalar> for BN254Scalar {
            #[inline]
            fn $method_assign(&mut self, rhs: &Self) {
                self.0.$method_assign(&rhs.0);
            }
        }
    };
}

scalar_binop!(Add, add, AddAssign, add_assign);
scalar_binop!(Sub, sub, SubAssign, sub_assign);
scalar_binop!(Mul, mul, MulAssign, mul_assign);

impl Neg for BN254Scalar {
    type Output = BN254Scalar;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for BN254Scalar {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|x| x.0).sum())
    }
}

impl<'a> Sum<&'a BN254Scalar> for BN254Scalar {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        Self(iter.map(|x| x.0).sum())
    }
}

impl From<u32> for BN254Scalar {
    fn from(value: u32) -> Self {
        Self(Fr::from(value))
    }
}

impl From<u64> for BN254Scalar {
    fn from(value: u64) -> Self {
        Self(Fr::from(value))
    }
}

impl Scalar for BN254Scalar {
    fn random<R: CryptoRng + RngCore>(rng: &mut R) -> Self {
        Self(Fr::rand(rng))
    }

    fn bytes_len() -> usize {
        BN254_SCALAR_LEN
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.0.into_bigint().to_bytes_le()
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > BN254_SCALAR_LEN {
            return Err(AlgebraError::DeserializationError);
        }
        Ok(Self(Fr::from_le_bytes_mod_order(bytes)))
    }

    fn inv(&self) -> Result<Self> {
        self.0
            .inverse()
            .map(Self)
            .ok_or(AlgebraError::InversionError)
    }

    fn batch_inverse(values: &mut [Self]) -> Result<()> {
        // arkworks leaves zeroes in place instead of failing
        if values.iter().any(|v| v.is_zero()) {
            return Err(AlgebraError::InversionError);
        }
        let mut raw: Vec<Fr> = values.iter().map(|v| v.0).collect();
        batch_inversion(&mut raw);
        for (v, inverse) in values.iter_mut().zip(raw) {
            v.0 = inverse;
        }
        Ok(())
    }

    fn square(&self) -> Self {
        Self(self.0.square())
    }

    fn pow(&self, exponent: &[u64]) -> Self {
        Self(self.0.pow(exponent))
    }
}
