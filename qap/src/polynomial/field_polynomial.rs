use crate::errors::{QapError, Result};
use qapsnark_algebra::prelude::*;

/// Field polynomial in coefficient form.
///
/// The coefficient vector is never empty and carries no high-order zeroes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawCoefficients<F>")]
#[serde(bound(serialize = "F: Scalar", deserialize = "F: Scalar"))]
pub struct FpPolynomial<F> {
    coefs: Vec<F>,
}

/// Coefficients read from storage, trimmed on the way in.
#[derive(Deserialize)]
#[serde(bound(deserialize = "F: Scalar"))]
struct RawCoefficients<F> {
    coefs: Vec<F>,
}

impl<F: Scalar> From<RawCoefficients<F>> for FpPolynomial<F> {
    fn from(raw: RawCoefficients<F>) -> Self {
        Self::from_coefs(raw.coefs)
    }
}

impl<F: Scalar> FpPolynomial<F> {
    /// Return the polynomial coefs reference.
    pub fn get_coefs_ref(&self) -> &[F] {
        self.coefs.as_slice()
    }

    /// Return the constant zero polynomial
    pub fn zero() -> Self {
        Self::from_coefs(vec![F::zero()])
    }

    /// Return the constant one polynomial
    pub fn one() -> Self {
        Self::from_coefs(vec![F::one()])
    }

    /// Build a polynomial from the coefficient vector, low-order coefficient first.
    /// High-order zero coefficient are trimmed.
    /// # Example
    /// ```
    /// use qapsnark::polynomial::FpPolynomial;
    /// use qapsnark_algebra::bn254::BN254Scalar;
    /// use qapsnark_algebra::prelude::*;
    /// let zero = BN254Scalar::zero();
    /// let one = BN254Scalar::one();
    /// let two = one.add(&one);
    /// let poly = FpPolynomial::from_coefs(vec![one, zero, one]);
    /// assert_eq!(poly.degree(), 2);
    /// assert_eq!(poly.eval(&two), BN254Scalar::from(5u32));
    /// let padded = FpPolynomial::from_coefs(vec![one, zero, one, zero, zero]);
    /// assert_eq!(poly, padded);
    /// ```
    pub fn from_coefs(coefs: Vec<F>) -> Self {
        let mut p = FpPolynomial { coefs };
        p.trim_coefs();
        p
    }

    /// Build the monic polynomial `(X - z_1)...(X - z_n)` from its zeroes.
    pub fn from_zeroes(zeroes: &[F]) -> Self {
        let mut r = Self::one();
        for root in zeroes.iter() {
            let mut p = r.clone();
            r.coefs.insert(0, F::zero());
            p.mul_scalar_assign(root);
            r.sub_assign(&p);
        }
        r
    }

    fn trim_coefs(&mut self) {
        while self.coefs.len() > 1 && self.coefs.last().map_or(false, |c| c.is_zero()) {
            self.coefs.pop();
        }
        if self.coefs.is_empty() {
            self.coefs.push(F::zero());
        }
    }

    /// Return degree of the polynomial. The zero polynomial has degree 0.
    pub fn degree(&self) -> usize {
        self.coefs.len().saturating_sub(1)
    }

    /// Test if polynomial is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.degree() == 0 && self.coefs[0].is_zero()
    }

    /// Evaluate a polynomial on a point with Horner's rule.
    pub fn eval(&self, point: &F) -> F {
        self.coefs
            .iter()
            .rev()
            .fold(F::zero(), |acc, coef| acc.mul(point).add(coef))
    }

    /// Add another polynomial to self.
    pub fn add_assign(&mut self, other: &Self) {
        for (self_coef, other_coef) in self.coefs.iter_mut().zip(other.coefs.iter()) {
            self_coef.add_assign(other_coef);
        }
        let n = self.coefs.len();
        if n < other.coefs.len() {
            self.coefs.extend_from_slice(&other.coefs[n..]);
        }
        self.trim_coefs();
    }

    /// Add with another polynomial, producing a new polynomial.
    pub fn add(&self, other: &Self) -> Self {
        let mut new = self.clone();
        new.add_assign(other);
        new
    }

    /// Subtracts another polynomial from self.
    pub fn sub_assign(&mut self, other: &Self) {
        for (self_coef, other_coef) in self.coefs.iter_mut().zip(other.coefs.iter()) {
            self_coef.sub_assign(other_coef);
        }
        let n = self.coefs.len();
        if other.coefs.len() > n {
            self.coefs
                .extend(other.coefs[n..].iter().map(|other_coef| other_coef.neg()));
        }
        self.trim_coefs();
    }

    /// Subtract another polynomial from self, producing a new polynomial.
    pub fn sub(&self, other: &Self) -> Self {
        let mut new = self.clone();
        new.sub_assign(other);
        new
    }

    /// Negate the coefficients.
    pub fn neg(&self) -> Self {
        Self::from_coefs(self.coefs.iter().map(|c| c.neg()).collect())
    }

    /// Multiply polynomial by a constant scalar.
    pub fn mul_scalar_assign(&mut self, scalar: &F) {
        for coef in self.coefs.iter_mut() {
            coef.mul_assign(scalar)
        }
        self.trim_coefs();
    }

    /// Multiply polynomial by a constant scalar into a new polynomial.
    pub fn mul_scalar(&self, scalar: &F) -> Self {
        let mut new = self.clone();
        new.mul_scalar_assign(scalar);
        new
    }

    /// Schoolbook product of two polynomials.
    /// # Example
    /// ```
    /// use qapsnark::polynomial::FpPolynomial;
    /// use qapsnark_algebra::bn254::BN254Scalar;
    /// use qapsnark_algebra::prelude::*;
    /// let three = BN254Scalar::from(3u32);
    /// let seven = BN254Scalar::from(7u32);
    /// let x_minus_3 = FpPolynomial::from_zeroes(&[three]);
    /// let x_minus_7 = FpPolynomial::from_zeroes(&[seven]);
    /// assert_eq!(x_minus_3.mul(&x_minus_7), FpPolynomial::from_zeroes(&[three, seven]));
    /// ```
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let mut coefs = vec![F::zero(); self.coefs.len() + other.coefs.len() - 1];
        for (i, a) in self.coefs.iter().enumerate() {
            for (j, b) in other.coefs.iter().enumerate() {
                coefs[i + j].add_assign(&a.mul(b));
            }
        }
        Self::from_coefs(coefs)
    }

    /// Divide polynomial to produce the quotient and remainder polynomials.
    ///
    /// Fails with [`QapError::NotInvertible`] when dividing by the zero polynomial.
    /// # Example
    /// ```
    /// use qapsnark::polynomial::FpPolynomial;
    /// use qapsnark_algebra::bn254::BN254Scalar;
    /// use qapsnark_algebra::prelude::*;
    /// let zero = BN254Scalar::zero();
    /// let one = BN254Scalar::one();
    /// let poly = FpPolynomial::from_coefs(vec![one, one, one]);
    /// let divisor = FpPolynomial::from_coefs(vec![one, one]);
    /// let (q, r) = poly.div_rem(&divisor).unwrap();
    /// assert_eq!(q, FpPolynomial::from_coefs(vec![zero, one]));
    /// assert_eq!(r, FpPolynomial::from_coefs(vec![one]));
    /// assert!(poly.div_rem(&FpPolynomial::zero()).is_err());
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(QapError::NotInvertible);
        }
        let k = self.coefs.len();
        let l = divisor.coefs.len();
        if l > k {
            return Ok((Self::zero(), self.clone()));
        }
        let divisor_coefs = &divisor.coefs[..];
        let bl_inv = divisor_coefs[l - 1].inv()?;
        let mut rem = self.coefs.clone();
        let mut quo = vec![F::zero(); k - l + 1];
        for i in (0..(k - l + 1)).rev() {
            let qi = bl_inv.mul(&rem[i + l - 1]);
            for (j, d) in divisor_coefs.iter().enumerate() {
                rem[i + j].sub_assign(&qi.mul(d));
            }
            quo[i] = qi;
        }
        rem.truncate(l - 1);
        Ok((Self::from_coefs(quo), Self::from_coefs(rem)))
    }

    /// Divide by `X - root` with synthetic division, returning the quotient and
    /// the remainder, which equals the evaluation at `root`.
    pub fn div_by_linear(&self, root: &F) -> (Self, F) {
        if self.degree() == 0 {
            return (Self::zero(), self.coefs[0]);
        }
        let mut quo = vec![F::zero(); self.coefs.len() - 1];
        let mut carry = F::zero();
        for (i, coef) in self.coefs.iter().enumerate().rev() {
            let value = coef.add(&carry.mul(root));
            if i == 0 {
                return (Self::from_coefs(quo), value);
            }
            quo[i - 1] = value;
            carry = value;
        }
        (Self::from_coefs(quo), carry)
    }
}
