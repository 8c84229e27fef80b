use crate::errors::{QapError, Result};
use crate::polynomial::FpPolynomial;
use qapsnark_algebra::prelude::*;

/// An ordered set of pairwise distinct evaluation points `r_1, ..., r_m`, one per constraint.
///
/// The barycentric weights `1 / prod_{k != j}(r_j - r_k)` are computed once at
/// construction and shared by every interpolation over the set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvaluationPointSet<F> {
    points: Vec<F>,
    weights: Vec<F>,
}

impl<F: Scalar> EvaluationPointSet<F> {
    /// Build the set, failing with [`QapError::DegenerateSet`] if two points coincide.
    pub fn new(points: Vec<F>) -> Result<Self> {
        let mut weights: Vec<F> = points
            .iter()
            .enumerate()
            .map(|(j, r_j)| {
                points
                    .iter()
                    .enumerate()
                    .filter(|(k, _)| *k != j)
                    .fold(F::one(), |acc, (_, r_k)| acc.mul(&r_j.sub(r_k)))
            })
            .collect();
        F::batch_inverse(&mut weights).map_err(|_| QapError::DegenerateSet)?;
        Ok(Self { points, weights })
    }

    /// Build the set from small integers.
    pub fn from_u64s(points: &[u64]) -> Result<Self> {
        Self::new(points.iter().map(|p| F::from(*p)).collect())
    }

    /// The points `1, 2, ..., m`.
    pub fn consecutive(m: usize) -> Result<Self> {
        Self::new((1..=m as u64).map(|i| F::from(i)).collect())
    }

    /// Return the points.
    pub fn points(&self) -> &[F] {
        &self.points
    }

    /// Return the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Return the index of `x` in the set, if present.
    pub fn position(&self, x: &F) -> Option<usize> {
        self.points.iter().position(|r| r == x)
    }

    /// Check whether `x` is one of the points.
    pub fn contains(&self, x: &F) -> bool {
        self.position(x).is_some()
    }

    /// Return the evaluable Lagrange basis polynomial `l_j`.
    pub fn basis_polynomial(&self, j: usize) -> Result<LagrangeBasis<F>> {
        if j >= self.len() {
            return Err(QapError::ShapeMismatch);
        }
        let others = self
            .points
            .iter()
            .enumerate()
            .filter(|(k, _)| *k != j)
            .map(|(_, r)| *r)
            .collect();
        Ok(LagrangeBasis {
            others,
            weight: self.weights[j],
        })
    }

    /// Evaluate every basis polynomial at `x`, i.e. `[l_1(x), ..., l_m(x)]`.
    ///
    /// For `x` outside the set this uses `l_j(x) = w_j * T(x) / (x - r_j)` with a
    /// single batched inversion. On a point `r_i` it is the `i`-th unit vector.
    pub fn lagrange_coefficients_at(&self, x: &F) -> Result<Vec<F>> {
        if let Some(i) = self.position(x) {
            let mut unit = vec![F::zero(); self.len()];
            unit[i] = F::one();
            return Ok(unit);
        }

        let mut coefficients: Vec<F> = self.points.iter().map(|r| x.sub(r)).collect();
        let t_at_x = coefficients.iter().fold(F::one(), |acc, d| acc.mul(d));
        F::batch_inverse(&mut coefficients)?;
        for (c, w) in coefficients.iter_mut().zip(self.weights.iter()) {
            *c = c.mul(w).mul(&t_at_x);
        }
        Ok(coefficients)
    }

    /// Evaluate at `x` the unique polynomial of degree `< m` taking value
    /// `coeffs[j]` at `r_j`, without materializing its coefficients.
    pub fn interpolate_at(&self, x: &F, coeffs: &[F]) -> Result<F> {
        if coeffs.len() != self.len() {
            return Err(QapError::ShapeMismatch);
        }
        let basis = self.lagrange_coefficients_at(x)?;
        Ok(inner_product(coeffs, &basis))
    }

    /// Evaluate the vanishing polynomial `T(x) = prod_k (x - r_k)`.
    pub fn vanishing_polynomial_at(&self, x: &F) -> F {
        self.points
            .iter()
            .fold(F::one(), |acc, r| acc.mul(&x.sub(r)))
    }

    /// Compute `numerator * T(s)^{-1}`, failing with
    /// [`QapError::SingularEvaluationPoint`] when `s` is one of the points.
    pub fn quotient_at(&self, numerator: &F, s: &F) -> Result<F> {
        let t_at_s = self.vanishing_polynomial_at(s);
        let t_inv = t_at_s
            .inv()
            .map_err(|_| QapError::SingularEvaluationPoint)?;
        Ok(numerator.mul(&t_inv))
    }

    /// The vanishing polynomial in coefficient form.
    pub fn vanishing_polynomial(&self) -> FpPolynomial<F> {
        FpPolynomial::from_zeroes(&self.points)
    }

    /// Interpolate `coeffs` into coefficient form.
    pub fn interpolate(&self, coeffs: &[F]) -> Result<FpPolynomial<F>> {
        if coeffs.len() != self.len() {
            return Err(QapError::ShapeMismatch);
        }
        let t = self.vanishing_polynomial();
        let mut result = FpPolynomial::zero();
        for ((c, r), w) in coeffs.iter().zip(self.points.iter()).zip(self.weights.iter()) {
            if c.is_zero() {
                continue;
            }
            let (numerator, _) = t.div_by_linear(r);
            result.add_assign(&numerator.mul_scalar(&c.mul(w)));
        }
        Ok(result)
    }
}

/// The Lagrange basis polynomial
/// `l_j(x) = prod_{k != j} (x - r_k) / (r_j - r_k)` in product form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LagrangeBasis<F> {
    others: Vec<F>,
    weight: F,
}

impl<F: Scalar> LagrangeBasis<F> {
    /// Evaluate `l_j(x)`.
    pub fn eval(&self, x: &F) -> F {
        self.others
            .iter()
            .fold(self.weight, |acc, r| acc.mul(&x.sub(r)))
    }
}

/// Return `l_j` over `points`, failing with [`QapError::DegenerateSet`] on duplicate points.
pub fn basis_polynomial<F: Scalar>(points: &[F], j: usize) -> Result<LagrangeBasis<F>> {
    EvaluationPointSet::new(points.to_vec())?.basis_polynomial(j)
}

pub(crate) fn inner_product<F: Scalar>(a: &[F], b: &[F]) -> F {
    a.iter()
        .zip(b.iter())
        .fold(F::zero(), |acc, (x, y)| acc.add(&x.mul(y)))
}

#[cfg(test)]
mod test {
    use super::{basis_polynomial, EvaluationPointSet};
    use crate::errors::QapError;
    use crate::polynomial::FpPolynomial;
    use qapsnark_algebra::{bn254::BN254Scalar, prelude::*};

    type F = BN254Scalar;

    fn toy_points() -> EvaluationPointSet<F> {
        EvaluationPointSet::from_u64s(&[3, 7]).unwrap()
    }

    #[test]
    fn duplicate_points_are_rejected() {
        assert_eq!(
            EvaluationPointSet::<F>::from_u64s(&[3, 7, 3]),
            Err(QapError::DegenerateSet)
        );
        assert_eq!(
            basis_polynomial(&[F::from(5u32), F::from(5u32)], 0),
            Err(QapError::DegenerateSet)
        );
        assert!(EvaluationPointSet::<F>::consecutive(0).unwrap().is_empty());
    }

    #[test]
    fn basis_is_kronecker_delta_on_points() {
        let points = EvaluationPointSet::<F>::from_u64s(&[3, 7, 11, 20]).unwrap();
        for j in 0..points.len() {
            let l_j = points.basis_polynomial(j).unwrap();
            for (k, r_k) in points.points().iter().enumerate() {
                let expected = if j == k { F::one() } else { F::zero() };
                assert_eq!(l_j.eval(r_k), expected);
            }
        }
        assert_eq!(points.basis_polynomial(4), Err(QapError::ShapeMismatch));
    }

    #[test]
    fn toy_basis_values() {
        // l_1(x) = (x - 7) / (3 - 7), l_2(x) = (x - 3) / (7 - 3)
        let points = toy_points();
        let x = F::from(27u32);
        let four_inv = F::from(4u32).inv().unwrap();
        assert_eq!(
            points.basis_polynomial(0).unwrap().eval(&x),
            F::from(20u32).neg().mul(&four_inv)
        );
        assert_eq!(
            points.basis_polynomial(1).unwrap().eval(&x),
            F::from(24u32).mul(&four_inv)
        );
        assert_eq!(points.vanishing_polynomial_at(&x), F::from(480u32));
    }

    #[test]
    fn interpolation_round_trip() {
        let mut prng = test_rng();
        let points = EvaluationPointSet::<F>::consecutive(6).unwrap();
        let coeffs: Vec<F> = (0..6).map(|_| F::random(&mut prng)).collect();
        for (r_j, c_j) in points.points().iter().zip(coeffs.iter()) {
            assert_eq!(points.interpolate_at(r_j, &coeffs).unwrap(), *c_j);
        }
        assert_eq!(
            points.interpolate_at(&F::one(), &coeffs[1..]),
            Err(QapError::ShapeMismatch)
        );
    }

    #[test]
    fn barycentric_matches_product_form() {
        let mut prng = test_rng();
        let points: Vec<F> = (0..5).map(|_| F::random(&mut prng)).collect();
        let set = EvaluationPointSet::new(points).unwrap();
        let x = F::random(&mut prng);

        let fast = set.lagrange_coefficients_at(&x).unwrap();
        for (j, l_j_at_x) in fast.iter().enumerate() {
            assert_eq!(set.basis_polynomial(j).unwrap().eval(&x), *l_j_at_x);
        }
        // The basis is a partition of unity.
        assert_eq!(fast.iter().sum::<F>(), F::one());
    }

    #[test]
    fn coefficient_form_agrees_with_pointwise_form() {
        let mut prng = test_rng();
        let set = EvaluationPointSet::<F>::from_u64s(&[2, 3, 5, 7, 11]).unwrap();
        let coeffs: Vec<F> = (0..5).map(|_| F::random(&mut prng)).collect();
        let poly = set.interpolate(&coeffs).unwrap();
        assert!(poly.degree() < set.len());

        let x = F::random(&mut prng);
        assert_eq!(poly.eval(&x), set.interpolate_at(&x, &coeffs).unwrap());

        let t = set.vanishing_polynomial();
        assert_eq!(t.eval(&x), set.vanishing_polynomial_at(&x));
        assert_eq!(t, FpPolynomial::from_zeroes(set.points()));
    }

    #[test]
    fn quotient_at_rejects_roots_of_the_vanishing_polynomial() {
        let points = toy_points();
        let numerator = F::from(960u32);
        assert_eq!(
            points.quotient_at(&numerator, &F::from(27u32)).unwrap(),
            F::from(2u32)
        );
        assert_eq!(
            points.quotient_at(&numerator, &F::from(7u32)),
            Err(QapError::SingularEvaluationPoint)
        );
    }
}
