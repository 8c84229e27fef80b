/// Module for polynomials in coefficient form.
pub mod field_polynomial;
/// Module for Lagrange interpolation over an evaluation point set.
pub mod lagrange;

pub use field_polynomial::FpPolynomial;
pub use lagrange::{basis_polynomial, EvaluationPointSet, LagrangeBasis};
