use crate::errors::{QapError, Result};
use crate::polynomial::{lagrange::inner_product, EvaluationPointSet, FpPolynomial};
use crate::r1cs::{R1CSInstance, Witness};
use ark_std::{end_timer, start_timer};
use qapsnark_algebra::prelude::*;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// The Quadratic Arithmetic Program of an R1CS instance.
///
/// Wire `i` carries the polynomials `v_i`, `w_i`, `y_i` interpolating column `i`
/// of A, B and C over the evaluation points. They are kept implicit as the
/// columns themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QAP<F> {
    instance: R1CSInstance<F>,
    points: EvaluationPointSet<F>,
}

/// `(V(s), W(s), Y(s))` for one witness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QapEvaluation<F> {
    /// `V(s) = sum_i a_i v_i(s)`
    pub v: F,
    /// `W(s) = sum_i a_i w_i(s)`
    pub w: F,
    /// `Y(s) = sum_i a_i y_i(s)`
    pub y: F,
}

impl<F: Scalar> QapEvaluation<F> {
    /// Return `V(s) W(s) - Y(s)`.
    pub fn numerator(&self) -> F {
        self.v.mul(&self.w).sub(&self.y)
    }
}

/// The per-wire evaluations `v_i(s)`, `w_i(s)`, `y_i(s)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WireEvaluations<F> {
    /// `v_i(s)` for every wire
    pub v: Vec<F>,
    /// `w_i(s)` for every wire
    pub w: Vec<F>,
    /// `y_i(s)` for every wire
    pub y: Vec<F>,
}

impl<F: Scalar> WireEvaluations<F> {
    /// Weight the wire evaluations by a full assignment.
    pub fn combine(&self, assignment: &[F]) -> Result<QapEvaluation<F>> {
        if assignment.len() != self.v.len() {
            return Err(QapError::ShapeMismatch);
        }
        Ok(QapEvaluation {
            v: inner_product(assignment, &self.v),
            w: inner_product(assignment, &self.w),
            y: inner_product(assignment, &self.y),
        })
    }
}

/// The per-wire polynomials in coefficient form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WirePolynomials<F> {
    /// `v_i` for every wire
    pub v: Vec<FpPolynomial<F>>,
    /// `w_i` for every wire
    pub w: Vec<FpPolynomial<F>>,
    /// `y_i` for every wire
    pub y: Vec<FpPolynomial<F>>,
}

/// Build the QAP of `instance` over `points`, one point per constraint.
pub fn build_qap<F: Scalar>(
    instance: &R1CSInstance<F>,
    points: &EvaluationPointSet<F>,
) -> Result<QAP<F>> {
    QAP::new(instance.clone(), points.clone())
}

/// Compute `H(s) = (V(s) W(s) - Y(s)) / T(s)` from the evaluations alone.
pub fn compute_quotient_at<F: Scalar>(
    evaluation: &QapEvaluation<F>,
    s: &F,
    points: &EvaluationPointSet<F>,
) -> Result<F> {
    points.quotient_at(&evaluation.numerator(), s)
}

impl<F: Scalar> QAP<F> {
    /// Build the QAP, failing with [`QapError::ShapeMismatch`] unless there is
    /// exactly one point per constraint.
    pub fn new(instance: R1CSInstance<F>, points: EvaluationPointSet<F>) -> Result<Self> {
        if points.len() != instance.num_constraints() {
            return Err(QapError::ShapeMismatch);
        }
        Ok(Self { instance, points })
    }

    /// Return the constraint system.
    pub fn instance(&self) -> &R1CSInstance<F> {
        &self.instance
    }

    /// Return the evaluation points.
    pub fn points(&self) -> &EvaluationPointSet<F> {
        &self.points
    }

    /// Return the number of constraints, which is the degree of `T`.
    pub fn num_constraints(&self) -> usize {
        self.instance.num_constraints()
    }

    /// Return the number of wires.
    pub fn num_wires(&self) -> usize {
        self.instance.num_wires()
    }

    /// Evaluate every `v_i`, `w_i`, `y_i` at `s`.
    ///
    /// `v_i(s) = sum_k A[k][i] l_k(s)`, with the basis values `l_k(s)` computed once.
    pub fn wire_evaluations_at(&self, s: &F) -> Result<WireEvaluations<F>> {
        let basis = self.points.lagrange_coefficients_at(s)?;
        let column_at = |m: &[Vec<F>], i: usize| {
            m.iter()
                .zip(basis.iter())
                .fold(F::zero(), |acc, (row, l_k)| acc.add(&row[i].mul(l_k)))
        };

        #[cfg(feature = "parallel")]
        let wires = (0..self.num_wires()).into_par_iter();
        #[cfg(not(feature = "parallel"))]
        let wires = 0..self.num_wires();

        let evaluations: Vec<(F, F, F)> = wires
            .map(|i| {
                (
                    column_at(self.instance.a(), i),
                    column_at(self.instance.b(), i),
                    column_at(self.instance.c(), i),
                )
            })
            .collect();
        let (v, w, y): (Vec<F>, Vec<F>, Vec<F>) = evaluations.into_iter().multiunzip();
        Ok(WireEvaluations { v, w, y })
    }

    /// Evaluate `V`, `W`, `Y` for `witness` at `s`.
    pub fn evaluate_at(&self, witness: &Witness<F>, s: &F) -> Result<QapEvaluation<F>> {
        if witness.len() != self.num_wires() {
            return Err(QapError::ShapeMismatch);
        }
        let timer = start_timer!(|| format!("Evaluate QAP with {} wires", self.num_wires()));
        let evaluation = self.wire_evaluations_at(s)?.combine(witness.values());
        end_timer!(timer);
        evaluation
    }

    /// Evaluate the vanishing polynomial at `s`.
    pub fn vanishing_at(&self, s: &F) -> F {
        self.points.vanishing_polynomial_at(s)
    }

    /// Compute `H(s)` for `evaluation`, which must come from `witness`.
    ///
    /// With the `witness-check` feature the witness is first checked in the
    /// clear, so an unsatisfying witness fails with [`QapError::WitnessInconsistent`]
    /// instead of producing a quotient.
    pub fn quotient_at(
        &self,
        witness: &Witness<F>,
        evaluation: &QapEvaluation<F>,
        s: &F,
    ) -> Result<F> {
        #[cfg(feature = "witness-check")]
        self.instance.check_witness(witness)?;
        #[cfg(not(feature = "witness-check"))]
        let _ = witness;

        compute_quotient_at(evaluation, s, &self.points)
    }

    /// Interpolate every `v_i`, `w_i`, `y_i` into coefficient form.
    pub fn wire_polynomials(&self) -> Result<WirePolynomials<F>> {
        let mut polys = WirePolynomials {
            v: Vec::with_capacity(self.num_wires()),
            w: Vec::with_capacity(self.num_wires()),
            y: Vec::with_capacity(self.num_wires()),
        };
        for i in 0..self.num_wires() {
            let (a, b, c) = self.instance.columns(i);
            polys.v.push(self.points.interpolate(&a)?);
            polys.w.push(self.points.interpolate(&b)?);
            polys.y.push(self.points.interpolate(&c)?);
        }
        Ok(polys)
    }

    /// Return `V`, `W`, `Y` for `witness` in coefficient form.
    ///
    /// `V(r_k) = A_k w`, so `V` interpolates the row products directly.
    pub fn witness_polynomials(
        &self,
        witness: &Witness<F>,
    ) -> Result<(FpPolynomial<F>, FpPolynomial<F>, FpPolynomial<F>)> {
        if witness.len() != self.num_wires() {
            return Err(QapError::ShapeMismatch);
        }
        let w = witness.values();
        let rows = |m: &[Vec<F>]| m.iter().map(|row| inner_product(row, w)).collect::<Vec<F>>();
        Ok((
            self.points.interpolate(&rows(self.instance.a()))?,
            self.points.interpolate(&rows(self.instance.b()))?,
            self.points.interpolate(&rows(self.instance.c()))?,
        ))
    }

    /// Return `V W - Y` for `witness` in coefficient form.
    pub fn numerator_polynomial(&self, witness: &Witness<F>) -> Result<FpPolynomial<F>> {
        let (v, w, y) = self.witness_polynomials(witness)?;
        Ok(v.mul(&w).sub(&y))
    }

    /// Return `H = (V W - Y) / T` by exact division.
    ///
    /// A nonzero remainder means `T` does not divide the numerator, i.e. the
    /// witness violates a constraint, and is reported as
    /// [`QapError::WitnessInconsistent`].
    pub fn quotient_polynomial(&self, witness: &Witness<F>) -> Result<FpPolynomial<F>> {
        let timer = start_timer!(|| "Divide by the vanishing polynomial");
        let numerator = self.numerator_polynomial(witness)?;
        let (quotient, remainder) = numerator.div_rem(&self.points.vanishing_polynomial())?;
        end_timer!(timer);
        if !remainder.is_zero() {
            return Err(QapError::WitnessInconsistent);
        }
        Ok(quotient)
    }
}
