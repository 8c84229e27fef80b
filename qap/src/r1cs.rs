use crate::errors::{QapError, Result};
use crate::polynomial::lagrange::inner_product;
use core::convert::TryFrom;
use qapsnark_algebra::prelude::*;

/// A rank-1 constraint system `(A w) * (B w) = C w`.
///
/// The three matrices have `num_constraints` rows and `num_wires` columns; wire 0
/// is the constant wire carrying the value one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "R1CSMatrices<F>")]
#[serde(bound(
    serialize = "F: Scalar",
    deserialize = "F: Scalar"
))]
pub struct R1CSInstance<F> {
    a: Vec<Vec<F>>,
    b: Vec<Vec<F>>,
    c: Vec<Vec<F>>,
}

/// Unvalidated matrices, as received from a circuit compiler.
#[derive(Deserialize)]
#[serde(bound(deserialize = "F: Scalar"))]
struct R1CSMatrices<F> {
    a: Vec<Vec<F>>,
    b: Vec<Vec<F>>,
    c: Vec<Vec<F>>,
}

impl<F: Scalar> TryFrom<R1CSMatrices<F>> for R1CSInstance<F> {
    type Error = QapError;

    fn try_from(m: R1CSMatrices<F>) -> Result<Self> {
        R1CSInstance::new(m.a, m.b, m.c)
    }
}

impl<F: Scalar> R1CSInstance<F> {
    /// Build an instance, failing with [`QapError::ShapeMismatch`] unless the
    /// three matrices share one non-empty rectangular shape.
    pub fn new(a: Vec<Vec<F>>, b: Vec<Vec<F>>, c: Vec<Vec<F>>) -> Result<Self> {
        let num_constraints = a.len();
        let num_wires = a.first().map_or(0, |row| row.len());
        if num_constraints == 0 || num_wires == 0 {
            return Err(QapError::ShapeMismatch);
        }
        for matrix in [&a, &b, &c] {
            if matrix.len() != num_constraints || matrix.iter().any(|row| row.len() != num_wires) {
                return Err(QapError::ShapeMismatch);
            }
        }
        Ok(Self { a, b, c })
    }

    /// Build an instance from signed integer rows, mapping `-k` to `p - k`.
    pub fn from_i64_rows(a: &[Vec<i64>], b: &[Vec<i64>], c: &[Vec<i64>]) -> Result<Self> {
        let lift = |m: &[Vec<i64>]| -> Vec<Vec<F>> {
            m.iter()
                .map(|row| row.iter().map(|v| F::from_i64(*v)).collect())
                .collect()
        };
        Self::new(lift(a), lift(b), lift(c))
    }

    /// Return the number of constraints.
    pub fn num_constraints(&self) -> usize {
        self.a.len()
    }

    /// Return the number of wires, including the constant wire.
    pub fn num_wires(&self) -> usize {
        self.a[0].len()
    }

    /// Return the matrix A.
    pub fn a(&self) -> &[Vec<F>] {
        &self.a
    }

    /// Return the matrix B.
    pub fn b(&self) -> &[Vec<F>] {
        &self.b
    }

    /// Return the matrix C.
    pub fn c(&self) -> &[Vec<F>] {
        &self.c
    }

    /// Return column `wire` of A, B and C.
    pub(crate) fn columns(&self, wire: usize) -> (Vec<F>, Vec<F>, Vec<F>) {
        let column = |m: &[Vec<F>]| m.iter().map(|row| row[wire]).collect::<Vec<F>>();
        (column(&self.a), column(&self.b), column(&self.c))
    }

    /// Return `(A_k w)(B_k w) - C_k w` for every constraint `k`.
    pub fn constraint_residuals(&self, witness: &Witness<F>) -> Result<Vec<F>> {
        if witness.len() != self.num_wires() {
            return Err(QapError::ShapeMismatch);
        }
        let w = witness.values();
        Ok(self
            .a
            .iter()
            .zip(self.b.iter())
            .zip(self.c.iter())
            .map(|((a_k, b_k), c_k)| {
                inner_product(a_k, w)
                    .mul(&inner_product(b_k, w))
                    .sub(&inner_product(c_k, w))
            })
            .collect())
    }

    /// Check the witness in the clear, reporting [`QapError::ShapeMismatch`] or
    /// [`QapError::WitnessInconsistent`].
    pub fn check_witness(&self, witness: &Witness<F>) -> Result<()> {
        if self
            .constraint_residuals(witness)?
            .iter()
            .all(|residual| residual.is_zero())
        {
            Ok(())
        } else {
            Err(QapError::WitnessInconsistent)
        }
    }

    /// Check `(A_k w)(B_k w) = C_k w` for all `k`. A witness of the wrong length is unsatisfying.
    pub fn satisfies_in_the_clear(&self, witness: &Witness<F>) -> bool {
        self.check_witness(witness).is_ok()
    }
}

/// A full wire assignment, the constant wire first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<F>")]
#[serde(bound(serialize = "F: Scalar", deserialize = "F: Scalar"))]
pub struct Witness<F>(Vec<F>);

impl<F: Scalar> TryFrom<Vec<F>> for Witness<F> {
    type Error = QapError;

    fn try_from(values: Vec<F>) -> Result<Self> {
        Witness::new(values)
    }
}

impl<F: Scalar> Witness<F> {
    /// Wrap a full assignment. Index 0 must hold one.
    pub fn new(values: Vec<F>) -> Result<Self> {
        match values.first() {
            None => Err(QapError::ShapeMismatch),
            Some(one) if !one.is_one() => Err(QapError::WitnessInconsistent),
            Some(_) => Ok(Self(values)),
        }
    }

    /// Prepend the constant wire to the remaining wire values.
    pub fn with_constant(rest: &[F]) -> Self {
        let mut values = Vec::with_capacity(rest.len() + 1);
        values.push(F::one());
        values.extend_from_slice(rest);
        Self(values)
    }

    /// Build a witness from signed integers.
    pub fn from_i64s(values: &[i64]) -> Result<Self> {
        Self::new(values.iter().map(|v| F::from_i64(*v)).collect())
    }

    /// Return the wire values.
    pub fn values(&self) -> &[F] {
        &self.0
    }

    /// Return the number of wires.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: the constant wire is present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
