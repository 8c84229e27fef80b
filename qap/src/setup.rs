use crate::commitment::commit;
use crate::errors::{QapError, Result};
use crate::polynomial::EvaluationPointSet;
use crate::qap::QAP;
use ark_std::{end_timer, start_timer};
use core::convert::TryFrom;
use qapsnark_algebra::prelude::*;

/// The public generators `g1`, `g2` and the secret evaluation point `s`.
///
/// `s` must avoid every evaluation point, otherwise `T(s) = 0` and no quotient
/// exists. This is checked whenever parameters are built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetupParams<P: Pairing> {
    g1: P::G1,
    g2: P::G2,
    s: P::ScalarField,
}

impl<P: Pairing> SetupParams<P> {
    /// Build the parameters from explicit values.
    pub fn new(
        g1: P::G1,
        g2: P::G2,
        s: P::ScalarField,
        points: &EvaluationPointSet<P::ScalarField>,
    ) -> Result<Self> {
        if g1.is_identity() || g2.is_identity() {
            return Err(QapError::Algebra(AlgebraError::ParameterError));
        }
        if points.contains(&s) {
            return Err(QapError::SingularEvaluationPoint);
        }
        Ok(Self { g1, g2, s })
    }

    /// Use the standard generators of G1 and G2 with a chosen `s`.
    pub fn with_standard_generators(
        s: P::ScalarField,
        points: &EvaluationPointSet<P::ScalarField>,
    ) -> Result<Self> {
        Self::new(P::G1::get_base(), P::G2::get_base(), s, points)
    }

    /// Sample fresh generators and a secret point off the evaluation points.
    pub fn sample<R: CryptoRng + RngCore>(
        points: &EvaluationPointSet<P::ScalarField>,
        prng: &mut R,
    ) -> Self {
        let g1 = sample_non_identity(|| P::G1::random(prng));
        let g2 = sample_non_identity(|| P::G2::random(prng));
        let s = sample_secret_point(points, prng);
        Self { g1, g2, s }
    }

    /// Return the generator of G1.
    pub fn g1(&self) -> &P::G1 {
        &self.g1
    }

    /// Return the generator of G2.
    pub fn g2(&self) -> &P::G2 {
        &self.g2
    }

    /// Return the secret evaluation point.
    pub fn secret_point(&self) -> &P::ScalarField {
        &self.s
    }

    /// Precompute every group element a prover needs to commit to a QAP
    /// without learning `s`.
    pub fn evaluation_key(&self, qap: &QAP<P::ScalarField>) -> Result<EvaluationKey<P>> {
        if qap.points().contains(&self.s) {
            return Err(QapError::SingularEvaluationPoint);
        }
        let timer = start_timer!(|| format!(
            "Evaluation key for {} constraints and {} wires",
            qap.num_constraints(),
            qap.num_wires()
        ));

        let wires = qap.wire_evaluations_at(&self.s)?;
        let g1_v = wires.v.iter().map(|v| commit(&self.g1, v)).collect();
        let g2_w = wires.w.iter().map(|w| commit(&self.g2, w)).collect();
        let g2_y = wires.y.iter().map(|y| commit(&self.g2, y)).collect();

        let mut g2_s_powers = Vec::with_capacity(qap.num_constraints().max(1));
        let mut elem = self.g2;
        for _ in 0..qap.num_constraints().max(1) {
            g2_s_powers.push(elem);
            elem = elem.mul(&self.s);
        }
        let g1_t = commit(&self.g1, &qap.vanishing_at(&self.s));

        end_timer!(timer);
        Ok(EvaluationKey {
            g1: self.g1,
            g1_v,
            g2_w,
            g2_y,
            g2_s_powers,
            g1_t,
        })
    }
}

/// The public key for proving without the secret point.
///
/// It holds `v_i(s) g1`, `w_i(s) g2`, `y_i(s) g2` for every wire, the powers
/// `s^k g2` for `k` below the number of constraints, and `T(s) g1`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EvaluationKeyParts<P>")]
#[serde(bound = "")]
pub struct EvaluationKey<P: Pairing> {
    pub(crate) g1: P::G1,
    pub(crate) g1_v: Vec<P::G1>,
    pub(crate) g2_w: Vec<P::G2>,
    pub(crate) g2_y: Vec<P::G2>,
    pub(crate) g2_s_powers: Vec<P::G2>,
    pub(crate) g1_t: P::G1,
}

/// An evaluation key as read from storage, before its shape is checked.
#[derive(Deserialize)]
#[serde(bound = "")]
struct EvaluationKeyParts<P: Pairing> {
    g1: P::G1,
    g1_v: Vec<P::G1>,
    g2_w: Vec<P::G2>,
    g2_y: Vec<P::G2>,
    g2_s_powers: Vec<P::G2>,
    g1_t: P::G1,
}

impl<P: Pairing> TryFrom<EvaluationKeyParts<P>> for EvaluationKey<P> {
    type Error = QapError;

    fn try_from(parts: EvaluationKeyParts<P>) -> Result<Self> {
        let key = EvaluationKey {
            g1: parts.g1,
            g1_v: parts.g1_v,
            g2_w: parts.g2_w,
            g2_y: parts.g2_y,
            g2_s_powers: parts.g2_s_powers,
            g1_t: parts.g1_t,
        };
        key.check_shape()?;
        Ok(key)
    }
}

impl<P: Pairing> EvaluationKey<P> {
    /// Check that the three per-wire vectors agree in length and that at least
    /// one power of `s` is present.
    pub fn check_shape(&self) -> Result<()> {
        let n = self.g1_v.len();
        if self.g2_w.len() != n || self.g2_y.len() != n || self.g2_s_powers.is_empty() {
            return Err(QapError::ShapeMismatch);
        }
        Ok(())
    }

    /// Return the generator of G1, which the verifier also needs.
    pub fn g1(&self) -> &P::G1 {
        &self.g1
    }

    /// Return the number of wires the key covers.
    pub fn num_wires(&self) -> usize {
        self.g1_v.len()
    }

    /// Return the largest quotient degree the key can commit to.
    pub fn max_quotient_degree(&self) -> usize {
        self.g2_s_powers.len().saturating_sub(1)
    }
}

/// Sample `s` uniformly among the field elements that are not evaluation points.
pub fn sample_secret_point<F: Scalar, R: CryptoRng + RngCore>(
    points: &EvaluationPointSet<F>,
    prng: &mut R,
) -> F {
    loop {
        let s = F::random(prng);
        if !points.contains(&s) {
            return s;
        }
    }
}

fn sample_non_identity<G: Group>(mut sample: impl FnMut() -> G) -> G {
    loop {
        let g = sample();
        if !g.is_identity() {
            return g;
        }
    }
}
