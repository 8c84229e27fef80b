use crate::commitment::{commit_in_exponent, commit_qap, ProofBundle, ProofBundleOf};
use crate::errors::{QapError, Result};
use crate::qap::QAP;
use crate::r1cs::Witness;
use crate::setup::{EvaluationKey, SetupParams};
use ark_std::{end_timer, start_timer};
use qapsnark_algebra::prelude::*;

/// Prove that `witness` satisfies the QAP, knowing the secret point.
///
/// The prover evaluates `V`, `W`, `Y` and `T` at `s`, derives `H(s)` by one field
/// division and commits the five values. With the `witness-check` feature an
/// unsatisfying witness is refused with [`QapError::WitnessInconsistent`].
/// # Example
/// ```
/// use qapsnark::{
///     polynomial::EvaluationPointSet,
///     prover::prove,
///     qap::QAP,
///     r1cs::{R1CSInstance, Witness},
///     setup::SetupParams,
///     verifier::verify,
/// };
/// use qapsnark_algebra::{bn254::{BN254PairingEngine, BN254Scalar}, prelude::*};
///
/// // x1 * 3 = x2
/// let instance = R1CSInstance::<BN254Scalar>::from_i64_rows(
///     &[vec![0, 1, 0]],
///     &[vec![3, 0, 0]],
///     &[vec![0, 0, 1]],
/// )
/// .unwrap();
/// let points = EvaluationPointSet::consecutive(1).unwrap();
/// let qap = QAP::new(instance, points).unwrap();
///
/// let mut prng = test_rng();
/// let params = SetupParams::<BN254PairingEngine>::sample(qap.points(), &mut prng);
/// let witness = Witness::from_i64s(&[1, 2, 6]).unwrap();
/// let bundle = prove(&params, &qap, &witness).unwrap();
/// assert!(verify::<BN254PairingEngine>(&bundle, params.g1()));
/// ```
pub fn prove<P: Pairing>(
    params: &SetupParams<P>,
    qap: &QAP<P::ScalarField>,
    witness: &Witness<P::ScalarField>,
) -> Result<ProofBundleOf<P>> {
    let prover_timer = start_timer!(|| "QAP::Prover");
    let s = params.secret_point();

    let evaluation = qap.evaluate_at(witness, s)?;
    let t_at_s = qap.vanishing_at(s);
    let h_at_s = qap.quotient_at(witness, &evaluation, s)?;

    let commit_timer = start_timer!(|| "Commit the evaluations");
    let bundle = commit_qap::<P>(&evaluation, &t_at_s, &h_at_s, params.g1(), params.g2());
    end_timer!(commit_timer);

    end_timer!(prover_timer);
    Ok(bundle)
}

/// Prove that `witness` satisfies the QAP from an evaluation key alone.
///
/// `H` is obtained by exact polynomial division, so an unsatisfying witness
/// always fails with [`QapError::WitnessInconsistent`] here.
pub fn prove_with_key<P: Pairing>(
    key: &EvaluationKey<P>,
    qap: &QAP<P::ScalarField>,
    witness: &Witness<P::ScalarField>,
) -> Result<ProofBundleOf<P>> {
    key.check_shape()?;
    let n = witness.len();
    if qap.num_wires() != n
        || key.g1_v.len() != n
        || key.g2_w.len() != n
        || key.g2_y.len() != n
    {
        return Err(QapError::ShapeMismatch);
    }
    let prover_timer = start_timer!(|| "QAP::Prover with evaluation key");

    let h = qap.quotient_polynomial(witness)?;
    let h_coefs = h.get_coefs_ref();
    if h_coefs.len() > key.g2_s_powers.len() {
        return Err(QapError::ShapeMismatch);
    }

    let msm_timer =
        start_timer!(|| format!("Multi-exponentiations over {} wires", key.num_wires()));
    let a = witness.values();
    let e_v = commit_in_exponent(&key.g1_v, a);
    let e_w = commit_in_exponent(&key.g2_w, a);
    let e_y = commit_in_exponent(&key.g2_y, a);
    let e_h = commit_in_exponent(&key.g2_s_powers[..h_coefs.len()], h_coefs);
    end_timer!(msm_timer);

    end_timer!(prover_timer);
    Ok(ProofBundle {
        e_v,
        e_w,
        e_y,
        e_t: key.g1_t,
        e_h,
    })
}
