use qapsnark::{
    errors::QapError,
    polynomial::EvaluationPointSet,
    prover::{prove, prove_with_key},
    qap::{build_qap, QAP},
    r1cs::{R1CSInstance, Witness},
    setup::SetupParams,
    verifier::{verify, verify_proof, verify_with_multi_pairing},
};
use qapsnark_algebra::{
    bn254::{BN254PairingEngine, BN254Scalar},
    prelude::*,
};

type F = BN254Scalar;
type E = BN254PairingEngine;

/// `f(x1, x2, x3, x4) = 4 x1 x2 - 7 x2 + 3 x4` flattened into two constraints
/// over the wires `[1, x1, x2, t = 4 x1 x2, x4, out]`.
fn toy_instance() -> R1CSInstance<F> {
    R1CSInstance::from_i64_rows(
        &[vec![0, 4, 0, 0, 0, 0], vec![1, 0, 0, 0, 0, 0]],
        &[vec![0, 0, 1, 0, 0, 0], vec![0, 0, -7, 1, 3, 0]],
        &[vec![0, 0, 0, 1, 0, 0], vec![0, 0, 0, 0, 0, 1]],
    )
    .unwrap()
}

fn toy_qap() -> QAP<F> {
    let points = EvaluationPointSet::from_u64s(&[3, 7]).unwrap();
    build_qap(&toy_instance(), &points).unwrap()
}

#[test]
fn toy_circuit_is_satisfied_and_verifies() {
    let mut prng = test_rng();
    let qap = toy_qap();
    let witness = Witness::from_i64s(&[1, 3, 2, 24, 1, 13]).unwrap();
    assert!(qap.instance().satisfies_in_the_clear(&witness));

    for _ in 0..4 {
        let params = SetupParams::<E>::sample(qap.points(), &mut prng);
        let bundle = prove(&params, &qap, &witness).unwrap();
        assert!(verify::<E>(&bundle, params.g1()));
        assert!(verify_with_multi_pairing::<E>(&bundle, params.g1()));
        assert_eq!(verify_proof::<E>(&bundle, params.g1()), Ok(()));
    }
}

#[test]
fn toy_circuit_at_a_fixed_point() {
    let qap = toy_qap();
    let witness = Witness::from_i64s(&[1, 3, 2, 24, 1, 13]).unwrap();
    let s = F::from(27u32);

    let evaluation = qap.evaluate_at(&witness, &s).unwrap();
    let t = qap.vanishing_at(&s);
    assert_eq!(t, F::from(480u32));
    let h = qap.quotient_at(&witness, &evaluation, &s).unwrap();
    assert_eq!(evaluation.v.mul(&evaluation.w).sub(&evaluation.y), h.mul(&t));

    let params = SetupParams::<E>::with_standard_generators(s, qap.points()).unwrap();
    let bundle = prove(&params, &qap, &witness).unwrap();
    assert!(verify::<E>(&bundle, params.g1()));
}

#[test]
fn wrong_output_is_not_satisfied() {
    let qap = toy_qap();
    let witness = Witness::from_i64s(&[1, 3, 2, 24, 1, 14]).unwrap();
    assert!(!qap.instance().satisfies_in_the_clear(&witness));
    assert_eq!(
        qap.quotient_polynomial(&witness),
        Err(QapError::WitnessInconsistent)
    );

    let params = SetupParams::<E>::with_standard_generators(F::from(27u32), qap.points()).unwrap();
    let key = params.evaluation_key(&qap).unwrap();
    assert_eq!(
        prove_with_key(&key, &qap, &witness),
        Err(QapError::WitnessInconsistent)
    );
    #[cfg(feature = "witness-check")]
    assert_eq!(
        prove(&params, &qap, &witness),
        Err(QapError::WitnessInconsistent)
    );
}

#[test]
fn secret_point_on_an_evaluation_point_is_refused() {
    let qap = toy_qap();
    for r in [3u32, 7] {
        assert_eq!(
            SetupParams::<E>::with_standard_generators(F::from(r), qap.points()),
            Err(QapError::SingularEvaluationPoint)
        );
    }
}

#[test]
fn single_constraint_circuit() {
    // 3 * x1 = out over the wires [1, x1, out]
    let instance =
        R1CSInstance::from_i64_rows(&[vec![0, 1, 0]], &[vec![3, 0, 0]], &[vec![0, 0, 1]]).unwrap();
    let qap = QAP::new(instance, EvaluationPointSet::consecutive(1).unwrap()).unwrap();
    let witness = Witness::from_i64s(&[1, 2, 6]).unwrap();

    let mut prng = test_rng();
    let params = SetupParams::<E>::sample(qap.points(), &mut prng);
    let key = params.evaluation_key(&qap).unwrap();

    let direct = prove(&params, &qap, &witness).unwrap();
    let keyed = prove_with_key(&key, &qap, &witness).unwrap();
    assert!(verify::<E>(&direct, params.g1()));
    assert!(verify::<E>(&keyed, key.g1()));
    assert_eq!(direct, keyed);
    // V W - Y vanishes identically, so H = 0.
    assert!(direct.e_h.is_identity());
}

#[test]
fn key_based_and_direct_proofs_coincide() {
    let mut prng = test_rng();
    let qap = toy_qap();
    let witness = Witness::from_i64s(&[1, 3, 2, 24, 1, 13]).unwrap();
    let params = SetupParams::<E>::sample(qap.points(), &mut prng);
    let key = params.evaluation_key(&qap).unwrap();

    let keyed = prove_with_key(&key, &qap, &witness).unwrap();
    assert_eq!(keyed, prove(&params, &qap, &witness).unwrap());
    assert_eq!(keyed.to_bytes(), prove(&params, &qap, &witness).unwrap().to_bytes());
}
