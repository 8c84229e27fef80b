use criterion::{criterion_group, criterion_main, Criterion};
use qapsnark::{
    polynomial::EvaluationPointSet,
    prover::{prove, prove_with_key},
    qap::QAP,
    r1cs::{R1CSInstance, Witness},
    setup::SetupParams,
    verifier::{verify, verify_with_multi_pairing},
};
use qapsnark_algebra::{
    bn254::{BN254PairingEngine, BN254Scalar},
    prelude::*,
};

type F = BN254Scalar;
type E = BN254PairingEngine;

/// The chain `x_{k+1} = x_k * c_k` with `m` constraints.
fn chain_circuit<R: CryptoRng + RngCore>(m: usize, prng: &mut R) -> (QAP<F>, Witness<F>) {
    let n = m + 2;
    let mut a = vec![vec![F::zero(); n]; m];
    let mut b = vec![vec![F::zero(); n]; m];
    let mut c = vec![vec![F::zero(); n]; m];
    let mut values = vec![F::one(), F::random(prng)];
    for k in 0..m {
        let coef = F::random(prng);
        a[k][k + 1] = F::one();
        b[k][0] = coef;
        c[k][k + 2] = F::one();
        values.push(values[k + 1].mul(&coef));
    }
    let instance = R1CSInstance::new(a, b, c).unwrap();
    let qap = QAP::new(instance, EvaluationPointSet::consecutive(m).unwrap()).unwrap();
    (qap, Witness::new(values).unwrap())
}

fn bench_prover(c: &mut Criterion) {
    let mut prng = test_rng();
    let (qap, witness) = chain_circuit(64, &mut prng);
    let params = SetupParams::<E>::sample(qap.points(), &mut prng);
    let key = params.evaluation_key(&qap).unwrap();

    let mut prover_group = c.benchmark_group("bench_prover");
    prover_group.sample_size(10);
    prover_group.bench_function("prove".to_string(), |b| {
        b.iter(|| prove(&params, &qap, &witness).unwrap())
    });
    prover_group.bench_function("prove_with_key".to_string(), |b| {
        b.iter(|| prove_with_key(&key, &qap, &witness).unwrap())
    });
    prover_group.finish();
}

fn bench_verifier(c: &mut Criterion) {
    let mut prng = test_rng();
    let (qap, witness) = chain_circuit(64, &mut prng);
    let params = SetupParams::<E>::sample(qap.points(), &mut prng);
    let bundle = prove(&params, &qap, &witness).unwrap();

    let mut verifier_group = c.benchmark_group("bench_verifier");
    verifier_group.bench_function("verify".to_string(), |b| {
        b.iter(|| assert!(verify::<E>(&bundle, params.g1())))
    });
    verifier_group.bench_function("verify_with_multi_pairing".to_string(), |b| {
        b.iter(|| assert!(verify_with_multi_pairing::<E>(&bundle, params.g1())))
    });
    verifier_group.finish();
}

criterion_group!(benches, bench_prover, bench_verifier);
criterion_main!(benches);
