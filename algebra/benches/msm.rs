use ark_std::time::Instant;
use qapsnark_algebra::{
    bn254::{BN254Scalar, BN254G2},
    prelude::*,
    rand_helper::seeded_rng,
};

fn main() {
    let mut prng = seeded_rng(0);

    let count = 4096;

    // Sample random points
    let points: Vec<BN254G2> = (0..count).map(|_| BN254G2::random(&mut prng)).collect();

    // Sample random scalars
    let scalars: Vec<BN254Scalar> = (0..count).map(|_| BN254Scalar::random(&mut prng)).collect();

    let points_ptr = points.iter().collect::<Vec<&BN254G2>>();
    let scalars_ptr = scalars.iter().collect::<Vec<&BN254Scalar>>();

    let start = Instant::now();
    let msm = BN254G2::multi_exp(&scalars_ptr, &points_ptr);
    println!("multi_exp: {} us", start.elapsed().as_micros());

    let start = Instant::now();
    let ladder = points
        .iter()
        .zip(scalars.iter())
        .fold(BN254G2::get_identity(), |acc, (p, s)| acc.add(&p.ladder_mul(s)));
    println!("ladder sum: {} us", start.elapsed().as_micros());

    assert_eq!(msm, ladder);
}
