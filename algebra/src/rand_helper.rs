use rand_chacha::{
    rand_core::{CryptoRng, RngCore, SeedableRng},
    ChaChaRng,
};

/// Return a ChaCha rng derived from a `u64` seed, for reproducible test vectors.
pub fn seeded_rng(seed: u64) -> impl RngCore + CryptoRng {
    ChaChaRng::seed_from_u64(seed)
}

fn fixed_test_rng() -> ChaChaRng {
    let seed = [
        3, 0, 0, 0, 7, 0, 0, 0, 27, 0, 0, 0, 13, 0, 0, 0, 24, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
        0, 0, 0,
    ];
    ChaChaRng::from_seed(seed)
}

/// Should be used only for tests, not for any real world usage.
#[cfg(not(feature = "std"))]
pub fn test_rng() -> impl RngCore + CryptoRng {
    fixed_test_rng()
}

/// Should be used only for tests, not for any real world usage.
///
/// Setting `DETERMINISTIC_TEST_RNG=1` in the environment pins the seed.
#[cfg(feature = "std")]
pub fn test_rng() -> impl RngCore + CryptoRng {
    let is_deterministic =
        std::env::vars().any(|(key, val)| key == "DETERMINISTIC_TEST_RNG" && val == "1");
    if is_deterministic {
        fixed_test_rng()
    } else {
        ChaChaRng::from_entropy()
    }
}

#[cfg(all(test, feature = "std"))]
mod test {
    use ark_std::UniformRand;

    #[test]
    fn seeded_rng_is_reproducible() {
        let a = u128::rand(&mut super::seeded_rng(27));
        let b = u128::rand(&mut super::seeded_rng(27));
        let c = u128::rand(&mut super::seeded_rng(28));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_deterministic_rng() {
        let mut rng = super::test_rng();
        let a = u128::rand(&mut rng);
        let mut rng = super::test_rng();
        let b = u128::rand(&mut rng);
        assert_ne!(a, b);

        std::env::set_var("DETERMINISTIC_TEST_RNG", "1");
        let a = u128::rand(&mut super::test_rng());
        let b = u128::rand(&mut super::test_rng());
        assert_eq!(a, b);
        std::env::remove_var("DETERMINISTIC_TEST_RNG");
    }
}
