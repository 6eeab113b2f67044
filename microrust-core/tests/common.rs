use microrust_core::Scalar;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Shared by several test crates; each one only uses part of it.
#[allow(dead_code)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Deterministic generator so failures are reproducible.
#[allow(dead_code)]
pub(crate) fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed_cafe)
}

/// A leaf holding a random value in `[-10, 10)`.
#[allow(dead_code)]
pub(crate) fn random_leaf(rng: &mut StdRng) -> Scalar {
    Scalar::new(rng.gen_range(-10.0..10.0))
}
