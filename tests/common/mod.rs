use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Deterministic RNG so failures are reproducible.
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

/// Draws `count` codes, biased so the known codes and their neighbours show up.
pub fn generate_codes(rng: &mut StdRng, count: usize) -> Vec<i64> {
    (0..count)
        .map(|_| match rng.gen_range(0..4) {
            0 => rng.gen_range(-3..=5),
            1 => rng.gen_range(i64::MIN..=i64::MAX),
            _ => rng.gen_range(-1_000..=1_000),
        })
        .collect()
}

pub fn generate_amounts(rng: &mut StdRng, count: usize) -> Vec<f64> {
    let mut amounts: Vec<f64> = (0..count)
        .map(|_| rng.gen_range(-1_000_000.0..1_000_000.0))
        .collect();
    amounts.extend([0.0, -0.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY, f64::MAX]);
    amounts
}
