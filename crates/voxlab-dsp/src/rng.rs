//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! All randomness in the core flows through this module so that demo
//! transforms are reproducible. Component seeds are derived with BLAKE3
//! so independent consumers get independent streams.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in
/// both halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives a seed for a named component from the base seed.
///
/// Hashes the base seed (little-endian) concatenated with the key and
/// truncates the BLAKE3 digest to a u32.
pub fn derive_component_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);
    let bytes: [u8; 4] = hash.as_bytes()[0..4]
        .try_into()
        .expect("BLAKE3 digest is at least 4 bytes");
    u32::from_le_bytes(bytes)
}

/// Creates an RNG for a named component.
pub fn create_component_rng(base_seed: u32, key: &str) -> Pcg32 {
    create_rng(derive_component_seed(base_seed, key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_rng_determinism() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(42);

        let values1: Vec<f64> = (0..100).map(|_| rng1.gen()).collect();
        let values2: Vec<f64> = (0..100).map(|_| rng2.gen()).collect();

        assert_eq!(values1, values2);
    }

    #[test]
    fn test_different_seeds_produce_different_sequences() {
        let mut rng1 = create_rng(42);
        let mut rng2 = create_rng(43);

        let values1: Vec<f64> = (0..10).map(|_| rng1.gen()).collect();
        let values2: Vec<f64> = (0..10).map(|_| rng2.gen()).collect();

        assert_ne!(values1, values2);
    }

    #[test]
    fn test_component_seed_derivation() {
        let seed_cyclegan = derive_component_seed(42, "cyclegan");
        let seed_stargan = derive_component_seed(42, "stargan");
        assert_ne!(seed_cyclegan, seed_stargan);

        // Same key produces same seed
        assert_eq!(seed_cyclegan, derive_component_seed(42, "cyclegan"));
    }
}
