// src/generators/random.rs
use rand::Rng;
use rand_core::RngCore;

/// Source of uniform indices used by the generator.
///
/// Every `rand` RNG is a source, so callers pass `rand::thread_rng()` for
/// normal use or a seeded `rand_chacha::ChaCha8Rng` for reproducible output.
pub trait RandomSource {
    /// Uniform integer in `0..bound`. `bound` must be non-zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: RngCore> RandomSource for R {
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Uniformly picks one byte of `alphabet`.
pub(crate) fn pick<S: RandomSource + ?Sized>(rng: &mut S, alphabet: &[u8]) -> u8 {
    alphabet[rng.next_index(alphabet.len())]
}

/// In-place Fisher-Yates shuffle driven by `rng`.
pub(crate) fn shuffle<T, S: RandomSource + ?Sized>(rng: &mut S, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.next_index(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn next_index_stays_below_bound() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for bound in 1..50 {
            for _ in 0..20 {
                assert!(rng.next_index(bound) < bound);
            }
        }
    }

    #[test]
    fn shuffle_keeps_every_element() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut items: Vec<u32> = (0..32).collect();
        shuffle(&mut rng, &mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..32).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_handles_trivial_slices() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut empty: [u8; 0] = [];
        shuffle(&mut rng, &mut empty);
        let mut single = [b'x'];
        shuffle(&mut rng, &mut single);
        assert_eq!(single, [b'x']);
    }

    #[test]
    fn shuffle_reaches_every_permutation_of_three() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut seen = std::collections::HashMap::new();
        for _ in 0..6000 {
            let mut items = [1, 2, 3];
            shuffle(&mut rng, &mut items);
            *seen.entry(items).or_insert(0u32) += 1;
        }
        assert_eq!(seen.len(), 6);
        // Each permutation expects 1000 hits.
        for count in seen.values() {
            assert!((800..1200).contains(count), "skewed permutation count {}", count);
        }
    }
}
