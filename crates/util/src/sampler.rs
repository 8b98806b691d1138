use rand::seq::{index, SliceRandom};
use rand::{rngs::OsRng, Rng, RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// A pseudo-random source for sampling and reordering collections.
///
/// Uses the xoshiro256** PRNG, so a seeded sampler replays the same sequence.
/// Callers own the sampler and pass it by `&mut`; there is no shared state.
///
/// # Examples
///
/// ```
/// use json_arr_util::sampler::Sampler;
///
/// let mut a = Sampler::from_u64(7);
/// let mut b = Sampler::from_u64(7);
///
/// let mut left = vec![1, 2, 3, 4, 5];
/// let mut right = left.clone();
/// a.shuffle(&mut left);
/// b.shuffle(&mut right);
/// assert_eq!(left, right);
/// ```
#[derive(Debug, Clone)]
pub struct Sampler {
    /// The seed used to initialize the PRNG.
    pub seed: [u8; 32],
    rng: Xoshiro256StarStar,
}

impl Sampler {
    /// Create a sampler with an optional seed.
    ///
    /// If no seed is provided, a random seed is drawn from `OsRng`.
    pub fn new(seed: Option<[u8; 32]>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });

        Self {
            seed,
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    /// Create a reproducible sampler from an integer seed.
    pub fn from_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        for chunk in bytes.chunks_mut(8) {
            chunk.copy_from_slice(&seed.to_le_bytes());
        }
        Self::new(Some(bytes))
    }

    /// Pick one index in `0..len`. Returns `None` for an empty range.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..len))
    }

    /// Pick `amount` distinct indices in `0..len`, returned in ascending order.
    ///
    /// `amount` is clamped to `len`.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        let amount = amount.min(len);
        let mut picked = index::sample(&mut self.rng, len, amount).into_vec();
        picked.sort_unstable();
        picked
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new(None)
    }
}
