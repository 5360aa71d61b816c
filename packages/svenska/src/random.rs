//! Random source used wherever the app picks something "at random".
//!
//! Production code passes `rand::thread_rng()`; tests pass a seeded
//! [`rand::rngs::StdRng`] or a [`ScriptedRandom`] to get fixed outcomes.

use rand::{Rng, RngCore};

pub trait RandomSource {
    /// A uniformly chosen index in `0..len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize;
}

impl<R: RngCore> RandomSource for R {
    fn index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// The random source used outside of tests.
pub fn thread_random() -> impl RandomSource {
    rand::thread_rng()
}

/// Replays a fixed sequence of indices, wrapping each into range and cycling
/// back to the start when exhausted.
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    sequence: Vec<usize>,
    position: usize,
}

impl ScriptedRandom {
    pub fn new(sequence: Vec<usize>) -> Self {
        Self {
            sequence,
            position: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn index(&mut self, len: usize) -> usize {
        if self.sequence.is_empty() {
            return 0;
        }
        let value = self.sequence[self.position % self.sequence.len()];
        self.position += 1;
        value % len
    }
}

/// Pick an element of `items`, or `None` when empty.
pub fn pick<'a, T, R: RandomSource>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.index(items.len()))
}

/// Fisher-Yates shuffle driven by `rng`.
pub fn shuffle<T, R: RandomSource>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.index(i + 1);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_scripted_wraps_and_cycles() {
        let mut rng = ScriptedRandom::new(vec![1, 12]);
        assert_eq!(rng.index(10), 1);
        assert_eq!(rng.index(10), 2);
        assert_eq!(rng.index(10), 1);
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let xs: Vec<usize> = (0..20).map(|_| a.index(100)).collect();
        let ys: Vec<usize> = (0..20).map(|_| b.index(100)).collect();
        assert_eq!(xs, ys);
        assert!(xs.iter().all(|&x| x < 100));
    }

    #[test]
    fn test_pick_empty() {
        let mut rng = ScriptedRandom::new(vec![3]);
        let empty: [u8; 0] = [];
        assert!(pick(&mut rng, &empty).is_none());
        assert_eq!(pick(&mut rng, &["a", "b"]), Some(&"b"));
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut items: Vec<u32> = (0..10).collect();
        shuffle(&mut rng, &mut items);
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..10).collect::<Vec<_>>());
    }
}
