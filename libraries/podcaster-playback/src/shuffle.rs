//! Shuffle selection for "next" while shuffling
//!
//! Picks a uniformly random queue position over the full queue. The current
//! position is a valid pick, so the same episode may come up twice in a row.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source for shuffle picks
pub(crate) struct ShufflePicker {
    rng: StdRng,
}

impl ShufflePicker {
    /// Create picker, seeded for reproducible sequences or from OS entropy
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Uniform index in `[0, len)`, `None` for an empty queue
    pub fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn pick_on_empty_queue() {
        let mut picker = ShufflePicker::new(Some(7));
        assert_eq!(picker.pick(0), None);
    }

    #[test]
    fn pick_on_single_episode_is_zero() {
        let mut picker = ShufflePicker::new(None);
        for _ in 0..20 {
            assert_eq!(picker.pick(1), Some(0));
        }
    }

    #[test]
    fn picks_stay_in_range_and_cover_queue() {
        let mut picker = ShufflePicker::new(Some(42));
        let mut seen = HashSet::new();

        for _ in 0..1000 {
            let index = picker.pick(5).unwrap();
            assert!(index < 5);
            seen.insert(index);
        }

        // 1000 uniform draws over 5 slots hit every slot
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = ShufflePicker::new(Some(99));
        let mut b = ShufflePicker::new(Some(99));

        let seq_a: Vec<_> = (0..32).map(|_| a.pick(10)).collect();
        let seq_b: Vec<_> = (0..32).map(|_| b.pick(10)).collect();
        assert_eq!(seq_a, seq_b);
    }
}
