//! Random selection over content lists.
//!
//! Functions take the RNG as a parameter so callers (and tests) control
//! the randomness source.

use rand::seq::SliceRandom;
use rand::Rng;

/// Number of tips shown at once.
pub const DEFAULT_TIP_SAMPLE: usize = 3;

/// Uniformly picks one item, `None` for an empty list.
pub fn pick_one<'a, T, R>(items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng)
}

/// Returns `k` distinct items in random order.
///
/// With fewer than `k` items, returns all of them shuffled.
pub fn sample<T, R>(items: &[T], k: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut pool = items.to_vec();
    let amount = k.min(pool.len());
    let (chosen, _) = pool.partial_shuffle(rng, amount);
    chosen.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::seed_tips;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn pick_one_on_empty_returns_none() {
        let mut rng = StdRng::seed_from_u64(7);
        let empty: Vec<String> = vec![];
        assert!(pick_one(&empty, &mut rng).is_none());
    }

    #[test]
    fn pick_one_returns_member() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = vec!["a", "b", "c"];
        let picked = pick_one(&items, &mut rng).unwrap();
        assert!(items.contains(picked));
    }

    #[test]
    fn sample_tips_twice_returns_two_full_samples() {
        let tips = seed_tips();
        let mut rng = rand::thread_rng();

        let first = sample(&tips, DEFAULT_TIP_SAMPLE, &mut rng);
        let second = sample(&tips, DEFAULT_TIP_SAMPLE, &mut rng);

        assert_eq!(first.len(), 3);
        assert_eq!(second.len(), 3);
        assert!(first.iter().all(|t| tips.contains(t)));
        assert!(second.iter().all(|t| tips.contains(t)));
    }

    #[test]
    fn sample_short_list_returns_everything() {
        let mut rng = StdRng::seed_from_u64(1);
        let items = vec![1, 2];
        let mut picked = sample(&items, 3, &mut rng);
        picked.sort();
        assert_eq!(picked, vec![1, 2]);
    }

    #[test]
    fn sample_empty_list_returns_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let items: Vec<u8> = vec![];
        assert!(sample(&items, 3, &mut rng).is_empty());
    }

    #[test]
    fn sample_order_varies_across_seeds() {
        let items: Vec<u32> = (0..8).collect();
        let orders: HashSet<Vec<u32>> = (0..20)
            .map(|seed| sample(&items, 8, &mut StdRng::seed_from_u64(seed)))
            .collect();
        assert!(orders.len() > 1);
    }

    proptest! {
        #[test]
        fn sample_yields_distinct_members(len in 0usize..20, k in 0usize..25, seed in any::<u64>()) {
            let items: Vec<usize> = (0..len).collect();
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = sample(&items, k, &mut rng);

            prop_assert_eq!(picked.len(), k.min(len));
            let unique: HashSet<_> = picked.iter().collect();
            prop_assert_eq!(unique.len(), picked.len());
            prop_assert!(picked.iter().all(|i| *i < len));
        }
    }
}
