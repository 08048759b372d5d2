// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use rand::seq::index;
use rand::Rng;

/// Downsamples `items` to at most `max_count` elements.
///
/// A set that already fits is returned unchanged. An oversized set is
/// reduced to exactly `max_count` elements chosen uniformly at random
/// without replacement; the survivors keep their input order. This is a
/// plain size reduction for rendering — label ratios in the subset are not
/// stratified.
///
/// The random source is a caller-supplied [`Rng`], the only
/// non-determinism in the whole generation pipeline, so tests can pass a
/// seeded generator and assert exact output sets.
pub fn sample<T: Clone, R: Rng + ?Sized>(items: &[T], max_count: usize, rng: &mut R) -> Vec<T> {
    if items.len() <= max_count {
        return items.to_vec();
    }

    let mut keep = index::sample(rng, items.len(), max_count).into_vec();
    keep.sort_unstable();
    keep.into_iter().map(|i| items[i].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn undersized_input_is_returned_unchanged() {
        let items: Vec<u32> = (0..100).collect();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(sample(&items, 100, &mut rng), items);
        assert_eq!(sample(&items, 1000, &mut rng), items);
    }

    #[test]
    fn oversized_input_is_reduced_to_exactly_max_count() {
        let items: Vec<u32> = (0..1000).collect();
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picked = sample(&items, 37, &mut rng);
            assert_eq!(picked.len(), 37);
        }
    }

    #[test]
    fn selection_is_without_replacement_and_order_preserving() {
        let items: Vec<u32> = (0..500).collect();
        let mut rng = StdRng::seed_from_u64(42);
        let picked = sample(&items, 50, &mut rng);

        let mut deduped = picked.clone();
        deduped.dedup();
        assert_eq!(deduped.len(), picked.len());
        // Input order preserved means the picked values are ascending here.
        assert!(picked.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn identical_seeds_reproduce_the_exact_subset() {
        let items: Vec<u32> = (0..1000).collect();
        let a = sample(&items, 64, &mut StdRng::seed_from_u64(99));
        let b = sample(&items, 64, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn zero_max_count_yields_an_empty_set() {
        let items: Vec<u32> = (0..10).collect();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(sample(&items, 0, &mut rng).is_empty());
    }
}

// End of File
