//! Neighbor subsampling policies.

use rand::seq::index;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a round picks which moves to examine when the neighborhood is
/// larger than the neighbor cap.
///
/// Whatever the policy, the chosen indices are returned in ascending
/// enumeration order, which is also the tie-breaking order among equally
/// good candidates.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_flowshop::local_search::NeighborSampling;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// assert_eq!(NeighborSampling::Prefix.select(10, 3, &mut rng), vec![0, 1, 2]);
///
/// let picked = NeighborSampling::Uniform.select(10, 3, &mut rng);
/// assert_eq!(picked.len(), 3);
/// assert!(picked.windows(2).all(|w| w[0] < w[1]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NeighborSampling {
    /// Uniform sampling without replacement, redrawn every round.
    #[default]
    Uniform,

    /// The first moves in enumeration order. Draws nothing from the RNG.
    Prefix,
}

impl NeighborSampling {
    /// Picks `amount` indices out of `0..total`.
    ///
    /// When `amount >= total` every index is returned and the RNG is not
    /// touched.
    pub fn select<R: Rng>(&self, total: usize, amount: usize, rng: &mut R) -> Vec<usize> {
        if amount >= total {
            return (0..total).collect();
        }
        match self {
            NeighborSampling::Uniform => {
                let mut picked = index::sample(rng, total, amount).into_vec();
                picked.sort_unstable();
                picked
            }
            NeighborSampling::Prefix => (0..amount).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_full_list_when_under_cap() {
        let mut rng = StdRng::seed_from_u64(1);
        for policy in [NeighborSampling::Uniform, NeighborSampling::Prefix] {
            assert_eq!(policy.select(4, 50, &mut rng), vec![0, 1, 2, 3]);
            assert_eq!(policy.select(4, 4, &mut rng), vec![0, 1, 2, 3]);
        }
    }

    #[test]
    fn test_uniform_distinct_sorted_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let picked = NeighborSampling::Uniform.select(100, 20, &mut rng);
            assert_eq!(picked.len(), 20);
            assert!(picked.iter().all(|&i| i < 100));
            assert!(picked.windows(2).all(|w| w[0] < w[1]));
            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), 20);
        }
    }

    #[test]
    fn test_uniform_reproducible() {
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        assert_eq!(
            NeighborSampling::Uniform.select(300, 50, &mut a),
            NeighborSampling::Uniform.select(300, 50, &mut b)
        );
    }

    #[test]
    fn test_uniform_covers_whole_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.extend(NeighborSampling::Uniform.select(30, 5, &mut rng));
        }
        assert_eq!(seen.len(), 30, "every move should eventually be sampled");
    }
}
