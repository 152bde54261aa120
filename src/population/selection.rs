//! Member selection policies.

use rand::seq::index;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::flowshop::Schedule;

/// Which population members receive local search.
///
/// Selected indices are always distinct and returned in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MemberSelection {
    /// Uniform sampling without replacement.
    #[default]
    Uniform,

    /// The members with the lowest makespan, ties broken by position.
    /// Draws nothing from the RNG.
    Best,
}

impl MemberSelection {
    /// Picks `amount` member indices (clamped to the population size).
    pub fn select<R: Rng>(&self, population: &[Schedule], amount: usize, rng: &mut R) -> Vec<usize> {
        let n = population.len();
        let amount = amount.min(n);
        let mut picked = match self {
            MemberSelection::Uniform => index::sample(rng, n, amount).into_vec(),
            MemberSelection::Best => {
                let mut order: Vec<usize> = (0..n).collect();
                order.sort_by_key(|&i| (population[i].makespan(), i));
                order.truncate(amount);
                order
            }
        };
        picked.sort_unstable();
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flowshop::Job;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn population() -> Vec<Schedule> {
        // Single-machine schedules: makespan is the sum of durations.
        [9u64, 3, 7, 3, 12]
            .iter()
            .enumerate()
            .map(|(id, &d)| Schedule::from_jobs(1, vec![Job::new(id, vec![d])]).unwrap())
            .collect()
    }

    #[test]
    fn test_best_selection() {
        let pop = population();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(MemberSelection::Best.select(&pop, 2, &mut rng), vec![1, 3]);
        assert_eq!(MemberSelection::Best.select(&pop, 3, &mut rng), vec![1, 2, 3]);
    }

    #[test]
    fn test_uniform_selection() {
        let pop = population();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let picked = MemberSelection::Uniform.select(&pop, 3, &mut rng);
            assert_eq!(picked.len(), 3);
            assert!(picked.windows(2).all(|w| w[0] < w[1]));
            assert!(picked.iter().all(|&i| i < pop.len()));
        }
    }

    #[test]
    fn test_amount_clamped() {
        let pop = population();
        let mut rng = StdRng::seed_from_u64(1);
        for policy in [MemberSelection::Uniform, MemberSelection::Best] {
            assert_eq!(policy.select(&pop, 99, &mut rng), vec![0, 1, 2, 3, 4]);
            assert!(policy.select(&[], 3, &mut rng).is_empty());
        }
    }
}
