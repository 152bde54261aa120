//! Budgeted best-improvement hill-climbing.
//!
//! # Algorithm
//!
//! 1. Start from the given schedule
//! 2. At each round:
//!    a. Pick the moves to examine (all of them, or a subset of
//!    `max_neighbors` chosen by the sampling policy)
//!    b. Price every picked move against the current schedule
//!    c. If the cheapest candidate is strictly better, move to it;
//!    otherwise stop: the schedule is a local optimum
//! 3. Stop after `max_iterations` rounds at the latest
//!
//! The makespan never increases, and every returned schedule is a
//! permutation of the input jobs.

use rand::Rng;

use super::config::LocalSearchConfig;
use crate::error::FlowshopError;
use crate::flowshop::Schedule;
use crate::neighborhood::{evaluate_move, Move, MoveKind, Neighborhood};

/// Result of a local search run.
#[derive(Debug, Clone)]
pub struct LocalSearchResult {
    /// Best schedule reached (the last accepted one).
    pub best: Schedule,
    /// Makespan of the starting schedule.
    pub initial_makespan: u64,
    /// Rounds executed, including the final non-improving one.
    pub iterations: usize,
    /// Total number of candidate moves priced.
    pub evaluations: usize,
    /// Whether the search stopped at a local optimum rather than on the
    /// iteration budget.
    pub converged: bool,
    /// Makespan after each accepted move, starting with the initial one.
    pub makespan_history: Vec<u64>,
}

impl LocalSearchResult {
    /// Makespan reduction achieved by the run.
    pub fn improvement(&self) -> u64 {
        self.initial_makespan - self.best.makespan()
    }
}

/// Hill-climbing runner over a precomputed neighborhood.
pub struct LocalSearchRunner;

impl LocalSearchRunner {
    /// Runs hill-climbing from `schedule` over `neighborhood`.
    ///
    /// The RNG is only drawn from when the neighborhood is larger than
    /// `config.max_neighbors` and the sampling policy is random.
    ///
    /// # Errors
    ///
    /// - [`FlowshopError::InvalidConfig`] if `config` fails validation
    /// - [`FlowshopError::NeighborhoodSizeMismatch`] if the neighborhood was
    ///   built for a different job count than the schedule's length
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use u_flowshop::flowshop::{Job, Schedule};
    /// use u_flowshop::local_search::{LocalSearchConfig, LocalSearchRunner};
    /// use u_flowshop::neighborhood::Neighborhood;
    ///
    /// let schedule = Schedule::from_jobs(
    ///     2,
    ///     vec![Job::new(1, vec![5, 1]), Job::new(0, vec![1, 5])],
    /// ).unwrap();
    /// let swaps = Neighborhood::swap(2);
    /// let config = LocalSearchConfig::default();
    /// let mut rng = StdRng::seed_from_u64(42);
    ///
    /// let result = LocalSearchRunner::run(&schedule, &swaps, &config, &mut rng).unwrap();
    /// assert_eq!(result.best.makespan(), 7);
    /// assert!(result.converged);
    /// ```
    pub fn run<R: Rng>(
        schedule: &Schedule,
        neighborhood: &Neighborhood,
        config: &LocalSearchConfig,
        rng: &mut R,
    ) -> Result<LocalSearchResult, FlowshopError> {
        config.validate().map_err(FlowshopError::InvalidConfig)?;
        if neighborhood.job_count() != schedule.len() {
            return Err(FlowshopError::NeighborhoodSizeMismatch {
                neighborhood: neighborhood.job_count(),
                schedule: schedule.len(),
            });
        }

        let initial_makespan = schedule.makespan();
        let mut current = schedule.clone();
        let mut makespan_history = vec![initial_makespan];
        let mut iterations = 0;
        let mut evaluations = 0;
        let mut converged = false;

        let moves = neighborhood.moves();

        while iterations < config.max_iterations {
            let picked = config
                .sampling
                .select(moves.len(), config.max_neighbors, rng);
            evaluations += picked.len();
            iterations += 1;

            let best = if config.parallel {
                best_candidate_parallel(&current, moves, &picked)?
            } else {
                best_candidate(&current, moves, &picked)?
            };

            match best {
                Some((makespan, idx)) if makespan < current.makespan() => {
                    current = current.apply(moves[idx])?;
                    makespan_history.push(makespan);
                    tracing::trace!(
                        iteration = iterations,
                        makespan,
                        mv = %moves[idx],
                        "accepted improving move"
                    );
                }
                _ => {
                    converged = true;
                    break;
                }
            }
        }

        tracing::debug!(
            kind = %neighborhood.kind(),
            initial_makespan,
            final_makespan = current.makespan(),
            iterations,
            evaluations,
            converged,
            "local search finished"
        );

        Ok(LocalSearchResult {
            best: current,
            initial_makespan,
            iterations,
            evaluations,
            converged,
            makespan_history,
        })
    }
}

/// Cheapest picked move as `(makespan, index)`, ties to the lowest index.
fn best_candidate(
    current: &Schedule,
    moves: &[Move],
    picked: &[usize],
) -> Result<Option<(u64, usize)>, FlowshopError> {
    let mut row = Vec::with_capacity(current.machine_count());
    let mut best: Option<(u64, usize)> = None;
    for &idx in picked {
        let makespan = evaluate_move(current, moves[idx], &mut row)?;
        if best.map_or(true, |(b, _)| makespan < b) {
            best = Some((makespan, idx));
        }
    }
    Ok(best)
}

#[cfg(feature = "parallel")]
fn best_candidate_parallel(
    current: &Schedule,
    moves: &[Move],
    picked: &[usize],
) -> Result<Option<(u64, usize)>, FlowshopError> {
    use rayon::prelude::*;

    let scored = picked
        .par_iter()
        .map_init(Vec::new, |row, &idx| {
            evaluate_move(current, moves[idx], row).map(|makespan| (makespan, idx))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(scored.into_iter().min())
}

#[cfg(not(feature = "parallel"))]
fn best_candidate_parallel(
    current: &Schedule,
    moves: &[Move],
    picked: &[usize],
) -> Result<Option<(u64, usize)>, FlowshopError> {
    best_candidate(current, moves, picked)
}

fn expect_kind(neighborhood: &Neighborhood, expected: MoveKind) -> Result<(), FlowshopError> {
    if neighborhood.kind() != expected {
        return Err(FlowshopError::NeighborhoodKindMismatch {
            expected,
            found: neighborhood.kind(),
        });
    }
    Ok(())
}

/// Hill-climbs `schedule` with swap moves and returns the best schedule.
///
/// Fails with [`FlowshopError::NeighborhoodKindMismatch`] when given an
/// insert neighborhood.
pub fn local_search_swap<R: Rng>(
    schedule: &Schedule,
    neighbors: &Neighborhood,
    config: &LocalSearchConfig,
    rng: &mut R,
) -> Result<Schedule, FlowshopError> {
    expect_kind(neighbors, MoveKind::Swap)?;
    Ok(LocalSearchRunner::run(schedule, neighbors, config, rng)?.best)
}

/// Hill-climbs `schedule` with insert moves and returns the best schedule.
///
/// Fails with [`FlowshopError::NeighborhoodKindMismatch`] when given a
/// swap neighborhood.
pub fn local_search_insert<R: Rng>(
    schedule: &Schedule,
    neighbors: &Neighborhood,
    config: &LocalSearchConfig,
    rng: &mut R,
) -> Result<Schedule, FlowshopError> {
    expect_kind(neighbors, MoveKind::Insert)?;
    Ok(LocalSearchRunner::run(schedule, neighbors, config, rng)?.best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flowshop::{Flowshop, Job};
    use crate::local_search::NeighborSampling;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn shop() -> Flowshop {
        Flowshop::new(
            5,
            vec![
                Job::new(1, vec![1, 1, 1, 1, 10]),
                Job::new(2, vec![1, 1, 1, 4, 8]),
                Job::new(3, vec![2, 1, 3, 5, 1]),
                Job::new(4, vec![2, 5, 5, 3, 3]),
                Job::new(5, vec![1, 1, 3, 7, 1]),
            ],
        )
        .unwrap()
    }

    fn two_job_schedule() -> Schedule {
        Schedule::from_jobs(2, vec![Job::new(1, vec![5, 1]), Job::new(0, vec![1, 5])]).unwrap()
    }

    fn assert_same_jobs(a: &Schedule, b: &Schedule) {
        let mut x = a.job_ids();
        let mut y = b.job_ids();
        x.sort_unstable();
        y.sort_unstable();
        assert_eq!(x, y, "job sets differ");
        assert!(!b.has_duplicate());
    }

    #[test]
    fn test_two_job_improvement_swap() {
        let s = two_job_schedule();
        assert_eq!(s.makespan(), 11);
        let config = LocalSearchConfig::default().with_max_iterations(1);
        let mut rng = StdRng::seed_from_u64(42);

        let out = local_search_swap(&s, &Neighborhood::swap(2), &config, &mut rng).unwrap();
        assert_eq!(out.makespan(), 7);
        assert_eq!(out.job_ids(), vec![0, 1]);
        assert_eq!(s.makespan(), 11, "input must be left untouched");
    }

    #[test]
    fn test_two_job_improvement_insert() {
        let s = two_job_schedule();
        let config = LocalSearchConfig::default().with_max_iterations(1);
        let mut rng = StdRng::seed_from_u64(42);

        let out = local_search_insert(&s, &Neighborhood::insert(2), &config, &mut rng).unwrap();
        assert_eq!(out.makespan(), 7);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_monotonic_and_valid() {
        let shop = shop();
        let swaps = Neighborhood::swap(5);
        let inserts = Neighborhood::insert(5);
        let config = LocalSearchConfig::default();
        let mut rng = StdRng::seed_from_u64(42);

        for order in [[2, 3, 4, 5, 1], [1, 4, 5, 2, 3], [5, 4, 3, 2, 1]] {
            let s = shop.schedule_ids(&order).unwrap();
            let a = local_search_swap(&s, &swaps, &config, &mut rng).unwrap();
            let b = local_search_insert(&s, &inserts, &config, &mut rng).unwrap();
            assert!(a.makespan() <= s.makespan());
            assert!(b.makespan() <= s.makespan());
            assert_same_jobs(&s, &a);
            assert_same_jobs(&s, &b);
        }
    }

    #[test]
    fn test_history_strictly_decreasing() {
        let shop = shop();
        let s = shop.schedule_ids(&[5, 4, 3, 2, 1]).unwrap();
        let config = LocalSearchConfig::default().with_max_iterations(100);
        let mut rng = StdRng::seed_from_u64(1);

        let result = LocalSearchRunner::run(&s, &Neighborhood::insert(5), &config, &mut rng).unwrap();
        assert_eq!(result.makespan_history[0], s.makespan());
        assert_eq!(*result.makespan_history.last().unwrap(), result.best.makespan());
        for w in result.makespan_history.windows(2) {
            assert!(w[1] < w[0], "accepted moves must strictly improve: {:?}", w);
        }
        assert!(result.converged, "100 rounds is plenty for 5 jobs");
        assert_eq!(result.improvement(), s.makespan() - result.best.makespan());
    }

    #[test]
    fn test_local_optimum_is_fixed_point() {
        let shop = shop();
        let swaps = Neighborhood::swap(5);
        let config = LocalSearchConfig::default().with_max_iterations(100);
        let mut rng = StdRng::seed_from_u64(5);

        let s = shop.schedule_ids(&[1, 4, 5, 2, 3]).unwrap();
        let first = LocalSearchRunner::run(&s, &swaps, &config, &mut rng).unwrap();
        assert!(first.converged);

        let second = LocalSearchRunner::run(&first.best, &swaps, &config, &mut rng).unwrap();
        assert_eq!(second.best.makespan(), first.best.makespan());
        assert_eq!(second.best.job_ids(), first.best.job_ids());
        assert_eq!(second.iterations, 1);
        assert!(second.converged);
    }

    #[test]
    fn test_optimal_start_stops_immediately() {
        let shop = shop();
        let s = shop.identity_schedule().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let result = LocalSearchRunner::run(
            &s,
            &Neighborhood::swap(5),
            &LocalSearchConfig::default(),
            &mut rng,
        )
        .unwrap();
        assert_eq!(result.best.makespan(), 27);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.evaluations, 10);
        assert!(result.converged);
    }

    #[test]
    fn test_iteration_budget() {
        let mut rng = StdRng::seed_from_u64(11);
        let shop = Flowshop::random(12, 4, &mut rng).unwrap();
        let mut ids: Vec<usize> = (0..12).rev().collect();
        ids.rotate_left(3);
        let s = shop.schedule_ids(&ids).unwrap();

        let config = LocalSearchConfig::default().with_max_iterations(0);
        let result = LocalSearchRunner::run(&s, &Neighborhood::swap(12), &config, &mut rng).unwrap();
        assert_eq!(result.iterations, 0);
        assert_eq!(result.evaluations, 0);
        assert!(!result.converged);
        assert_eq!(result.best.job_ids(), s.job_ids());

        let config = LocalSearchConfig::default().with_max_iterations(2);
        let result = LocalSearchRunner::run(&s, &Neighborhood::swap(12), &config, &mut rng).unwrap();
        assert!(result.iterations <= 2);
        assert!(result.makespan_history.len() <= 3);
    }

    #[test]
    fn test_neighbor_cap_limits_evaluations() {
        let mut rng = StdRng::seed_from_u64(3);
        let shop = Flowshop::random(10, 3, &mut rng).unwrap();
        let s = shop.identity_schedule().unwrap();
        let inserts = Neighborhood::insert(10);
        let config = LocalSearchConfig::default()
            .with_max_iterations(4)
            .with_max_neighbors(7);

        let result = LocalSearchRunner::run(&s, &inserts, &config, &mut rng).unwrap();
        assert_eq!(result.evaluations, 7 * result.iterations);
    }

    #[test]
    fn test_prefix_sampling_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(8);
        let shop = Flowshop::random(9, 4, &mut rng).unwrap();
        let s = shop.identity_schedule().unwrap();
        let swaps = Neighborhood::swap(9);
        let config = LocalSearchConfig::default()
            .with_max_neighbors(10)
            .with_sampling(NeighborSampling::Prefix);

        let a = LocalSearchRunner::run(&s, &swaps, &config, &mut StdRng::seed_from_u64(1)).unwrap();
        let b = LocalSearchRunner::run(&s, &swaps, &config, &mut StdRng::seed_from_u64(2)).unwrap();
        assert_eq!(a.best.job_ids(), b.best.job_ids());
    }

    #[test]
    fn test_same_seed_same_result() {
        let mut rng = StdRng::seed_from_u64(21);
        let shop = Flowshop::random(15, 5, &mut rng).unwrap();
        let s = shop.identity_schedule().unwrap();
        let inserts = Neighborhood::insert(15);
        let config = LocalSearchConfig::default().with_max_neighbors(25);

        let a = LocalSearchRunner::run(&s, &inserts, &config, &mut StdRng::seed_from_u64(4)).unwrap();
        let b = LocalSearchRunner::run(&s, &inserts, &config, &mut StdRng::seed_from_u64(4)).unwrap();
        assert_eq!(a.best.job_ids(), b.best.job_ids());
        assert_eq!(a.makespan_history, b.makespan_history);
    }

    #[test]
    fn test_parallel_flag_matches_sequential() {
        let mut rng = StdRng::seed_from_u64(13);
        let shop = Flowshop::random(14, 6, &mut rng).unwrap();
        let s = shop.identity_schedule().unwrap();
        let swaps = Neighborhood::swap(14);
        let config = LocalSearchConfig::default().with_max_neighbors(40);

        let seq = LocalSearchRunner::run(&s, &swaps, &config, &mut StdRng::seed_from_u64(4)).unwrap();
        let par = LocalSearchRunner::run(
            &s,
            &swaps,
            &config.clone().with_parallel(true),
            &mut StdRng::seed_from_u64(4),
        )
        .unwrap();
        assert_eq!(seq.best.job_ids(), par.best.job_ids());
        assert_eq!(seq.makespan_history, par.makespan_history);
    }

    #[test]
    fn test_size_mismatch() {
        let s = two_job_schedule();
        let mut rng = StdRng::seed_from_u64(0);
        let err = LocalSearchRunner::run(
            &s,
            &Neighborhood::swap(5),
            &LocalSearchConfig::default(),
            &mut rng,
        )
        .unwrap_err();
        assert_eq!(
            err,
            FlowshopError::NeighborhoodSizeMismatch {
                neighborhood: 5,
                schedule: 2
            }
        );
    }

    #[test]
    fn test_kind_mismatch() {
        let s = two_job_schedule();
        let mut rng = StdRng::seed_from_u64(0);
        let config = LocalSearchConfig::default();
        assert!(matches!(
            local_search_swap(&s, &Neighborhood::insert(2), &config, &mut rng),
            Err(FlowshopError::NeighborhoodKindMismatch { .. })
        ));
        assert!(matches!(
            local_search_insert(&s, &Neighborhood::swap(2), &config, &mut rng),
            Err(FlowshopError::NeighborhoodKindMismatch { .. })
        ));
    }

    #[test]
    fn test_invalid_config() {
        let s = two_job_schedule();
        let mut rng = StdRng::seed_from_u64(0);
        let config = LocalSearchConfig::default().with_max_neighbors(0);
        assert!(matches!(
            LocalSearchRunner::run(&s, &Neighborhood::swap(2), &config, &mut rng),
            Err(FlowshopError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_single_job_converges() {
        let s = Schedule::from_jobs(3, vec![Job::new(0, vec![1, 2, 3])]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let result = LocalSearchRunner::run(
            &s,
            &Neighborhood::insert(1),
            &LocalSearchConfig::default(),
            &mut rng,
        )
        .unwrap();
        assert!(result.converged);
        assert_eq!(result.best.makespan(), 6);
    }
}
