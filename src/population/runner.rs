//! Population-wide local search pass.
//!
//! # Algorithm
//!
//! 1. Select `members` population indices
//! 2. For each selected member, draw whether to run swap search and
//!    whether to run insert search, plus a private RNG seed
//! 3. Run the chosen searches on each member (swap first, insert on its
//!    output), replacing the member with the result
//!
//! All draws of step 1 and 2 happen up front on the caller's RNG, so the
//! outcome does not depend on whether step 3 runs in parallel.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::config::PopulationSearchConfig;
use crate::error::FlowshopError;
use crate::flowshop::Schedule;
use crate::local_search::LocalSearchRunner;
use crate::neighborhood::{MoveKind, Neighborhood};

/// Result of a population local search pass.
#[derive(Debug, Clone)]
pub struct PopulationSearchResult {
    /// The population after the pass, same size and order as the input.
    pub population: Vec<Schedule>,
    /// Indices of the members that were selected.
    pub selected: Vec<usize>,
    /// Number of swap searches run.
    pub swap_searches: usize,
    /// Number of insert searches run.
    pub insert_searches: usize,
    /// Number of members whose makespan decreased.
    pub improved: usize,
}

/// Decisions for one selected member, drawn before any search runs.
#[derive(Debug, Clone, Copy)]
struct MemberPlan {
    index: usize,
    swap: bool,
    insert: bool,
    seed: u64,
}

/// Population local search runner.
pub struct PopulationSearchRunner;

impl PopulationSearchRunner {
    /// Applies local search to part of `population`.
    ///
    /// The input is not modified; the returned population holds the
    /// searched members in place of the originals.
    ///
    /// # Errors
    ///
    /// - [`FlowshopError::InvalidConfig`] if `config` fails validation
    /// - [`FlowshopError::NeighborhoodKindMismatch`] if the neighborhoods
    ///   are swapped
    /// - [`FlowshopError::NeighborhoodSizeMismatch`] if a searched member's
    ///   length differs from the neighborhoods' job count
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    /// use u_flowshop::flowshop::{Flowshop, Job};
    /// use u_flowshop::neighborhood::Neighborhood;
    /// use u_flowshop::population::{PopulationSearchConfig, PopulationSearchRunner};
    ///
    /// let shop = Flowshop::new(2, vec![Job::new(0, vec![1, 5]), Job::new(1, vec![5, 1])]).unwrap();
    /// let population = vec![shop.schedule_ids(&[1, 0]).unwrap(), shop.schedule_ids(&[0, 1]).unwrap()];
    /// let config = PopulationSearchConfig::default()
    ///     .with_swap_probability(1.0)
    ///     .with_members(2);
    /// let mut rng = StdRng::seed_from_u64(42);
    ///
    /// let result = PopulationSearchRunner::run(
    ///     &population,
    ///     &Neighborhood::swap(2),
    ///     &Neighborhood::insert(2),
    ///     &config,
    ///     &mut rng,
    /// ).unwrap();
    /// assert_eq!(result.population.len(), 2);
    /// assert!(result.population.iter().all(|s| s.makespan() == 7));
    /// ```
    pub fn run<R: Rng>(
        population: &[Schedule],
        swap_neighbors: &Neighborhood,
        insert_neighbors: &Neighborhood,
        config: &PopulationSearchConfig,
        rng: &mut R,
    ) -> Result<PopulationSearchResult, FlowshopError> {
        config.validate().map_err(FlowshopError::InvalidConfig)?;
        expect_kind(swap_neighbors, MoveKind::Swap)?;
        expect_kind(insert_neighbors, MoveKind::Insert)?;

        let selected = config
            .selection
            .select(population, config.members, rng);
        let plans: Vec<MemberPlan> = selected
            .iter()
            .map(|&index| MemberPlan {
                index,
                swap: rng.random_bool(config.swap_probability),
                insert: rng.random_bool(config.insert_probability),
                seed: rng.random(),
            })
            .collect();

        let searched = if config.parallel {
            search_members_parallel(population, &plans, swap_neighbors, insert_neighbors, config)?
        } else {
            plans
                .iter()
                .map(|plan| {
                    search_member(
                        &population[plan.index],
                        plan,
                        swap_neighbors,
                        insert_neighbors,
                        config,
                    )
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        let mut next = population.to_vec();
        let mut improved = 0;
        for (plan, schedule) in plans.iter().zip(searched) {
            if schedule.makespan() < next[plan.index].makespan() {
                improved += 1;
            }
            next[plan.index] = schedule;
        }

        let swap_searches = plans.iter().filter(|p| p.swap).count();
        let insert_searches = plans.iter().filter(|p| p.insert).count();

        tracing::debug!(
            population = population.len(),
            selected = plans.len(),
            swap_searches,
            insert_searches,
            improved,
            total_before = total_makespan(population),
            total_after = total_makespan(&next),
            "population local search finished"
        );

        Ok(PopulationSearchResult {
            population: next,
            selected,
            swap_searches,
            insert_searches,
            improved,
        })
    }
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

fn search_member(
    member: &Schedule,
    plan: &MemberPlan,
    swap_neighbors: &Neighborhood,
    insert_neighbors: &Neighborhood,
    config: &PopulationSearchConfig,
) -> Result<Schedule, FlowshopError> {
    let mut rng = StdRng::seed_from_u64(plan.seed);
    let mut current = member.clone();
    if plan.swap {
        current = LocalSearchRunner::run(&current, swap_neighbors, &config.local_search, &mut rng)?.best;
    }
    if plan.insert {
        current =
            LocalSearchRunner::run(&current, insert_neighbors, &config.local_search, &mut rng)?.best;
    }
    Ok(current)
}

#[cfg(feature = "parallel")]
fn search_members_parallel(
    population: &[Schedule],
    plans: &[MemberPlan],
    swap_neighbors: &Neighborhood,
    insert_neighbors: &Neighborhood,
    config: &PopulationSearchConfig,
) -> Result<Vec<Schedule>, FlowshopError> {
    use rayon::prelude::*;

    plans
        .par_iter()
        .map(|plan| {
            search_member(
                &population[plan.index],
                plan,
                swap_neighbors,
                insert_neighbors,
                config,
            )
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn search_members_parallel(
    population: &[Schedule],
    plans: &[MemberPlan],
    swap_neighbors: &Neighborhood,
    insert_neighbors: &Neighborhood,
    config: &PopulationSearchConfig,
) -> Result<Vec<Schedule>, FlowshopError> {
    plans
        .iter()
        .map(|plan| {
            search_member(
                &population[plan.index],
                plan,
                swap_neighbors,
                insert_neighbors,
                config,
            )
        })
        .collect()
}

/// Applies local search to part of `population` and returns the new
/// population.
pub fn local_search_population<R: Rng>(
    population: &[Schedule],
    swap_neighbors: &Neighborhood,
    insert_neighbors: &Neighborhood,
    config: &PopulationSearchConfig,
    rng: &mut R,
) -> Result<Vec<Schedule>, FlowshopError> {
    Ok(PopulationSearchRunner::run(population, swap_neighbors, insert_neighbors, config, rng)?.population)
}

/// Sum of the members' makespans.
pub fn total_makespan(population: &[Schedule]) -> u64 {
    population.iter().map(Schedule::makespan).sum()
}
