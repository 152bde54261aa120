//! Permutation flow-shop scheduling core.
//!
//! Every job visits every machine in the same fixed order; a solution is a
//! single job ordering and the objective is the makespan. This crate
//! provides:
//!
//! - **Domain model** ([`flowshop`]): jobs, problem instances, and
//!   schedules with their completion-time grid.
//! - **Neighborhoods** ([`neighborhood`]): swap and insert move lists,
//!   computed once per job count and shared.
//! - **Local search** ([`local_search`]): budgeted best-improvement
//!   hill-climbing with a monotonic makespan guarantee.
//! - **Population local search** ([`population`]): the hill-climber applied
//!   probabilistically across a population, as the improvement step of a
//!   memetic algorithm.
//!
//! Randomness is always injected by the caller, so every run is
//! reproducible under a fixed seed.
//!
//! # Features
//!
//! - `parallel`: evaluate candidate moves and population members with rayon
//! - `serde`: `Serialize`/`Deserialize` for data types and configurations
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use u_flowshop::flowshop::Flowshop;
//! use u_flowshop::local_search::{local_search_insert, LocalSearchConfig};
//! use u_flowshop::neighborhood::Neighborhood;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let shop = Flowshop::random(20, 5, &mut rng).unwrap();
//! let start = shop.identity_schedule().unwrap();
//!
//! let inserts = Neighborhood::insert(shop.job_count());
//! let config = LocalSearchConfig::default().with_max_iterations(50);
//! let improved = local_search_insert(&start, &inserts, &config, &mut rng).unwrap();
//!
//! assert!(improved.makespan() <= start.makespan());
//! assert!(improved.makespan() >= shop.lower_bound());
//! ```

pub mod error;
pub mod flowshop;
pub mod local_search;
pub mod neighborhood;
pub mod population;

pub use error::FlowshopError;
