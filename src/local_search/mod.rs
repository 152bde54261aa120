//! Budgeted hill-climbing over swap and insert neighborhoods.
//!
//! Each round prices up to `max_neighbors` moves of a precomputed
//! [`Neighborhood`](crate::neighborhood::Neighborhood) against the current
//! schedule and moves to the best one if it strictly lowers the makespan.
//! The search ends at a local optimum or when the iteration budget runs
//! out, whichever comes first.
//!
//! # Key Types
//!
//! - [`LocalSearchConfig`]: iteration and neighbor budgets
//! - [`NeighborSampling`]: subset policy when the neighborhood exceeds the cap
//! - [`LocalSearchRunner`]: executes one run, returning [`LocalSearchResult`]
//!
//! [`local_search_swap`] and [`local_search_insert`] are the two entry
//! points returning only the improved schedule.
//!
//! # References
//!
//! - Osman & Potts (1989), "Simulated annealing for permutation flow-shop
//!   scheduling", *Omega* 17(6), 551-557.
//! - Ruiz & Stützle (2007), "A simple and effective iterated greedy
//!   algorithm for the permutation flowshop scheduling problem"

mod config;
mod runner;
mod types;

pub use config::LocalSearchConfig;
pub use runner::{local_search_insert, local_search_swap, LocalSearchResult, LocalSearchRunner};
pub use types::NeighborSampling;
