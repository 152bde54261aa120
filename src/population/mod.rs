//! Local search over a population of schedules.
//!
//! A single, stateless operator: pick some members, flip a coin for swap
//! search and one for insert search on each, and replace every picked
//! member by its searched version. Driving generations, crossover and
//! termination is left to the caller.
//!
//! # Key Types
//!
//! - [`PopulationSearchConfig`]: probabilities, member count, shared budgets
//! - [`MemberSelection`]: which members are searched
//! - [`PopulationSearchRunner`]: executes one pass, returning
//!   [`PopulationSearchResult`]
//!
//! # Reference
//! Moscato (1989), "On Evolution, Search, Optimization, Genetic Algorithms
//! and Martial Arts: Towards Memetic Algorithms", Caltech C3P Report 826.

mod config;
mod runner;
mod selection;

pub use config::PopulationSearchConfig;
pub use runner::{
    local_search_population, total_makespan, PopulationSearchResult, PopulationSearchRunner,
};
pub use selection::MemberSelection;
