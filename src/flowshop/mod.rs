//! Flow-shop domain model.
//!
//! - [`Job`]: per-machine processing durations, identified by [`JobId`]
//! - [`Flowshop`]: one problem instance (jobs × machines)
//! - [`Schedule`]: a job permutation with its completion-time grid and
//!   makespan
//!
//! # References
//!
//! - Johnson (1954), "Optimal two- and three-stage production schedules
//!   with setup times included"
//! - Taillard (1993), "Benchmarks for basic scheduling problems"

mod instance;
mod job;
mod schedule;

pub use instance::Flowshop;
pub use job::{Job, JobId};
pub use schedule::Schedule;
