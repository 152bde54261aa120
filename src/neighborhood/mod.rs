//! Swap and insert neighborhoods for permutation schedules.
//!
//! # Key Types
//!
//! - [`Move`]: a position pair, applied copy-free to any sequence
//! - [`MoveKind`]: swap or insert
//! - [`Neighborhood`]: every move of one kind for a given job count,
//!   computed once and shared
//!
//! [`evaluate_move`] prices a move against a schedule without building the
//! moved schedule.
//!
//! # References
//!
//! - Taillard (1990), "Some efficient heuristic methods for the flow shop
//!   sequencing problem"
//! - Nawaz, Enscore & Ham (1983), "A heuristic algorithm for the m-machine,
//!   n-job flow-shop sequencing problem"

mod eval;
mod generator;
mod moves;

pub use eval::evaluate_move;
pub use generator::Neighborhood;
pub use moves::{Move, MoveKind};
