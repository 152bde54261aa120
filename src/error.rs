//! Error type shared by every flow-shop operation.
//!
//! All failures are contract violations on caller input (mismatched
//! dimensions, foreign job identifiers, out-of-range move positions,
//! invalid tuning parameters). The search itself never fails: a
//! non-improving iteration simply ends the search.

use crate::flowshop::JobId;
use crate::neighborhood::{Move, MoveKind};

/// Errors raised when input does not satisfy a flow-shop contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowshopError {
    /// A problem instance was declared with zero machines.
    NoMachines,
    /// A job's duration count differs from the machine count.
    MachineCountMismatch {
        job: JobId,
        expected: usize,
        found: usize,
    },
    /// A job order does not contain exactly one entry per instance job.
    JobCountMismatch { expected: usize, found: usize },
    /// The same job identifier appears more than once.
    DuplicateJob(JobId),
    /// A job identifier is not part of the problem instance.
    UnknownJob(JobId),
    /// A move references a position outside the sequence.
    MoveOutOfBounds { mv: Move, len: usize },
    /// A neighborhood was built for a different job count than the schedule.
    NeighborhoodSizeMismatch { neighborhood: usize, schedule: usize },
    /// A neighborhood of the wrong move kind was supplied.
    NeighborhoodKindMismatch { expected: MoveKind, found: MoveKind },
    /// A configuration value failed validation.
    InvalidConfig(String),
}

impl std::fmt::Display for FlowshopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlowshopError::NoMachines => write!(f, "a flow-shop needs at least one machine"),
            FlowshopError::MachineCountMismatch {
                job,
                expected,
                found,
            } => write!(
                f,
                "job {} has {} durations but the shop has {} machines",
                job, found, expected
            ),
            FlowshopError::JobCountMismatch { expected, found } => write!(
                f,
                "expected a sequence of {} jobs, got {}",
                expected, found
            ),
            FlowshopError::DuplicateJob(id) => write!(f, "job {} appears more than once", id),
            FlowshopError::UnknownJob(id) => {
                write!(f, "job {} is not part of the problem instance", id)
            }
            FlowshopError::MoveOutOfBounds { mv, len } => {
                write!(f, "move {} is out of bounds for {} jobs", mv, len)
            }
            FlowshopError::NeighborhoodSizeMismatch {
                neighborhood,
                schedule,
            } => write!(
                f,
                "neighborhood built for {} jobs applied to a schedule of {} jobs",
                neighborhood, schedule
            ),
            FlowshopError::NeighborhoodKindMismatch { expected, found } => write!(
                f,
                "expected a neighborhood of {} moves, got {} moves",
                expected, found
            ),
            FlowshopError::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for FlowshopError {}
