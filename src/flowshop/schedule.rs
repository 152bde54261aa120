//! Job permutations and their completion-time grid.
//!
//! # Recurrence
//!
//! For the k-th job of the sequence on machine t:
//!
//! ```text
//! C(k, t) = max(C(k-1, t), C(k, t-1)) + p(job_k, t)
//! ```
//!
//! with out-of-range terms taken as zero. A job cannot start on machine t
//! before it left machine t-1, and a machine cannot start job k before it
//! finished job k-1. The makespan is C(n-1, m-1). One full build costs
//! O(n·m).
//!
//! # Reference
//! Johnson (1954), "Optimal two- and three-stage production schedules
//! with setup times included", *Naval Research Logistics Quarterly* 1(1).

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::job::{Job, JobId};
use crate::error::FlowshopError;
use crate::neighborhood::Move;

/// A job permutation with its derived completion times and makespan.
///
/// Schedules are values: the move operators ([`apply`](Self::apply),
/// [`swapped`](Self::swapped), [`inserted`](Self::inserted)) return a new
/// schedule and leave `self` untouched.
///
/// # Examples
///
/// ```
/// use u_flowshop::flowshop::{Job, Schedule};
///
/// let a = Job::new(0, vec![1, 5]);
/// let b = Job::new(1, vec![5, 1]);
///
/// let schedule = Schedule::from_jobs(2, vec![b, a]).unwrap();
/// assert_eq!(schedule.makespan(), 11);
///
/// let better = schedule.swapped(0, 1).unwrap();
/// assert_eq!(better.makespan(), 7);
/// assert_eq!(schedule.makespan(), 11);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Schedule {
    machine_count: usize,
    sequence: Vec<Job>,
    /// Row-major completion times, `sequence.len() × machine_count`.
    completion: Vec<u64>,
    makespan: u64,
}

impl Schedule {
    /// Creates an empty schedule for a shop with `machine_count` machines.
    pub fn new(machine_count: usize) -> Self {
        Self {
            machine_count,
            sequence: Vec::new(),
            completion: Vec::new(),
            makespan: 0,
        }
    }

    /// Builds a schedule processing `jobs` in the given order.
    pub fn from_jobs(machine_count: usize, jobs: Vec<Job>) -> Result<Self, FlowshopError> {
        let mut schedule = Self::new(machine_count);
        schedule.schedule_jobs(jobs)?;
        Ok(schedule)
    }

    /// Replaces the job sequence and recomputes every completion time.
    ///
    /// Rejects any job whose duration count differs from the machine
    /// count. Duplicates are not rejected here; see
    /// [`has_duplicate`](Self::has_duplicate) and
    /// [`Flowshop::schedule`](super::Flowshop::schedule) for the checked
    /// constructor.
    pub fn schedule_jobs(&mut self, jobs: Vec<Job>) -> Result<(), FlowshopError> {
        if let Some(job) = jobs
            .iter()
            .find(|job| job.machine_count() != self.machine_count)
        {
            return Err(FlowshopError::MachineCountMismatch {
                job: job.id(),
                expected: self.machine_count,
                found: job.machine_count(),
            });
        }
        self.sequence = jobs;
        self.recompute();
        Ok(())
    }

    /// Builds from a sequence already known to match `machine_count`.
    pub(crate) fn from_validated(machine_count: usize, sequence: Vec<Job>) -> Self {
        let mut schedule = Self {
            machine_count,
            sequence,
            completion: Vec::new(),
            makespan: 0,
        };
        schedule.recompute();
        schedule
    }

    fn recompute(&mut self) {
        let m = self.machine_count;
        let n = self.sequence.len();
        let mut grid = vec![0u64; n * m];

        for (k, job) in self.sequence.iter().enumerate() {
            for t in 0..m {
                let machine_free = if k > 0 { grid[(k - 1) * m + t] } else { 0 };
                let job_free = if t > 0 { grid[k * m + t - 1] } else { 0 };
                grid[k * m + t] = machine_free.max(job_free) + job.duration(t);
            }
        }

        self.makespan = grid.last().copied().unwrap_or(0);
        self.completion = grid;
    }

    /// The job permutation.
    pub fn sequence(&self) -> &[Job] {
        &self.sequence
    }

    /// Identifiers of the sequenced jobs, in order.
    pub fn job_ids(&self) -> Vec<JobId> {
        self.sequence.iter().map(Job::id).collect()
    }

    /// Completion time of the last job on the last machine.
    ///
    /// Zero for an empty schedule.
    pub fn makespan(&self) -> u64 {
        self.makespan
    }

    /// Number of sequenced jobs.
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Whether no job has been sequenced.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Number of machines the schedule was built for.
    pub fn machine_count(&self) -> usize {
        self.machine_count
    }

    /// Completion time of the job at `position` on `machine`.
    pub fn completion_time(&self, position: usize, machine: usize) -> Option<u64> {
        if position >= self.sequence.len() || machine >= self.machine_count {
            return None;
        }
        Some(self.completion[position * self.machine_count + machine])
    }

    /// Start time of the job at `position` on `machine`.
    pub fn start_time(&self, position: usize, machine: usize) -> Option<u64> {
        let end = self.completion_time(position, machine)?;
        Some(end - self.sequence[position].duration(machine))
    }

    /// The full completion grid, row-major by sequence position.
    pub fn completion_times(&self) -> &[u64] {
        &self.completion
    }

    /// Whether some job identifier occurs more than once.
    pub fn has_duplicate(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.sequence.len());
        !self.sequence.iter().all(|job| seen.insert(job.id()))
    }

    /// Whether `job` is part of the sequence.
    pub fn contains(&self, job: &Job) -> bool {
        self.sequence.contains(job)
    }

    /// Returns a new schedule with `mv` applied.
    pub fn apply(&self, mv: Move) -> Result<Schedule, FlowshopError> {
        let mut sequence = self.sequence.clone();
        mv.apply_to(&mut sequence)?;
        Ok(Self::from_validated(self.machine_count, sequence))
    }

    /// Returns a new schedule with the jobs at `i` and `j` exchanged.
    pub fn swapped(&self, i: usize, j: usize) -> Result<Schedule, FlowshopError> {
        self.apply(Move::Swap(i, j))
    }

    /// Returns a new schedule with the job at `from` moved to slot `to`
    /// of the sequence left after its removal.
    pub fn inserted(&self, from: usize, to: usize) -> Result<Schedule, FlowshopError> {
        self.apply(Move::Insert(from, to))
    }
}
