//! Problem instances.

use std::collections::HashSet;

use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::job::{Job, JobId};
use super::schedule::Schedule;
use crate::error::FlowshopError;

/// A permutation flow-shop instance: `job_count` jobs, each visiting all
/// `machine_count` machines in the same order.
///
/// An instance may carry no job records at all
/// ([`with_dimensions`](Self::with_dimensions)); its job count is then
/// still enough to build neighborhoods.
///
/// # Examples
///
/// ```
/// use u_flowshop::flowshop::{Flowshop, Job};
///
/// let shop = Flowshop::new(2, vec![Job::new(0, vec![1, 5]), Job::new(1, vec![5, 1])]).unwrap();
/// assert_eq!(shop.job_count(), 2);
///
/// let schedule = shop.schedule(vec![shop.jobs()[1].clone(), shop.jobs()[0].clone()]).unwrap();
/// assert_eq!(schedule.makespan(), 11);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Flowshop {
    job_count: usize,
    machine_count: usize,
    jobs: Vec<Job>,
}

impl Flowshop {
    /// Creates an instance from its job records.
    ///
    /// Fails if `machine_count` is zero, if a job does not have exactly one
    /// duration per machine, or if two jobs share an identifier.
    pub fn new(machine_count: usize, jobs: Vec<Job>) -> Result<Self, FlowshopError> {
        if machine_count == 0 {
            return Err(FlowshopError::NoMachines);
        }
        let mut seen = HashSet::with_capacity(jobs.len());
        for job in &jobs {
            if job.machine_count() != machine_count {
                return Err(FlowshopError::MachineCountMismatch {
                    job: job.id(),
                    expected: machine_count,
                    found: job.machine_count(),
                });
            }
            if !seen.insert(job.id()) {
                return Err(FlowshopError::DuplicateJob(job.id()));
            }
        }
        Ok(Self {
            job_count: jobs.len(),
            machine_count,
            jobs,
        })
    }

    /// Creates an instance that only records its dimensions.
    pub fn with_dimensions(job_count: usize, machine_count: usize) -> Self {
        Self {
            job_count,
            machine_count,
            jobs: Vec::new(),
        }
    }

    /// Generates jobs `0..job_count` with durations drawn uniformly from
    /// `1..=99`.
    ///
    /// # Reference
    /// Taillard (1993), "Benchmarks for basic scheduling problems",
    /// *European Journal of Operational Research* 64(2), 278-285.
    pub fn random<R: Rng>(
        job_count: usize,
        machine_count: usize,
        rng: &mut R,
    ) -> Result<Self, FlowshopError> {
        let jobs = (0..job_count)
            .map(|id| {
                let durations: Vec<u64> = (0..machine_count)
                    .map(|_| rng.random_range(1..=99))
                    .collect();
                Job::new(id, durations)
            })
            .collect();
        Self::new(machine_count, jobs)
    }

    /// Number of jobs.
    pub fn job_count(&self) -> usize {
        self.job_count
    }

    /// Number of machines.
    pub fn machine_count(&self) -> usize {
        self.machine_count
    }

    /// Job records, empty for a dimensions-only instance.
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Looks up a job by identifier.
    pub fn job(&self, id: JobId) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id() == id)
    }

    /// Builds a schedule for `order`, checking it against the instance.
    ///
    /// `order` must hold exactly `job_count` distinct jobs with one
    /// duration per machine. When the instance carries job records, every
    /// job must also be one of them.
    pub fn schedule(&self, order: Vec<Job>) -> Result<Schedule, FlowshopError> {
        if order.len() != self.job_count {
            return Err(FlowshopError::JobCountMismatch {
                expected: self.job_count,
                found: order.len(),
            });
        }
        let known: HashSet<JobId> = self.jobs.iter().map(Job::id).collect();
        let mut seen = HashSet::with_capacity(order.len());
        for job in &order {
            if !self.jobs.is_empty() && !known.contains(&job.id()) {
                return Err(FlowshopError::UnknownJob(job.id()));
            }
            if !seen.insert(job.id()) {
                return Err(FlowshopError::DuplicateJob(job.id()));
            }
        }
        Schedule::from_jobs(self.machine_count, order)
    }

    /// Builds a schedule for a sequence of job identifiers.
    pub fn schedule_ids(&self, order: &[JobId]) -> Result<Schedule, FlowshopError> {
        let jobs = order
            .iter()
            .map(|&id| self.job(id).cloned().ok_or(FlowshopError::UnknownJob(id)))
            .collect::<Result<Vec<_>, _>>()?;
        self.schedule(jobs)
    }

    /// Schedules the jobs in instance order.
    pub fn identity_schedule(&self) -> Result<Schedule, FlowshopError> {
        self.schedule(self.jobs.clone())
    }

    /// Sum of every processing duration.
    pub fn total_work(&self) -> u64 {
        self.jobs.iter().map(Job::total_duration).sum()
    }

    /// Machine-based lower bound on the optimal makespan.
    ///
    /// For each machine: the smallest head (work before that machine) plus
    /// the machine's load plus the smallest tail (work after it). Zero for
    /// an instance without job records.
    pub fn lower_bound(&self) -> u64 {
        if self.jobs.is_empty() {
            return 0;
        }
        (0..self.machine_count)
            .map(|t| {
                let load: u64 = self.jobs.iter().map(|job| job.duration(t)).sum();
                let head = self
                    .jobs
                    .iter()
                    .map(|job| job.durations()[..t].iter().sum::<u64>())
                    .min()
                    .unwrap_or(0);
                let tail = self
                    .jobs
                    .iter()
                    .map(|job| job.durations()[t + 1..].iter().sum::<u64>())
                    .min()
                    .unwrap_or(0);
                head + load + tail
            })
            .max()
            .unwrap_or(0)
    }
}
