//! Job records.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Job identifier. Unique within a problem instance.
pub type JobId = usize;

/// A job and its processing duration on each machine.
///
/// Durations are stored in machine order and never change after
/// construction. They live behind an [`Arc`], so cloning a job (and
/// therefore a [`Schedule`](super::Schedule)) only bumps a reference count.
///
/// Two jobs compare equal when their identifiers match, regardless of
/// durations.
///
/// # Examples
///
/// ```
/// use u_flowshop::flowshop::Job;
///
/// let job = Job::new(1, vec![3, 5, 2]);
/// assert_eq!(job.machine_count(), 3);
/// assert_eq!(job.duration(1), 5);
/// assert_eq!(job.total_duration(), 10);
/// assert_eq!(job, Job::new(1, vec![9, 9, 9]));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Job {
    id: JobId,
    durations: Arc<[u64]>,
}

impl Job {
    /// Creates a job with one duration per machine.
    pub fn new(id: JobId, durations: impl Into<Vec<u64>>) -> Self {
        Self {
            id,
            durations: Arc::from(durations.into()),
        }
    }

    /// The job identifier.
    pub fn id(&self) -> JobId {
        self.id
    }

    /// Processing durations in machine order.
    pub fn durations(&self) -> &[u64] {
        &self.durations
    }

    /// Processing duration on `machine`.
    ///
    /// # Panics
    /// Panics if `machine >= self.machine_count()`.
    pub fn duration(&self, machine: usize) -> u64 {
        self.durations[machine]
    }

    /// Number of machines this job was defined for.
    pub fn machine_count(&self) -> usize {
        self.durations.len()
    }

    /// Sum of all processing durations.
    pub fn total_duration(&self) -> u64 {
        self.durations.iter().sum()
    }
}

impl PartialEq for Job {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Job {}

impl Hash for Job {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_accessors() {
        let job = Job::new(7, vec![1, 1, 1, 1, 10]);
        assert_eq!(job.id(), 7);
        assert_eq!(job.machine_count(), 5);
        assert_eq!(job.durations(), &[1, 1, 1, 1, 10]);
        assert_eq!(job.duration(4), 10);
        assert_eq!(job.total_duration(), 14);
    }

    #[test]
    fn test_identity_is_by_id() {
        let a = Job::new(1, vec![1, 2]);
        let b = Job::new(1, vec![5, 5]);
        let c = Job::new(2, vec![1, 2]);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<Job> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_clone_shares_durations() {
        let job = Job::new(1, vec![4, 2]);
        let copy = job.clone();
        assert!(std::ptr::eq(job.durations(), copy.durations()));
    }
}
