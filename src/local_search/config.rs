//! Local search configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::NeighborSampling;

/// Budgets and policies for one hill-climbing run.
///
/// # Examples
///
/// ```
/// use u_flowshop::local_search::{LocalSearchConfig, NeighborSampling};
///
/// let config = LocalSearchConfig::default()
///     .with_max_iterations(100)
///     .with_max_neighbors(30)
///     .with_sampling(NeighborSampling::Prefix);
/// assert_eq!(config.max_iterations, 100);
/// assert_eq!(config.max_neighbors, 30);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocalSearchConfig {
    /// Maximum number of improvement rounds.
    ///
    /// The search stops earlier once a round finds no strictly improving
    /// neighbor.
    pub max_iterations: usize,

    /// Maximum number of neighbors examined per round.
    ///
    /// When the neighborhood is larger, a subset of this size is drawn
    /// according to [`sampling`](Self::sampling).
    pub max_neighbors: usize,

    /// How the per-round subset is chosen when the neighborhood exceeds
    /// `max_neighbors`.
    pub sampling: NeighborSampling,

    /// Whether to evaluate the candidates of a round in parallel.
    ///
    /// Only effective with the `parallel` feature. Results are identical
    /// either way.
    pub parallel: bool,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 20,
            max_neighbors: 50,
            sampling: NeighborSampling::default(),
            parallel: false,
        }
    }
}

impl LocalSearchConfig {
    /// Sets the maximum number of improvement rounds.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the per-round neighbor cap.
    pub fn with_max_neighbors(mut self, n: usize) -> Self {
        self.max_neighbors = n;
        self
    }

    /// Sets the subsampling policy.
    pub fn with_sampling(mut self, sampling: NeighborSampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Enables or disables parallel candidate evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_neighbors == 0 {
            return Err("max_neighbors must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LocalSearchConfig::default();
        assert_eq!(config.max_iterations, 20);
        assert_eq!(config.max_neighbors, 50);
        assert_eq!(config.sampling, NeighborSampling::Uniform);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = LocalSearchConfig::default()
            .with_max_iterations(5)
            .with_max_neighbors(7)
            .with_sampling(NeighborSampling::Prefix)
            .with_parallel(true);
        assert_eq!(config.max_iterations, 5);
        assert_eq!(config.max_neighbors, 7);
        assert_eq!(config.sampling, NeighborSampling::Prefix);
        assert!(config.parallel);
    }

    #[test]
    fn test_validate_zero_neighbors() {
        let config = LocalSearchConfig::default().with_max_neighbors(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_iterations_is_valid() {
        let config = LocalSearchConfig::default().with_max_iterations(0);
        assert!(config.validate().is_ok());
    }
}
