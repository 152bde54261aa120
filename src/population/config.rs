//! Population local search configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::selection::MemberSelection;
use crate::local_search::LocalSearchConfig;

/// Parameters for one population-wide local search pass.
///
/// # Examples
///
/// ```
/// use u_flowshop::population::{MemberSelection, PopulationSearchConfig};
///
/// let config = PopulationSearchConfig::default()
///     .with_swap_probability(0.8)
///     .with_insert_probability(0.3)
///     .with_members(10)
///     .with_selection(MemberSelection::Best);
/// assert_eq!(config.members, 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PopulationSearchConfig {
    /// Probability of running swap search on a selected member (0.0–1.0).
    pub swap_probability: f64,

    /// Probability of running insert search on a selected member (0.0–1.0).
    ///
    /// Drawn independently of the swap decision. When both fire, insert
    /// search starts from the swap search's output.
    pub insert_probability: f64,

    /// Number of members subjected to local search per call.
    ///
    /// Clamped to the population size.
    pub members: usize,

    /// Which members are searched.
    pub selection: MemberSelection,

    /// Budgets shared by every search of the pass.
    pub local_search: LocalSearchConfig,

    /// Whether to search the selected members in parallel.
    ///
    /// Only effective with the `parallel` feature. Results are identical
    /// either way.
    pub parallel: bool,
}

impl Default for PopulationSearchConfig {
    fn default() -> Self {
        Self {
            swap_probability: 0.5,
            insert_probability: 0.5,
            members: 2,
            selection: MemberSelection::default(),
            local_search: LocalSearchConfig::default(),
            parallel: false,
        }
    }
}

impl PopulationSearchConfig {
    /// Sets the swap search probability.
    pub fn with_swap_probability(mut self, p: f64) -> Self {
        self.swap_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the insert search probability.
    pub fn with_insert_probability(mut self, p: f64) -> Self {
        self.insert_probability = p.clamp(0.0, 1.0);
        self
    }

    /// Sets how many members are searched.
    pub fn with_members(mut self, n: usize) -> Self {
        self.members = n;
        self
    }

    /// Sets the member selection policy.
    pub fn with_selection(mut self, selection: MemberSelection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the per-search budgets.
    pub fn with_local_search(mut self, config: LocalSearchConfig) -> Self {
        self.local_search = config;
        self
    }

    /// Enables or disables parallel member search.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.swap_probability) {
            return Err("swap_probability must be within [0, 1]".into());
        }
        if !(0.0..=1.0).contains(&self.insert_probability) {
            return Err("insert_probability must be within [0, 1]".into());
        }
        self.local_search.validate()
    }
}
