//! Configuration types for evolutionary search.

use serde::{Deserialize, Serialize};

/// Top-level configuration for an evolution run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Population and termination settings.
    #[serde(default)]
    pub population: PopulationConfig,
    /// Mutation settings.
    #[serde(default)]
    pub mutation: MutationConfig,
    /// Half-open range random coefficients are drawn from.
    #[serde(default = "default_coefficient_range")]
    pub coefficient_range: (i64, i64),
    /// Random seed for reproducibility.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            population: PopulationConfig::default(),
            mutation: MutationConfig::default(),
            coefficient_range: default_coefficient_range(),
            random_seed: None,
        }
    }
}

/// Population and termination settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationConfig {
    /// Number of candidates in the population.
    #[serde(default = "default_population_size")]
    pub size: usize,
    /// Iteration cap; the run stops once the counter exceeds it.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// The run converges once the best score exceeds this.
    #[serde(default = "default_convergence_threshold")]
    pub convergence_threshold: f64,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            size: default_population_size(),
            max_iterations: default_max_iterations(),
            convergence_threshold: default_convergence_threshold(),
        }
    }
}

/// Mutation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationConfig {
    /// Per-coefficient replacement probability (0.0-1.0).
    #[serde(default = "default_mutation_rate")]
    pub rate: f64,
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            rate: default_mutation_rate(),
        }
    }
}

fn default_population_size() -> usize {
    10
}
fn default_max_iterations() -> usize {
    10_000
}
fn default_convergence_threshold() -> f64 {
    0.99999
}
fn default_mutation_rate() -> f64 {
    0.02
}
fn default_coefficient_range() -> (i64, i64) {
    (0, 1_000_000)
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("population size must be at least 2")]
    PopulationTooSmall,
    #[error("mutation rate {0} outside [0, 1]")]
    InvalidMutationRate(f64),
    #[error("convergence threshold {0} outside (0, 1]")]
    InvalidConvergenceThreshold(f64),
    #[error("coefficient range [{0}, {1}) is empty")]
    EmptyCoefficientRange(i64, i64),
}

impl EngineConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population.size < 2 {
            return Err(ConfigError::PopulationTooSmall);
        }

        if !(0.0..=1.0).contains(&self.mutation.rate) {
            return Err(ConfigError::InvalidMutationRate(self.mutation.rate));
        }

        let threshold = self.population.convergence_threshold;
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::InvalidConvergenceThreshold(threshold));
        }

        let (lo, hi) = self.coefficient_range;
        if lo >= hi {
            return Err(ConfigError::EmptyCoefficientRange(lo, hi));
        }

        Ok(())
    }
}
