//! Evolution loop: orchestration and termination.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::schema::{ConfigError, EngineConfig};

use super::candidate::{AtomRng, Candidate, ScoredCandidate};
use super::fitness::{Fitness, evaluate};
use super::lineage::{LineageStats, lineage_stats};
use super::operators::{MutationEvent, crossover, mutate};
use super::provenance::{Derivation, ProvenanceStore};

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// Best score exceeded the convergence threshold.
    Converged,
    /// Iteration counter exceeded the cap without convergence.
    Exhausted,
}

/// Per-iteration progress, handed to the run callback before the
/// termination check.
#[derive(Debug, Clone)]
pub struct IterationProgress<'a> {
    /// Iteration index; 0 is the initial population.
    pub iteration: usize,
    /// Best candidate of the current ranking.
    pub best: ScoredCandidate,
    /// Current ranking, worst-first; the best is the last element.
    pub ranking: &'a [ScoredCandidate],
    /// Mutation events applied while producing the current population.
    /// Empty at iteration 0.
    pub mutations: &'a [MutationEvent],
}

/// Final result of a run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionOutcome {
    /// Best candidate found.
    pub winner: ScoredCandidate,
    /// Iteration the run stopped at.
    pub iterations: usize,
    /// Why it stopped.
    pub stop_reason: StopReason,
}

/// Evolution engine: ranks, crosses over, and mutates a population until
/// convergence or exhaustion, recording provenance for every candidate
/// produced along the way.
pub struct EvolutionEngine<F> {
    config: EngineConfig,
    fitness: F,
    rng: AtomRng,
    store: ProvenanceStore,
    initial_population: Option<Vec<Candidate>>,
}

impl<F: Fitness> EvolutionEngine<F> {
    /// Create an engine. The configuration is validated eagerly, so a run
    /// itself cannot fail.
    pub fn new(config: EngineConfig, fitness: F) -> Result<Self, ConfigError> {
        config.validate()?;
        let seed = config.random_seed.unwrap_or_else(rand::random);
        let rng = AtomRng::new(seed, config.coefficient_range);

        Ok(Self {
            config,
            fitness,
            rng,
            store: ProvenanceStore::new(),
            initial_population: None,
        })
    }

    /// Replace the random initial population with a fixed one, for
    /// deterministic runs. Rejected eagerly if it holds fewer than 2
    /// candidates, like the configured size.
    pub fn with_initial_population(
        mut self,
        population: Vec<Candidate>,
    ) -> Result<Self, ConfigError> {
        if population.len() < 2 {
            return Err(ConfigError::PopulationTooSmall);
        }
        self.initial_population = Some(population);
        Ok(self)
    }

    /// Provenance recorded so far; after a run, the whole family tree.
    pub fn store(&self) -> &ProvenanceStore {
        &self.store
    }

    /// Ancestry statistics for `candidate` against this run's records.
    pub fn lineage_stats(&self, candidate: &Candidate) -> LineageStats {
        lineage_stats(&self.store, candidate)
    }

    /// Run to termination.
    pub fn run(&mut self) -> EvolutionOutcome {
        self.run_with_callback(|_| {})
    }

    /// Run to termination, reporting each iteration to `callback`.
    ///
    /// The terminal check uses the previous iteration's ranking, so a
    /// perfect initial population converges at iteration 0 without ever
    /// being transformed.
    pub fn run_with_callback<C>(&mut self, callback: C) -> EvolutionOutcome
    where
        C: Fn(&IterationProgress<'_>),
    {
        let population = match self.initial_population.take() {
            Some(population) => population,
            None => self.rng.initial_population(self.config.population.size),
        };
        for candidate in &population {
            self.store.record(candidate, Derivation::Genesis);
        }

        let mut ranked = evaluate(&population, &self.fitness);
        let mut events: Vec<MutationEvent> = Vec::new();
        let mut iteration = 0;

        loop {
            // Non-empty: size >= 2 is enforced by new() and by
            // with_initial_population().
            let best = *ranked.last().expect("population is empty");
            debug!(
                "iteration {iteration}: best {} score {:.6}",
                best.candidate, best.score
            );
            callback(&IterationProgress {
                iteration,
                best,
                ranking: &ranked,
                mutations: &events,
            });

            if best.score > self.config.population.convergence_threshold {
                return EvolutionOutcome {
                    winner: best,
                    iterations: iteration,
                    stop_reason: StopReason::Converged,
                };
            }
            if iteration > self.config.population.max_iterations {
                return EvolutionOutcome {
                    winner: best,
                    iterations: iteration,
                    stop_reason: StopReason::Exhausted,
                };
            }

            iteration += 1;
            let parents: Vec<Candidate> = ranked.iter().map(|s| s.candidate).collect();
            let mut population = crossover(&parents, &mut self.store);
            events = mutate(
                &mut population,
                self.config.mutation.rate,
                &mut self.rng,
                &mut self.store,
            );
            ranked = evaluate(&population, &self.fitness);
        }
    }
}
