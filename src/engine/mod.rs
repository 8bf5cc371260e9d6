//! Evolutionary engine with content-addressed lineage tracking.
//!
//! The engine evolves a population of coefficient pairs toward a target
//! linear function and records, for every candidate ever produced, how it
//! was derived.
//!
//! # Overview
//!
//! - **Candidate model** (`candidate`): coefficient pairs, content keys,
//!   random generation
//! - **Fitness & Ranking** (`fitness`): scoring and worst-first ordering
//! - **Operators** (`operators`): elitist crossover and probabilistic
//!   mutation
//! - **Provenance** (`provenance`): content-addressed family-tree store
//! - **Lineage** (`lineage`): memoized, cycle-safe ancestry traversal
//! - **Search** (`search`): the evolution loop and termination
//!
//! # Example
//!
//! ```rust,no_run
//! use lineal::engine::{EvolutionEngine, LinearTarget};
//! use lineal::schema::EngineConfig;
//!
//! let config = EngineConfig::default();
//! let mut engine = EvolutionEngine::new(config, LinearTarget::default()).unwrap();
//! let outcome = engine.run_with_callback(|progress| {
//!     println!("iteration {}: best score {:.6}",
//!         progress.iteration, progress.best.score);
//! });
//!
//! let stats = engine.lineage_stats(&outcome.winner.candidate);
//! println!("winner {}: {} ancestors, {} mutation events",
//!     outcome.winner.candidate, stats.ancestors, stats.mutations);
//! ```

mod candidate;
mod fitness;
mod lineage;
mod operators;
mod provenance;
mod search;

pub use candidate::{AtomRng, Candidate, ContentKey, ScoredCandidate};
pub use fitness::{Fitness, FitnessFn, LinearTarget, evaluate};
pub use lineage::{LineageNode, LineageStats, lineage, lineage_stats};
pub use operators::{MutationEvent, breed, crossover, mutate};
pub use provenance::{Derivation, ProvenanceStore};
pub use search::{EvolutionEngine, EvolutionOutcome, IterationProgress, StopReason};
