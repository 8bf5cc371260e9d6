//! Lineal - evolutionary search over linear coefficients with
//! content-addressed lineage tracking.
//!
//! A population of coefficient pairs is evolved toward a target linear
//! function using fitness-proportional elitist selection, averaging
//! crossover, and probabilistic mutation. Alongside the search, a
//! provenance store records how every candidate was derived: bred from two
//! parents, mutated from a prior value, or drawn in the initial
//! population. The ancestry of any candidate can then be walked in time
//! linear in its number of distinct ancestors, even when deterministic
//! breeding has re-derived identical candidates across generations and the
//! derivation graph contains cycles.
//!
//! # Architecture
//!
//! - `schema`: configuration types for a run
//! - `engine`: the evolutionary engine, provenance store, and lineage
//!   traversal
//!
//! # Example
//!
//! ```rust,no_run
//! use lineal::engine::{EvolutionEngine, LinearTarget};
//! use lineal::schema::EngineConfig;
//!
//! let mut engine =
//!     EvolutionEngine::new(EngineConfig::default(), LinearTarget::default()).unwrap();
//! let outcome = engine.run();
//! let stats = engine.lineage_stats(&outcome.winner.candidate);
//!
//! println!("winner: {} ({:?} after {} iterations)",
//!     outcome.winner.candidate, outcome.stop_reason, outcome.iterations);
//! println!("ancestors: {}, mutations: {}", stats.ancestors, stats.mutations);
//! ```

pub mod engine;
pub mod schema;

// Re-export commonly used types
pub use engine::{Candidate, EvolutionEngine, LineageStats, LinearTarget, ProvenanceStore};
pub use schema::EngineConfig;
