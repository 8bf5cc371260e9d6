//! Content-addressed family-tree store.

use std::collections::HashMap;

use super::candidate::{Candidate, ContentKey};

/// How a candidate came to exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derivation {
    /// Member of the initial random population.
    Genesis,
    /// Produced by mutating `prior`, a snapshot taken before any
    /// coefficient changed.
    Mutated { prior: Candidate },
    /// Bred from two parents by crossover; `parent1` is the elite.
    Bred {
        parent1: Candidate,
        parent2: Candidate,
    },
}

/// Append-only map from a candidate's content key to its first recorded
/// derivation.
///
/// One store is constructed per run and passed by reference to the
/// operators; it grows monotonically and is never pruned.
#[derive(Debug, Default)]
pub struct ProvenanceStore {
    records: HashMap<ContentKey, Derivation>,
}

impl ProvenanceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record how `candidate` was derived.
    ///
    /// First-writer-wins: if a record already exists under the candidate's
    /// key this is a silent no-op, not an error. Deterministic breeding can
    /// re-derive an identical candidate generations apart (an evolutionary
    /// cycle), and the first derivation recorded is kept as canonical.
    pub fn record(&mut self, candidate: &Candidate, derivation: Derivation) {
        self.records
            .entry(candidate.content_key())
            .or_insert(derivation);
    }

    /// Look up the recorded derivation for a content key.
    pub fn get(&self, key: &ContentKey) -> Option<&Derivation> {
        self.records.get(key)
    }

    /// Number of distinct candidates ever recorded.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_get() {
        let mut store = ProvenanceStore::new();
        let child = Candidate::new(15, 15);
        store.record(
            &child,
            Derivation::Bred {
                parent1: Candidate::new(20, 20),
                parent2: Candidate::new(10, 10),
            },
        );

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get(&child.content_key()),
            Some(&Derivation::Bred {
                parent1: Candidate::new(20, 20),
                parent2: Candidate::new(10, 10),
            })
        );
    }

    #[test]
    fn test_first_writer_wins() {
        let mut store = ProvenanceStore::new();
        let c = Candidate::new(5, 5);

        store.record(&c, Derivation::Genesis);
        store.record(
            &c,
            Derivation::Mutated {
                prior: Candidate::new(4, 4),
            },
        );

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&c.content_key()), Some(&Derivation::Genesis));
    }

    #[test]
    fn test_missing_key() {
        let store = ProvenanceStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get(&Candidate::new(1, 1).content_key()), None);
    }
}
