//! Memoized, cycle-safe ancestry traversal.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::candidate::Candidate;
use super::provenance::{Derivation, ProvenanceStore};

/// A node reported by [`lineage`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineageNode {
    /// A concrete ancestor (the root itself included).
    Candidate(Candidate),
    /// Initial-population origin marker.
    Genesis,
    /// Mutation-event marker.
    Mutation,
}

/// Walk the family tree rooted at `root`, depth first, invoking `visit`
/// on every node.
///
/// The traversal keeps its own visited set of content keys, fresh per
/// call, and visits each distinct candidate exactly once. Marking a key
/// visited before its parents are expanded is what breaks derivation
/// cycles: the store can legitimately contain them (see
/// [`ProvenanceStore::record`]), and an unguarded walk would loop forever.
/// It also bounds the walk at O(distinct ancestors) time and space, where
/// revisiting shared ancestors along every path would be exponential in
/// generation count.
///
/// Sentinel nodes carry no ancestry and are never expanded; each
/// derivation edge that references one reports it to `visit` directly, so
/// mutation events in the ancestry are observable per event. A candidate
/// with no record ends its branch.
pub fn lineage<F>(store: &ProvenanceStore, root: &Candidate, mut visit: F)
where
    F: FnMut(LineageNode),
{
    let mut seen = HashSet::new();
    let mut stack = vec![*root];

    while let Some(candidate) = stack.pop() {
        let key = candidate.content_key();
        if !seen.insert(key) {
            continue;
        }
        visit(LineageNode::Candidate(candidate));

        match store.get(&key) {
            None => {}
            Some(Derivation::Genesis) => visit(LineageNode::Genesis),
            Some(Derivation::Mutated { prior }) => {
                visit(LineageNode::Mutation);
                stack.push(*prior);
            }
            Some(Derivation::Bred { parent1, parent2 }) => {
                stack.push(*parent2);
                stack.push(*parent1);
            }
        }
    }
}

/// Aggregate ancestry statistics for one candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineageStats {
    /// Mutation events in the ancestry.
    pub mutations: u64,
    /// Distinct candidate nodes in the ancestry, the root included.
    pub ancestors: u64,
}

/// Count mutation events and distinct candidate ancestors for `root`.
pub fn lineage_stats(store: &ProvenanceStore, root: &Candidate) -> LineageStats {
    let mut stats = LineageStats::default();
    lineage(store, root, |node| match node {
        LineageNode::Candidate(_) => stats.ancestors += 1,
        LineageNode::Mutation => stats.mutations += 1,
        LineageNode::Genesis => {}
    });
    stats
}
