//! Selection, crossover, and mutation operators.

use log::debug;
use serde::{Deserialize, Serialize};

use super::candidate::{AtomRng, Candidate};
use super::provenance::{Derivation, ProvenanceStore};

/// Blend two parents: coefficient-wise rounded arithmetic mean.
///
/// Rounding is half away from zero (`f64::round`), so the result stays
/// integral and `breed(a, a) == a`.
pub fn breed(parent1: &Candidate, parent2: &Candidate) -> Candidate {
    Candidate::new(
        mean_round(parent1.x, parent2.x),
        mean_round(parent1.y, parent2.y),
    )
}

fn mean_round(a: i64, b: i64) -> i64 {
    ((a as f64 + b as f64) / 2.0).round() as i64
}

/// Elitist tournament crossover.
///
/// The best candidate (last in rank order) is bred against every other
/// member, each pairing producing one child, and then survives unchanged
/// as the final element of the next generation. Every child gets a
/// provenance record with the elite as `parent1`; the write is idempotent,
/// so re-deriving a known candidate keeps its original record.
pub fn crossover(ranked: &[Candidate], store: &mut ProvenanceStore) -> Vec<Candidate> {
    let Some((best, rest)) = ranked.split_last() else {
        return Vec::new();
    };

    let mut next: Vec<Candidate> = rest
        .iter()
        .map(|other| {
            let child = breed(best, other);
            store.record(
                &child,
                Derivation::Bred {
                    parent1: *best,
                    parent2: *other,
                },
            );
            child
        })
        .collect();
    next.push(*best);
    next
}

/// One coefficient replacement applied during mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationEvent {
    /// Candidate value before any coefficient changed.
    pub original: Candidate,
    /// Which coefficient was replaced (0 = x, 1 = y).
    pub coefficient: usize,
    pub from: i64,
    pub to: i64,
}

/// Mutate the population, slot by slot.
///
/// Each coefficient of each candidate is independently replaced with a
/// fresh random atom with probability `rate`. A candidate that changed
/// gets a provenance record keyed by its new value, pointing at a snapshot
/// taken before the first change. The new value is written back into the
/// same slot, so the caller-visible sequence keeps its shape.
pub fn mutate(
    population: &mut [Candidate],
    rate: f64,
    rng: &mut AtomRng,
    store: &mut ProvenanceStore,
) -> Vec<MutationEvent> {
    let mut events = Vec::new();

    for candidate in population.iter_mut() {
        let snapshot = *candidate;
        let mut changed = false;

        if rng.chance(rate) {
            let to = rng.atom();
            events.push(MutationEvent {
                original: snapshot,
                coefficient: 0,
                from: candidate.x,
                to,
            });
            candidate.x = to;
            changed = true;
        }
        if rng.chance(rate) {
            let to = rng.atom();
            events.push(MutationEvent {
                original: snapshot,
                coefficient: 1,
                from: candidate.y,
                to,
            });
            candidate.y = to;
            changed = true;
        }

        if changed {
            debug!("mutate: {snapshot} -> {candidate}");
            store.record(candidate, Derivation::Mutated { prior: snapshot });
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_breed_identical_parents() {
        let a = Candidate::new(123, -456);
        assert_eq!(breed(&a, &a), a);
    }

    #[test]
    fn test_breed_rounded_mean() {
        let child = breed(&Candidate::new(20, 20), &Candidate::new(10, 10));
        assert_eq!(child, Candidate::new(15, 15));

        // Half rounds away from zero.
        let child = breed(&Candidate::new(0, 0), &Candidate::new(3, -3));
        assert_eq!(child, Candidate::new(2, -2));
    }

    #[test]
    fn test_crossover_two_candidates() {
        let mut store = ProvenanceStore::new();
        let ranked = vec![Candidate::new(10, 10), Candidate::new(20, 20)];

        let next = crossover(&ranked, &mut store);

        assert_eq!(next, vec![Candidate::new(15, 15), Candidate::new(20, 20)]);
        assert_eq!(
            store.get(&Candidate::new(15, 15).content_key()),
            Some(&Derivation::Bred {
                parent1: Candidate::new(20, 20),
                parent2: Candidate::new(10, 10),
            })
        );
    }

    #[test]
    fn test_crossover_preserves_elite_and_size() {
        let mut store = ProvenanceStore::new();
        let ranked: Vec<Candidate> = (0..10).map(|i| Candidate::new(i, i)).collect();

        let next = crossover(&ranked, &mut store);

        assert_eq!(next.len(), 10);
        assert_eq!(next[9], Candidate::new(9, 9));
        assert_eq!(store.len(), 9);
    }

    #[test]
    fn test_mutate_rate_zero_is_noop() {
        let mut store = ProvenanceStore::new();
        let mut rng = AtomRng::new(1, (0, 1_000_000));
        let mut population = vec![Candidate::new(1, 2), Candidate::new(3, 4)];
        let before = population.clone();

        let events = mutate(&mut population, 0.0, &mut rng, &mut store);

        assert!(events.is_empty());
        assert_eq!(population, before);
        assert!(store.is_empty());
    }

    #[test]
    fn test_mutate_rate_one_replaces_and_records() {
        let mut store = ProvenanceStore::new();
        let mut rng = AtomRng::new(1, (100, 200));
        let original = Candidate::new(1, 2);
        let mut population = vec![original];

        let events = mutate(&mut population, 1.0, &mut rng, &mut store);

        let mutated = population[0];
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].original, original);
        assert_eq!(events[0].from, 1);
        assert_eq!(events[1].from, 2);
        assert!((100..200).contains(&mutated.x));
        assert!((100..200).contains(&mutated.y));
        assert_eq!(
            store.get(&mutated.content_key()),
            Some(&Derivation::Mutated { prior: original })
        );
    }

    proptest! {
        #[test]
        fn prop_breed_stays_between_parents(
            ax in -1_000_000i64..1_000_000,
            ay in -1_000_000i64..1_000_000,
            bx in -1_000_000i64..1_000_000,
            by in -1_000_000i64..1_000_000,
        ) {
            let child = breed(&Candidate::new(ax, ay), &Candidate::new(bx, by));
            prop_assert!(child.x >= ax.min(bx) && child.x <= ax.max(bx));
            prop_assert!(child.y >= ay.min(by) && child.y <= ay.max(by));
        }

        #[test]
        fn prop_breed_commutative(
            ax in -1_000_000i64..1_000_000,
            ay in -1_000_000i64..1_000_000,
            bx in -1_000_000i64..1_000_000,
            by in -1_000_000i64..1_000_000,
        ) {
            let a = Candidate::new(ax, ay);
            let b = Candidate::new(bx, by);
            prop_assert_eq!(breed(&a, &b), breed(&b, &a));
        }
    }
}
