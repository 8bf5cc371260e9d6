//! Candidate representation, content addressing, and random generation.

use std::fmt;

use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// One solution: the coefficient pair of `f(a, b) = x*a + y*b`.
///
/// Candidates are plain values. Operators that change a candidate copy it
/// first and write the new value back, so code holding an earlier value is
/// never aliased into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub x: i64,
    pub y: i64,
}

impl Candidate {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Value of the candidate's linear function at `(a, b)`.
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        self.x as f64 * a + self.y as f64 * b
    }

    /// Content key: digest of the coefficients in canonical form.
    ///
    /// Each coefficient is encoded as a fixed-width little-endian `i64` in
    /// field order before hashing, so structurally equal candidates always
    /// map to the same key.
    pub fn content_key(&self) -> ContentKey {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&self.x.to_le_bytes());
        hasher.update(&self.y.to_le_bytes());
        ContentKey(*hasher.finalize().as_bytes())
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Identity of a candidate's value in the provenance store.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContentKey([u8; blake3::OUT_LEN]);

impl fmt::Debug for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContentKey({self})")
    }
}

impl fmt::Display for ContentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// A candidate paired with its fitness score in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub candidate: Candidate,
    pub score: f64,
}

/// Random number generator wrapper for the evolution operators.
pub struct AtomRng {
    rng: StdRng,
    range: (i64, i64),
}

impl AtomRng {
    /// Create from seed, drawing coefficients from the half-open `range`.
    pub fn new(seed: u64, range: (i64, i64)) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            range,
        }
    }

    /// Create with an entropy-derived seed.
    pub fn from_entropy(range: (i64, i64)) -> Self {
        Self {
            rng: StdRng::from_entropy(),
            range,
        }
    }

    /// Draw one uniform coefficient.
    pub fn atom(&mut self) -> i64 {
        self.rng.gen_range(self.range.0..self.range.1)
    }

    /// Draw one uniform candidate.
    pub fn candidate(&mut self) -> Candidate {
        Candidate::new(self.atom(), self.atom())
    }

    /// `size` independently drawn candidates.
    pub fn initial_population(&mut self, size: usize) -> Vec<Candidate> {
        (0..size).map(|_| self.candidate()).collect()
    }

    /// True with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen_range(0.0..1.0) < p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_candidates_share_key() {
        let a = Candidate::new(51_837, 89_123);
        let b = Candidate::new(51_837, 89_123);
        assert_eq!(a.content_key(), b.content_key());
    }

    #[test]
    fn test_distinct_candidates_distinct_keys() {
        let a = Candidate::new(1, 2);
        let b = Candidate::new(2, 1);
        assert_ne!(a.content_key(), b.content_key());
    }

    #[test]
    fn test_apply() {
        let c = Candidate::new(3, -4);
        assert_eq!(c.apply(2.0, 0.5), 4.0);
    }

    #[test]
    fn test_initial_population_size() {
        let mut rng = AtomRng::new(7, (0, 1_000_000));
        let population = rng.initial_population(10);
        assert_eq!(population.len(), 10);
        for c in &population {
            assert!((0..1_000_000).contains(&c.x));
            assert!((0..1_000_000).contains(&c.y));
        }
    }

    #[test]
    fn test_chance_extremes() {
        let mut rng = AtomRng::new(7, (0, 10));
        for _ in 0..100 {
            assert!(!rng.chance(0.0));
            assert!(rng.chance(1.0));
        }
    }

    #[test]
    fn test_seeded_rng_reproducible() {
        let mut a = AtomRng::new(42, (0, 1_000_000));
        let mut b = AtomRng::new(42, (0, 1_000_000));
        assert_eq!(a.initial_population(5), b.initial_population(5));
    }
}
