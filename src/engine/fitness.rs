//! Fitness scoring and population ranking.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::candidate::{Candidate, ScoredCandidate};

/// Pluggable fitness function mapping a candidate to a score in `[0, 1]`,
/// where 1.0 means optimal.
pub trait Fitness: Sync {
    fn score(&self, candidate: &Candidate) -> f64;
}

/// Adapter turning any closure into a [`Fitness`].
pub struct FitnessFn<F>(pub F);

impl<F> Fitness for FitnessFn<F>
where
    F: Fn(&Candidate) -> f64 + Sync,
{
    fn score(&self, candidate: &Candidate) -> f64 {
        (self.0)(candidate)
    }
}

/// Reference fitness: closeness to a target linear function over a fixed
/// set of test inputs.
///
/// For each input the candidate's output is divided by the target's, and a
/// ratio above 1 is inverted, so over- and under-shoot are penalized alike
/// and exact equality on every input scores 1.0. The final score is the
/// mean across inputs. Test points must not produce a zero target output;
/// the default set avoids that by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearTarget {
    /// Target coefficients.
    pub target: Candidate,
    /// Input pairs the candidate is compared on.
    pub test_points: Vec<(f64, f64)>,
}

impl Default for LinearTarget {
    fn default() -> Self {
        Self {
            target: Candidate::new(51_837, 89_123),
            test_points: vec![
                (1.0, 2.0),
                (3.0, 4.0),
                (10.0, 20.0),
                (50.0, 100.0),
                (0.5, 0.75),
                (0.0, 10.0),
                (10.0, 0.0),
                (-5.0, 0.0),
                (0.0, -12.0),
                (-37.0, -48.0),
                (309_038.0, -20_938.0),
                (0.0, 238_373.0),
                (398_333.0, 2.0),
                (111.0, 99_999.0),
            ],
        }
    }
}

impl Fitness for LinearTarget {
    fn score(&self, candidate: &Candidate) -> f64 {
        let total: f64 = self
            .test_points
            .iter()
            .map(|&(a, b)| {
                let ratio = candidate.apply(a, b) / self.target.apply(a, b);
                if ratio > 1.0 { 1.0 / ratio } else { ratio }
            })
            .sum();
        total / self.test_points.len() as f64
    }
}

/// Score every candidate and rank the population worst-first.
///
/// Scoring is embarrassingly parallel and runs on the rayon pool; the sort
/// is stable, so candidates with equal scores keep their input order. The
/// best candidate is always the last element.
pub fn evaluate<F: Fitness>(population: &[Candidate], fitness: &F) -> Vec<ScoredCandidate> {
    let mut ranked: Vec<ScoredCandidate> = population
        .par_iter()
        .map(|&candidate| ScoredCandidate {
            candidate,
            score: fitness.score(&candidate),
        })
        .collect();
    ranked.sort_by(|a, b| a.score.total_cmp(&b.score));
    ranked
}
