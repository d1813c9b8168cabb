use rug::Integer;
use std::time::{Duration, Instant};

/// A discrete logarithm problem: find `x` such that `g^x = h (mod p)`.
///
/// Carries only the public triple `(g, h, p)`; solvers never see the private
/// state of whatever key pair produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscreteLogInstance {
    /// Base of the exponentiation.
    pub g: Integer,
    /// Target value `g^x mod p`.
    pub h: Integer,
    /// Prime modulus of the group.
    pub modulus: Integer,
}

impl DiscreteLogInstance {
    /// Creates an instance from the public triple `(g, h, p)`.
    pub fn new(g: Integer, h: Integer, modulus: Integer) -> Self {
        DiscreteLogInstance { g, h, modulus }
    }
}

/// The outcome of a single solver invocation, produced fresh per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverReport {
    /// The recovered exponent, or `None` when the search came up empty.
    pub solution: Option<Integer>,
    /// Wall-clock time the whole search took.
    pub elapsed: Duration,
    /// Number of candidates the search ruled out, for strategies that count them.
    pub candidates_tried: Option<u64>,
}

impl SolverReport {
    /// Whether the search recovered an exponent.
    pub fn is_found(&self) -> bool {
        self.solution.is_some()
    }
}

/// A strategy for recovering the exponent of a discrete logarithm instance.
///
/// Implementations are interchangeable: given the same instance with a known
/// solution, every strategy that reports a solution reports the same one. A
/// miss is a normal outcome (for example a target outside the subgroup the
/// base generates, or an unlucky randomized walk) and is reported as `None`,
/// never as an error.
pub trait DiscreteLogSolver {
    /// Short name identifying this strategy in reports.
    fn name(&self) -> &'static str;

    /// Runs the raw search, returning the recovered exponent and the number of
    /// candidates that were tried, for strategies that keep count.
    fn attempt(&self, instance: &DiscreteLogInstance) -> (Option<Integer>, Option<u64>);

    /// Solves the instance, measuring the wall-clock time of the whole search.
    fn solve(&self, instance: &DiscreteLogInstance) -> SolverReport {
        let start = Instant::now();
        let (solution, candidates_tried) = self.attempt(instance);

        SolverReport {
            solution,
            elapsed: start.elapsed(),
            candidates_tried,
        }
    }
}
