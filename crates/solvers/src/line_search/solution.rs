use super::{Bracket, BracketStatus};

/// Indicates whether the minimiser converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket shrank below the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    ///
    /// The best point found so far is still reported.
    MaxIters,
}

/// The result of a line minimisation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final minimiser status.
    pub status: Status,

    /// Best step found.
    pub x: f64,

    /// Objective value at `x`.
    pub objective: f64,

    /// Brent iterations used.
    pub iters: usize,

    /// Bracket that seeded the minimiser.
    pub bracket: Bracket,

    /// Whether bracketing found a valid bracket before its cap.
    pub bracket_status: BracketStatus,
}

impl Solution {
    /// Returns `true` if both bracketing and refinement finished within their caps.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged && self.bracket_status == BracketStatus::Found
    }

    pub(super) fn with_bracket_status(self, bracket_status: BracketStatus) -> Self {
        Self {
            bracket_status,
            ..self
        }
    }
}
