//! One-dimensional minimisation along a line.
//!
//! # Algorithm
//!
//! Minimisation happens in two phases:
//!
//! 1. [`bracket_minimum`] starts from a point and a trial step and produces a
//!    [`Bracket`] `(min, mid, max)` whose middle value is no worse than either
//!    end. It shrinks toward the start by the golden ratio when the trial step
//!    is uphill, and otherwise expands outward using inverse parabolic
//!    interpolation, capped at [`MAX_STEP`] times the current span.
//! 2. [`minimize`] refines the bracket with Brent's method: a parabola is
//!    fitted through the three best points, and its minimum is accepted only
//!    when it falls well inside the bracket and shrinks the step; otherwise a
//!    golden-section step is taken into the larger half of the bracket.
//!
//! [`search`] runs both phases from a start point with a unit trial step.
//!
//! # Objectives
//!
//! Objectives are closures `FnMut(f64) -> Result<f64, E>`. Any error they
//! return is propagated unchanged; use [`std::convert::Infallible`] for
//! objectives that cannot fail. Neither phase ever fails on its own:
//! degenerate interpolation falls back to golden-section steps, and hitting
//! an iteration cap is reported through [`Status`] and [`BracketStatus`].

mod bracket;
mod brent;
mod config;
mod golden;
mod point;
mod solution;

#[cfg(test)]
mod tests;

pub use bracket::{Bracket, BracketStatus, Bracketed, bracket_minimum};
pub use brent::minimize;
pub use config::{Config, ConfigError};
pub use golden::{CPHI, MAX_STEP, PHI, TINY, TOL};
pub use point::Point;
pub use solution::{Solution, Status};

/// Brackets a minimum from `start` with a unit trial step, then refines it.
///
/// This is the composition used by line minimisation along a search
/// direction: `start.x` is the current position along the line and
/// `start.objective` its already-known objective value.
///
/// # Errors
///
/// Returns the objective's error if any evaluation fails.
pub fn search<F, E>(mut objective: F, start: Point, config: &Config) -> Result<Solution, E>
where
    F: FnMut(f64) -> Result<f64, E>,
{
    let bracketed = bracket_minimum(
        &mut objective,
        start,
        start.x + 1.0,
        config.max_bracket_iters(),
    )?;
    let solution = minimize(&mut objective, &bracketed.bracket, config)?;
    Ok(solution.with_bracket_status(bracketed.status))
}
