use tracing::{debug, trace};

use super::{
    Point,
    golden::{MAX_STEP, PHI, floored},
};

/// Three step lengths bounding a local minimum.
///
/// `min <= mid <= max` always holds. For a bracket reported as
/// [`BracketStatus::Found`], the objective at `mid` is no worse than at
/// either end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    /// Lower bound.
    pub min: f64,

    /// Interior point with the lowest known objective.
    pub mid: f64,

    /// Upper bound.
    pub max: f64,
}

impl Bracket {
    /// Creates a bracket from two ends and a middle point, ordering the ends.
    #[must_use]
    pub fn new(end: f64, mid: f64, other_end: f64) -> Self {
        let (min, max) = if end < other_end {
            (end, other_end)
        } else {
            (other_end, end)
        };
        Self { min, mid, max }
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Returns the bracket midpoint (not the interior point).
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.min + self.max)
    }
}

/// Indicates whether bracketing finished before its iteration cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketStatus {
    /// The objective at `mid` is no worse than at either end.
    Found,

    /// Reached the iteration limit; the last triple is reported as is.
    ///
    /// This happens when the objective is not locally unimodal along the
    /// line, or when every trial step goes uphill.
    MaxIters,
}

/// The result of [`bracket_minimum`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracketed {
    /// The last bracket reached, valid only when `status` is `Found`.
    pub bracket: Bracket,

    /// Whether bracketing finished before its iteration cap.
    pub status: BracketStatus,
}

impl Bracketed {
    fn found(bracket: Bracket) -> Self {
        Self {
            bracket,
            status: BracketStatus::Found,
        }
    }

    fn capped(bracket: Bracket) -> Self {
        debug!(?bracket, "bracketing reached iteration cap");
        Self {
            bracket,
            status: BracketStatus::MaxIters,
        }
    }
}

/// Brackets a minimum of `objective`, starting from `start` and a trial step `b`.
///
/// If `b` is uphill from `start`, trial points are pulled back toward
/// `start.x` by a factor of φ until one is no worse. Otherwise the search
/// extrapolates past `b` by φ and keeps moving downhill, guessing each new
/// point by inverse parabolic interpolation through the last three and
/// limiting the guess to [`MAX_STEP`] times the current span.
///
/// Each loop stops after `max_iters` iterations and reports
/// [`BracketStatus::MaxIters`].
///
/// # Errors
///
/// Returns the objective's error if any evaluation fails.
#[allow(clippy::many_single_char_names)]
pub fn bracket_minimum<F, E>(
    mut objective: F,
    start: Point,
    b: f64,
    max_iters: usize,
) -> Result<Bracketed, E>
where
    F: FnMut(f64) -> Result<f64, E>,
{
    let Point { x: mut a, objective: mut fa } = start;
    let mut b = b;
    let mut fb = objective(b)?;

    if fb > fa {
        // Uphill: pull the trial point back toward `a`.
        let mut c = b;
        b = a + (c - a) / PHI;
        fb = objective(b)?;
        trace!(b, fb, "bracket shrink");

        let mut iters = 0;
        while fb > fa {
            if iters == max_iters {
                return Ok(Bracketed::capped(Bracket::new(a, b, c)));
            }
            iters += 1;

            c = b;
            b = a + (c - a) / PHI;
            fb = objective(b)?;
            trace!(b, fb, "bracket shrink");
        }

        return Ok(Bracketed::found(Bracket::new(a, b, c)));
    }

    let mut c = b + PHI * (b - a);
    let mut fc = objective(c)?;

    let mut iters = 0;
    while fb > fc {
        if iters == max_iters {
            return Ok(Bracketed::capped(Bracket::new(a, b, c)));
        }
        iters += 1;

        let r = (b - a) * (fb - fc);
        let q = (b - c) * (fb - fa);
        let u = b - ((b - c) * q - (b - a) * r) / (2.0 * floored(q - r));
        let ulimit = b + MAX_STEP * (c - b);

        let (u, fu) = if (b - u) * (u - c) > 0.0 {
            // Parabolic guess lies between `b` and `c`.
            let fu = objective(u)?;
            trace!(u, fu, "bracket interpolate");
            if fu < fc {
                return Ok(Bracketed::found(Bracket::new(b, u, c)));
            }
            if fu > fb {
                return Ok(Bracketed::found(Bracket::new(a, b, u)));
            }
            let u = c + PHI * (c - b);
            (u, objective(u)?)
        } else if (c - u) * (u - ulimit) > 0.0 {
            // Parabolic guess lies between `c` and the extrapolation limit.
            let fu = objective(u)?;
            trace!(u, fu, "bracket extrapolate");
            if fu < fc {
                (b, c) = (c, u);
                (fb, fc) = (fc, fu);
                let u = c + PHI * (c - b);
                (u, objective(u)?)
            } else {
                (u, fu)
            }
        } else if (u - ulimit) * (ulimit - c) >= 0.0 {
            // Parabolic guess overshoots the limit: clamp to it.
            (ulimit, objective(ulimit)?)
        } else {
            // Parabolic guess is unusable: take a golden step past `c`.
            let u = c + PHI * (c - b);
            (u, objective(u)?)
        };
        trace!(u, fu, "bracket expand");

        (a, b, c) = (b, c, u);
        (fa, fb, fc) = (fb, fc, fu);
    }

    Ok(Bracketed::found(Bracket::new(a, b, c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    fn bracket_of<F: Fn(f64) -> f64>(f: F, b: f64) -> Bracketed {
        let start = Point::new(0.0, f(0.0));
        bracket_minimum(|x| Ok::<_, Infallible>(f(x)), start, b, 50).expect("infallible")
    }

    fn assert_valid<F: Fn(f64) -> f64>(f: F, bracketed: &Bracketed) {
        let Bracket { min, mid, max } = bracketed.bracket;
        assert_eq!(bracketed.status, BracketStatus::Found);
        assert!(min < mid && mid < max, "unordered bracket {min}, {mid}, {max}");
        assert!(f(mid) <= f(min), "f(mid) > f(min) in {:?}", bracketed.bracket);
        assert!(f(mid) <= f(max), "f(mid) > f(max) in {:?}", bracketed.bracket);
    }

    #[test]
    fn new_orders_ends() {
        let bracket = Bracket::new(3.0, 2.0, 1.0);
        assert_relative_eq!(bracket.min, 1.0);
        assert_relative_eq!(bracket.mid, 2.0);
        assert_relative_eq!(bracket.max, 3.0);
        assert_relative_eq!(bracket.width(), 2.0);
        assert_relative_eq!(bracket.midpoint(), 2.0);
    }

    #[test]
    fn brackets_minimum_beyond_trial_step() {
        let f = |x: f64| (x - 3.0).powi(2);
        let bracketed = bracket_of(f, 1.0);
        assert_valid(f, &bracketed);
        assert!(bracketed.bracket.min <= 3.0 && 3.0 <= bracketed.bracket.max);
    }

    #[test]
    fn brackets_distant_minimum() {
        let f = |x: f64| (x - 250.0).powi(2);
        let bracketed = bracket_of(f, 1.0);
        assert_valid(f, &bracketed);
        assert!(bracketed.bracket.min <= 250.0 && 250.0 <= bracketed.bracket.max);
    }

    #[test]
    fn brackets_non_quadratic_minimum() {
        // Minimum at x = 2, with asymmetric walls.
        let f = |x: f64| (x - 2.0).powi(4) + 0.1 * (x - 2.0).exp();
        let bracketed = bracket_of(f, 1.0);
        assert_valid(f, &bracketed);
    }

    #[test]
    fn shrinks_when_trial_step_is_uphill() {
        let f = |x: f64| (x - 0.1).powi(2);
        let bracketed = bracket_of(f, 1.0);
        assert_valid(f, &bracketed);

        // The start point stays one end of the bracket.
        assert_relative_eq!(bracketed.bracket.min, 0.0);
        assert!(bracketed.bracket.max < 1.0);
    }

    #[test]
    fn brackets_in_negative_direction() {
        let f = |x: f64| (x + 4.0).powi(2);
        let bracketed = bracket_of(f, -1.0);
        assert_valid(f, &bracketed);
        assert!(bracketed.bracket.min <= -4.0 && -4.0 <= bracketed.bracket.max);
    }

    #[test]
    fn linear_decrease_expands_until_cap() {
        // No minimum exists along the line.
        let f = |x: f64| -x;
        let start = Point::new(0.0, 0.0);
        let mut evals = 0;
        let bracketed = bracket_minimum(
            |x| {
                evals += 1;
                Ok::<_, Infallible>(f(x))
            },
            start,
            1.0,
            5,
        )
        .expect("infallible");

        assert_eq!(bracketed.status, BracketStatus::MaxIters);
        assert!(bracketed.bracket.max > 1.0);
        assert!(evals <= 2 + 2 * 5);
    }

    #[test]
    fn uphill_everywhere_shrinks_until_cap() {
        // Every positive step is worse than the start.
        let f = |x: f64| x;
        let start = Point::new(0.0, 0.0);
        let bracketed = bracket_minimum(|x| Ok::<_, Infallible>(f(x)), start, 1.0, 10)
            .expect("infallible");

        assert_eq!(bracketed.status, BracketStatus::MaxIters);
        assert_relative_eq!(bracketed.bracket.min, 0.0);
        assert!(bracketed.bracket.max < 0.01);
    }

    #[test]
    fn brackets_across_unimodal_families() {
        for i in 1..=50 {
            let m = 0.25 * f64::from(i);
            let families: [Box<dyn Fn(f64) -> f64>; 4] = [
                Box::new(move |x| (x - m).powi(2)),
                Box::new(move |x| (x - m).powi(4)),
                Box::new(move |x| if x < m { 3.0 * (m - x) } else { (x - m).powi(2) }),
                Box::new(move |x| (x - m).cosh()),
            ];
            for f in &families {
                let bracketed = bracket_of(f, 1.0);
                assert_valid(f, &bracketed);
            }
        }
    }

    #[test]
    fn propagates_objective_errors() {
        let start = Point::new(0.0, 1.0);
        let result = bracket_minimum(
            |x: f64| if x > 1.5 { Err("out of range") } else { Ok(1.0 - x) },
            start,
            1.0,
            50,
        );

        assert_eq!(result, Err("out of range"));
    }
}
