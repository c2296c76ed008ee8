use tracing::debug;

use super::{
    Bracket, BracketStatus, Config, Solution, Status,
    golden::{CPHI, TINY, TOL, sign},
};

/// Minimises `objective` inside `bracket` with Brent's method.
///
/// The search starts at `bracket.mid`, which is evaluated once, and stops
/// when the current best point is within `config.x_tol()` of the bracket
/// midpoint and the bracket is narrower than `4 * config.x_tol()`. If that
/// never happens within `config.max_iters()` iterations, the best point found
/// is returned with [`Status::MaxIters`].
///
/// The returned solution reports [`BracketStatus::Found`]; [`search`] replaces
/// it with the status from its own bracketing phase.
///
/// # Errors
///
/// Returns the objective's error if any evaluation fails.
///
/// [`search`]: super::search
pub fn minimize<F, E>(mut objective: F, bracket: &Bracket, config: &Config) -> Result<Solution, E>
where
    F: FnMut(f64) -> Result<f64, E>,
{
    let mut state = State::new(*bracket, objective(bracket.mid)?);

    for iter in 1..=config.max_iters() {
        if state.is_converged(config.x_tol()) {
            return Ok(state.into_solution(*bracket, Status::Converged, iter - 1));
        }

        let u = state.next_step();
        let fu = objective(u)?;
        state.update(u, fu);

        debug!(
            iter,
            x = state.x,
            fx = state.fx,
            min = state.min,
            max = state.max,
            "line minimiser"
        );
    }

    Ok(state.into_solution(*bracket, Status::MaxIters, config.max_iters()))
}

/// Working state of one Brent minimisation.
///
/// `x` is the best point so far, `w` the second best, and `v` the previous
/// value of `w`. `d` is the last step taken and `e` the step before it.
struct State {
    min: f64,
    max: f64,
    x: f64,
    w: f64,
    v: f64,
    fx: f64,
    fw: f64,
    fv: f64,
    d: f64,
    e: f64,
}

impl State {
    fn new(bracket: Bracket, fx: f64) -> Self {
        let x = bracket.mid;
        Self {
            min: bracket.min,
            max: bracket.max,
            x,
            w: x,
            v: x,
            fx,
            fw: fx,
            fv: fx,
            d: 0.0,
            e: 0.0,
        }
    }

    fn midpoint(&self) -> f64 {
        0.5 * (self.min + self.max)
    }

    fn tol1(&self) -> f64 {
        TOL * self.x.abs() + TINY
    }

    fn is_converged(&self, x_tol: f64) -> bool {
        (self.x - self.midpoint()).abs() <= x_tol && (self.max - self.min) < 4.0 * x_tol
    }

    /// Chooses the next trial point, updating `d` and `e`.
    fn next_step(&mut self) -> f64 {
        let xm = self.midpoint();
        let tol1 = self.tol1();

        if self.e.abs() > tol1 {
            // Fit a parabola through x, w, and v.
            let r = (self.fx - self.fv) * (self.x - self.w);
            let mut q = (self.fx - self.fw) * (self.x - self.v);
            let mut p = (self.x - self.v) * q - (self.x - self.w) * r;
            q = 2.0 * (q - r);
            if q > 0.0 {
                p = -p;
            }
            q = q.abs();

            // A zero `q` always fails the first test, so `p / q` is never taken.
            if p.abs() >= (0.5 * q * self.e).abs()
                || p <= q * (self.min - self.x)
                || p >= q * (self.max - self.x)
            {
                self.golden_step(xm);
            } else {
                self.e = self.d;
                self.d = p / q;
                let u = self.x + self.d;
                if (u - self.min) < 2.0 * tol1 || (self.max - u) < 2.0 * tol1 {
                    self.d = sign(xm - self.x) * tol1;
                }
            }
        } else {
            self.golden_step(xm);
        }

        if self.d.abs() >= tol1 {
            self.x + self.d
        } else {
            self.x + sign(self.d) * tol1
        }
    }

    /// Steps a golden-section fraction into the larger half of the bracket.
    fn golden_step(&mut self, xm: f64) {
        self.e = if self.x >= xm {
            self.min - self.x
        } else {
            self.max - self.x
        };
        self.d = CPHI * self.e;
    }

    /// Shrinks the bracket around `u` and reorders x, w, and v.
    #[allow(clippy::float_cmp)]
    fn update(&mut self, u: f64, fu: f64) {
        if fu <= self.fx {
            if u >= self.x {
                self.min = self.x;
            } else {
                self.max = self.x;
            }
            (self.v, self.w, self.x) = (self.w, self.x, u);
            (self.fv, self.fw, self.fx) = (self.fw, self.fx, fu);
        } else {
            if u < self.x {
                self.min = u;
            } else {
                self.max = u;
            }

            if fu <= self.fw || self.w == self.x {
                (self.v, self.w) = (self.w, u);
                (self.fv, self.fw) = (self.fw, fu);
            } else if fu <= self.fv || self.v == self.x || self.v == self.w {
                self.v = u;
                self.fv = fu;
            }
        }
    }

    fn into_solution(self, bracket: Bracket, status: Status, iters: usize) -> Solution {
        Solution {
            status,
            x: self.x,
            objective: self.fx,
            iters,
            bracket,
            bracket_status: BracketStatus::Found,
        }
    }
}
