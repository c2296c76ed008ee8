use ndarray::Array1;
use tangent_core::Trainable;
use tracing::debug;

use crate::line_search::{self, Point};

use super::{Error, Trainer};

impl<M: Trainable> Trainer<M> {
    /// Minimises the objective along `direction` from `params`.
    ///
    /// The returned solution's `x` is the step length, so the best point
    /// found is `params + x * direction`. `objective_at_params` must be the
    /// objective at `params`; it seeds the bracketing phase, which tries a
    /// unit step first.
    ///
    /// The model's parameters are the same before and after the call, and
    /// the solution's objective is recorded as the session's last objective
    /// whether or not the minimiser converged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DirectionLength`] if `direction` and `params` differ
    /// in length, or an error if `params` does not match the parameters under
    /// training.
    pub fn line_minimise(
        &mut self,
        params: &Array1<f64>,
        direction: &Array1<f64>,
        objective_at_params: f64,
    ) -> Result<line_search::Solution, Error> {
        if direction.len() != params.len() {
            return Err(Error::DirectionLength {
                expected: params.len(),
                actual: direction.len(),
            });
        }

        let config = self.config.line_search;
        let solution = line_search::search(
            |step| self.line_objective(params, direction, step),
            Point::new(0.0, objective_at_params),
            &config,
        )?;

        self.counters.record_objective(solution.objective);
        debug!(
            step = solution.x,
            objective = solution.objective,
            iters = solution.iters,
            status = ?solution.status,
            bracket_status = ?solution.bracket_status,
            "line minimisation finished"
        );

        Ok(solution)
    }

    /// Objective at `params + step * direction`, leaving the model as it was.
    fn line_objective(
        &mut self,
        params: &Array1<f64>,
        direction: &Array1<f64>,
        step: f64,
    ) -> Result<f64, Error> {
        let saved = self.parameters()?;

        let mut point = params.clone();
        point.scaled_add(step, direction);
        let value = self.objective(&point);

        self.set_parameters(&saved)?;
        value
    }
}
