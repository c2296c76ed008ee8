/// Evaluation counters for a training session.
///
/// Counts only ever increase, once per objective or gradient evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Counters {
    function_evaluations: usize,
    gradient_evaluations: usize,
    last_objective: f64,
}

impl Counters {
    /// Returns the number of objective evaluations.
    #[must_use]
    pub fn function_evaluations(&self) -> usize {
        self.function_evaluations
    }

    /// Returns the number of analytic gradient evaluations.
    ///
    /// Numerical gradients are counted as objective evaluations instead.
    #[must_use]
    pub fn gradient_evaluations(&self) -> usize {
        self.gradient_evaluations
    }

    /// Returns the objective value reported by the last line minimisation.
    #[must_use]
    pub fn last_objective(&self) -> f64 {
        self.last_objective
    }

    pub(super) fn record_function(&mut self) {
        self.function_evaluations += 1;
    }

    pub(super) fn record_gradient(&mut self) {
        self.gradient_evaluations += 1;
    }

    pub(super) fn record_objective(&mut self, value: f64) {
        self.last_objective = value;
    }
}
