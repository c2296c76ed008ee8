use std::fmt;

use tangent_core::Trainable;
use tracing::{debug, info};

use super::Trainer;

const RULE: &str = "================================================";
const THIN_RULE: &str = "------------------------------------------------";

/// A snapshot of a training session for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Name of the algorithm driving the session.
    pub algorithm: String,

    /// Configured objective-change tolerance.
    pub error_tol: f64,

    /// Configured parameter-change tolerance.
    pub param_tol: f64,

    /// Objective evaluations so far.
    pub function_evaluations: usize,

    /// Analytic gradient evaluations so far.
    pub gradient_evaluations: usize,

    /// Objective value from the last line minimisation.
    pub objective: f64,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "Training summary     : {}", self.algorithm)?;
        writeln!(f, "{THIN_RULE}")?;
        writeln!(f, "Error tolerance      : {}", self.error_tol)?;
        writeln!(f, "Parameter tolerance  : {}", self.param_tol)?;
        writeln!(f, "Function evaluations : {}", self.function_evaluations)?;
        writeln!(f, "Gradient evaluations : {}", self.gradient_evaluations)?;
        writeln!(f, "Function value       : {}", self.objective)?;
        write!(f, "{RULE}")
    }
}

impl<M: Trainable> Trainer<M> {
    /// Returns a snapshot of the session's settings and counters.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            algorithm: self.algorithm.clone(),
            error_tol: self.config.error_tol,
            param_tol: self.config.param_tol,
            function_evaluations: self.counters.function_evaluations(),
            gradient_evaluations: self.counters.gradient_evaluations(),
            objective: self.counters.last_objective(),
        }
    }

    /// Emits the summary as a structured event.
    ///
    /// The event is logged at `info` level when [`Config::display`] is set,
    /// and at `debug` level otherwise.
    ///
    /// [`Config::display`]: super::Config::display
    pub fn log_summary(&self) {
        let Summary {
            algorithm,
            error_tol,
            param_tol,
            function_evaluations,
            gradient_evaluations,
            objective,
        } = self.summary();

        if self.config.display {
            info!(
                %algorithm,
                error_tol,
                param_tol,
                function_evaluations,
                gradient_evaluations,
                objective,
                "training summary"
            );
        } else {
            debug!(
                %algorithm,
                error_tol,
                param_tol,
                function_evaluations,
                gradient_evaluations,
                objective,
                "training summary"
            );
        }
    }
}
