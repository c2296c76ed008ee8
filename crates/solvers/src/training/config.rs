use thiserror::Error;

use crate::line_search;

/// Configuration for a training session.
///
/// The tolerances in the first group are read by the outer optimisation
/// driver and reported in the summary; the session itself only uses
/// `line_search`, `epsilon`, and the flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Objective change below which a driver may stop.
    pub error_tol: f64,

    /// Parameter change below which a driver may stop.
    pub param_tol: f64,

    /// Line minimiser iteration cap and tolerance.
    pub line_search: line_search::Config,

    /// Perturbation used for central-difference gradients.
    pub epsilon: f64,

    /// Use the model's analytic gradient instead of central differences.
    pub analytic_gradients: bool,

    /// Run a gradient check before training.
    pub gradient_check: bool,

    /// Emit gradient checks and summaries at `info` level.
    pub display: bool,
}

/// Errors that can occur when validating a training config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("error_tol must be finite and non-negative")]
    ErrorTol,

    #[error("param_tol must be finite and non-negative")]
    ParamTol,

    #[error("epsilon must be finite and positive")]
    Epsilon,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            error_tol: 1e-6,
            param_tol: 1e-4,
            line_search: line_search::Config::default(),
            epsilon: 1e-6,
            analytic_gradients: true,
            gradient_check: true,
            display: true,
        }
    }
}

impl Config {
    /// Validates that all tolerances are usable.
    ///
    /// # Errors
    ///
    /// Returns an error if a tolerance is negative or non-finite, or if
    /// `epsilon` is not positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.error_tol.is_finite() || self.error_tol < 0.0 {
            return Err(ConfigError::ErrorTol);
        }
        if !self.param_tol.is_finite() || self.param_tol < 0.0 {
            return Err(ConfigError::ParamTol);
        }
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
            return Err(ConfigError::Epsilon);
        }
        Ok(())
    }
}
