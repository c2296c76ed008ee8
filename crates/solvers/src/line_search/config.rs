use thiserror::Error;

/// Configuration for line minimisation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    x_tol: f64,
    max_bracket_iters: usize,
}

/// Errors that can occur when validating a line search config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("x_tol must be finite and positive")]
    XTol,

    #[error("max_bracket_iters must be at least 1")]
    BracketIters,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(10, 1e-4, 50).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error if `x_tol` is not finite and positive, or if
    /// `max_bracket_iters` is zero.
    pub fn new(max_iters: usize, x_tol: f64, max_bracket_iters: usize) -> Result<Self, ConfigError> {
        if !x_tol.is_finite() || x_tol <= 0.0 {
            return Err(ConfigError::XTol);
        }
        if max_bracket_iters == 0 {
            return Err(ConfigError::BracketIters);
        }

        Ok(Self {
            max_iters,
            x_tol,
            max_bracket_iters,
        })
    }

    /// Returns the maximum number of Brent iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the step tolerance used by the convergence test.
    #[must_use]
    pub fn x_tol(&self) -> f64 {
        self.x_tol
    }

    /// Returns the maximum number of bracketing iterations.
    #[must_use]
    pub fn max_bracket_iters(&self) -> usize {
        self.max_bracket_iters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = Config::default();
        assert_eq!(config.max_iters(), 10);
        assert_eq!(config.max_bracket_iters(), 50);
    }

    #[test]
    fn rejects_bad_tolerance() {
        assert_eq!(Config::new(10, 0.0, 50), Err(ConfigError::XTol));
        assert_eq!(Config::new(10, -1e-4, 50), Err(ConfigError::XTol));
        assert_eq!(Config::new(10, f64::NAN, 50), Err(ConfigError::XTol));
    }

    #[test]
    fn rejects_zero_bracket_iters() {
        assert_eq!(Config::new(10, 1e-4, 0), Err(ConfigError::BracketIters));
    }
}
