use thiserror::Error;

use super::{ConfigError, MaskError};

/// Errors that can occur during a training session.
///
/// Every variant is a precondition violation by the caller or the model.
/// Non-convergence and numerical degeneracy are never reported as errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid mask: {0}")]
    Mask(#[from] MaskError),

    #[error("parameter vector has length {actual}, model expects {expected}")]
    ParameterLength { expected: usize, actual: usize },

    #[error("search direction has length {actual}, parameters have length {expected}")]
    DirectionLength { expected: usize, actual: usize },

    #[error("model gradient has length {actual}, model has {expected} parameters")]
    GradientLength { expected: usize, actual: usize },
}
