//! A training session that drives a [`Trainable`] model.
//!
//! A [`Trainer`] owns (or exclusively borrows) a model for the length of a
//! session and provides the building blocks an outer optimisation driver
//! needs:
//!
//! - objective and gradient evaluation at a given parameter vector, with
//!   analytic gradients or central differences ([`Trainer::objective`],
//!   [`Trainer::gradient`], [`Trainer::numerical_gradient`])
//! - an optional [`Mask`] that restricts training to a subset of the
//!   model's parameters; every vector the session accepts or returns is then
//!   the active subset
//! - line minimisation along a search direction ([`Trainer::line_minimise`])
//! - a gradient check comparing analytic and numerical gradients
//!   ([`Trainer::check_gradient`])
//! - evaluation [`Counters`] and a printable [`Summary`]
//!
//! # Errors
//!
//! Every [`Error`] is a precondition violation: a mask or vector whose length
//! does not match the model. Evaluations themselves cannot fail, and a line
//! minimisation that hits its iteration cap still returns its best point.

mod config;
mod counters;
mod error;
mod gradient_check;
mod line;
mod mask;
mod oracle;
mod summary;

#[cfg(test)]
mod test_utils;

pub use config::{Config, ConfigError};
pub use counters::Counters;
pub use error::Error;
pub use gradient_check::{GradientCheck, GradientEntry};
pub use mask::{Mask, MaskError};
pub use summary::Summary;

use tangent_core::Trainable;

/// Algorithm name reported until a driver sets its own.
const DEFAULT_ALGORITHM: &str = "line search";

/// A single training session over one model.
#[derive(Debug)]
pub struct Trainer<M> {
    model: M,
    config: Config,
    mask: Option<Mask>,
    counters: Counters,
    algorithm: String,
}

impl<M: Trainable> Trainer<M> {
    /// Starts a session over `model` with zeroed counters and no mask.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the config fails validation.
    pub fn new(model: M, config: Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            model,
            config,
            mask: None,
            counters: Counters::default(),
            algorithm: DEFAULT_ALGORITHM.to_owned(),
        })
    }

    /// Sets the algorithm name shown in the summary.
    #[must_use]
    pub fn with_algorithm(mut self, name: impl Into<String>) -> Self {
        self.algorithm = name.into();
        self
    }

    /// Restricts training to the parameters selected by `mask`.
    ///
    /// A mask can be set once per session.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::AlreadySet`] if a mask was already set, or
    /// [`MaskError::Length`] if the mask length differs from the model's
    /// parameter count.
    pub fn set_mask(&mut self, mask: impl Into<Mask>) -> Result<(), Error> {
        if self.mask.is_some() {
            return Err(MaskError::AlreadySet.into());
        }
        let mask = mask.into();
        mask.check_len(self.model.parameter_count())?;
        self.mask = Some(mask);
        Ok(())
    }

    /// Returns the active mask, if any.
    #[must_use]
    pub fn mask(&self) -> Option<&Mask> {
        self.mask.as_ref()
    }

    /// Returns the model.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Ends the session and returns the model.
    #[must_use]
    pub fn into_model(self) -> M {
        self.model
    }

    /// Returns the session config.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the evaluation counters.
    #[must_use]
    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// Returns the algorithm name.
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }
}
