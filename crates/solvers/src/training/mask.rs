use ndarray::Array1;
use thiserror::Error;

/// Errors that can occur when applying a parameter mask.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MaskError {
    #[error("mask has length {actual}, model has {expected} parameters")]
    Length { expected: usize, actual: usize },

    #[error("active parameter vector has length {actual}, mask selects {expected}")]
    ActiveLength { expected: usize, actual: usize },

    #[error("mask is already set for this session")]
    AlreadySet,
}

/// Selects the subset of a model's parameters that training may change.
///
/// Position `i` is active when `mask[i]` is `true`. Active parameters are
/// always taken in ascending index order, and inactive positions of the full
/// vector are never written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    active: Vec<bool>,
    active_count: usize,
}

impl Mask {
    /// Creates a mask from one flag per full parameter.
    #[must_use]
    pub fn new(active: Vec<bool>) -> Self {
        let active_count = active.iter().filter(|&&a| a).count();
        Self {
            active,
            active_count,
        }
    }

    /// Returns the number of full parameters the mask covers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns `true` if the mask covers no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Returns the number of active parameters.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active_count
    }

    /// Returns whether the parameter at `index` is active.
    ///
    /// Indices past the end of the mask are inactive.
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active.get(index).copied().unwrap_or(false)
    }

    /// Extracts the active entries of `full`, in index order.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::Length`] if `full` does not match the mask length.
    pub fn select(&self, full: &Array1<f64>) -> Result<Array1<f64>, MaskError> {
        self.check_full(full)?;
        Ok(full
            .iter()
            .zip(&self.active)
            .filter_map(|(&value, &active)| active.then_some(value))
            .collect())
    }

    /// Writes `subset` into the active positions of `full`.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::Length`] if `full` does not match the mask length,
    /// or [`MaskError::ActiveLength`] if `subset` does not have one entry per
    /// active parameter. `full` is left untouched on error.
    pub fn scatter(&self, subset: &Array1<f64>, full: &mut Array1<f64>) -> Result<(), MaskError> {
        self.check_full(full)?;
        if subset.len() != self.active_count {
            return Err(MaskError::ActiveLength {
                expected: self.active_count,
                actual: subset.len(),
            });
        }

        let targets = full
            .iter_mut()
            .zip(&self.active)
            .filter_map(|(slot, &active)| active.then_some(slot));
        for (slot, &value) in targets.zip(subset) {
            *slot = value;
        }
        Ok(())
    }

    /// Checks that the mask covers exactly `parameter_count` parameters.
    pub(super) fn check_len(&self, parameter_count: usize) -> Result<(), MaskError> {
        if self.len() == parameter_count {
            Ok(())
        } else {
            Err(MaskError::Length {
                expected: parameter_count,
                actual: self.len(),
            })
        }
    }

    fn check_full(&self, full: &Array1<f64>) -> Result<(), MaskError> {
        self.check_len(full.len())
    }
}

impl From<Vec<bool>> for Mask {
    fn from(active: Vec<bool>) -> Self {
        Self::new(active)
    }
}
