use std::fmt;

use tangent_core::Trainable;
use tracing::{debug, info};

use super::{Error, Trainer};

const RULE: &str = "==========================";
const THIN_RULE: &str = "--------------------------";

/// One row of a [`GradientCheck`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientEntry {
    /// Index into the model's full parameter vector.
    pub index: usize,

    /// Whether the parameter is excluded by the mask.
    ///
    /// Masked entries are not evaluated and report zero for every value.
    pub masked: bool,

    /// Central-difference estimate.
    pub numeric: f64,

    /// Component of the model's analytic gradient.
    pub analytic: f64,

    /// Absolute difference between `numeric` and `analytic`.
    pub difference: f64,
}

impl GradientEntry {
    fn masked(index: usize) -> Self {
        Self {
            index,
            masked: true,
            numeric: 0.0,
            analytic: 0.0,
            difference: 0.0,
        }
    }

    fn compared(index: usize, numeric: f64, analytic: f64) -> Self {
        Self {
            index,
            masked: false,
            numeric,
            analytic,
            difference: (numeric - analytic).abs(),
        }
    }
}

/// Analytic and numerical gradients compared parameter by parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientCheck {
    /// One entry per model parameter, in index order.
    pub entries: Vec<GradientEntry>,
}

impl GradientCheck {
    /// Returns the largest absolute difference over all entries.
    ///
    /// Returns zero when there are no entries or every entry is masked.
    #[must_use]
    pub fn max_difference(&self) -> f64 {
        self.entries
            .iter()
            .map(|entry| entry.difference)
            .fold(0.0, f64::max)
    }
}

impl fmt::Display for GradientCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "GRADCHECK")?;
        writeln!(f, "     Delta, Analytic, Diff")?;
        writeln!(f, "{THIN_RULE}")?;
        for entry in &self.entries {
            let marker = if entry.masked { 'x' } else { ' ' };
            writeln!(
                f,
                "#{} {marker} {}, {}, {}",
                entry.index, entry.numeric, entry.analytic, entry.difference
            )?;
        }
        write!(f, "{RULE}")
    }
}

impl<M: Trainable> Trainer<M> {
    /// Compares the model's analytic gradient with central differences at
    /// the current parameters.
    ///
    /// Reports every index of the model's full parameter vector. The
    /// analytic gradient counts as one gradient evaluation and each
    /// unmasked entry costs two objective evaluations. The model's
    /// parameters are restored afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the model's gradient length differs from its
    /// parameter count, or if the model no longer matches the mask.
    pub fn check_gradient(&mut self) -> Result<GradientCheck, Error> {
        let saved = self.parameters()?;
        self.counters.record_gradient();
        let analytic = self.full_gradient()?;

        let mut entries = Vec::with_capacity(analytic.len());
        let mut active = 0;
        for (index, &component) in analytic.iter().enumerate() {
            let is_active = self.mask.as_ref().is_none_or(|mask| mask.is_active(index));
            let entry = if is_active {
                let numeric = self.central_difference(active, &saved)?;
                active += 1;
                GradientEntry::compared(index, numeric, component)
            } else {
                GradientEntry::masked(index)
            };
            self.log_entry(&entry);
            entries.push(entry);
        }

        self.set_parameters(&saved)?;
        Ok(GradientCheck { entries })
    }

    /// Runs [`check_gradient`](Self::check_gradient) if the config asks for
    /// a gradient check before training.
    ///
    /// # Errors
    ///
    /// Returns any error from the check itself.
    pub fn initial_gradient_check(&mut self) -> Result<Option<GradientCheck>, Error> {
        if self.config.gradient_check {
            self.check_gradient().map(Some)
        } else {
            Ok(None)
        }
    }

    fn log_entry(&self, entry: &GradientEntry) {
        let GradientEntry {
            index,
            masked,
            numeric,
            analytic,
            difference,
        } = *entry;
        if self.config.display {
            info!(index, masked, numeric, analytic, difference, "gradient check");
        } else {
            debug!(index, masked, numeric, analytic, difference, "gradient check");
        }
    }
}
