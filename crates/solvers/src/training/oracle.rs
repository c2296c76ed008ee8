use ndarray::Array1;
use tangent_core::Trainable;
use tracing::trace;

use super::{Error, Trainer};

impl<M: Trainable> Trainer<M> {
    /// Returns the parameters under training.
    ///
    /// With a mask set, this is the active subset of the model's parameters
    /// in index order; otherwise it is the full parameter vector.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::Length`] if the model's parameter count no longer
    /// matches the mask.
    ///
    /// [`MaskError::Length`]: super::MaskError::Length
    pub fn parameters(&self) -> Result<Array1<f64>, Error> {
        let full = self.model.parameters();
        match &self.mask {
            Some(mask) => Ok(mask.select(&full)?),
            None => Ok(full),
        }
    }

    /// Installs `params` into the model.
    ///
    /// With a mask set, `params` is the active subset and the model's
    /// inactive parameters are left as they are.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` does not have one entry per parameter
    /// under training. The model is left untouched in that case.
    pub fn set_parameters(&mut self, params: &Array1<f64>) -> Result<(), Error> {
        match &self.mask {
            Some(mask) => {
                let mut full = self.model.parameters();
                mask.scatter(params, &mut full)?;
                self.model.set_parameters(&full);
            }
            None => {
                let expected = self.model.parameter_count();
                if params.len() != expected {
                    return Err(Error::ParameterLength {
                        expected,
                        actual: params.len(),
                    });
                }
                self.model.set_parameters(params);
            }
        }
        Ok(())
    }

    /// Evaluates the objective at `params`.
    ///
    /// The model keeps `params` installed afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` cannot be installed (see
    /// [`set_parameters`](Self::set_parameters)).
    pub fn objective(&mut self, params: &Array1<f64>) -> Result<f64, Error> {
        self.counters.record_function();
        self.set_parameters(params)?;
        Ok(self.model.objective())
    }

    /// Evaluates the gradient at `params`.
    ///
    /// Uses the model's analytic gradient when
    /// [`Config::analytic_gradients`](super::Config::analytic_gradients) is
    /// set, and [`numerical_gradient`](Self::numerical_gradient) otherwise.
    /// With a mask set, only the active components are returned.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` cannot be installed, or if the model's
    /// gradient length differs from its parameter count.
    pub fn gradient(&mut self, params: &Array1<f64>) -> Result<Array1<f64>, Error> {
        if !self.config.analytic_gradients {
            return self.numerical_gradient(params);
        }

        self.counters.record_gradient();
        self.set_parameters(params)?;
        let full = self.full_gradient()?;
        match &self.mask {
            Some(mask) => Ok(mask.select(&full)?),
            None => Ok(full),
        }
    }

    /// Estimates the gradient at `params` with central differences.
    ///
    /// Costs two objective evaluations per parameter under training. The
    /// model has `params` installed afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if `params` cannot be installed.
    pub fn numerical_gradient(&mut self, params: &Array1<f64>) -> Result<Array1<f64>, Error> {
        self.set_parameters(params)?;
        let gradient = (0..params.len())
            .map(|index| self.central_difference(index, params))
            .collect::<Result<Array1<f64>, Error>>()?;
        self.set_parameters(params)?;
        Ok(gradient)
    }

    /// Central-difference derivative with respect to `params[index]`.
    pub(super) fn central_difference(
        &mut self,
        index: usize,
        params: &Array1<f64>,
    ) -> Result<f64, Error> {
        let epsilon = self.config.epsilon;
        let mut point = params.clone();

        point[index] = params[index] + epsilon;
        let plus = self.objective(&point)?;

        point[index] = params[index] - epsilon;
        let minus = self.objective(&point)?;

        trace!(index, plus, minus, "central difference");
        Ok(0.5 * ((plus - minus) / epsilon))
    }

    /// The model's analytic gradient over all of its parameters.
    pub(super) fn full_gradient(&self) -> Result<Array1<f64>, Error> {
        let gradient = self.model.gradient();
        let expected = self.model.parameter_count();
        if gradient.len() != expected {
            return Err(Error::GradientLength {
                expected,
                actual: gradient.len(),
            });
        }
        Ok(gradient)
    }
}
