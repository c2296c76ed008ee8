use ndarray::Array1;

/// Dense parameter and gradient vector used throughout the framework.
pub type Vector = Array1<f64>;

/// A model whose parameters can be trained against a scalar objective.
///
/// The objective and gradient are always evaluated at the parameters most
/// recently installed with [`set_parameters`](Trainable::set_parameters).
/// Trainers never hold on to a parameter vector across calls; they read and
/// write it exclusively through this trait.
pub trait Trainable {
    /// Returns the objective at the current parameters.
    fn objective(&self) -> f64;

    /// Returns the analytic gradient of the objective at the current
    /// parameters.
    ///
    /// The returned vector has the same length as [`parameters`](Trainable::parameters).
    fn gradient(&self) -> Vector;

    /// Returns the full parameter vector.
    fn parameters(&self) -> Vector;

    /// Installs a new full parameter vector.
    ///
    /// Callers must pass a vector whose length equals the model's parameter
    /// count. Implementations may panic otherwise.
    fn set_parameters(&mut self, params: &Vector);

    /// Returns the number of parameters.
    fn parameter_count(&self) -> usize {
        self.parameters().len()
    }
}

/// Lets a trainer borrow a model rather than take ownership of it.
impl<T: Trainable + ?Sized> Trainable for &mut T {
    fn objective(&self) -> f64 {
        (**self).objective()
    }

    fn gradient(&self) -> Vector {
        (**self).gradient()
    }

    fn parameters(&self) -> Vector {
        (**self).parameters()
    }

    fn set_parameters(&mut self, params: &Vector) {
        (**self).set_parameters(params);
    }

    fn parameter_count(&self) -> usize {
        (**self).parameter_count()
    }
}
