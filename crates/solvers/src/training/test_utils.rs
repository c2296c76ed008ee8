use ndarray::{Array1, Array2};
use tangent_core::Trainable;

/// f(p) = Σ (p_i - t_i)².
#[derive(Debug)]
pub(super) struct SquaredDistance {
    pub(super) params: Array1<f64>,
    pub(super) target: Array1<f64>,
}

impl SquaredDistance {
    pub(super) fn new(params: Array1<f64>, target: Array1<f64>) -> Self {
        assert_eq!(params.len(), target.len());
        Self { params, target }
    }
}

impl Trainable for SquaredDistance {
    fn objective(&self) -> f64 {
        (&self.params - &self.target).mapv(|d| d * d).sum()
    }

    fn gradient(&self) -> Array1<f64> {
        (&self.params - &self.target) * 2.0
    }

    fn parameters(&self) -> Array1<f64> {
        self.params.clone()
    }

    fn set_parameters(&mut self, params: &Array1<f64>) {
        assert_eq!(params.len(), self.params.len());
        self.params.assign(params);
    }
}

/// f(p) = ½ pᵀAp - bᵀp with symmetric `A`.
#[derive(Debug)]
pub(super) struct QuadraticForm {
    pub(super) params: Array1<f64>,
    pub(super) a: Array2<f64>,
    pub(super) b: Array1<f64>,
}

impl Trainable for QuadraticForm {
    fn objective(&self) -> f64 {
        0.5 * self.params.dot(&self.a.dot(&self.params)) - self.b.dot(&self.params)
    }

    fn gradient(&self) -> Array1<f64> {
        self.a.dot(&self.params) - &self.b
    }

    fn parameters(&self) -> Array1<f64> {
        self.params.clone()
    }

    fn set_parameters(&mut self, params: &Array1<f64>) {
        assert_eq!(params.len(), self.params.len());
        self.params.assign(params);
    }
}

/// Wraps a model and reports a gradient scaled by `scale`.
#[derive(Debug)]
pub(super) struct ScaledGradient<M> {
    pub(super) inner: M,
    pub(super) scale: f64,
}

impl<M: Trainable> Trainable for ScaledGradient<M> {
    fn objective(&self) -> f64 {
        self.inner.objective()
    }

    fn gradient(&self) -> Array1<f64> {
        self.inner.gradient() * self.scale
    }

    fn parameters(&self) -> Array1<f64> {
        self.inner.parameters()
    }

    fn set_parameters(&mut self, params: &Array1<f64>) {
        self.inner.set_parameters(params);
    }
}
