//! Core traits for the Tangent training framework.
//!
//! This crate defines the abstraction that trainers build on:
//!
//! - [`Trainable`] — a model that exposes a scalar objective, its gradient,
//!   and a mutable parameter vector
//!
//! Parameter vectors and gradients are [`ndarray::Array1<f64>`], re-exported
//! here as [`Vector`].

mod trainable;

pub use trainable::{Trainable, Vector};
