//! Line search and trainer session for Tangent models.
//!
//! # Modules
//!
//! - [`line_search`] — bracketing and Brent-style one-dimensional
//!   minimisation of a scalar function
//! - [`training`] — a [`Trainer`] session that drives a [`Trainable`] model:
//!   objective and gradient evaluation, parameter masking, line
//!   minimisation along a search direction, and gradient checking
//!
//! [`Trainable`]: tangent_core::Trainable
//! [`Trainer`]: training::Trainer

pub mod line_search;
pub mod training;
