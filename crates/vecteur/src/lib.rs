//! vecteur: fixed-dimension floating-point vectors.
//!
//! The crate provides a single owned vector type with in-place scalar and
//! vector arithmetic, dot and cross products, and predicates (equality,
//! orthogonality, collinearity, coplanarity) that compare floating-point
//! values within an absolute tolerance.
//!
//! Fallible operations return [`error::VectorError`]. The comparison
//! tolerance defaults to [`math::EPSILON`] and can be overridden per call
//! with a [`config::Tolerance`].
pub mod config;
pub mod error;
pub mod math;

pub use error::{Result, VectorError};
pub use math::{approximately_equal, Vector, EPSILON};
