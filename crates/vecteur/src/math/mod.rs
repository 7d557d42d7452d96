//! Owned floating-point vector type and the shared comparison helper.
//!
//! Every predicate on [`Vector`] compares components with an absolute
//! tolerance; [`EPSILON`] is the process-wide default.
pub mod vector;

pub use vector::Vector;

use crate::config::Tolerance;

/// Default absolute tolerance for floating-point comparisons.
pub const EPSILON: f64 = 1e-11;

/// `|a - b| < EPSILON`.
#[inline]
pub fn approximately_equal(a: f64, b: f64) -> bool {
    Tolerance::default().approx_eq(a, b)
}
