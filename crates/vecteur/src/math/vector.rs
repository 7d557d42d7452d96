use std::fmt;
use std::ops::Index;
use std::slice::Iter;

use crate::config::{CollinearityMethod, Tolerance};
use crate::error::{Result, VectorError};

const MIN_DIMENSION: usize = 2;

/// An owned vector of `f64` components with a fixed dimension of at least 2.
///
/// The dimension is set at construction and never changes; components can be
/// mutated in place. Index 0 is the X component and index 1 the Y component.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    components: Vec<f64>,
}

impl Vector {
    /// Builds a vector holding a copy of `values`.
    ///
    /// Fails with [`VectorError::InvalidDimension`] when fewer than two values
    /// are given.
    pub fn from_components(values: &[f64]) -> Result<Self> {
        check_dimension(values.len())?;
        Ok(Self {
            components: values.to_vec(),
        })
    }

    /// Builds a zero vector of the given dimension.
    pub fn with_dimension(dimension: usize) -> Result<Self> {
        check_dimension(dimension)?;
        Ok(Self {
            components: vec![0.0; dimension],
        })
    }

    /// Deep copy of `other`; the two vectors share no storage.
    pub fn copy_of(other: &Vector) -> Self {
        Self {
            components: other.components.clone(),
        }
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    pub fn component(&self, index: usize) -> Result<f64> {
        self.components
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfRange {
                index,
                dimension: self.dimension(),
            })
    }

    pub fn set_component(&mut self, index: usize, value: f64) -> Result<()> {
        let dimension = self.dimension();
        match self.components.get_mut(index) {
            Some(component) => {
                *component = value;
                Ok(())
            }
            None => Err(VectorError::IndexOutOfRange { index, dimension }),
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.components[0]
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.components[1]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.components
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.components.iter()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.components
    }

    /// Multiplies every component by `factor`, in place.
    pub fn scale(&mut self, factor: f64) {
        for component in self.components.iter_mut() {
            *component *= factor;
        }
    }

    /// Divides every component by `divisor`, in place.
    ///
    /// A zero divisor is not rejected: the components become infinite (or NaN
    /// for zero components) following IEEE-754 arithmetic.
    pub fn scale_inverse(&mut self, divisor: f64) {
        if divisor == 0.0 {
            log::warn!(
                "Dividing a {}-dimensional vector by zero; components become non-finite",
                self.dimension()
            );
        }
        self.scale(1.0 / divisor);
    }

    pub fn squared_norm(&self) -> f64 {
        self.components.iter().map(|c| c * c).sum()
    }

    /// Euclidean norm.
    pub fn norm(&self) -> f64 {
        self.squared_norm().sqrt()
    }

    /// Rescales the vector to unit norm. A vector whose norm is exactly zero
    /// is left untouched.
    pub fn normalize(&mut self) {
        let norm = self.norm();
        if norm == 0.0 {
            log::trace!("Skipping normalization of a zero vector");
            return;
        }
        self.scale_inverse(norm);
    }

    /// Component-wise sum, accumulated into `self`.
    pub fn add(&mut self, other: &Vector) -> Result<()> {
        check_same_dimension(self, other)?;
        for (lhs, rhs) in self.components.iter_mut().zip(other.components.iter()) {
            *lhs += rhs;
        }
        Ok(())
    }

    pub fn dot(&self, other: &Vector) -> Result<f64> {
        check_same_dimension(self, other)?;
        Ok(self
            .components
            .iter()
            .zip(other.components.iter())
            .fold(0.0, |dot, (&lhs, &rhs)| dot + lhs * rhs))
    }

    /// Cross product of two 3-dimensional vectors.
    ///
    /// Returns `None` when either operand is not 3-dimensional.
    pub fn cross_3d(&self, other: &Vector) -> Option<Vector> {
        if self.dimension() != 3 || other.dimension() != 3 {
            log::trace!(
                "Cross product undefined for dimensions {} and {}",
                self.dimension(),
                other.dimension()
            );
            return None;
        }
        let (x1, y1, z1) = (self[0], self[1], self[2]);
        let (x2, y2, z2) = (other[0], other[1], other[2]);
        Some(Vector {
            components: vec![y1 * z2 - y2 * z1, z1 * x2 - x1 * z2, x1 * y2 - x2 * y1],
        })
    }

    /// Component-wise equality within the default tolerance.
    pub fn equals(&self, other: &Vector) -> Result<bool> {
        self.equals_with(other, Tolerance::default())
    }

    pub fn equals_with(&self, other: &Vector, tolerance: Tolerance) -> Result<bool> {
        check_same_dimension(self, other)?;
        Ok(self
            .components
            .iter()
            .zip(other.components.iter())
            .all(|(&lhs, &rhs)| tolerance.approx_eq(lhs, rhs)))
    }

    pub fn is_zero(&self) -> bool {
        self.is_zero_with(Tolerance::default())
    }

    pub fn is_zero_with(&self, tolerance: Tolerance) -> bool {
        self.components.iter().all(|&c| tolerance.approx_eq(c, 0.0))
    }

    pub fn is_orthogonal(&self, other: &Vector) -> Result<bool> {
        self.is_orthogonal_with(other, Tolerance::default())
    }

    pub fn is_orthogonal_with(&self, other: &Vector, tolerance: Tolerance) -> Result<bool> {
        Ok(tolerance.approx_eq(0.0, self.dot(other)?))
    }

    /// True when the angle between the vectors is 0° or 180°. A zero vector is
    /// collinear with every vector of the same dimension.
    pub fn is_collinear(&self, other: &Vector) -> Result<bool> {
        self.is_collinear_with(other, Tolerance::default(), CollinearityMethod::default())
    }

    pub fn is_collinear_with(
        &self,
        other: &Vector,
        tolerance: Tolerance,
        method: CollinearityMethod,
    ) -> Result<bool> {
        check_same_dimension(self, other)?;
        if self.is_zero_with(tolerance) || other.is_zero_with(tolerance) {
            return Ok(true);
        }
        match method {
            CollinearityMethod::CauchySchwarz => Ok(tolerance
                .approx_eq(self.dot(other)?.abs(), self.norm() * other.norm())),
            CollinearityMethod::ComponentRatio => {
                let ratio = self
                    .iter()
                    .zip(other.iter())
                    .find(|&(_, &rhs)| rhs != 0.0)
                    .map(|(&lhs, &rhs)| lhs / rhs)
                    .unwrap_or(0.0);
                let mut scaled = Vector::copy_of(other);
                scaled.scale(ratio);
                self.equals_with(&scaled, tolerance)
            }
        }
    }

    /// Whether `self` lies in the plane spanned by `other1` and `other2`,
    /// tested as orthogonality to their cross product.
    ///
    /// `Ok(None)` when `other1` or `other2` is not 3-dimensional; fails with
    /// [`VectorError::DimensionMismatch`] when `self` is not.
    pub fn is_coplanar_3d(&self, other1: &Vector, other2: &Vector) -> Result<Option<bool>> {
        self.is_coplanar_3d_with(other1, other2, Tolerance::default())
    }

    pub fn is_coplanar_3d_with(
        &self,
        other1: &Vector,
        other2: &Vector,
        tolerance: Tolerance,
    ) -> Result<Option<bool>> {
        other1
            .cross_3d(other2)
            .map(|normal| self.is_orthogonal_with(&normal, tolerance))
            .transpose()
    }
}

fn check_dimension(dimension: usize) -> Result<()> {
    if dimension < MIN_DIMENSION {
        log::debug!("Rejecting vector of dimension {}", dimension);
        return Err(VectorError::InvalidDimension { dimension });
    }
    Ok(())
}

fn check_same_dimension(lhs: &Vector, rhs: &Vector) -> Result<()> {
    if lhs.dimension() != rhs.dimension() {
        log::debug!(
            "Dimension mismatch: {} vs {}",
            lhs.dimension(),
            rhs.dimension()
        );
        return Err(VectorError::DimensionMismatch {
            left: lhs.dimension(),
            right: rhs.dimension(),
        });
    }
    Ok(())
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = VectorError;

    fn try_from(components: Vec<f64>) -> Result<Self> {
        check_dimension(components.len())?;
        Ok(Self { components })
    }
}

impl TryFrom<&[f64]> for Vector {
    type Error = VectorError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Vector::from_components(values)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(value: Vector) -> Self {
        value.components
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, component) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", component)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_dimension_boundary() {
        assert_eq!(
            check_dimension(1),
            Err(VectorError::InvalidDimension { dimension: 1 })
        );
        assert!(check_dimension(2).is_ok());
    }

    #[test]
    fn test_ratio_uses_first_nonzero_component_of_other() {
        let a = Vector::from_components(&[0.0, 3.0, 6.0]).unwrap();
        let b = Vector::from_components(&[0.0, 1.0, 2.0]).unwrap();
        assert!(a
            .is_collinear_with(&b, Tolerance::default(), CollinearityMethod::ComponentRatio)
            .unwrap());
    }
}
