use std::error::Error;
use std::fmt;

/// Errors raised by vector construction, component access and binary operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// A vector was requested with fewer than two components.
    InvalidDimension { dimension: usize },
    /// A component index outside `[0, dimension)`.
    IndexOutOfRange { index: usize, dimension: usize },
    /// A binary operation between vectors of different dimensions.
    DimensionMismatch { left: usize, right: usize },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VectorError::InvalidDimension { dimension } => write!(
                f,
                "Vector dimension must be at least 2, got {}",
                dimension
            ),
            VectorError::IndexOutOfRange { index, dimension } => write!(
                f,
                "Component index {} out of range for dimension {}",
                index, dimension
            ),
            VectorError::DimensionMismatch { left, right } => write!(
                f,
                "Both vectors must have the same dimension ({} != {})",
                left, right
            ),
        }
    }
}

impl Error for VectorError {}

pub type Result<T> = std::result::Result<T, VectorError>;
