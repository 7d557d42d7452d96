use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use crate::math::EPSILON;

/// Absolute tolerance used when comparing floating-point values.
///
/// The epsilon is always finite and strictly positive, whether the value
/// comes from [`Tolerance::new`], [`FromStr`] or deserialization.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    #[serde(deserialize_with = "deserialize_epsilon")]
    epsilon: f64,
}

impl Tolerance {
    /// Returns `None` unless `epsilon` is finite and strictly positive.
    pub fn new(epsilon: f64) -> Option<Self> {
        if epsilon.is_finite() && epsilon > 0.0 {
            Some(Self { epsilon })
        } else {
            None
        }
    }

    #[inline]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    #[inline]
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.epsilon
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { epsilon: EPSILON }
    }
}

impl FromStr for Tolerance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let epsilon: f64 = s
            .trim()
            .parse()
            .map_err(|e| format!("Invalid tolerance '{}': {}", s, e))?;
        Tolerance::new(epsilon).ok_or_else(|| invalid_epsilon(s))
    }
}

fn deserialize_epsilon<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let epsilon = f64::deserialize(deserializer)?;
    Tolerance::new(epsilon)
        .map(|tolerance| tolerance.epsilon)
        .ok_or_else(|| D::Error::custom(invalid_epsilon(&epsilon.to_string())))
}

fn invalid_epsilon(value: &str) -> String {
    format!(
        "Invalid tolerance '{}': epsilon must be finite and greater than 0",
        value
    )
}

/// Strategy used to decide whether two vectors are collinear.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollinearityMethod {
    /// `|a·b| ≈ |a||b|`, i.e. the angle between the vectors is 0° or 180°.
    #[default]
    CauchySchwarz,
    /// Scale `other` by the ratio of the first component where `other` is
    /// non-zero and compare the result with `self`.
    ///
    /// Less robust than [`CollinearityMethod::CauchySchwarz`]: when `other`
    /// has a component that is only approximately zero where `self` is exactly
    /// zero, the ratio is taken from that component and nearly parallel
    /// vectors are reported as not collinear.
    ComponentRatio,
}

impl FromStr for CollinearityMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cauchy-schwarz" | "cauchy_schwarz" | "cauchyschwarz" => {
                Ok(CollinearityMethod::CauchySchwarz)
            }
            "ratio" | "component-ratio" | "component_ratio" | "componentratio" => {
                Ok(CollinearityMethod::ComponentRatio)
            }
            _ => Err(format!(
                "Unknown collinearity method: {}. Expected `cauchy-schwarz` or `ratio`",
                s
            )),
        }
    }
}
