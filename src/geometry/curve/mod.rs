mod composite;
mod segment;

pub use composite::CompositePath;
pub use segment::{Segment, SegmentKind};

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// Returns the length of the parameter range.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.t_max - self.t_min
    }

    /// Checks that `t` lies in the domain, allowing [`TOLERANCE`] slack at
    /// either end.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ParameterOutOfRange`] otherwise.
    pub fn check(&self, t: f64) -> Result<()> {
        if t < self.t_min - TOLERANCE || t > self.t_max + TOLERANCE || t.is_nan() {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t,
                min: self.t_min,
                max: self.t_max,
            }
            .into());
        }
        Ok(())
    }
}

/// Trait for parametric curves in the plane.
pub trait ParametricCurve {
    /// Evaluates the curve at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is out of range.
    fn evaluate(&self, t: f64) -> Result<Point2>;

    /// Computes the (unnormalized) derivative `dP/dt` at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter is out of range.
    fn derivative(&self, t: f64) -> Result<Vector2>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve ends where it starts.
    fn is_closed(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_accepts_bounds_with_slack() {
        let d = CurveDomain::new(0.0, 2.0);
        assert!(d.check(0.0).is_ok());
        assert!(d.check(2.0 + TOLERANCE * 0.5).is_ok());
        assert!(d.check(-0.1).is_err());
        assert!(d.check(f64::NAN).is_err());
        assert!((d.span() - 2.0).abs() < f64::EPSILON);
    }
}
