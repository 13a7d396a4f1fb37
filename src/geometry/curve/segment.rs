use crate::error::Result;
use crate::geometry::PointSequence;
use crate::math::{interpolate, to_point, Complex, Point2, Polynomial, Vector2, TOLERANCE};

use super::{CurveDomain, ParametricCurve};

/// How a segment was drawn. Both kinds share one model once interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Two control points, degree-1 polynomial.
    Line,
    /// Three or more control points.
    Curve,
}

/// One drawn line or curve as a complex polynomial of local time.
///
/// Control point `i` sits at local time `i`, so `z(t) = x(t) + i·y(t)`
/// is defined over `[0, n - 1]` for `n` control points.
#[derive(Debug, Clone)]
pub struct Segment {
    points: PointSequence,
    x: Polynomial<f64>,
    y: Polynomial<f64>,
    z: Polynomial<Complex>,
    dz: Polynomial<Complex>,
}

impl Segment {
    /// Interpolates a segment through a snapshot of `points`.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 points are given.
    pub fn new(points: PointSequence) -> Result<Self> {
        let times = local_times(points.len());
        let x = interpolate(&times, &points.xs())?;
        let y = interpolate(&times, &points.ys())?;
        let z = Polynomial::from_components(&x, &y);
        let dz = z.differentiate();
        Ok(Self {
            points,
            x,
            y,
            z,
            dz,
        })
    }

    /// Creates a 2-point line segment.
    ///
    /// # Errors
    ///
    /// Does not fail for finite input; kept fallible to share the
    /// interpolation path.
    pub fn line(start: Point2, end: Point2) -> Result<Self> {
        Self::new(PointSequence::new(vec![start, end]))
    }

    /// Returns the control points the segment was built from.
    #[must_use]
    pub fn points(&self) -> &PointSequence {
        &self.points
    }

    #[must_use]
    pub fn kind(&self) -> SegmentKind {
        if self.points.len() == 2 {
            SegmentKind::Line
        } else {
            SegmentKind::Curve
        }
    }

    /// Returns the local time span, `points.len() - 1`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn duration(&self) -> f64 {
        (self.points.len() - 1) as f64
    }

    /// Returns `z(t) = x(t) + i·y(t)`.
    #[must_use]
    pub fn complex_polynomial(&self) -> &Polynomial<Complex> {
        &self.z
    }

    #[must_use]
    pub fn x_polynomial(&self) -> &Polynomial<f64> {
        &self.x
    }

    #[must_use]
    pub fn y_polynomial(&self) -> &Polynomial<f64> {
        &self.y
    }

    /// Returns `z'(t)`.
    #[must_use]
    pub fn velocity_polynomial(&self) -> &Polynomial<Complex> {
        &self.dz
    }

    /// Returns `|z'(t)|`.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is outside `[0, duration]`.
    pub fn speed(&self, t: f64) -> Result<f64> {
        Ok(self.derivative(t)?.norm())
    }

    /// Returns the curve's value at local time 0.
    #[must_use]
    pub fn start_point(&self) -> Point2 {
        to_point(self.z.sample(0.0))
    }

    /// Returns the curve's value at local time `duration`.
    #[must_use]
    pub fn end_point(&self) -> Point2 {
        to_point(self.z.sample(self.duration()))
    }
}

impl ParametricCurve for Segment {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        self.domain().check(t)?;
        Ok(to_point(self.z.sample(t)))
    }

    fn derivative(&self, t: f64) -> Result<Vector2> {
        self.domain().check(t)?;
        let v = self.dz.sample(t);
        Ok(Vector2::new(v.re, v.im))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, self.duration())
    }

    fn is_closed(&self) -> bool {
        (self.end_point() - self.start_point()).norm() < TOLERANCE
    }
}

#[allow(clippy::cast_precision_loss)]
fn local_times(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}
