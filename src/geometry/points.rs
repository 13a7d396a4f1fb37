use crate::math::{to_complex, Complex, Point2};

/// An ordered sequence of 2D points.
///
/// Used both as interpolation input (one segment's control points) and as
/// the output of sampling a path or series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointSequence {
    points: Vec<Point2>,
}

impl PointSequence {
    /// Creates a sequence from points.
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Creates a sequence from `(x, y)` pairs.
    #[must_use]
    pub fn from_xy(pairs: &[(f64, f64)]) -> Self {
        Self {
            points: pairs.iter().map(|&(x, y)| Point2::new(x, y)).collect(),
        }
    }

    /// Returns the points.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Consumes the sequence, returning its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Point2> {
        self.points.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Point2> {
        self.points.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point2> {
        self.points.iter()
    }

    /// Returns the `x` coordinates.
    #[must_use]
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// Returns the `y` coordinates.
    #[must_use]
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }

    /// Returns the points as complex numbers `x + i·y`.
    #[must_use]
    pub fn to_complex(&self) -> Vec<Complex> {
        self.points.iter().map(to_complex).collect()
    }
}

impl From<Vec<Point2>> for PointSequence {
    fn from(points: Vec<Point2>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point2> for PointSequence {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PointSequence {
    type Item = &'a Point2;
    type IntoIter = std::slice::Iter<'a, Point2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
