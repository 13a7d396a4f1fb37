use crate::error::{PathError, Result};
use crate::geometry::{CompositePath, PointSequence, Segment};
use crate::math::{Point2, TOLERANCE};

/// Incrementally draws a path, each new segment starting where the previous
/// one ended.
///
/// Mirrors an editor's add-line / add-curve / delete-last workflow.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    start: Option<Point2>,
    segments: Vec<Segment>,
}

impl PathBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder whose first segment starts at `start`.
    #[must_use]
    pub fn starting_at(start: Point2) -> Self {
        Self {
            start: Some(start),
            segments: Vec::new(),
        }
    }

    /// Returns the point the next chained segment starts from.
    #[must_use]
    pub fn current_point(&self) -> Option<Point2> {
        self.segments
            .last()
            .map(Segment::end_point)
            .or(self.start)
    }

    /// Appends a line from the current point to `to`. With no current point
    /// `to` becomes the start point and nothing is drawn.
    ///
    /// # Errors
    ///
    /// Returns an error if segment interpolation fails.
    pub fn line_to(&mut self, to: Point2) -> Result<&mut Self> {
        match self.current_point() {
            Some(from) => self.segments.push(Segment::line(from, to)?),
            None => self.start = Some(to),
        }
        Ok(self)
    }

    /// Appends a curve from the current point through `points`.
    ///
    /// Without a current point the first of `points` starts the curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve would have fewer than 2 points.
    pub fn curve_through(&mut self, points: &[Point2]) -> Result<&mut Self> {
        let mut control = Vec::with_capacity(points.len() + 1);
        control.extend(self.current_point());
        control.extend_from_slice(points);
        self.segments.push(Segment::new(PointSequence::new(control))?);
        Ok(self)
    }

    /// Appends a free segment that is not chained to the current point.
    ///
    /// # Errors
    ///
    /// Returns an error if `points` has fewer than 2 points.
    pub fn segment(&mut self, points: PointSequence) -> Result<&mut Self> {
        self.segments.push(Segment::new(points)?);
        Ok(self)
    }

    /// Draws a line back to the first point if the path is open.
    ///
    /// # Errors
    ///
    /// Returns an error if segment interpolation fails.
    pub fn close(&mut self) -> Result<&mut Self> {
        let first = self.segments.first().map(Segment::start_point).or(self.start);
        if let (Some(first), Some(current)) = (first, self.current_point()) {
            if (current - first).norm() > TOLERANCE {
                self.segments.push(Segment::line(current, first)?);
            }
        }
        Ok(self)
    }

    /// Removes and returns the last segment.
    pub fn pop(&mut self) -> Option<Segment> {
        self.segments.pop()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Assembles the drawn segments.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::EmptyBuilder`] if nothing was drawn.
    pub fn build(&self) -> Result<CompositePath> {
        if self.segments.is_empty() {
            return Err(PathError::EmptyBuilder.into());
        }
        CompositePath::new(self.segments.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{ParametricCurve, SegmentKind};
    use approx::assert_abs_diff_eq;

    #[test]
    fn chained_segments_are_continuous() {
        let mut builder = PathBuilder::starting_at(Point2::new(0.0, 0.0));
        builder
            .line_to(Point2::new(1.0, 0.0))
            .unwrap()
            .curve_through(&[Point2::new(1.2, 0.5), Point2::new(1.0, 1.0)])
            .unwrap()
            .close()
            .unwrap();
        let path = builder.build().unwrap();
        assert_eq!(path.segments().len(), 3);
        assert_eq!(path.segments()[1].kind(), SegmentKind::Curve);
        assert!(path.is_continuous());
        assert!(path.is_closed());
        assert_abs_diff_eq!(path.period(), 4.0);
    }

    #[test]
    fn first_line_to_sets_start() {
        let mut builder = PathBuilder::new();
        builder.line_to(Point2::new(0.5, 0.5)).unwrap();
        assert!(builder.is_empty());
        builder.line_to(Point2::new(1.0, 0.5)).unwrap();
        assert_eq!(builder.len(), 1);
        let path = builder.build().unwrap();
        assert_abs_diff_eq!(path.evaluate(0.0).unwrap(), Point2::new(0.5, 0.5), epsilon = 1e-12);
    }

    #[test]
    fn pop_removes_last_segment() {
        let mut builder = PathBuilder::starting_at(Point2::origin());
        builder.line_to(Point2::new(1.0, 0.0)).unwrap();
        builder.line_to(Point2::new(1.0, 1.0)).unwrap();
        let last = builder.pop().unwrap();
        assert_abs_diff_eq!(last.end_point(), Point2::new(1.0, 1.0), epsilon = 1e-12);
        assert_abs_diff_eq!(
            builder.current_point().unwrap(),
            Point2::new(1.0, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn free_segment_may_jump() {
        let mut builder = PathBuilder::starting_at(Point2::origin());
        builder.line_to(Point2::new(1.0, 0.0)).unwrap();
        builder
            .segment(PointSequence::from_xy(&[(3.0, 3.0), (4.0, 3.0)]))
            .unwrap();
        let path = builder.build().unwrap();
        assert_eq!(path.discontinuities(), vec![0]);
    }

    #[test]
    fn close_on_closed_path_adds_nothing() {
        let mut builder = PathBuilder::starting_at(Point2::origin());
        builder
            .curve_through(&[Point2::new(1.0, 0.0), Point2::new(1.0, 1.0), Point2::origin()])
            .unwrap()
            .close()
            .unwrap();
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn empty_builder_fails() {
        let err = PathBuilder::new().build().unwrap_err();
        assert!(err.is_empty_path());
    }

    #[test]
    fn lone_curve_point_fails() {
        let mut builder = PathBuilder::new();
        assert!(builder.curve_through(&[Point2::new(1.0, 1.0)]).is_err());
    }
}
