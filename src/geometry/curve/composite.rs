use crate::error::{PathError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

use super::{CurveDomain, ParametricCurve, Segment};

/// Ordered segments chained over one global time axis `[0, T]`.
///
/// Segment `i` starts at global time `offsets[i]`, the sum of the durations
/// before it. Endpoints are not forced to meet: a jump between segments is
/// a legal path.
#[derive(Debug, Clone)]
pub struct CompositePath {
    segments: Vec<Segment>,
    offsets: Vec<f64>,
    period: f64,
}

impl CompositePath {
    /// Assembles segments into a path.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::Empty`] if `segments` is empty.
    pub fn new(segments: Vec<Segment>) -> Result<Self> {
        if segments.is_empty() {
            return Err(PathError::Empty.into());
        }
        let mut offsets = Vec::with_capacity(segments.len());
        let mut period = 0.0;
        for segment in &segments {
            offsets.push(period);
            period += segment.duration();
        }
        Ok(Self {
            segments,
            offsets,
            period,
        })
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns each segment's global start time.
    #[must_use]
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    /// Returns the total duration `T`.
    #[must_use]
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Iterates `(global offset, segment)` pairs in path order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, &Segment)> {
        self.offsets.iter().copied().zip(&self.segments)
    }

    /// Maps global time `t` to `(segment index, local time)`.
    ///
    /// A joint time belongs to the segment that starts there; `T` itself
    /// belongs to the last segment.
    ///
    /// # Errors
    ///
    /// Returns an error if `t` is outside `[0, T]`.
    pub fn locate(&self, t: f64) -> Result<(usize, f64)> {
        self.domain().check(t)?;
        let index = self
            .offsets
            .partition_point(|&offset| offset <= t)
            .saturating_sub(1);
        let local = (t - self.offsets[index]).clamp(0.0, self.segments[index].duration());
        Ok((index, local))
    }

    /// Returns the indices `i` where segment `i` does not end at the start
    /// of segment `i + 1`.
    #[must_use]
    pub fn discontinuities(&self) -> Vec<usize> {
        self.segments
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| (pair[1].start_point() - pair[0].end_point()).norm() > TOLERANCE)
            .map(|(i, _)| i)
            .collect()
    }

    /// Returns whether every segment starts where the previous one ended.
    #[must_use]
    pub fn is_continuous(&self) -> bool {
        self.discontinuities().is_empty()
    }

    #[must_use]
    pub fn start_point(&self) -> Point2 {
        self.segments[0].start_point()
    }

    #[must_use]
    pub fn end_point(&self) -> Point2 {
        self.segments[self.segments.len() - 1].end_point()
    }
}

impl ParametricCurve for CompositePath {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        let (index, local) = self.locate(t)?;
        self.segments[index].evaluate(local)
    }

    fn derivative(&self, t: f64) -> Result<Vector2> {
        let (index, local) = self.locate(t)?;
        self.segments[index].derivative(local)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, self.period)
    }

    fn is_closed(&self) -> bool {
        (self.end_point() - self.start_point()).norm() < TOLERANCE
    }
}
