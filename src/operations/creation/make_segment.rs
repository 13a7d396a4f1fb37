use crate::error::Result;
use crate::geometry::{PointSequence, Segment};

/// Creates a segment from a snapshot of control points.
pub struct MakeSegment {
    points: PointSequence,
}

impl MakeSegment {
    /// Creates a new `MakeSegment` operation.
    #[must_use]
    pub fn new(points: PointSequence) -> Self {
        Self { points }
    }

    /// Executes the operation, interpolating `x` and `y` against local times
    /// `0, 1, …, n - 1`.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 points were given.
    pub fn execute(&self) -> Result<Segment> {
        Segment::new(self.points.clone())
    }
}
