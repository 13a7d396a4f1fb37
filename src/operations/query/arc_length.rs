use crate::geometry::{CompositePath, Segment};

/// Computes the length of a composite path.
pub struct ArcLength<'a> {
    path: &'a CompositePath,
    intervals_per_segment: u32,
}

impl<'a> ArcLength<'a> {
    /// Creates a new `ArcLength` query with 64 Simpson intervals per segment.
    #[must_use]
    pub fn new(path: &'a CompositePath) -> Self {
        Self {
            path,
            intervals_per_segment: 64,
        }
    }

    /// Sets the number of Simpson intervals per segment, rounded up to even.
    #[must_use]
    pub fn with_intervals(mut self, intervals: u32) -> Self {
        self.intervals_per_segment = intervals.max(2).next_multiple_of(2);
        self
    }

    /// Executes the query, integrating `|z'(t)|` over every segment.
    ///
    /// A line is exact. Curves are approximated with Simpson's rule.
    #[must_use]
    pub fn execute(&self) -> f64 {
        self.path
            .segments()
            .iter()
            .map(|segment| segment_length(segment, self.intervals_per_segment))
            .sum()
    }
}

fn segment_length(segment: &Segment, intervals: u32) -> f64 {
    let velocity = segment.velocity_polynomial();
    let speed = |t: f64| velocity.sample(t).norm();
    let h = segment.duration() / f64::from(intervals);

    let mut sum = speed(0.0) + speed(segment.duration());
    for i in 1..intervals {
        let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
        sum += weight * speed(h * f64::from(i));
    }
    sum * h / 3.0
}
