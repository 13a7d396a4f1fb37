use crate::geometry::{CompositePath, PointSequence};
use crate::math::to_point;

use super::{sample_times, TessellationParams};

/// Tessellates a composite path into a polyline for preview drawing.
pub struct TessellatePath<'a> {
    path: &'a CompositePath,
    params: TessellationParams,
}

impl<'a> TessellatePath<'a> {
    /// Creates a new `TessellatePath` operation.
    #[must_use]
    pub fn new(path: &'a CompositePath, params: TessellationParams) -> Self {
        Self { path, params }
    }

    /// Executes the tessellation.
    ///
    /// Each segment contributes `samples_per_segment` points evenly spaced in
    /// its local time, ends included, so chained segments repeat their joint.
    #[must_use]
    pub fn execute(&self) -> PointSequence {
        self.path
            .segments()
            .iter()
            .flat_map(|segment| {
                let z = segment.complex_polynomial();
                sample_times(segment.duration(), self.params.samples_per_segment)
                    .into_iter()
                    .map(move |t| to_point(z.sample(t)))
            })
            .collect()
    }
}
