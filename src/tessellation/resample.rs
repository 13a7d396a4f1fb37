use crate::geometry::{FourierSeries, PointSequence};
use crate::math::to_point;

use super::{sample_times, TessellationParams};

/// Regenerates points from a Fourier series.
pub struct ResampleSeries<'a> {
    series: &'a FourierSeries,
    num_samples: usize,
}

impl<'a> ResampleSeries<'a> {
    /// Creates a new `ResampleSeries` operation producing `num_samples` points.
    #[must_use]
    pub fn new(series: &'a FourierSeries, num_samples: usize) -> Self {
        Self {
            series,
            num_samples,
        }
    }

    /// Creates the operation with a density proportional to the number of
    /// segments in the source path.
    #[must_use]
    pub fn per_segment(
        series: &'a FourierSeries,
        segment_count: usize,
        params: TessellationParams,
    ) -> Self {
        Self::new(series, segment_count * params.series_samples_per_segment)
    }

    /// Executes the operation, evaluating the series at evenly spaced times
    /// over `[0, T]`, ends included.
    #[must_use]
    pub fn execute(&self) -> PointSequence {
        sample_times(self.series.period(), self.num_samples)
            .into_iter()
            .map(|t| to_point(self.series.value_at(t)))
            .collect()
    }
}
