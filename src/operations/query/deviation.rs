use crate::error::Result;
use crate::geometry::{CompositePath, FourierSeries, ParametricCurve};
use crate::math::to_complex;
use crate::tessellation::sample_times;

/// Mean squared distance between a series and the path it approximates.
///
/// Both are sampled at the same `samples` evenly spaced global times over
/// `[0, T]`, ends included.
pub struct MeanSquaredDeviation<'a> {
    series: &'a FourierSeries,
    path: &'a CompositePath,
    samples: usize,
}

impl<'a> MeanSquaredDeviation<'a> {
    /// Creates a new `MeanSquaredDeviation` query.
    #[must_use]
    pub fn new(series: &'a FourierSeries, path: &'a CompositePath, samples: usize) -> Self {
        Self {
            series,
            path,
            samples,
        }
    }

    /// Executes the query. Zero samples give a deviation of zero.
    ///
    /// # Errors
    ///
    /// Returns an error if path evaluation fails.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<f64> {
        if self.samples == 0 {
            return Ok(0.0);
        }
        let mut total = 0.0;
        for t in sample_times(self.path.period(), self.samples) {
            let on_path = to_complex(&self.path.evaluate(t)?);
            total += (self.series.value_at(t) - on_path).norm_sqr();
        }
        Ok(total / self.samples as f64)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Segment;
    use crate::math::Point2;
    use crate::operations::fourier::ComputeSeries;

    #[test]
    fn constant_series_deviation_of_unit_line() {
        // z(t) = t against its mean 1/2: ∫₀¹ (t - ½)² dt = 1/12
        let path = CompositePath::new(vec![
            Segment::line(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)).unwrap(),
        ])
        .unwrap();
        let series = ComputeSeries::new(&path, 0).execute().unwrap();
        let mse = MeanSquaredDeviation::new(&series, &path, 10_001).execute().unwrap();
        assert!((mse - 1.0 / 12.0).abs() < 1e-4, "mse={mse}");
    }

    #[test]
    fn zero_samples() {
        let path = CompositePath::new(vec![
            Segment::line(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)).unwrap(),
        ])
        .unwrap();
        let series = ComputeSeries::new(&path, 1).execute().unwrap();
        let mse = MeanSquaredDeviation::new(&series, &path, 0).execute().unwrap();
        assert!(mse.abs() < f64::EPSILON);
    }
}
