use std::f64::consts::TAU;

use tracing::{debug, trace};

use crate::error::{Result, SeriesError};
use crate::geometry::{CompositePath, FourierSeries};
use crate::math::Complex;

use super::integrate::{harmonic_integral, mean_integral};
use super::SeriesParams;

/// Computes the truncated Fourier series of a composite path.
///
/// Every coefficient is an exact integral of the path's polynomial segments;
/// no quadrature is involved.
pub struct ComputeSeries<'a> {
    path: &'a CompositePath,
    num_orders: i64,
}

impl<'a> ComputeSeries<'a> {
    /// Creates a new `ComputeSeries` operation for orders `-num_orders..=num_orders`.
    #[must_use]
    pub fn new(path: &'a CompositePath, num_orders: i64) -> Self {
        Self { path, num_orders }
    }

    /// Creates the operation with the order count from `params`.
    #[must_use]
    pub fn with_params(path: &'a CompositePath, params: SeriesParams) -> Self {
        Self::new(path, params.num_orders)
    }

    /// Executes the operation, returning `2·N + 1` coefficients.
    ///
    /// For `k = 0` the coefficient is the path's mean. For `k ≠ 0` each
    /// segment contributes `∫ z(t_local)·exp(-i·2πk·t_global/T) dt_local`.
    /// All sums are divided by `T`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::InvalidOrderCount`] if `num_orders` is negative.
    pub fn execute(&self) -> Result<FourierSeries> {
        let n = usize::try_from(self.num_orders)
            .map_err(|_| SeriesError::InvalidOrderCount(self.num_orders))?;
        let period = self.path.period();

        let coefficients: Vec<Complex> = (-self.num_orders..=self.num_orders)
            .map(|k| self.coefficient(k, period))
            .collect();

        debug!(
            segments = self.path.segments().len(),
            period,
            num_orders = n,
            "computed Fourier series"
        );
        Ok(FourierSeries::from_coefficients(period, coefficients))
    }

    #[allow(clippy::cast_precision_loss)]
    fn coefficient(&self, k: i64, period: f64) -> Complex {
        let integral: Complex = if k == 0 {
            self.path.segments().iter().map(mean_integral).sum()
        } else {
            // exp(-i·2πk·t/T) = exp(-i·t/a)
            let a = period / (TAU * k as f64);
            self.path
                .iter()
                .map(|(offset, segment)| harmonic_integral(segment, offset, a))
                .sum()
        };
        trace!(order = k, re = integral.re, im = integral.im, "order integrated");
        integral / period
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{ParametricCurve, PointSequence, Segment};
    use crate::math::Point2;
    use approx::assert_abs_diff_eq;

    fn unit_line() -> CompositePath {
        CompositePath::new(vec![
            Segment::line(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)).unwrap(),
        ])
        .unwrap()
    }

    fn square() -> CompositePath {
        let corners = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
        let segments = (0..4)
            .map(|i| {
                let (x0, y0) = corners[i];
                let (x1, y1) = corners[(i + 1) % 4];
                Segment::line(Point2::new(x0, y0), Point2::new(x1, y1)).unwrap()
            })
            .collect();
        CompositePath::new(segments).unwrap()
    }

    #[test]
    fn zero_orders_of_unit_line_is_its_mean() {
        let series = ComputeSeries::new(&unit_line(), 0).execute().unwrap();
        assert_eq!(series.coefficients().len(), 1);
        let c0 = series.coefficient(0).unwrap();
        assert_abs_diff_eq!(c0.re, 0.5, epsilon = 1e-15);
        assert_abs_diff_eq!(c0.im, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn unit_line_harmonics_are_i_over_2pik() {
        // ∫₀¹ t·exp(-i2πkt) dt = i/(2πk)
        let series = ComputeSeries::new(&unit_line(), 3).execute().unwrap();
        assert_eq!(series.coefficients().len(), 7);
        for k in [-3_i64, -2, -1, 1, 2, 3] {
            let c = series.coefficient(k).unwrap();
            assert_abs_diff_eq!(c.re, 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(c.im, 1.0 / (TAU * k as f64), epsilon = 1e-12);
        }
    }

    #[test]
    fn square_mean_is_center() {
        let series = ComputeSeries::new(&square(), 4).execute().unwrap();
        let c0 = series.coefficient(0).unwrap();
        assert_abs_diff_eq!(c0.re, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(c0.im, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(series.period(), 4.0);
    }

    #[test]
    fn square_symmetry_kills_even_orders() {
        // A square traversed at constant speed only has orders k ≡ 1 (mod 4)
        // besides the mean.
        let series = ComputeSeries::new(&square(), 6).execute().unwrap();
        for k in [-6_i64, -4, -2, -1, 2, 4, 6] {
            assert!(series.coefficient(k).unwrap().norm() < 1e-12, "k={k}");
        }
        for k in [-3_i64, 1, 5] {
            assert!(series.coefficient(k).unwrap().norm() > 1e-3, "k={k}");
        }
    }

    #[test]
    fn matches_quadrature_on_mixed_path() {
        let a = Point2::new(0.1, 0.2);
        let b = Point2::new(0.9, 0.3);
        let path = CompositePath::new(vec![
            Segment::line(a, b).unwrap(),
            Segment::new(PointSequence::new(vec![
                b,
                Point2::new(0.7, 0.8),
                Point2::new(0.4, 0.6),
                Point2::new(0.2, 0.9),
            ]))
            .unwrap(),
            Segment::line(Point2::new(0.2, 0.9), a).unwrap(),
        ])
        .unwrap();
        let series = ComputeSeries::new(&path, 5).execute().unwrap();
        let period = path.period();

        for k in -5_i64..=5 {
            let mut numeric = Complex::new(0.0, 0.0);
            let steps: u32 = 20_000;
            let h = period / f64::from(steps);
            // midpoint rule over the global axis
            for i in 0..steps {
                let t = h * (f64::from(i) + 0.5);
                let p = path.evaluate(t).unwrap();
                let z = Complex::new(p.x, p.y);
                numeric += z * Complex::from_polar(1.0, -TAU * k as f64 * t / period) * h;
            }
            numeric /= period;
            let exact = series.coefficient(k).unwrap();
            assert_abs_diff_eq!(exact.re, numeric.re, epsilon = 1e-5);
            assert_abs_diff_eq!(exact.im, numeric.im, epsilon = 1e-5);
        }
    }

    #[test]
    fn negative_order_count_fails() {
        let err = ComputeSeries::new(&unit_line(), -1).execute().unwrap_err();
        assert!(err.is_invalid_order_count());
    }

    #[test]
    fn truncating_equals_recomputing() {
        let path = square();
        let full = ComputeSeries::new(&path, 8).execute().unwrap();
        let low = ComputeSeries::new(&path, 3).execute().unwrap();
        let cut = full.truncated(3).unwrap();
        for (x, y) in cut.coefficients().iter().zip(low.coefficients()) {
            assert_abs_diff_eq!(x.re, y.re, epsilon = 1e-14);
            assert_abs_diff_eq!(x.im, y.im, epsilon = 1e-14);
        }
    }
}
