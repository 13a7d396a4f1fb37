//! Truncated complex Fourier series of a closed parameter interval.

use std::f64::consts::TAU;

use crate::error::{Result, SeriesError};
use crate::geometry::curve::{CurveDomain, ParametricCurve};
use crate::math::{to_point, Complex, Point2, Vector2, TOLERANCE};

/// Coefficients `c_k` for orders `k ∈ [-N, N]` and the period `T`.
///
/// The series value at global time `t` is `Σ c_k·exp(i·2πk·t/T)`.
#[derive(Debug, Clone, PartialEq)]
pub struct FourierSeries {
    num_orders: usize,
    period: f64,
    coefficients: Vec<Complex>,
}

/// One rotating arm of the series: `radius·exp(i·(phase + 2π·frequency·t))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Epicycle {
    pub order: i64,
    pub radius: f64,
    pub phase: f64,
    /// Revolutions per unit time, `order / T`.
    pub frequency: f64,
}

impl Epicycle {
    /// Returns the arm's vector at global time `t`.
    #[must_use]
    pub fn value_at(&self, t: f64) -> Complex {
        Complex::from_polar(self.radius, self.phase + TAU * self.frequency * t)
    }
}

impl FourierSeries {
    /// Creates a series from an odd-length coefficient list ordered
    /// `-N, …, 0, …, N`.
    #[must_use]
    pub(crate) fn from_coefficients(period: f64, coefficients: Vec<Complex>) -> Self {
        debug_assert!(coefficients.len() % 2 == 1, "coefficients must be symmetric");
        Self {
            num_orders: coefficients.len() / 2,
            period,
            coefficients,
        }
    }

    /// Returns `N`, the highest harmonic order.
    #[must_use]
    pub fn num_orders(&self) -> usize {
        self.num_orders
    }

    /// Returns the period `T`.
    #[must_use]
    pub fn period(&self) -> f64 {
        self.period
    }

    /// Returns all coefficients ordered `-N, …, N`.
    #[must_use]
    pub fn coefficients(&self) -> &[Complex] {
        &self.coefficients
    }

    /// Returns the orders `-N..=N`.
    #[must_use]
    pub fn orders(&self) -> std::ops::RangeInclusive<i64> {
        let n = order_i64(self.num_orders);
        -n..=n
    }

    /// Returns the coefficient of order `k`, if `|k| ≤ N`.
    #[must_use]
    pub fn coefficient(&self, k: i64) -> Option<Complex> {
        let index = k.checked_add(order_i64(self.num_orders))?;
        usize::try_from(index)
            .ok()
            .and_then(|i| self.coefficients.get(i))
            .copied()
    }

    /// Iterates `(order, coefficient)` pairs from `-N` to `N`.
    pub fn iter(&self) -> impl Iterator<Item = (i64, Complex)> + '_ {
        self.orders().zip(self.coefficients.iter().copied())
    }

    /// Returns the lower-order series keeping orders `-m..=m`.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::OrderOutOfRange`] if `m > N`.
    pub fn truncated(&self, m: usize) -> Result<Self> {
        if m > self.num_orders {
            return Err(SeriesError::OrderOutOfRange {
                requested: m,
                available: self.num_orders,
            }
            .into());
        }
        let skip = self.num_orders - m;
        Ok(Self {
            num_orders: m,
            period: self.period,
            coefficients: self.coefficients[skip..skip + 2 * m + 1].to_vec(),
        })
    }

    /// Sums the series at global time `t`. Any real `t` is accepted; the
    /// series is `T`-periodic.
    #[must_use]
    pub fn value_at(&self, t: f64) -> Complex {
        let omega = TAU / self.period;
        self.iter()
            .map(|(k, c)| c * Complex::from_polar(1.0, omega * order_f64(k) * t))
            .sum()
    }

    /// Returns the arms in drawing order `0, 1, -1, 2, -2, …`.
    #[must_use]
    pub fn epicycles(&self) -> Vec<Epicycle> {
        let n = order_i64(self.num_orders);
        std::iter::once(0)
            .chain((1..=n).flat_map(|k| [k, -k]))
            .filter_map(|k| {
                self.coefficient(k).map(|c| Epicycle {
                    order: k,
                    radius: c.norm(),
                    phase: c.arg(),
                    frequency: order_f64(k) / self.period,
                })
            })
            .collect()
    }

    /// Returns the joints of the epicycle arms at time `t`: the first point is
    /// the zero-order center, the last the series value.
    #[must_use]
    pub fn epicycle_chain(&self, t: f64) -> Vec<Point2> {
        let mut tip = Complex::new(0.0, 0.0);
        self.epicycles()
            .iter()
            .map(|arm| {
                tip += arm.value_at(t);
                to_point(tip)
            })
            .collect()
    }
}

impl ParametricCurve for FourierSeries {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        self.domain().check(t)?;
        Ok(to_point(self.value_at(t)))
    }

    fn derivative(&self, t: f64) -> Result<Vector2> {
        self.domain().check(t)?;
        let omega = TAU / self.period;
        let v: Complex = self
            .iter()
            .map(|(k, c)| {
                let w = omega * order_f64(k);
                c * Complex::new(0.0, w) * Complex::from_polar(1.0, w * t)
            })
            .sum();
        Ok(Vector2::new(v.re, v.im))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, self.period)
    }

    /// A truncated series is periodic, so it always closes up to rounding.
    fn is_closed(&self) -> bool {
        (self.value_at(self.period) - self.value_at(0.0)).norm() < TOLERANCE.sqrt()
    }
}

#[allow(clippy::cast_possible_wrap)]
fn order_i64(n: usize) -> i64 {
    n as i64
}

#[allow(clippy::cast_precision_loss)]
fn order_f64(k: i64) -> f64 {
    k as f64
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn circle(period: f64) -> FourierSeries {
        // z(t) = 1 + 2·exp(i·2πt/T)
        FourierSeries::from_coefficients(
            period,
            vec![
                Complex::new(0.0, 0.0),
                Complex::new(1.0, 0.0),
                Complex::new(2.0, 0.0),
            ],
        )
    }

    #[test]
    fn order_lookup() {
        let s = circle(2.0);
        assert_eq!(s.num_orders(), 1);
        assert_eq!(s.orders(), -1..=1);
        assert_eq!(s.coefficient(1), Some(Complex::new(2.0, 0.0)));
        assert_eq!(s.coefficient(-1), Some(Complex::new(0.0, 0.0)));
        assert_eq!(s.coefficient(2), None);
        assert_eq!(s.coefficient(i64::MIN), None);
    }

    #[test]
    fn value_traces_circle() {
        let s = circle(2.0);
        let quarter = s.value_at(0.5);
        assert_abs_diff_eq!(quarter.re, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(quarter.im, 2.0, epsilon = 1e-12);
        assert!(s.is_closed());
    }

    #[test]
    fn derivative_is_tangent() {
        let s = circle(1.0);
        let v = s.derivative(0.0).unwrap();
        assert_abs_diff_eq!(v, Vector2::new(0.0, 2.0 * TAU), epsilon = 1e-9);
        assert!(s.evaluate(1.5).is_err());
    }

    #[test]
    fn truncation_keeps_central_orders() {
        let s = FourierSeries::from_coefficients(
            1.0,
            (0..5).map(|i| Complex::new(f64::from(i), 0.0)).collect(),
        );
        let t = s.truncated(1).unwrap();
        assert_eq!(
            t.coefficients(),
            &[
                Complex::new(1.0, 0.0),
                Complex::new(2.0, 0.0),
                Complex::new(3.0, 0.0)
            ]
        );
        assert!(s.truncated(3).is_err());
    }

    #[test]
    fn epicycles_in_drawing_order() {
        let s = FourierSeries::from_coefficients(
            4.0,
            (0..5).map(|i| Complex::new(f64::from(i), 1.0)).collect(),
        );
        let orders: Vec<i64> = s.epicycles().iter().map(|e| e.order).collect();
        assert_eq!(orders, vec![0, 1, -1, 2, -2]);
        assert_abs_diff_eq!(s.epicycles()[3].frequency, 0.5);
    }

    #[test]
    fn chain_ends_at_series_value() {
        let s = circle(3.0);
        let chain = s.epicycle_chain(1.1);
        let tip = s.value_at(1.1);
        assert_eq!(chain.len(), 3);
        assert_abs_diff_eq!(chain[0], Point2::new(1.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(*chain.last().unwrap(), to_point(tip), epsilon = 1e-12);
    }
}
