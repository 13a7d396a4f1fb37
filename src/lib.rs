//! Fourier epicycle approximation of drawn paths.
//!
//! Points are interpolated into polynomial segments, segments are chained
//! into a composite path over global time `[0, T]`, and the path's truncated
//! complex Fourier series is computed by exact term-by-term integration.
//!
//! ```
//! use epicycle::{assemble, compute_series, make_segment, resample, PointSequence};
//!
//! let line = make_segment(&PointSequence::from_xy(&[(0.0, 0.0), (1.0, 0.0)]))?;
//! let path = assemble(vec![line])?;
//! let series = compute_series(&path, 0)?;
//! let points = resample(&series, 4);
//! assert!(points.iter().all(|p| (p.x - 0.5).abs() < 1e-12));
//! # Ok::<(), epicycle::EpicycleError>(())
//! ```

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{EpicycleError, Result};
pub use geometry::{CompositePath, FourierSeries, ParametricCurve, PointSequence, Segment};
pub use math::Polynomial;

use operations::creation::{AssemblePath, MakeSegment};
use operations::fourier::ComputeSeries;
use tessellation::ResampleSeries;

/// Interpolates the minimal-degree polynomial through `(xs[i], ys[i])`.
///
/// # Errors
///
/// Returns an error for fewer than 2 points, mismatched lengths, or repeated
/// abscissas.
pub fn interpolate<T: math::Scalar>(xs: &[f64], ys: &[T]) -> Result<Polynomial<T>> {
    math::interpolate(xs, ys)
}

/// Builds a segment from a snapshot of `points`.
///
/// # Errors
///
/// Returns an error for fewer than 2 points.
pub fn make_segment(points: &PointSequence) -> Result<Segment> {
    MakeSegment::new(points.clone()).execute()
}

/// Chains segments into a composite path.
///
/// # Errors
///
/// Returns an error if `segments` is empty.
pub fn assemble(segments: Vec<Segment>) -> Result<CompositePath> {
    AssemblePath::new(segments).execute()
}

/// Computes the series for orders `-num_orders..=num_orders`.
///
/// # Errors
///
/// Returns an error if `num_orders` is negative.
pub fn compute_series(path: &CompositePath, num_orders: i64) -> Result<FourierSeries> {
    ComputeSeries::new(path, num_orders).execute()
}

/// Evaluates `series` at `num_samples` evenly spaced times over `[0, T]`.
#[must_use]
pub fn resample(series: &FourierSeries, num_samples: usize) -> PointSequence {
    ResampleSeries::new(series, num_samples).execute()
}
