//! Lagrange interpolation by symbolic expansion of the basis polynomials.
//!
//! The basis polynomial for node `i` is `Π_{j≠i} (t - x_j)`. Its coefficient
//! of `t^m` is the elementary symmetric polynomial of degree `n - 1 - m` in the
//! negated roots `{-x_j : j ≠ i}`, so the interpolant's coefficients come out
//! directly without a Vandermonde solve.

use crate::error::{InterpolationError, Result};

use super::{Polynomial, Scalar};

/// Returns the unique polynomial of degree `xs.len() - 1` through
/// `(xs[i], ys[i])`.
///
/// Close but distinct abscissas are accepted as-is and may produce very large
/// coefficients.
///
/// # Errors
///
/// Returns [`InterpolationError`] if fewer than 2 points are given, the slices
/// differ in length, or two abscissas coincide.
#[allow(clippy::float_cmp)]
pub fn interpolate<T: Scalar>(xs: &[f64], ys: &[T]) -> Result<Polynomial<T>> {
    if xs.len() != ys.len() {
        return Err(InterpolationError::LengthMismatch {
            xs: xs.len(),
            ys: ys.len(),
        }
        .into());
    }
    let n = xs.len();
    if n < 2 {
        return Err(InterpolationError::TooFewPoints { count: n }.into());
    }
    for (first, &a) in xs.iter().enumerate() {
        if let Some(offset) = xs[first + 1..].iter().position(|&b| a == b) {
            return Err(InterpolationError::RepeatedAbscissa {
                first,
                second: first + 1 + offset,
                value: a,
            }
            .into());
        }
    }

    let mut coeffs = vec![T::zero(); n];
    let mut roots = Vec::with_capacity(n - 1);
    for (i, (&xi, &yi)) in xs.iter().zip(ys).enumerate() {
        roots.clear();
        roots.extend(
            xs.iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &xj)| -xj),
        );
        let sums = elementary_symmetric(&roots);
        let denom: f64 = roots.iter().map(|&r| xi + r).product();
        let scale = yi / T::from_real(denom);
        // e_k multiplies t^(n-1-k).
        for (k, &e) in sums.iter().enumerate() {
            coeffs[n - 1 - k] += scale * T::from_real(e);
        }
    }
    Ok(Polynomial::new(coeffs))
}

/// Returns `[e_0, e_1, …, e_m]`, the elementary symmetric polynomials of
/// `values` (`m = values.len()`, `e_0 = 1`).
///
/// Built one value at a time with `e_k ← e_k + v·e_{k-1}`, which is
/// quadratic rather than the combinatorial cost of enumerating subsets.
#[must_use]
pub fn elementary_symmetric(values: &[f64]) -> Vec<f64> {
    let mut e = vec![0.0; values.len() + 1];
    e[0] = 1.0;
    for (count, &v) in values.iter().enumerate() {
        for k in (1..=count + 1).rev() {
            e[k] += v * e[k - 1];
        }
    }
    e
}
