//! Closed-form integrals of polynomial segments against Fourier kernels.

use crate::geometry::Segment;
use crate::math::{Complex, Polynomial};

/// Returns `∫₀^d z(t) dt` for a segment of duration `d`.
pub(crate) fn mean_integral(segment: &Segment) -> Complex {
    segment
        .complex_polynomial()
        .definite_integral(segment.duration())
}

/// Returns `P` such that `d/dt [P(t)·exp(-i·t/a)] = p(t)·exp(-i·t/a)`.
///
/// Integrating `c·t^n·exp(-i·t/a)` by parts `n` times gives
/// `P[n - j] += c·(i·a)^(j+1)·(-1)^j·n!/(n - j)!` for `j = 0..=n`.
pub(crate) fn exponential_antiderivative(p: &Polynomial<Complex>, a: f64) -> Polynomial<Complex> {
    let ia = Complex::new(0.0, a);
    let mut out = vec![Complex::new(0.0, 0.0); p.len()];
    for (n, &c) in p.coefficients().iter().enumerate() {
        // n!/(n - j)! and (i·a)^(j + 1), advanced together.
        let mut falling = 1.0;
        let mut power = ia;
        for j in 0..=n {
            let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
            out[n - j] += c * power * (sign * falling);
            falling *= step(n - j);
            power *= ia;
        }
    }
    Polynomial::new(out)
}

/// Returns `∫ z(t_local)·exp(-i·t_global/a) dt_local` over the segment,
/// where `t_global = offset + t_local`.
///
/// The polynomial is evaluated in local time and the phase in global time.
pub(crate) fn harmonic_integral(segment: &Segment, offset: f64, a: f64) -> Complex {
    let antiderivative = exponential_antiderivative(segment.complex_polynomial(), a);
    let local_end = segment.duration();
    let global_end = offset + local_end;

    let upper = phase(global_end, a) * antiderivative.sample(local_end);
    let lower = phase(offset, a) * antiderivative.sample(0.0);
    upper - lower
}

/// `exp(t / (i·a))`, i.e. `exp(-i·t/a)`.
fn phase(t: f64, a: f64) -> Complex {
    Complex::from_polar(1.0, -t / a)
}

#[allow(clippy::cast_precision_loss)]
fn step(k: usize) -> f64 {
    k as f64
}
