//! Dense polynomials in a single real parameter.
//!
//! Coefficients are stored lowest order first: index `i` holds the
//! coefficient of `t^i`. The zero polynomial is the empty coefficient list.

use std::ops::Add;

use super::{Complex, Scalar};

/// A polynomial `c0 + c1·t + … + cn·t^n` with real or complex coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<T: Scalar> {
    coeffs: Vec<T>,
}

impl<T: Scalar> Polynomial<T> {
    /// Creates a polynomial from coefficients, lowest order first.
    #[must_use]
    pub fn new(coeffs: Vec<T>) -> Self {
        Self { coeffs }
    }

    /// Returns the identically-zero polynomial (no coefficients).
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Returns the coefficients, lowest order first.
    #[must_use]
    pub fn coefficients(&self) -> &[T] {
        &self.coeffs
    }

    /// Returns the number of stored coefficients (degree + 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns whether this is the empty (identically-zero) polynomial.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns the degree, or `None` for the empty polynomial.
    ///
    /// The degree is positional: trailing zero coefficients are not trimmed.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Evaluates the polynomial at `t` in Horner form.
    #[must_use]
    pub fn sample(&self, t: f64) -> T {
        let t = T::from_real(t);
        self.coeffs
            .iter()
            .rev()
            .fold(T::zero(), |acc, &c| acc * t + c)
    }

    /// Evaluates the polynomial at each parameter in `ts`.
    #[must_use]
    pub fn sample_many(&self, ts: &[f64]) -> Vec<T> {
        ts.iter().map(|&t| self.sample(t)).collect()
    }

    /// Returns the analytic derivative.
    ///
    /// Coefficient `i` of the result is `(i + 1)·c[i + 1]`; the constant term
    /// is dropped, so a constant differentiates to the empty polynomial.
    #[must_use]
    pub fn differentiate(&self) -> Self {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, &c)| c * power_index::<T>(i))
            .collect();
        Self { coeffs }
    }

    /// Returns the antiderivative with a zero constant of integration.
    #[must_use]
    pub fn antiderivative(&self) -> Self {
        if self.coeffs.is_empty() {
            return Self::zero();
        }
        let mut coeffs = Vec::with_capacity(self.coeffs.len() + 1);
        coeffs.push(T::zero());
        coeffs.extend(
            self.coeffs
                .iter()
                .enumerate()
                .map(|(i, &c)| c / power_index::<T>(i + 1)),
        );
        Self { coeffs }
    }

    /// Returns `∫₀^upper p(t) dt`, integrated term by term.
    #[must_use]
    pub fn definite_integral(&self, upper: f64) -> T {
        self.antiderivative().sample(upper)
    }
}

impl Polynomial<f64> {
    /// Lifts real coefficients into the complex field.
    #[must_use]
    pub fn to_complex(&self) -> Polynomial<Complex> {
        Polynomial::new(self.coeffs.iter().map(|&c| Complex::new(c, 0.0)).collect())
    }
}

impl Polynomial<Complex> {
    /// Forms `re(t) + i·im(t)` coefficient-wise.
    ///
    /// The shorter input is treated as zero-padded.
    #[must_use]
    pub fn from_components(re: &Polynomial<f64>, im: &Polynomial<f64>) -> Self {
        let len = re.len().max(im.len());
        let coeffs = (0..len)
            .map(|i| {
                Complex::new(
                    re.coeffs.get(i).copied().unwrap_or(0.0),
                    im.coeffs.get(i).copied().unwrap_or(0.0),
                )
            })
            .collect();
        Self { coeffs }
    }

    /// Returns the real-part polynomial.
    #[must_use]
    pub fn re(&self) -> Polynomial<f64> {
        Polynomial::new(self.coeffs.iter().map(|c| c.re).collect())
    }

    /// Returns the imaginary-part polynomial.
    #[must_use]
    pub fn im(&self) -> Polynomial<f64> {
        Polynomial::new(self.coeffs.iter().map(|c| c.im).collect())
    }
}

impl<T: Scalar> Add for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, rhs: Self) -> Polynomial<T> {
        let len = self.len().max(rhs.len());
        let coeffs = (0..len)
            .map(|i| {
                let a = self.coeffs.get(i).copied().unwrap_or_else(T::zero);
                let b = rhs.coeffs.get(i).copied().unwrap_or_else(T::zero);
                a + b
            })
            .collect();
        Polynomial::new(coeffs)
    }
}

#[allow(clippy::cast_precision_loss)]
fn power_index<T: Scalar>(i: usize) -> T {
    T::from_real(i as f64)
}
