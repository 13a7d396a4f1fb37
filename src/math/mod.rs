pub mod lagrange;
pub mod polynomial;

pub use lagrange::{elementary_symmetric, interpolate};
pub use polynomial::Polynomial;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Complex scalar; the real axis is screen `x`, the imaginary axis screen `y`.
pub type Complex = nalgebra::Complex<f64>;

/// Field a polynomial's coefficients live in: `f64` or [`Complex`].
pub trait Scalar: nalgebra::ComplexField<RealField = f64> + Copy {}

impl<T: nalgebra::ComplexField<RealField = f64> + Copy> Scalar for T {}

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Converts a complex value to the point `(re, im)`.
#[must_use]
pub fn to_point(z: Complex) -> Point2 {
    Point2::new(z.re, z.im)
}

/// Converts a point to the complex value `x + i·y`.
#[must_use]
pub fn to_complex(p: &Point2) -> Complex {
    Complex::new(p.x, p.y)
}
