use thiserror::Error;

/// Top-level error type for the epicycle crate.
#[derive(Debug, Error)]
pub enum EpicycleError {
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl EpicycleError {
    /// Returns whether this is a degenerate interpolation input.
    #[must_use]
    pub fn is_degenerate_input(&self) -> bool {
        matches!(self, Self::Interpolation(_))
    }

    /// Returns whether a path was assembled from nothing.
    #[must_use]
    pub fn is_empty_path(&self) -> bool {
        matches!(self, Self::Path(_))
    }

    /// Returns whether a series was requested with a negative order count.
    #[must_use]
    pub fn is_invalid_order_count(&self) -> bool {
        matches!(self, Self::Series(SeriesError::InvalidOrderCount(_)))
    }
}

/// Degenerate input to polynomial interpolation.
#[derive(Debug, Error, PartialEq)]
pub enum InterpolationError {
    #[error("degenerate input: interpolation needs at least 2 points, got {count}")]
    TooFewPoints { count: usize },

    #[error("degenerate input: abscissas {first} and {second} coincide at {value}")]
    RepeatedAbscissa {
        first: usize,
        second: usize,
        value: f64,
    },

    #[error("degenerate input: {xs} abscissas but {ys} ordinates")]
    LengthMismatch { xs: usize, ys: usize },
}

/// Errors related to composite path assembly.
#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    #[error("composite path has no segments")]
    Empty,

    #[error("path builder has no segments to build")]
    EmptyBuilder,
}

/// Errors related to Fourier series computation.
#[derive(Debug, Error, PartialEq)]
pub enum SeriesError {
    #[error("harmonic order count must be non-negative, got {0}")]
    InvalidOrderCount(i64),

    #[error("order {requested} exceeds the {available} orders of this series")]
    OrderOutOfRange { requested: usize, available: usize },
}

/// Errors related to evaluating parametric geometry.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Convenience type alias for results using [`EpicycleError`].
pub type Result<T> = std::result::Result<T, EpicycleError>;
