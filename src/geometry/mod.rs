pub mod curve;
pub mod points;
pub mod series;

pub use curve::{CompositePath, CurveDomain, ParametricCurve, Segment, SegmentKind};
pub use points::PointSequence;
pub use series::{Epicycle, FourierSeries};
