mod arc_length;
mod deviation;

pub use arc_length::ArcLength;
pub use deviation::MeanSquaredDeviation;
