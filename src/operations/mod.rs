pub mod creation;
pub mod fourier;
pub mod query;
