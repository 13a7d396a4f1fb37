mod resample;
mod tessellate_path;

pub use resample::ResampleSeries;
pub use tessellate_path::TessellatePath;

/// Parameters controlling tessellation density.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Points sampled along each segment when previewing a path.
    pub samples_per_segment: usize,
    /// Points regenerated from a series per segment of the source path.
    pub series_samples_per_segment: usize,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self {
            samples_per_segment: 50,
            series_samples_per_segment: 80,
        }
    }
}

/// Returns `n` evenly spaced values over `[0, end]`, both ends included.
///
/// A single sample sits at 0.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sample_times(end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let step = end / (n - 1) as f64;
            let mut times: Vec<f64> = (0..n).map(|i| step * i as f64).collect();
            times[n - 1] = end;
            times
        }
    }
}
