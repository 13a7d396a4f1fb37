mod compute_series;
mod integrate;

pub use compute_series::ComputeSeries;

/// Parameters controlling series computation.
#[derive(Debug, Clone, Copy)]
pub struct SeriesParams {
    /// Highest harmonic order `N`; orders `-N..=N` are computed.
    pub num_orders: i64,
}

impl Default for SeriesParams {
    fn default() -> Self {
        Self { num_orders: 50 }
    }
}
