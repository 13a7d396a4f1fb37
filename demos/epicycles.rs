//! Builds a closed drawing, computes its Fourier series and prints the
//! largest epicycles. Run with `RUST_LOG=epicycle=debug` to see the
//! library's diagnostics.

use epicycle::math::Point2;
use epicycle::operations::creation::PathBuilder;
use epicycle::operations::fourier::{ComputeSeries, SeriesParams};
use epicycle::operations::query::{ArcLength, MeanSquaredDeviation};
use epicycle::tessellation::{ResampleSeries, TessellationParams};
use tracing_subscriber::EnvFilter;

fn main() -> epicycle::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut builder = PathBuilder::starting_at(Point2::new(0.2, 0.2));
    builder
        .line_to(Point2::new(0.8, 0.25))?
        .curve_through(&[
            Point2::new(0.7, 0.5),
            Point2::new(0.85, 0.7),
            Point2::new(0.6, 0.85),
        ])?
        .line_to(Point2::new(0.25, 0.7))?
        .close()?;
    let path = builder.build()?;

    let series = ComputeSeries::with_params(&path, SeriesParams::default()).execute()?;
    let mut arms = series.epicycles();
    arms.sort_by(|a, b| b.radius.total_cmp(&a.radius));

    println!(
        "period {:.1}, length {:.4}, {} coefficients",
        series.period(),
        ArcLength::new(&path).execute(),
        series.coefficients().len()
    );
    for arm in arms.iter().take(8) {
        println!(
            "order {:>4}  radius {:.5}  phase {:+.4}",
            arm.order, arm.radius, arm.phase
        );
    }

    let params = TessellationParams::default();
    let points = ResampleSeries::per_segment(&series, path.segments().len(), params).execute();
    let mse = MeanSquaredDeviation::new(&series, &path, points.len()).execute()?;
    println!("{} regenerated points, mean squared deviation {mse:.3e}", points.len());
    Ok(())
}
