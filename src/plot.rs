//! SVG plots of the time-domain signal and its spectrum.

use crate::error::{Error, Result};
use crate::generator::Signal;
use crate::spectrum::Spectrum;
use plotters::prelude::*;
use std::path::Path;
use tracing::info;

const PLOT_SIZE: (u32, u32) = (800, 400);

/// Renders the first `window_sec` seconds of `signal` to an SVG file.
pub fn plot_signal(signal: &Signal, path: impl AsRef<Path>, window_sec: f64) -> Result<()> {
    let path = path.as_ref();
    let end = window_sec.min(signal.duration());
    let points: Vec<(f64, f64)> = signal.iter().take_while(|&(t, _)| t <= end).collect();
    let y_max = signal.peak().max(f64::EPSILON) * 1.1;

    draw_line_chart(
        path,
        "Time domain",
        ("Time [s]", "Amplitude"),
        (0.0..end.max(f64::EPSILON), -y_max..y_max),
        &points,
    )
    .map_err(|e| Error::Plot(e.to_string()))?;

    info!(path = %path.display(), points = points.len(), "signal plot saved");
    Ok(())
}

/// Renders the spectrum from 0 Hz up to `window_hz` to an SVG file.
pub fn plot_spectrum(spectrum: &Spectrum, path: impl AsRef<Path>, window_hz: f64) -> Result<()> {
    let path = path.as_ref();
    let points: Vec<(f64, f64)> = spectrum.iter().take_while(|&(f, _)| f <= window_hz).collect();
    let y_max = points
        .iter()
        .fold(0.0_f64, |acc, &(_, m)| acc.max(m))
        .max(f64::EPSILON)
        * 1.1;

    draw_line_chart(
        path,
        "Spectrum",
        ("Frequency [Hz]", "Magnitude"),
        (0.0..window_hz.max(f64::EPSILON), 0.0..y_max),
        &points,
    )
    .map_err(|e| Error::Plot(e.to_string()))?;

    info!(path = %path.display(), bins = points.len(), "spectrum plot saved");
    Ok(())
}

fn draw_line_chart(
    path: &Path,
    title: &str,
    (x_desc, y_desc): (&str, &str),
    (x_range, y_range): (std::ops::Range<f64>, std::ops::Range<f64>),
    points: &[(f64, f64)],
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(x_desc)
        .y_desc(y_desc)
        .x_labels(10)
        .y_labels(10)
        .draw()?;

    chart.draw_series(LineSeries::new(points.iter().copied(), BLUE.stroke_width(2)))?;

    root.present()?;
    Ok(())
}
