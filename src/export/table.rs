//! CSV export of signals and spectra.

use crate::error::{Error, Result};
use crate::generator::Signal;
use crate::spectrum::Spectrum;
use csv::{ReaderBuilder, WriterBuilder};
use std::path::Path;
use tracing::info;

const SIGNAL_HEADER: [&str; 2] = ["Time", "Amplitude"];
const SPECTRUM_HEADER: [&str; 2] = ["Frequency", "Magnitude"];

/// Writes `signal` as a `Time,Amplitude` table, one row per sample.
///
/// Floats are written in shortest round-trip form, so reading the file
/// back yields the exact values.
pub fn export_signal_csv(signal: &Signal, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    write_table(path, SIGNAL_HEADER, signal.iter())?;
    info!(path = %path.display(), rows = signal.len(), "signal saved");
    Ok(())
}

/// Writes `spectrum` as a `Frequency,Magnitude` table, one row per bin.
pub fn export_spectrum_csv(spectrum: &Spectrum, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    write_table(path, SPECTRUM_HEADER, spectrum.iter())?;
    info!(path = %path.display(), rows = spectrum.len(), "spectrum saved");
    Ok(())
}

/// Reads a `Time,Amplitude` table back into a [`Signal`].
///
/// Only the amplitude column is kept; the time axis is rebuilt from
/// `sample_rate`.
///
/// # Errors
///
/// - `UnexpectedHeader` when the first row is not `Time,Amplitude`
/// - `Csv` when a row is not two numbers
/// - `InvalidParameter` when `sample_rate` is not a positive finite number
///   or an amplitude is not finite
pub fn read_signal_csv(path: impl AsRef<Path>, sample_rate: f64) -> Result<Signal> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path.as_ref())?;
    let header = reader.headers()?;
    if !header.iter().eq(SIGNAL_HEADER) {
        return Err(Error::UnexpectedHeader {
            expected: SIGNAL_HEADER.join(","),
            found: header.iter().collect::<Vec<_>>().join(","),
        });
    }
    let mut samples = Vec::new();
    for row in reader.deserialize::<(f64, f64)>() {
        let (_, amplitude) = row?;
        samples.push(amplitude);
    }
    Signal::from_samples(sample_rate, samples)
}

fn write_table(
    path: &Path,
    header: [&str; 2],
    rows: impl Iterator<Item = (f64, f64)>,
) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(header)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
