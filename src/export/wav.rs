//! WAV export.

use crate::error::{Error, Result};
use crate::generator::Signal;
use hound::{SampleFormat, WavSpec, WavWriter};
use std::fs;
use std::io::{self, Seek, Write};
use std::path::Path;
use tracing::{info, warn};

/// Writes `signal` as a mono 16-bit PCM WAV file.
///
/// Samples are divided by the peak absolute value, so the loudest sample
/// lands at full scale, then multiplied by 32767 and truncated toward zero.
/// The header sample rate is the signal's rate rounded down to a whole
/// number of Hz.
///
/// If writing fails part way, the incomplete file is removed.
///
/// # Errors
///
/// - `EmptySignal` when there is nothing to write
/// - `SilentSignal` when every sample is zero
/// - `InvalidParameter` when the sample rate rounds down to 0 Hz
/// - `Io` when the file cannot be created or written
pub fn export_wav(signal: &Signal, path: impl AsRef<Path>) -> Result<()> {
    if signal.is_empty() {
        return Err(Error::EmptySignal);
    }
    let peak = signal.peak();
    if peak == 0.0 {
        return Err(Error::SilentSignal);
    }
    let sample_rate = header_sample_rate(signal.sample_rate())?;

    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let path = path.as_ref();
    let written =
        WavWriter::create(path, spec).and_then(|writer| write_pcm(writer, signal.samples(), peak));
    if let Err(err) = written {
        discard_partial(path);
        return Err(err.into());
    }

    info!(path = %path.display(), samples = signal.len(), sample_rate, "wav saved");
    Ok(())
}

fn write_pcm<W: Write + Seek>(
    mut writer: WavWriter<W>,
    samples: &[f64],
    peak: f64,
) -> hound::Result<()> {
    for &s in samples {
        writer.write_sample(to_pcm16(s / peak))?;
    }
    writer.finalize()
}

fn discard_partial(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => warn!(path = %path.display(), "removed incomplete wav file"),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => warn!(path = %path.display(), error = %err, "failed to remove incomplete wav file"),
    }
}

fn header_sample_rate(rate: f64) -> Result<u32> {
    if rate.is_finite() && rate >= 1.0 && rate <= u32::MAX as f64 {
        Ok(rate.floor() as u32)
    } else {
        Err(Error::invalid("sample_rate_hz", rate))
    }
}

/// Maps a normalized sample in [-1.0, 1.0] to i16, truncating toward zero.
fn to_pcm16(normalized: f64) -> i16 {
    (normalized * i16::MAX as f64) as i16
}
