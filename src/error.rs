//! Error types for generation, analysis and export.

use std::io;
use thiserror::Error;

/// Result type for wavegen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating, analysing or exporting a signal.
///
/// Every error is local to the call that produced it. None of them leave
/// any state behind, so a caller can report the error and carry on.
#[derive(Error, Debug)]
pub enum Error {
    /// A generation or export parameter is out of its valid domain
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A waveform name that does not match any known waveform
    #[error("unknown waveform '{0}' (expected sine, square, sawtooth, triangle or whitenoise)")]
    UnknownWaveform(String),

    /// The signal has no samples to analyse or export
    #[error("signal contains no samples")]
    EmptySignal,

    /// Every sample is zero, so peak normalization is undefined
    #[error("signal is silent (all samples are zero), cannot normalize")]
    SilentSignal,

    /// File system failure while reading or writing
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// WAV encoding failure that is not an I/O error
    #[error("WAV encoding failed: {0}")]
    Wav(#[source] hound::Error),

    /// CSV failure that is not an I/O error (e.g. a malformed row)
    #[error("CSV error: {0}")]
    Csv(#[source] csv::Error),

    /// A CSV table whose header row is not the one expected for its kind
    #[error("unexpected CSV header '{found}' (expected '{expected}')")]
    UnexpectedHeader { expected: String, found: String },

    /// Configuration file could not be parsed or serialized
    #[error("configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// Plot rendering failure
    #[error("plot rendering failed: {0}")]
    Plot(String),
}

impl Error {
    pub(crate) fn invalid(name: &'static str, value: f64) -> Self {
        Error::InvalidParameter { name, value }
    }
}

impl From<hound::Error> for Error {
    fn from(err: hound::Error) -> Self {
        match err {
            hound::Error::IoError(io) => Error::Io(io),
            other => Error::Wav(other),
        }
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        if let csv::ErrorKind::Io(io) = err.kind() {
            let kind = io.kind();
            return Error::Io(io::Error::new(kind, err));
        }
        Error::Csv(err)
    }
}
