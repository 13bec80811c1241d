//! File export for signals and spectra.
//!
//! - `export_wav` writes a peak-normalized mono 16-bit PCM WAV file
//! - `export_signal_csv` / `export_spectrum_csv` write two-column tables
//! - `read_signal_csv` loads a signal table back

mod table;
mod wav;

pub use self::table::{export_signal_csv, export_spectrum_csv, read_signal_csv};
pub use self::wav::export_wav;
