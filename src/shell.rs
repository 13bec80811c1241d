//! Interactive shell.
//!
//! Reads one command per line. Parameter commands recompute the signal and
//! spectrum immediately; a failed command leaves the previous result in
//! place and the session keeps going.

use anyhow::{Context, Result, bail};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use wavegen::{Config, Signal, SignalParameters, Spectrum, Waveform};

/// Accepted ranges for the interactive parameters, as (min, max).
pub const FREQUENCY_RANGE: (f64, f64) = (1.0, 20000.0);
pub const AMPLITUDE_RANGE: (f64, f64) = (0.1, 1.0);
pub const SAMPLE_RATE_RANGE: (f64, f64) = (1000.0, 96000.0);
pub const DURATION_RANGE: (f64, f64) = (0.1, 10.0);

const HELP: &str = "\
commands:
  waveform <sine|square|sawtooth|triangle|whitenoise>
  frequency <hz>        (1-20000)
  amplitude <value>     (0.1-1.0)
  rate <hz>             (1000-96000)
  duration <seconds>    (0.1-10)
  show                  print the data preview
  params                print the current parameters
  export <wav|signal|spectrum> [path]
  plot [dir]            render time and spectrum SVG plots
  help
  quit";

/// Rejects parameters outside the interactive ranges.
///
/// Frequency is not checked for white noise, which ignores it.
pub fn check_ranges(params: &SignalParameters) -> Result<()> {
    if params.waveform.is_periodic() {
        in_range("frequency", params.frequency_hz, FREQUENCY_RANGE)?;
    }
    in_range("amplitude", params.amplitude, AMPLITUDE_RANGE)?;
    in_range("sample rate", params.sample_rate_hz, SAMPLE_RATE_RANGE)?;
    in_range("duration", params.duration_sec, DURATION_RANGE)?;
    Ok(())
}

fn in_range(name: &str, value: f64, (min, max): (f64, f64)) -> Result<()> {
    if !(min..=max).contains(&value) {
        bail!("{name} {value} is outside {min}..={max}");
    }
    Ok(())
}

/// Prints the parameters, the first `rows` samples and the spectral peak.
pub fn write_preview(
    out: &mut impl Write,
    params: &SignalParameters,
    signal: &Signal,
    spectrum: &Spectrum,
    rows: usize,
) -> std::io::Result<()> {
    write_params(out, params)?;
    writeln!(out, "{:>12}  {:>12}", "Time [s]", "Value")?;
    for (t, y) in signal.iter().take(rows) {
        writeln!(out, "{t:>12.6}  {y:>12.6}")?;
    }
    if signal.len() > rows {
        writeln!(out, "... ({} more rows)", signal.len() - rows)?;
    }
    match spectrum.peak() {
        Some((freq, mag)) => writeln!(out, "spectral peak: {freq:.2} Hz, magnitude {mag:.6}")?,
        None => writeln!(out, "spectral peak: n/a")?,
    }
    Ok(())
}

fn write_params(out: &mut impl Write, params: &SignalParameters) -> std::io::Result<()> {
    writeln!(
        out,
        "{} | f = {} Hz | A = {} | Fs = {} Hz | T = {} s",
        params.waveform,
        params.frequency_hz,
        params.amplitude,
        params.sample_rate_hz,
        params.duration_sec
    )
}

/// Renders `time.svg` and `fft.svg` into `dir` using the configured windows.
#[cfg(feature = "plot")]
pub fn render_plots(
    config: &Config,
    signal: &Signal,
    spectrum: &Spectrum,
    dir: &Path,
) -> Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    let time_svg = dir.join("time.svg");
    let fft_svg = dir.join("fft.svg");
    wavegen::plot_signal(signal, &time_svg, config.preview.time_window_sec)?;
    wavegen::plot_spectrum(spectrum, &fft_svg, config.preview.spectrum_window_hz)?;
    Ok((time_svg, fft_svg))
}

#[cfg(not(feature = "plot"))]
pub fn render_plots(
    _config: &Config,
    _signal: &Signal,
    _spectrum: &Spectrum,
    _dir: &Path,
) -> Result<(PathBuf, PathBuf)> {
    bail!("wavegen was built without the `plot` feature")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Setting {
    Waveform(Waveform),
    Frequency(f64),
    Amplitude(f64),
    SampleRate(f64),
    Duration(f64),
}

impl Setting {
    fn apply(self, mut params: SignalParameters) -> SignalParameters {
        match self {
            Setting::Waveform(w) => params.waveform = w,
            Setting::Frequency(f) => params.frequency_hz = f,
            Setting::Amplitude(a) => params.amplitude = a,
            Setting::SampleRate(fs) => params.sample_rate_hz = fs,
            Setting::Duration(d) => params.duration_sec = d,
        }
        params
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Wav,
    Signal,
    Spectrum,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set(Setting),
    Show,
    Params,
    Export(ExportKind, Option<PathBuf>),
    Plot(Option<PathBuf>),
    Help,
    Quit,
}

impl Command {
    /// Parses one input line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };
        if head.starts_with('#') {
            return Ok(None);
        }
        let rest: Vec<&str> = words.collect();
        let arg = rest.first().copied();
        let head_lower = head.to_lowercase();
        let max_args = if matches!(head_lower.as_str(), "export" | "save") { 2 } else { 1 };
        if let Some(extra) = rest.get(max_args) {
            bail!("unexpected argument '{extra}'");
        }

        let command = match head_lower.as_str() {
            "waveform" | "wave" | "w" => {
                Command::Set(Setting::Waveform(required(arg, head)?.parse()?))
            }
            "frequency" | "freq" | "f" => Command::Set(Setting::Frequency(number(arg, head)?)),
            "amplitude" | "amp" | "a" => Command::Set(Setting::Amplitude(number(arg, head)?)),
            "rate" | "fs" => Command::Set(Setting::SampleRate(number(arg, head)?)),
            "duration" | "dur" | "t" => Command::Set(Setting::Duration(number(arg, head)?)),
            "show" => Command::Show,
            "params" => Command::Params,
            "export" | "save" => {
                let kind = match required(arg, head)?.to_lowercase().as_str() {
                    "wav" => ExportKind::Wav,
                    "signal" | "csv" => ExportKind::Signal,
                    "spectrum" | "fft" => ExportKind::Spectrum,
                    other => bail!("unknown export kind '{other}' (wav, signal, spectrum)"),
                };
                Command::Export(kind, rest.get(1).map(PathBuf::from))
            }
            "plot" => Command::Plot(arg.map(PathBuf::from)),
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => bail!("unknown command '{other}', type 'help'"),
        };
        Ok(Some(command))
    }
}

fn required<'a>(arg: Option<&'a str>, command: &str) -> Result<&'a str> {
    arg.with_context(|| format!("'{command}' needs an argument"))
}

fn number(arg: Option<&str>, command: &str) -> Result<f64> {
    let text = required(arg, command)?;
    text.parse()
        .with_context(|| format!("'{text}' is not a number"))
}

/// One interactive session: current parameters plus the last good result.
pub struct Session {
    config: Config,
    params: SignalParameters,
    signal: Signal,
    spectrum: Spectrum,
}

impl Session {
    /// Starts a session from the configured parameters.
    pub fn new(config: Config) -> Result<Self> {
        let params = config.signal;
        check_ranges(&params)?;
        let (signal, spectrum) = compute(&params)?;
        Ok(Self {
            config,
            params,
            signal,
            spectrum,
        })
    }

    /// Applies a setting and recomputes. On failure nothing changes.
    pub fn update(&mut self, setting: Setting) -> Result<()> {
        let candidate = setting.apply(self.params);
        check_ranges(&candidate)?;
        let (signal, spectrum) = compute(&candidate)?;
        self.params = candidate;
        self.signal = signal;
        self.spectrum = spectrum;
        Ok(())
    }

    /// Executes one command. Returns `false` when the session should end.
    pub fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<bool> {
        match command {
            Command::Set(setting) => {
                self.update(setting)?;
                self.preview(out)?;
            }
            Command::Show => self.preview(out)?,
            Command::Params => write_params(out, &self.params)?,
            Command::Export(kind, path) => {
                let path = path.unwrap_or_else(|| self.default_export_path(kind));
                match kind {
                    ExportKind::Wav => wavegen::export_wav(&self.signal, &path)?,
                    ExportKind::Signal => wavegen::export_signal_csv(&self.signal, &path)?,
                    ExportKind::Spectrum => wavegen::export_spectrum_csv(&self.spectrum, &path)?,
                }
                writeln!(out, "saved {}", path.display())?;
            }
            Command::Plot(dir) => {
                let dir = dir.unwrap_or_else(|| PathBuf::from("."));
                let (time_svg, fft_svg) =
                    render_plots(&self.config, &self.signal, &self.spectrum, &dir)?;
                writeln!(out, "saved {} and {}", time_svg.display(), fft_svg.display())?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Runs the read-eval-print loop until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> Result<()> {
        self.preview(&mut out)?;
        write!(out, "> ")?;
        out.flush()?;

        for line in input.lines() {
            let line = line.context("failed to read input")?;
            let result = Command::parse(&line)
                .and_then(|command| match command {
                    Some(command) => self.execute(command, &mut out),
                    None => Ok(true),
                });
            match result {
                Ok(true) => {}
                Ok(false) => return Ok(()),
                Err(e) => {
                    warn!(input = %line.trim(), "command failed: {e:#}");
                    writeln!(out, "error: {e:#}")?;
                }
            }
            write!(out, "> ")?;
            out.flush()?;
        }
        writeln!(out)?;
        Ok(())
    }

    fn preview(&self, out: &mut impl Write) -> std::io::Result<()> {
        write_preview(
            out,
            &self.params,
            &self.signal,
            &self.spectrum,
            self.config.preview.rows,
        )
    }

    fn default_export_path(&self, kind: ExportKind) -> PathBuf {
        match kind {
            ExportKind::Wav => self.config.export.wav.clone(),
            ExportKind::Signal => self.config.export.signal_csv.clone(),
            ExportKind::Spectrum => self.config.export.spectrum_csv.clone(),
        }
    }
}

fn compute(params: &SignalParameters) -> Result<(Signal, Spectrum)> {
    let signal = wavegen::generate(params)?;
    let spectrum = wavegen::spectrum(&signal)?;
    debug!(waveform = %params.waveform, samples = signal.len(), "recomputed");
    Ok((signal, spectrum))
}
