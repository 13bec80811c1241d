//! Wavegen command-line interface
//!
//! - `wavegen generate` runs one generate/analyse/export pass
//! - `wavegen shell` opens an interactive session that recomputes the
//!   signal and spectrum every time a parameter changes

mod shell;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use wavegen::{Config, SignalParameters, Waveform};

use crate::shell::{Session, check_ranges, write_preview};

#[derive(Parser)]
#[command(name = "wavegen")]
#[command(author, version, about = "Waveform generator with FFT spectrum analysis", long_about = None)]
struct Cli {
    /// Path to a YAML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a signal once, print a preview and export it
    Generate(GenerateArgs),

    /// Interactive session: change parameters and export on demand
    Shell,
}

#[derive(Args)]
struct GenerateArgs {
    /// Waveform (sine, square, sawtooth, triangle, whitenoise)
    #[arg(short, long)]
    waveform: Option<Waveform>,

    /// Frequency in Hz (1-20000)
    #[arg(short, long)]
    frequency: Option<f64>,

    /// Amplitude (0.1-1.0)
    #[arg(short, long)]
    amplitude: Option<f64>,

    /// Sample rate in Hz (1000-96000)
    #[arg(short = 'r', long)]
    sample_rate: Option<f64>,

    /// Duration in seconds (0.1-10)
    #[arg(short, long)]
    duration: Option<f64>,

    /// Write the signal as a 16-bit PCM WAV file
    #[arg(long)]
    wav: Option<PathBuf>,

    /// Write the signal as a Time,Amplitude CSV table
    #[arg(long)]
    signal_csv: Option<PathBuf>,

    /// Write the spectrum as a Frequency,Magnitude CSV table
    #[arg(long)]
    spectrum_csv: Option<PathBuf>,

    /// Render time-domain and spectrum SVG plots into this directory
    #[arg(long)]
    plot_dir: Option<PathBuf>,

    /// Number of preview rows to print
    #[arg(long)]
    rows: Option<usize>,
}

impl GenerateArgs {
    fn apply_to(&self, base: SignalParameters) -> SignalParameters {
        SignalParameters {
            waveform: self.waveform.unwrap_or(base.waveform),
            frequency_hz: self.frequency.unwrap_or(base.frequency_hz),
            amplitude: self.amplitude.unwrap_or(base.amplitude),
            sample_rate_hz: self.sample_rate.unwrap_or(base.sample_rate_hz),
            duration_sec: self.duration.unwrap_or(base.duration_sec),
        }
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

fn cmd_generate(config: &Config, args: &GenerateArgs) -> Result<()> {
    let params = args.apply_to(config.signal);
    check_ranges(&params)?;

    let signal = wavegen::generate(&params).context("signal generation failed")?;
    let spectrum = wavegen::spectrum(&signal).context("spectrum computation failed")?;
    info!(waveform = %params.waveform, samples = signal.len(), "generated");

    let rows = args.rows.unwrap_or(config.preview.rows);
    let mut stdout = io::stdout().lock();
    write_preview(&mut stdout, &params, &signal, &spectrum, rows)?;
    stdout.flush()?;

    if let Some(path) = &args.wav {
        wavegen::export_wav(&signal, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("wav saved to {}", path.display());
    }
    if let Some(path) = &args.signal_csv {
        wavegen::export_signal_csv(&signal, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("signal saved to {}", path.display());
    }
    if let Some(path) = &args.spectrum_csv {
        wavegen::export_spectrum_csv(&spectrum, path)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("fft saved to {}", path.display());
    }
    if let Some(dir) = &args.plot_dir {
        let (time_svg, fft_svg) = shell::render_plots(config, &signal, &spectrum, dir)?;
        println!("plots saved to {} and {}", time_svg.display(), fft_svg.display());
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_ref())?;

    match &cli.command {
        Commands::Generate(args) => cmd_generate(&config, args),
        Commands::Shell => {
            let mut session = Session::new(config)?;
            let stdin = io::stdin().lock();
            let stdout = io::stdout().lock();
            session.run(stdin, stdout)
        }
    }
}
