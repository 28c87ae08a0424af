//! Subcommands and their execution against the core

use crate::render::Report;
use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use sigrate_core::{
    convolution::convolve_real,
    filter::FilterKind,
    math::rate_factors,
    resample::RateConverter,
    signal::Signal,
};
use tracing::info;

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convolve two real sequences
    Convolve(ConvolveArgs),
    /// Design a low-pass filter
    Lowpass(LowpassArgs),
    /// Design a band-pass filter
    Bandpass(BandpassArgs),
    /// Reduce two sampling periods to expansion/decimation factors
    Factors(PeriodArgs),
    /// Resample a real sequence between two sampling periods
    Resample(ResampleArgs),
}

#[derive(Debug, Clone, Args)]
pub struct ConvolveArgs {
    /// First sequence, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub lhs: Vec<f64>,

    /// Second sequence, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub rhs: Vec<f64>,
}

#[derive(Debug, Clone, Args)]
pub struct LowpassArgs {
    /// Normalized bandwidth
    #[arg(short, long)]
    pub band: f64,

    /// Passband gain
    #[arg(short, long, default_value = "1.0")]
    pub gain: f64,
}

#[derive(Debug, Clone, Args)]
pub struct BandpassArgs {
    /// Center frequency
    #[arg(short, long)]
    pub center: f64,

    /// Normalized bandwidth
    #[arg(short, long)]
    pub band: f64,

    /// Use the causal, single-carrier variant
    #[arg(long)]
    pub causal: bool,
}

#[derive(Debug, Clone, Args)]
pub struct PeriodArgs {
    /// Target sampling period (T1)
    #[arg(short, long)]
    pub target: usize,

    /// Source sampling period (T2)
    #[arg(short, long)]
    pub source: usize,
}

#[derive(Debug, Clone, Args)]
pub struct ResampleArgs {
    #[command(flatten)]
    pub periods: PeriodArgs,

    /// Input samples, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
    pub values: Vec<f64>,
}

impl Command {
    /// Run the command and collect its result
    pub fn execute(&self) -> Result<Report> {
        match self {
            Command::Convolve(args) => {
                info!("Convolving {} x {} samples", args.lhs.len(), args.rhs.len());
                let out = convolve_real(&args.lhs, &args.rhs).context("Convolution failed")?;
                Ok(Report::Sequence(out))
            }
            Command::Lowpass(args) => {
                let kind = FilterKind::LowPass {
                    band: args.band,
                    gain: args.gain,
                };
                design(kind)
            }
            Command::Bandpass(args) => {
                let kind = if args.causal {
                    FilterKind::BandPassCausal {
                        center_freq: args.center,
                        band: args.band,
                    }
                } else {
                    FilterKind::BandPass {
                        center_freq: args.center,
                        band: args.band,
                    }
                };
                design(kind)
            }
            Command::Factors(args) => {
                let factors = rate_factors(args.target, args.source)
                    .context("Invalid sampling periods")?;
                Ok(Report::Factors(factors))
            }
            Command::Resample(args) => {
                let converter = RateConverter::new(args.periods.target, args.periods.source)
                    .context("Invalid sampling periods")?;
                let input = Signal::from_real(&args.values);
                info!(
                    "Resampling {} samples by {}/{}",
                    input.len(),
                    converter.factors().up,
                    converter.factors().down
                );
                let out = converter.process(&input).context("Resampling failed")?;
                Ok(Report::Signal(out))
            }
        }
    }
}

fn design(kind: FilterKind) -> Result<Report> {
    info!("Designing {:?}", kind);
    let filter = kind.design().context("Filter design failed")?;
    Ok(Report::Signal(filter))
}
