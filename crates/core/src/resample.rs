//! Rational sample rate conversion
//!
//! A change from sampling period `T2` to `T1` is reduced to the coprime pair
//! `(F1, F2)` and carried out as expand by F1, low-pass interpolate at the
//! raised rate, then decimate by F2.

use crate::{
    complex::Complex,
    convolution,
    filter,
    math::{rate_factors, RateFactors},
    signal::Signal,
    CoreError, Result,
};
use tracing::{debug, trace};

fn check_factor(name: &str, factor: usize) -> Result<()> {
    if factor == 0 {
        return Err(CoreError::invalid(format!("{} factor must be at least 1", name)));
    }
    Ok(())
}

/// Zero-stuffing upsampler
///
/// Output has `len * factor` samples; sample `i` of the input lands at
/// `i * factor` and every other position is `0 + 0j`.
pub fn expand(signal: &Signal, factor: usize) -> Result<Signal> {
    check_factor("expansion", factor)?;

    let len = signal.len().checked_mul(factor).ok_or_else(|| {
        CoreError::invalid(format!(
            "expanding {} samples by {} overflows the signal length",
            signal.len(),
            factor
        ))
    })?;

    let mut values = vec![Complex::zero(); len];
    for (i, value) in signal.iter().enumerate() {
        values[i * factor] = *value;
    }

    trace!(input = signal.len(), output = values.len(), factor, "expanded signal");
    Ok(Signal::new(values))
}

/// Remove the spectral images left by [`expand`]
///
/// Convolves with a low-pass filter of band `1 / (2 * factor)` and gain
/// `factor`, then drops `(taps - 1) / 2` samples from each end so the output
/// has the same length as `signal`.
pub fn interpolate(signal: &Signal, factor: usize) -> Result<Signal> {
    check_factor("interpolation", factor)?;

    let lpf = filter::low_pass_filter_with_gain(1.0 / (2.0 * factor as f64), factor as f64)?;
    let filtered = convolution::convolve(signal, &lpf)?;

    let trim = (lpf.len() - 1) / 2;
    debug!(factor, taps = lpf.len(), trim, "interpolating");

    let values = filtered.into_values();
    let kept = values[trim..values.len() - trim].to_vec();
    debug_assert_eq!(kept.len(), signal.len());
    Ok(Signal::new(kept))
}

/// Keep every `factor`-th sample, `len / factor` samples in total
///
/// The input should already be band-limited below the new Nyquist rate.
pub fn decimate(signal: &Signal, factor: usize) -> Result<Signal> {
    check_factor("decimation", factor)?;

    let count = signal.len() / factor;
    let out: Signal = signal.iter().step_by(factor).take(count).copied().collect();

    trace!(input = signal.len(), output = out.len(), factor, "decimated signal");
    Ok(out)
}

/// Converter between two integer sampling periods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateConverter {
    target_period: usize,
    source_period: usize,
    factors: RateFactors,
}

impl RateConverter {
    /// Create a converter from sampling period `source` (T2) to `target` (T1)
    pub fn new(target: usize, source: usize) -> Result<Self> {
        let factors = rate_factors(target, source)?;
        if factors.up > 1 {
            // reject expansions whose interpolation filter cannot be designed
            filter::filter_length(1.0 / (2.0 * factors.up as f64))?;
        }
        debug!(target, source, up = factors.up, down = factors.down, "rate factors");

        Ok(Self {
            target_period: target,
            source_period: source,
            factors,
        })
    }

    pub fn target_period(&self) -> usize {
        self.target_period
    }

    pub fn source_period(&self) -> usize {
        self.source_period
    }

    /// Reduced expansion/decimation pair
    pub fn factors(&self) -> RateFactors {
        self.factors
    }

    /// Number of samples [`RateConverter::process`] returns for `input_len` samples
    pub fn output_len(&self, input_len: usize) -> Result<usize> {
        input_len
            .checked_mul(self.factors.up)
            .map(|n| n / self.factors.down)
            .ok_or_else(|| {
                CoreError::invalid(format!(
                    "{} samples expanded by {} overflows the signal length",
                    input_len, self.factors.up
                ))
            })
    }

    /// Resample `signal`
    pub fn process(&self, signal: &Signal) -> Result<Signal> {
        if signal.is_empty() {
            return Err(CoreError::invalid("cannot resample an empty signal"));
        }

        let RateFactors { up, down } = self.factors;

        let upsampled = if up == 1 {
            signal.clone()
        } else {
            interpolate(&expand(signal, up)?, up)?
        };

        if down == 1 {
            return Ok(upsampled);
        }
        decimate(&upsampled, down)
    }
}

/// Resample `signal` from sampling period `source` (T2) to `target` (T1)
pub fn convert_rate(target: usize, source: usize, signal: &Signal) -> Result<Signal> {
    RateConverter::new(target, source)?.process(signal)
}
