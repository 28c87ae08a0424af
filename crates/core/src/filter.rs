//! Windowed-sinc FIR filter design
//!
//! A filter here is its impulse response: a [`Signal`] of real coefficients
//! with zero imaginary parts. Filtering a signal means convolving it with
//! that response.
//!
//! The tap count is derived from the normalized bandwidth alone. With
//! `tc = 1 / (2 * band)` the candidate length is `floor(10 * tc)`, reduced
//! by one when even so the response always has a center tap.

use crate::{complex::Complex, convolution, signal::Signal, CoreError, Result};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

/// Upper bound on designed filter length
pub const MAX_TAPS: usize = 1 << 20;

/// Normalized sinc `sin(pi * band * n) / (pi * band * n)`
///
/// Returns exactly 1 at `n == 0` and exactly 0 wherever `n` is a nonzero
/// multiple of `1 / band`. `band` must be positive; debug builds assert it,
/// release builds return NaN for a zero band away from `n == 0`.
pub fn sinc(n: f64, band: f64) -> f64 {
    debug_assert!(band > 0.0, "sinc band must be positive, got {}", band);
    if n == 0.0 {
        1.0
    } else if n % (1.0 / band) == 0.0 {
        0.0
    } else {
        let x = PI * band * n;
        x.sin() / x
    }
}

fn check_positive(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CoreError::invalid(format!(
            "{} must be positive and finite, got {}",
            name, value
        )));
    }
    Ok(())
}

/// Odd tap count for a filter of normalized bandwidth `band`
pub fn filter_length(band: f64) -> Result<usize> {
    check_positive("band", band)?;

    let tc = 1.0 / (2.0 * band);
    let factor = (tc * 10.0).floor();
    if factor < 1.0 {
        return Err(CoreError::invalid(format!(
            "band {} is too wide to yield any filter taps",
            band
        )));
    }
    if factor > MAX_TAPS as f64 {
        return Err(CoreError::invalid(format!(
            "band {} would need {} taps, more than {}",
            band, factor, MAX_TAPS
        )));
    }

    let factor = factor as usize;
    let taps = if factor % 2 == 0 { factor - 1 } else { factor };
    Ok(taps)
}

/// Unit-gain low-pass filter
pub fn low_pass_filter(band: f64) -> Result<Signal> {
    low_pass_filter_with_gain(band, 1.0)
}

/// Low-pass filter with passband gain `gain`, center-aligned
///
/// Tap at offset `n` in `-(N/2)..=N/2` is `gain * 2 * band * sinc(n, 2 * band)`.
pub fn low_pass_filter_with_gain(band: f64, gain: f64) -> Result<Signal> {
    if !gain.is_finite() {
        return Err(CoreError::invalid(format!("gain must be finite, got {}", gain)));
    }
    let taps = filter_length(band)?;
    let half = (taps / 2) as i64;

    let filter: Signal = (-half..=half)
        .map(|n| Complex::from_real(gain * low_pass_tap(n as f64, band)))
        .collect();

    debug!(band, gain, taps, "designed low-pass filter");
    Ok(filter)
}

fn low_pass_tap(n: f64, band: f64) -> f64 {
    2.0 * band * sinc(n, 2.0 * band)
}

/// Band-pass filter: the low-pass envelope modulated onto `2 cos(2 pi f n)`
///
/// Same length and symmetric indexing as [`low_pass_filter`].
pub fn band_pass_filter(center_freq: f64, band: f64) -> Result<Signal> {
    check_positive("center frequency", center_freq)?;
    let taps = filter_length(band)?;
    let half = (taps / 2) as i64;

    let filter: Signal = (-half..=half)
        .map(|n| {
            let n = n as f64;
            let carrier = 2.0 * (2.0 * PI * center_freq * n).cos();
            Complex::from_real(low_pass_tap(n, band) * carrier)
        })
        .collect();

    debug!(center_freq, band, taps, "designed band-pass filter");
    Ok(filter)
}

/// Causal band-pass variant indexed `0..N` with a single `cos` carrier
///
/// Kept alongside [`band_pass_filter`]: the two use different scaling and
/// alignment and are not interchangeable.
pub fn band_pass_filter_causal(center_freq: f64, band: f64) -> Result<Signal> {
    check_positive("center frequency", center_freq)?;
    let taps = filter_length(band)?;

    let filter: Signal = (0..taps)
        .map(|n| {
            let n = n as f64;
            Complex::from_real(low_pass_tap(n, band) * (2.0 * PI * center_freq * n).cos())
        })
        .collect();

    debug!(center_freq, band, taps, "designed causal band-pass filter");
    Ok(filter)
}

/// Convolve `signal` with the impulse response `filter`
pub fn apply_filter(signal: &Signal, filter: &Signal) -> Result<Signal> {
    convolution::convolve(signal, filter)
}

/// Filter design request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterKind {
    LowPass { band: f64, gain: f64 },
    BandPass { center_freq: f64, band: f64 },
    BandPassCausal { center_freq: f64, band: f64 },
}

impl FilterKind {
    /// Build the impulse response
    pub fn design(&self) -> Result<Signal> {
        match *self {
            FilterKind::LowPass { band, gain } => low_pass_filter_with_gain(band, gain),
            FilterKind::BandPass { center_freq, band } => band_pass_filter(center_freq, band),
            FilterKind::BandPassCausal { center_freq, band } => {
                band_pass_filter_causal(center_freq, band)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn is_symmetric(filter: &Signal) -> bool {
        let v = filter.values();
        (0..v.len()).all(|i| v[i].approx_eq(&v[v.len() - 1 - i], 1e-15))
    }

    #[test]
    fn test_sinc_singularities() {
        for band in [0.1, 0.25, 0.5, 1.0, 3.0] {
            assert_eq!(sinc(0.0, band), 1.0);
            assert_eq!(sinc(1.0 / band, band), 0.0);
        }
        assert_eq!(sinc(2.0, 1.0), 0.0);
        assert_eq!(sinc(-4.0, 0.5), 0.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "sinc band must be positive")]
    fn test_sinc_rejects_zero_band() {
        sinc(0.5, 0.0);
    }

    #[test]
    fn test_sinc_values() {
        assert!((sinc(0.5, 1.0) - 2.0 / PI).abs() < 1e-15);
        assert!((sinc(1.0, 0.5) - 2.0 / PI).abs() < 1e-15);
        assert!((sinc(-1.0, 0.5) - sinc(1.0, 0.5)).abs() < 1e-15);
    }

    #[test]
    fn test_filter_length() {
        assert_eq!(filter_length(0.5).unwrap(), 9);
        assert_eq!(filter_length(0.25).unwrap(), 19);
        assert_eq!(filter_length(0.05).unwrap(), 99);
        assert_eq!(filter_length(1.0).unwrap(), 5);
        assert_eq!(filter_length(5.0).unwrap(), 1);
        assert_eq!(filter_length(1.0 / 6.0).unwrap(), 29);
    }

    #[test]
    fn test_filter_length_rejects_bad_band() {
        for band in [0.0, -0.25, f64::NAN, f64::INFINITY, 6.0] {
            assert!(
                matches!(filter_length(band), Err(CoreError::InvalidArgument { .. })),
                "band {} accepted",
                band
            );
        }
        assert!(filter_length(1e-9).is_err());
    }

    #[test]
    fn test_half_band_low_pass_is_unit_impulse() {
        let lpf = low_pass_filter(0.5).unwrap();
        assert_eq!(lpf.len(), 9);
        for (i, tap) in lpf.iter().enumerate() {
            let expected = if i == 4 { 1.0 } else { 0.0 };
            assert_eq!(*tap, Complex::from_real(expected));
        }
    }

    #[test]
    fn test_low_pass_shape() {
        let lpf = low_pass_filter(0.25).unwrap();
        assert_eq!(lpf.len(), 19);
        assert!(is_symmetric(&lpf));
        assert_eq!(lpf[9], Complex::from_real(0.5));
        // zeros fall on every even offset from the center
        assert_eq!(lpf[11].real, 0.0);
        assert!((lpf[10].real - 0.5 * 2.0 / PI).abs() < 1e-15);
        assert!(lpf.iter().all(|c| c.imag == 0.0));
    }

    #[test]
    fn test_low_pass_gain() {
        let unit = low_pass_filter(0.125).unwrap();
        let boosted = low_pass_filter_with_gain(0.125, 4.0).unwrap();
        assert_eq!(unit.len(), boosted.len());
        for (u, b) in unit.iter().zip(boosted.iter()) {
            assert!((u.real * 4.0 - b.real).abs() < 1e-15);
        }
        assert!(low_pass_filter_with_gain(0.125, f64::NAN).is_err());
    }

    #[test]
    fn test_band_pass() {
        let bpf = band_pass_filter(0.1, 0.25).unwrap();
        assert_eq!(bpf.len(), 19);
        assert!(is_symmetric(&bpf));
        assert!((bpf[9].real - 1.0).abs() < 1e-15);

        let lpf = low_pass_filter(0.25).unwrap();
        let n = 3.0;
        let expected = lpf[12].real * 2.0 * (2.0 * PI * 0.1 * n).cos();
        assert!((bpf[12].real - expected).abs() < 1e-15);
    }

    #[test]
    fn test_band_pass_causal() {
        let bpf = band_pass_filter_causal(0.1, 0.25).unwrap();
        assert_eq!(bpf.len(), 19);
        assert_eq!(bpf[0], Complex::from_real(0.5));
        assert_eq!(bpf[2].real, 0.0);
    }

    #[test]
    fn test_band_pass_rejects_bad_center() {
        assert!(band_pass_filter(0.0, 0.25).is_err());
        assert!(band_pass_filter(-1.0, 0.25).is_err());
        assert!(band_pass_filter_causal(f64::NAN, 0.25).is_err());
        assert!(band_pass_filter(0.1, 0.0).is_err());
    }

    #[test]
    fn test_filter_kind_design() {
        let kind = FilterKind::LowPass { band: 0.25, gain: 1.0 };
        assert_eq!(kind.design().unwrap(), low_pass_filter(0.25).unwrap());
        let kind = FilterKind::BandPassCausal { center_freq: 0.1, band: 0.25 };
        assert_eq!(kind.design().unwrap(), band_pass_filter_causal(0.1, 0.25).unwrap());
    }

    #[test]
    fn test_apply_filter_with_unit_impulse() {
        let signal = Signal::from_real(&[3.0, 2.0, 1.0]);
        let out = apply_filter(&signal, &low_pass_filter(0.5).unwrap()).unwrap();
        assert_eq!(out.len(), 3 + 9 - 1);
        assert_eq!(out.real_parts()[4..7], [3.0, 2.0, 1.0]);
    }

    #[quickcheck]
    fn low_pass_length_is_odd(seed: u16) -> bool {
        let band = (seed % 5000 + 1) as f64 / 1000.0;
        low_pass_filter(band).map(|f| f.len() % 2 == 1).unwrap_or(false)
    }
}
