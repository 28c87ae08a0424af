//! sigrate core - discrete-time signal processing primitives
//!
//! This crate provides complex arithmetic, direct convolution, windowed-sinc
//! FIR design and rational sample rate conversion over fixed-length,
//! in-memory signals.

pub mod complex;
pub mod convolution;
pub mod error;
pub mod filter;
pub mod math;
pub mod resample;
pub mod signal;

pub use error::{CoreError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        complex::Complex,
        convolution::{convolve, convolve_complex, convolve_real},
        error::{CoreError, Result},
        filter::{band_pass_filter, band_pass_filter_causal, low_pass_filter, sinc, FilterKind},
        math::{gcd, rate_factors, RateFactors},
        resample::{convert_rate, decimate, expand, interpolate, RateConverter},
        signal::Signal,
    };
}
