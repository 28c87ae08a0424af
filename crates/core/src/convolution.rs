//! Direct linear convolution
//!
//! For inputs of length `N` and `M` the output has `N + M - 1` samples and
//!
//! ```text
//! y[k] = sum_{j = max(0, k-N+1)}^{min(k, M-1)} x[k-j] * h[j]
//! ```
//!
//! The summation bounds keep both `x[k-j]` and `h[j]` in range, so the inner
//! loop needs no per-element checks.

use crate::{complex::Complex, signal::Signal, CoreError, Result};
use std::ops::{Add, Mul};

fn convolve_with<T>(v1: &[T], v2: &[T]) -> Result<Vec<T>>
where
    T: Copy + Default + Add<Output = T> + Mul<Output = T>,
{
    if v1.is_empty() || v2.is_empty() {
        return Err(CoreError::invalid(format!(
            "convolution needs non-empty inputs, got lengths {} and {}",
            v1.len(),
            v2.len()
        )));
    }

    let n = v1.len();
    let m = v2.len();
    let final_length = n + m - 1;

    let mut result = Vec::with_capacity(final_length);
    for k in 0..final_length {
        let lower = (k + 1).saturating_sub(n);
        let upper = k.min(m - 1);
        let acc = (lower..=upper).fold(T::default(), |acc, j| acc + v1[k - j] * v2[j]);
        result.push(acc);
    }

    Ok(result)
}

/// Convolve two real sequences
pub fn convolve_real(v1: &[f64], v2: &[f64]) -> Result<Vec<f64>> {
    convolve_with(v1, v2)
}

/// Convolve two complex sequences, accumulating from `0 + 0j`
pub fn convolve_complex(v1: &[Complex], v2: &[Complex]) -> Result<Vec<Complex>> {
    convolve_with(v1, v2)
}

/// Filter `input` with the impulse response `filter`
pub fn convolve(input: &Signal, filter: &Signal) -> Result<Signal> {
    let values = convolve_complex(input.values(), filter.values())?;
    tracing::trace!(
        input = input.len(),
        taps = filter.len(),
        output = values.len(),
        "convolved signal"
    );
    Ok(Signal::new(values))
}
