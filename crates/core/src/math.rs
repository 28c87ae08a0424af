//! Integer helpers for rate-change factor decomposition

use crate::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Greatest common divisor by the Euclidean algorithm; `gcd(a, 0) == a`
pub fn gcd(a: usize, b: usize) -> usize {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Coprime expansion/decimation pair for a rational rate change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RateFactors {
    /// Expansion (upsampling) factor F1
    pub up: usize,
    /// Decimation (downsampling) factor F2
    pub down: usize,
}

impl RateFactors {
    /// True when both factors are 1
    pub fn is_identity(&self) -> bool {
        self.up == 1 && self.down == 1
    }

    /// Output-to-input sample count ratio, `up / down`
    pub fn ratio(&self) -> f64 {
        self.up as f64 / self.down as f64
    }
}

/// Reduce the sampling periods `target` (T1) and `source` (T2) by their gcd
pub fn rate_factors(target: usize, source: usize) -> Result<RateFactors> {
    if target == 0 || source == 0 {
        return Err(CoreError::invalid(format!(
            "sampling periods must be positive, got T1={} and T2={}",
            target, source
        )));
    }

    let g = gcd(target, source);
    Ok(RateFactors {
        up: target / g,
        down: source / g,
    })
}
