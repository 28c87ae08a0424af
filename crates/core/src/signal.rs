//! Fixed-length discrete-time signals

use crate::{complex::Complex, CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// Ordered sequence of complex samples indexed from 0
///
/// The length is fixed at construction; index order is the time axis.
/// Numeric work happens in [`crate::convolution`], [`crate::filter`] and
/// [`crate::resample`], which always return new signals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Signal {
    values: Vec<Complex>,
}

impl Signal {
    /// Create a signal from existing samples
    pub fn new(values: Vec<Complex>) -> Self {
        Self { values }
    }

    /// Create a real-valued signal (zero imaginary parts)
    pub fn from_real(values: &[f64]) -> Self {
        values.iter().copied().map(Complex::from_real).collect()
    }

    /// Signal of `len` zero samples
    pub fn zeros(len: usize) -> Self {
        Self::new(vec![Complex::zero(); len])
    }

    /// Get the number of samples
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sample at `index`, or `IndexOutOfRange`
    pub fn value_at(&self, index: usize) -> Result<Complex> {
        self.values
            .get(index)
            .copied()
            .ok_or(CoreError::IndexOutOfRange {
                index,
                len: self.values.len(),
            })
    }

    /// Get a reference to the underlying samples
    pub fn values(&self) -> &[Complex] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Complex> {
        self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Complex> {
        self.values.iter()
    }

    /// Real components in order
    pub fn real_parts(&self) -> Vec<f64> {
        self.values.iter().map(|c| c.real).collect()
    }

    /// Same length and every sample within `tolerance`
    pub fn approx_eq(&self, other: &Signal, tolerance: f64) -> bool {
        self.len() == other.len()
            && self
                .values
                .iter()
                .zip(other.values.iter())
                .all(|(a, b)| a.approx_eq(b, tolerance))
    }
}

impl Index<usize> for Signal {
    type Output = Complex;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl FromIterator<Complex> for Signal {
    fn from_iter<I: IntoIterator<Item = Complex>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Complex>> for Signal {
    fn from(values: Vec<Complex>) -> Self {
        Self::new(values)
    }
}

impl<'a> IntoIterator for &'a Signal {
    type Item = &'a Complex;
    type IntoIter = std::slice::Iter<'a, Complex>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// `[v0, v1, ...]`, forwarding any precision to each sample
impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match f.precision() {
                Some(p) => write!(f, "{:.*}", p, value)?,
                None => write!(f, "{}", value)?,
            }
        }
        write!(f, "]")
    }
}
