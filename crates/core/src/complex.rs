//! Complex numbers for IQ samples and filter coefficients
//!
//! Every operation returns a new value; nothing here mutates its receiver.
//! Addition, subtraction, multiplication and scaling are exposed through the
//! `std::ops` operators. The fallible operations (reciprocal, division,
//! tangent, logarithm) return [`Result`].

use crate::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Complex number in rectangular form
///
/// Equality is exact on the `(real, imag)` pair, matching `f64` semantics.
/// Use [`Complex::approx_eq`] when comparing computed values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Purely real value
    pub const fn from_real(real: f64) -> Self {
        Self { real, imag: 0.0 }
    }

    /// Additive identity
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// Multiplicative identity
    pub const fn one() -> Self {
        Self::new(1.0, 0.0)
    }

    /// Euclidean norm, computed with `hypot` so large or tiny components
    /// neither overflow nor underflow
    pub fn magnitude(&self) -> f64 {
        self.real.hypot(self.imag)
    }

    pub fn norm_sqr(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    /// Argument in (-pi, pi]
    pub fn phase(&self) -> f64 {
        self.imag.atan2(self.real)
    }

    pub fn conjugate(&self) -> Self {
        Self::new(self.real, -self.imag)
    }

    pub fn scale(&self, s: f64) -> Self {
        Self::new(self.real * s, self.imag * s)
    }

    pub fn reciprocal(&self) -> Result<Self> {
        let d = self.norm_sqr();
        if d == 0.0 {
            return Err(CoreError::DivisionByZero);
        }
        Ok(Self::new(self.real / d, -(self.imag / d)))
    }

    pub fn divide(&self, other: Complex) -> Result<Self> {
        Ok(*self * other.reciprocal()?)
    }

    /// Polar-form power, valid for any real exponent
    pub fn pow(&self, n: f64) -> Self {
        let r = self.magnitude().powf(n);
        let theta = n * self.phase();
        Self::new(r * theta.cos(), r * theta.sin())
    }

    pub fn exp(&self) -> Self {
        let r = self.real.exp();
        Self::new(r * self.imag.cos(), r * self.imag.sin())
    }

    /// Natural logarithm `(ln|z|, arg z)`
    ///
    /// Only defined for a non-negative real part. Zero has no logarithm.
    pub fn ln(&self) -> Result<Self> {
        if self.real < 0.0 {
            return Err(CoreError::Domain {
                msg: format!("logarithm undefined for negative real part ({})", self.real),
            });
        }
        if self.real == 0.0 && self.imag == 0.0 {
            return Err(CoreError::Domain {
                msg: "logarithm of zero".to_string(),
            });
        }
        Ok(Self::new(self.magnitude().ln(), self.phase()))
    }

    pub fn sin(&self) -> Self {
        Self::new(
            self.real.sin() * self.imag.cosh(),
            self.real.cos() * self.imag.sinh(),
        )
    }

    pub fn cos(&self) -> Self {
        Self::new(
            self.real.cos() * self.imag.cosh(),
            -self.real.sin() * self.imag.sinh(),
        )
    }

    pub fn tan(&self) -> Result<Self> {
        self.sin().divide(self.cos())
    }

    /// Component-wise comparison with an absolute tolerance
    pub fn approx_eq(&self, other: &Complex, tolerance: f64) -> bool {
        (self.real - other.real).abs() <= tolerance && (self.imag - other.imag).abs() <= tolerance
    }
}

impl From<f64> for Complex {
    fn from(real: f64) -> Self {
        Complex::from_real(real)
    }
}

impl Add for Complex {
    type Output = Complex;

    fn add(self, rhs: Complex) -> Self::Output {
        Complex::new(self.real + rhs.real, self.imag + rhs.imag)
    }
}

impl Sub for Complex {
    type Output = Complex;

    fn sub(self, rhs: Complex) -> Self::Output {
        Complex::new(self.real - rhs.real, self.imag - rhs.imag)
    }
}

impl Mul for Complex {
    type Output = Complex;

    fn mul(self, rhs: Complex) -> Self::Output {
        Complex::new(
            self.real * rhs.real - self.imag * rhs.imag,
            self.real * rhs.imag + rhs.real * self.imag,
        )
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Neg for Complex {
    type Output = Complex;

    fn neg(self) -> Self::Output {
        Complex::new(-self.real, -self.imag)
    }
}

/// Renders `re`, `im j`, `re + im j`, or `re im j` when the imaginary part is
/// negative. A `{:.N}` precision applies to both components.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision();
        let part = |v: f64| match precision {
            Some(p) => format!("{:.*}", p, v),
            None => format!("{:?}", v),
        };

        if self.imag == 0.0 {
            write!(f, "{}", part(self.real))
        } else if self.real == 0.0 {
            write!(f, "{} j", part(self.imag))
        } else if self.imag < 0.0 {
            write!(f, "{} {} j", part(self.real), part(self.imag))
        } else {
            write!(f, "{} + {} j", part(self.real), part(self.imag))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-12;

    fn bounded(values: &[f64], limit: f64) -> bool {
        values.iter().all(|v| v.is_finite() && v.abs() <= limit)
    }

    #[test]
    fn test_complex_operations() {
        let c = Complex::new(3.0, 4.0);
        assert_eq!(c.magnitude(), 5.0);
        assert!((c.phase() - 0.9272952180016122).abs() < 1e-10);
        assert_eq!(c.conjugate(), Complex::new(3.0, -4.0));
        assert_eq!(c.scale(2.0), Complex::new(6.0, 8.0));
    }

    #[test]
    fn test_magnitude_does_not_overflow() {
        let c = Complex::new(1e300, 1e300);
        assert!(c.magnitude().is_finite());
        assert!((c.magnitude() / 1e300 - 2f64.sqrt()).abs() < 1e-12);

        let tiny = Complex::new(3e-300, 4e-300);
        assert!((tiny.magnitude() / 1e-300 - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_phase_on_imaginary_axis() {
        assert!((Complex::new(0.0, 2.0).phase() - PI / 2.0).abs() < EPS);
        assert!((Complex::new(0.0, -2.0).phase() + PI / 2.0).abs() < EPS);
        assert!((Complex::new(-1.0, 0.0).phase() - PI).abs() < EPS);
    }

    #[test]
    fn test_arithmetic() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(1.0, 1.0);
        assert_eq!(a + b, Complex::new(2.0, 3.0));
        assert_eq!(a - b, Complex::new(0.0, 1.0));
        assert_eq!(a * b, Complex::new(-1.0, 3.0));
        assert_eq!(-a, Complex::new(-1.0, -2.0));
        assert_eq!(a * 3.0, Complex::new(3.0, 6.0));
    }

    #[test]
    fn test_reciprocal_and_divide() {
        let a = Complex::new(3.0, 4.0);
        let r = a.reciprocal().unwrap();
        assert!(r.approx_eq(&Complex::new(0.12, -0.16), EPS));

        let q = Complex::new(-1.0, 3.0).divide(Complex::new(1.0, 1.0)).unwrap();
        assert!(q.approx_eq(&Complex::new(1.0, 2.0), EPS));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(Complex::zero().reciprocal(), Err(CoreError::DivisionByZero));
        assert_eq!(
            Complex::one().divide(Complex::zero()),
            Err(CoreError::DivisionByZero)
        );
    }

    #[test]
    fn test_pow() {
        let i = Complex::new(0.0, 1.0);
        assert!(i.pow(2.0).approx_eq(&Complex::new(-1.0, 0.0), EPS));
        assert!(Complex::new(4.0, 0.0).pow(0.5).approx_eq(&Complex::new(2.0, 0.0), EPS));
        let a = Complex::new(1.5, -0.5);
        assert!(a.pow(3.0).approx_eq(&(a * a * a), 1e-12));
    }

    #[test]
    fn test_exp_and_ln() {
        let z = Complex::new(0.0, PI).exp();
        assert!(z.approx_eq(&Complex::new(-1.0, 0.0), EPS));

        let w = Complex::new(1.0, 1.0);
        let back = w.ln().unwrap().exp();
        assert!(back.approx_eq(&w, EPS));
    }

    #[test]
    fn test_ln_domain() {
        assert!(matches!(
            Complex::new(-1.0, 0.5).ln(),
            Err(CoreError::Domain { .. })
        ));
        assert!(matches!(Complex::zero().ln(), Err(CoreError::Domain { .. })));
        let l = Complex::new(0.0, 1.0).ln().unwrap();
        assert!(l.approx_eq(&Complex::new(0.0, PI / 2.0), EPS));
    }

    #[test]
    fn test_trigonometry() {
        let z = Complex::new(0.7, -0.3);
        let s = z.sin();
        let c = z.cos();
        // sin^2 + cos^2 = 1 holds for complex arguments too
        assert!((s * s + c * c).approx_eq(&Complex::one(), 1e-12));
        let t = z.tan().unwrap();
        assert!((t * c).approx_eq(&s, 1e-12));
        assert!(Complex::from_real(0.5).sin().approx_eq(&Complex::from_real(0.5f64.sin()), EPS));
    }

    #[test]
    fn test_display() {
        assert_eq!((Complex::new(1.0, 2.0) + Complex::new(1.0, 1.0)).to_string(), "2.0 + 3.0 j");
        assert_eq!(Complex::new(3.0, -4.0).to_string(), "3.0 -4.0 j");
        assert_eq!(Complex::new(0.0, -2.5).to_string(), "-2.5 j");
        assert_eq!(Complex::new(5.0, 0.0).to_string(), "5.0");
        assert_eq!(Complex::zero().to_string(), "0.0");
        assert_eq!(format!("{:.2}", Complex::new(1.0, 0.5)), "1.00 + 0.50 j");
    }

    #[quickcheck]
    fn add_then_subtract_is_identity(ar: f64, ai: f64, br: f64, bi: f64) -> TestResult {
        if !bounded(&[ar, ai, br, bi], 1e6) {
            return TestResult::discard();
        }
        let a = Complex::new(ar, ai);
        let b = Complex::new(br, bi);
        TestResult::from_bool(((a + b) - b).approx_eq(&a, 1e-6))
    }

    #[quickcheck]
    fn multiply_by_reciprocal_is_one(re: f64, im: f64) -> TestResult {
        if !bounded(&[re, im], 1e3) {
            return TestResult::discard();
        }
        let a = Complex::new(re, im);
        if a.magnitude() < 1e-3 {
            return TestResult::discard();
        }
        let product = a * a.reciprocal().unwrap();
        TestResult::from_bool(product.approx_eq(&Complex::one(), 1e-9))
    }
}
