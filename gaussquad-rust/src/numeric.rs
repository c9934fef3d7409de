//! Custom numeric traits for quadrature scalars
//!
//! This module provides the scalar trait used by the rule tables and the
//! evaluator, with implementations for f32, f64 and TwoFloat. The
//! arbitrary-precision [`Decimal`](crate::Decimal) type implements it in its
//! own module.
//!
//! Methods take `&self` so that non-`Copy` scalars (DBig-backed decimals) can
//! implement the trait without cloning on every call.

use crate::precision::{EXTENDED_DIGITS, NumericTraits, PrecisionCategory};
use num_complex::Complex;
use num_traits::Float;
use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Neg, Sub};
use twofloat::TwoFloat;

/// Scalar type usable as the abscissa type of a Gauss-Legendre rule.
///
/// Implementors describe their precision through [`CustomNumeric::TRAITS`];
/// the table tier is then derived at compile time as
/// [`CustomNumeric::CATEGORY`]. A type that keeps the default `TRAITS`
/// is unspecialized and gets its rules computed on demand.
pub trait CustomNumeric:
    Clone
    + Debug
    + Display
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Numeric facts used for table selection
    const TRAITS: NumericTraits = NumericTraits::UNSPECIALIZED;

    /// Table tier for this type
    const CATEGORY: PrecisionCategory = PrecisionCategory::classify(&Self::TRAITS);

    /// Convert from f64 to Self
    fn from_f64(x: f64) -> Self;

    /// Build a value from an unevaluated double-double sum `hi + lo`
    fn from_hi_lo(hi: f64, lo: f64) -> Self {
        Self::from_f64(hi) + Self::from_f64(lo)
    }

    /// Parse a decimal literal such as `"0.405845151377397166906606412"`
    ///
    /// Returns `None` for types that cannot be built from strings.
    fn parse_decimal(_literal: &str) -> Option<Self> {
        None
    }

    /// Convert to f64 (lossy for wider types)
    fn to_f64(&self) -> f64;

    /// Machine epsilon
    fn epsilon() -> Self;

    /// Largest finite value, used as the infinity sentinel for bounds
    fn max_value() -> Self;

    /// `self / rhs` to the full precision of the type
    ///
    /// Rules and interval transforms divide through this method, so types
    /// whose `Div` operator loses precision can override it.
    fn quotient(&self, rhs: &Self) -> Self {
        self.clone() / rhs.clone()
    }

    /// Zero
    fn zero() -> Self {
        Self::from_f64(0.0)
    }

    /// One
    fn one() -> Self {
        Self::from_f64(1.0)
    }

    /// Absolute value
    fn abs(&self) -> Self;

    /// Square root
    fn sqrt(&self) -> Self;

    /// Check for NaN
    fn is_nan(&self) -> bool;

    /// Check if value is finite
    fn is_finite(&self) -> bool;
}

macro_rules! impl_native_numeric {
    ($($t:ty),*) => {$(
        impl CustomNumeric for $t {
            const TRAITS: NumericTraits = NumericTraits::binary(<$t>::MANTISSA_DIGITS, true, true);

            fn from_f64(x: f64) -> Self {
                x as $t
            }

            fn parse_decimal(literal: &str) -> Option<Self> {
                literal.parse().ok()
            }

            fn to_f64(&self) -> f64 {
                *self as f64
            }

            fn epsilon() -> Self {
                <$t as Float>::epsilon()
            }

            fn max_value() -> Self {
                <$t as Float>::max_value()
            }

            fn abs(&self) -> Self {
                <$t as Float>::abs(*self)
            }

            fn sqrt(&self) -> Self {
                <$t as Float>::sqrt(*self)
            }

            fn is_nan(&self) -> bool {
                <$t as Float>::is_nan(*self)
            }

            fn is_finite(&self) -> bool {
                <$t as Float>::is_finite(*self)
            }
        }
    )*};
}

impl_native_numeric!(f32, f64);

/// TwoFloat implementation of CustomNumeric
impl CustomNumeric for TwoFloat {
    const TRAITS: NumericTraits = NumericTraits::binary(EXTENDED_DIGITS, true, false);

    fn from_f64(x: f64) -> Self {
        TwoFloat::from(x)
    }

    fn from_hi_lo(hi: f64, lo: f64) -> Self {
        TwoFloat::new_add(hi, lo)
    }

    fn to_f64(&self) -> f64 {
        self.hi() + self.lo()
    }

    fn epsilon() -> Self {
        // 2^-104
        TwoFloat::from(f64::EPSILON * f64::EPSILON)
    }

    fn max_value() -> Self {
        TwoFloat::from(f64::MAX)
    }

    fn quotient(&self, rhs: &Self) -> Self {
        // Long division on the leading word: three f64 quotient digits
        let divisor = rhs.hi();
        let q1 = self.hi() / divisor;
        let r = *self - scale_by_f64(rhs, q1);
        let q2 = r.hi() / divisor;
        let r = r - scale_by_f64(rhs, q2);
        let q3 = r.hi() / divisor;
        TwoFloat::new_add(q1, q2) + TwoFloat::from(q3)
    }

    fn abs(&self) -> Self {
        let value: TwoFloat = *self;
        value.abs()
    }

    fn sqrt(&self) -> Self {
        let value: TwoFloat = *self;
        value.sqrt()
    }

    fn is_nan(&self) -> bool {
        self.hi().is_nan()
    }

    fn is_finite(&self) -> bool {
        self.hi().is_finite()
    }
}

/// `value * factor` with the leading product formed exactly.
fn scale_by_f64(value: &TwoFloat, factor: f64) -> TwoFloat {
    let hi = value.hi() * factor;
    let lo = value.hi().mul_add(factor, -hi) + value.lo() * factor;
    TwoFloat::new_add(hi, lo)
}

/// Result type of an integrand: a real or complex value over scalar `T`.
///
/// Only floating point results implement this trait, so an integrand
/// returning an integer type is rejected at compile time.
pub trait IntegrandValue<T: CustomNumeric>: Clone {
    /// Additive identity
    fn additive_zero() -> Self;

    /// `self + other`
    fn accumulate(self, other: Self) -> Self;

    /// `self * factor`
    fn scaled(self, factor: &T) -> Self;

    /// `-self`
    fn negated(self) -> Self;

    /// Absolute value (modulus for complex values)
    fn magnitude(&self) -> T;
}

macro_rules! impl_real_integrand_value {
    ($($t:ty),*) => {$(
        impl IntegrandValue<$t> for $t {
            fn additive_zero() -> Self {
                <$t as CustomNumeric>::zero()
            }

            fn accumulate(self, other: Self) -> Self {
                self + other
            }

            fn scaled(self, factor: &$t) -> Self {
                self * *factor
            }

            fn negated(self) -> Self {
                -self
            }

            fn magnitude(&self) -> $t {
                CustomNumeric::abs(self)
            }
        }
    )*};
}

impl_real_integrand_value!(f32, f64, TwoFloat);

impl<T: CustomNumeric> IntegrandValue<T> for Complex<T> {
    fn additive_zero() -> Self {
        Complex::new(T::zero(), T::zero())
    }

    fn accumulate(self, other: Self) -> Self {
        Complex::new(self.re + other.re, self.im + other.im)
    }

    fn scaled(self, factor: &T) -> Self {
        Complex::new(self.re * factor.clone(), self.im * factor.clone())
    }

    fn negated(self) -> Self {
        Complex::new(-self.re, -self.im)
    }

    fn magnitude(&self) -> T {
        let re = self.re.abs();
        let im = self.im.abs();
        let (big, small) = if re >= im { (re, im) } else { (im, re) };
        if big == T::zero() {
            return big;
        }
        let ratio = small.quotient(&big);
        big * (T::one() + ratio.clone() * ratio).sqrt()
    }
}

#[cfg(test)]
#[path = "numeric_tests.rs"]
mod tests;
