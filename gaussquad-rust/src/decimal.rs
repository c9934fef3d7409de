//! Fixed-precision decimal scalar backed by dashu-float
//!
//! `Decimal<DIGITS>` keeps every value rounded to `DIGITS` significant decimal
//! digits, so arithmetic between two values of the same type stays at that
//! precision. With `DIGITS <= 110` the type is served by the decimal string
//! tables; wider types get their rules computed on demand.
//!
//! ```
//! use gaussquad_rust::*;
//!
//! let one = Decimal::<40>::one();
//! let area = GaussLegendre::<Decimal<40>, 10>::quad(
//!     |x: Decimal<40>| x.clone() * x,
//!     Decimal::zero(),
//!     one,
//! )
//! .unwrap();
//! assert!((area.to_f64() - 1.0 / 3.0).abs() < 1e-15);
//! ```

use crate::numeric::{CustomNumeric, IntegrandValue};
use crate::precision::NumericTraits;
use dashu_base::{Abs, SquareRoot};
use dashu_float::DBig;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

/// Decimal exponent of the infinity sentinel (DBig arithmetic has no infinities)
const DECIMAL_MAX_EXPONENT: isize = 100_000;

/// Radix-10 scalar with `DIGITS` significant digits.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub struct Decimal<const DIGITS: usize>(DBig);

impl<const DIGITS: usize> Decimal<DIGITS> {
    /// Round an arbitrary DBig to this type's precision.
    pub fn from_dbig(value: DBig) -> Self {
        Decimal(value.with_precision(DIGITS).value())
    }

    /// Borrow the underlying DBig.
    pub fn as_dbig(&self) -> &DBig {
        &self.0
    }

    /// Consume into the underlying DBig.
    pub fn into_dbig(self) -> DBig {
        self.0
    }

    /// Exponential function
    pub fn exp(&self) -> Self {
        Self::from_dbig(self.0.clone().exp())
    }

    /// Precision in significant decimal digits
    pub const fn digits() -> usize {
        DIGITS
    }
}

impl<const DIGITS: usize> FromStr for Decimal<DIGITS> {
    type Err = <DBig as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DBig::from_str(s).map(Self::from_dbig)
    }
}

impl<const DIGITS: usize> fmt::Display for Decimal<DIGITS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<const DIGITS: usize> Add for Decimal<DIGITS> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Decimal(self.0 + rhs.0)
    }
}

impl<const DIGITS: usize> Sub for Decimal<DIGITS> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Decimal(self.0 - rhs.0)
    }
}

impl<const DIGITS: usize> Mul for Decimal<DIGITS> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Decimal(self.0 * rhs.0)
    }
}

impl<const DIGITS: usize> Div for Decimal<DIGITS> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Decimal(self.0 / rhs.0)
    }
}

impl<const DIGITS: usize> Neg for Decimal<DIGITS> {
    type Output = Self;

    fn neg(self) -> Self {
        Decimal(-self.0)
    }
}

impl<const DIGITS: usize> CustomNumeric for Decimal<DIGITS> {
    const TRAITS: NumericTraits = NumericTraits::decimal(DIGITS as u32);

    /// NaN has no decimal representation and converts to zero; infinities
    /// convert to the `max_value` sentinel.
    fn from_f64(x: f64) -> Self {
        if x.is_nan() {
            return Self::zero();
        }
        if x.is_infinite() {
            let max = Self::max_value();
            return if x > 0.0 { max } else { -max };
        }
        match DBig::from_str(&format!("{:.17e}", x)) {
            Ok(value) => Self::from_dbig(value),
            Err(_) => Self::zero(),
        }
    }

    fn parse_decimal(literal: &str) -> Option<Self> {
        Self::from_str(literal).ok()
    }

    fn to_f64(&self) -> f64 {
        self.0.to_f64().value()
    }

    fn epsilon() -> Self {
        // 10^(1 - DIGITS)
        match DBig::from_str(&format!("1e-{}", DIGITS.saturating_sub(1))) {
            Ok(value) => Self::from_dbig(value),
            Err(_) => Self::zero(),
        }
    }

    fn max_value() -> Self {
        Self::from_dbig(DBig::from_parts(1.into(), DECIMAL_MAX_EXPONENT))
    }

    fn zero() -> Self {
        Self::from_dbig(DBig::ZERO)
    }

    fn one() -> Self {
        Self::from_dbig(DBig::ONE)
    }

    fn abs(&self) -> Self {
        Decimal(self.0.clone().abs())
    }

    fn sqrt(&self) -> Self {
        Self::from_dbig(self.0.clone().sqrt())
    }

    fn is_nan(&self) -> bool {
        false
    }

    fn is_finite(&self) -> bool {
        // Values built through this type are never infinite
        true
    }
}

impl<const DIGITS: usize> IntegrandValue<Decimal<DIGITS>> for Decimal<DIGITS> {
    fn additive_zero() -> Self {
        <Self as CustomNumeric>::zero()
    }

    fn accumulate(self, other: Self) -> Self {
        self + other
    }

    fn scaled(self, factor: &Self) -> Self {
        self * factor.clone()
    }

    fn negated(self) -> Self {
        -self
    }

    fn magnitude(&self) -> Self {
        CustomNumeric::abs(self)
    }
}

#[cfg(test)]
#[path = "decimal_tests.rs"]
mod tests;
