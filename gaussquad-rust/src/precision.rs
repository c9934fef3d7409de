//! Precision classification for quadrature scalar types
//!
//! Every scalar type used with the quadrature engine is mapped to exactly one
//! [`PrecisionCategory`], which decides how its node/weight tables are obtained:
//!
//! - `Native`: binary types no wider than f64, tables stored as f64 literals
//! - `Extended`: binary types no wider than double-double, tables stored as
//!   `(hi, lo)` pairs of f64
//! - `Decimal`: types parsed from decimal string literals (up to 110 digits)
//! - `OnDemand`: everything else, nodes computed by root finding on first use
//!
//! The classification is a `const fn` of the type's [`NumericTraits`], so it is
//! resolved once per instantiated type at compile time.

/// Significant bits of an IEEE double.
pub const NATIVE_DIGITS: u32 = f64::MANTISSA_DIGITS;

/// Significant bits of a double-double (`hi + lo`) value.
pub const EXTENDED_DIGITS: u32 = 2 * f64::MANTISSA_DIGITS;

/// Largest decimal precision covered by the string tables.
pub const DECIMAL_DIGITS10: u32 = 110;

/// Numeric facts about a scalar type that drive table selection.
///
/// This is the equivalent of a numeric-limits record: radix, number of
/// significant digits in that radix, and which literal forms the type can be
/// constructed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericTraits {
    /// Whether the other fields carry meaningful values
    pub is_specialized: bool,
    /// Radix of the significand
    pub radix: u32,
    /// Significant digits in `radix`
    pub digits: u32,
    /// Decimal digits that survive a round trip
    pub digits10: u32,
    /// Constructible from f64 values (and so from hi/lo pairs)
    pub from_native: bool,
    /// Constructible from decimal string literals
    pub from_decimal: bool,
}

impl NumericTraits {
    /// Descriptor for a type that declares no numeric traits.
    pub const UNSPECIALIZED: NumericTraits = NumericTraits {
        is_specialized: false,
        radix: 0,
        digits: 0,
        digits10: 0,
        from_native: false,
        from_decimal: false,
    };

    /// Descriptor for a binary floating point type with `digits` significant bits.
    pub const fn binary(digits: u32, from_native: bool, from_decimal: bool) -> Self {
        NumericTraits {
            is_specialized: true,
            radix: 2,
            digits,
            // floor((digits - 1) * log10(2)), with log10(2) ~ 30103 / 100000
            digits10: ((digits.saturating_sub(1) as u64 * 30103) / 100000) as u32,
            from_native,
            from_decimal,
        }
    }

    /// Descriptor for a radix-10 type with `digits` significant decimal digits.
    pub const fn decimal(digits: u32) -> Self {
        NumericTraits {
            is_specialized: true,
            radix: 10,
            digits,
            digits10: digits,
            from_native: true,
            from_decimal: true,
        }
    }
}

/// Table representation backing a scalar type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrecisionCategory {
    /// f64 literal tables
    Native,
    /// Double-double `(hi, lo)` literal tables
    Extended,
    /// 115-digit decimal string tables
    Decimal,
    /// No table: Legendre roots computed on first use
    OnDemand,
}

impl PrecisionCategory {
    /// Classify a scalar type from its numeric traits.
    ///
    /// Total: every descriptor maps to exactly one category.
    pub const fn classify(traits: &NumericTraits) -> Self {
        if !traits.is_specialized {
            return PrecisionCategory::OnDemand;
        }
        if traits.radix == 2 {
            if traits.digits <= NATIVE_DIGITS && traits.from_native {
                return PrecisionCategory::Native;
            }
            if traits.digits <= EXTENDED_DIGITS && traits.from_native {
                return PrecisionCategory::Extended;
            }
        }
        if traits.digits10 <= DECIMAL_DIGITS10 && traits.from_decimal {
            PrecisionCategory::Decimal
        } else {
            PrecisionCategory::OnDemand
        }
    }

    /// Whether rules of this category come from literal tables.
    pub const fn is_tabulated(self) -> bool {
        !matches!(self, PrecisionCategory::OnDemand)
    }
}

#[cfg(test)]
#[path = "precision_tests.rs"]
mod tests;
