//! Table selection for built-in and user-defined scalar types

use approx::assert_abs_diff_eq;
use gaussquad_rust::{
    provider, Complex, CustomNumeric, Decimal, GaussLegendre, IntegrandValue, NumericTraits,
    PrecisionCategory, TwoFloat, TABULATED_ORDERS,
};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A scalar that declares no numeric traits, so its rules are computed on demand.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
struct Plain(f64);

impl fmt::Display for Plain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Plain {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Plain(self.0 + rhs.0)
    }
}

impl Sub for Plain {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Plain(self.0 - rhs.0)
    }
}

impl Mul for Plain {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Plain(self.0 * rhs.0)
    }
}

impl Div for Plain {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        Plain(self.0 / rhs.0)
    }
}

impl Neg for Plain {
    type Output = Self;
    fn neg(self) -> Self {
        Plain(-self.0)
    }
}

impl CustomNumeric for Plain {
    fn from_f64(x: f64) -> Self {
        Plain(x)
    }

    fn to_f64(&self) -> f64 {
        self.0
    }

    fn epsilon() -> Self {
        Plain(f64::EPSILON)
    }

    fn max_value() -> Self {
        Plain(f64::MAX)
    }

    fn abs(&self) -> Self {
        Plain(self.0.abs())
    }

    fn sqrt(&self) -> Self {
        Plain(self.0.sqrt())
    }

    fn is_nan(&self) -> bool {
        self.0.is_nan()
    }

    fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl IntegrandValue<Plain> for Plain {
    fn additive_zero() -> Self {
        Plain(0.0)
    }

    fn accumulate(self, other: Self) -> Self {
        self + other
    }

    fn scaled(self, factor: &Plain) -> Self {
        self * *factor
    }

    fn negated(self) -> Self {
        -self
    }

    fn magnitude(&self) -> Plain {
        CustomNumeric::abs(self)
    }
}

#[test]
fn test_builtin_categories() {
    assert_eq!(<f32 as CustomNumeric>::CATEGORY, PrecisionCategory::Native);
    assert_eq!(<f64 as CustomNumeric>::CATEGORY, PrecisionCategory::Native);
    assert_eq!(<TwoFloat as CustomNumeric>::CATEGORY, PrecisionCategory::Extended);
    assert_eq!(<Decimal<50> as CustomNumeric>::CATEGORY, PrecisionCategory::Decimal);
    assert_eq!(<Decimal<110> as CustomNumeric>::CATEGORY, PrecisionCategory::Decimal);
    assert_eq!(<Decimal<111> as CustomNumeric>::CATEGORY, PrecisionCategory::OnDemand);
    assert_eq!(<Decimal<150> as CustomNumeric>::CATEGORY, PrecisionCategory::OnDemand);
}

#[test]
fn test_unspecialized_type_is_on_demand() {
    assert!(!Plain::TRAITS.is_specialized);
    assert_eq!(Plain::TRAITS, NumericTraits::UNSPECIALIZED);
    assert_eq!(Plain::CATEGORY, PrecisionCategory::OnDemand);
}

#[test]
fn test_computed_rules_match_native_tables() {
    for order in TABULATED_ORDERS {
        let computed = provider::rule::<Plain>(order).unwrap();
        let tabulated = provider::rule::<f64>(order).unwrap();
        assert!(computed.validate(), "order {}", order);
        assert_eq!(computed.len(), tabulated.len());

        for (c, t) in computed.abscissa().iter().zip(tabulated.abscissa()) {
            assert_abs_diff_eq!(c.0, *t, epsilon = 1e-15);
        }
        for (c, t) in computed.weights().iter().zip(tabulated.weights()) {
            assert_abs_diff_eq!(c.0, *t, epsilon = 1e-14);
        }
    }
}

#[test]
fn test_on_demand_evaluation() {
    let gauss = GaussLegendre::<Plain, 20>::new();
    let result = gauss
        .integrate_range(|x: Plain| x * x * x, Plain(0.0), Plain(2.0))
        .unwrap();
    assert_abs_diff_eq!(result.0, 4.0, epsilon = 1e-13);

    let result = gauss
        .integrate_range(
            |x: Plain| Plain(1.0) / (x * x),
            Plain(1.0),
            Plain(f64::INFINITY),
        )
        .unwrap();
    assert_abs_diff_eq!(result.0, 1.0, epsilon = 1e-14);

    // Complex results over a user-defined scalar
    let result = gauss.integrate(|x: Plain| Complex::new(x, Plain(1.0)));
    assert_abs_diff_eq!(result.re.0, 0.0, epsilon = 1e-15);
    assert_abs_diff_eq!(result.im.0, 2.0, epsilon = 1e-14);
}

#[test]
fn test_decimal_tier_precision() {
    // Center weight of the 7-point rule is 512/1225
    let weights = provider::weights::<Decimal<60>>(7).unwrap();
    let exact: Decimal<60> = "512".parse::<Decimal<60>>().unwrap()
        / "1225".parse::<Decimal<60>>().unwrap();
    let tol: Decimal<60> = "1e-58".parse().unwrap();
    assert!(CustomNumeric::abs(&(weights[0].clone() - exact)) < tol);
}
