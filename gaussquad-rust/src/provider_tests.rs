use super::*;
use crate::decimal::Decimal;
use approx::assert_abs_diff_eq;
use twofloat::TwoFloat;

#[test]
fn test_supported_orders() {
    for order in tables::TABULATED_ORDERS {
        assert!(is_supported_order(order));
    }
    assert!(!is_supported_order(0));
    assert_eq!(rule::<f64>(0).unwrap_err(), GaussError::UnsupportedOrder(0));
}

#[cfg(not(feature = "arbitrary-order"))]
#[test]
fn test_untabulated_order_rejected() {
    assert!(!is_supported_order(8));
    assert_eq!(rule::<f64>(8).unwrap_err(), GaussError::UnsupportedOrder(8));
    assert!(abscissa::<f64>(31).is_err());
    assert!(weights::<TwoFloat>(12).is_err());
}

#[cfg(feature = "arbitrary-order")]
#[test]
fn test_untabulated_order_computed() {
    let rule = rule::<f64>(8).unwrap();
    assert_eq!(rule.len(), 4);
    assert!(rule.validate());
}

#[test]
fn test_rule_is_shared() {
    let first = rule::<f64>(30).unwrap();
    let second = rule::<f64>(30).unwrap();
    assert!(std::ptr::eq(first, second));

    // f32 and f64 rules are distinct cache entries
    let single = rule::<f32>(30).unwrap();
    assert_eq!(single.len(), first.len());
}

#[test]
fn test_native_rules_match_tables() {
    for order in tables::TABULATED_ORDERS {
        let x = abscissa::<f64>(order).unwrap();
        let w = weights::<f64>(order).unwrap();
        let table = tables::lookup(order).unwrap();
        assert_eq!(x, table.native_abscissa);
        assert_eq!(w, table.native_weights);
    }
}

#[test]
fn test_weight_sums_every_tier() {
    for order in tables::TABULATED_ORDERS {
        let sum = rule::<f32>(order).unwrap().weight_sum();
        assert!((sum - 2.0).abs() < 1e-5, "f32 order {}: {}", order, sum);

        let sum = rule::<f64>(order).unwrap().weight_sum();
        assert_abs_diff_eq!(sum, 2.0, epsilon = 1e-14);

        let sum = rule::<TwoFloat>(order).unwrap().weight_sum();
        let diff = CustomNumeric::abs(&(sum - TwoFloat::from(2.0)));
        assert!(diff < TwoFloat::from(1e-29), "TwoFloat order {}", order);

        let sum = rule::<Decimal<50>>(order).unwrap().weight_sum();
        let diff = CustomNumeric::abs(&(sum - Decimal::<50>::from_f64(2.0)));
        let tol: Decimal<50> = "1e-47".parse().unwrap();
        assert!(diff < tol, "Decimal<50> order {}", order);
    }
}

#[test]
fn test_every_tier_validates() {
    for order in tables::TABULATED_ORDERS {
        assert!(rule::<f32>(order).unwrap().validate());
        assert!(rule::<f64>(order).unwrap().validate());
        assert!(rule::<TwoFloat>(order).unwrap().validate());
        assert!(rule::<Decimal<20>>(order).unwrap().validate());
    }
}

#[test]
fn test_extended_tier_keeps_low_word() {
    let table = tables::lookup(15).unwrap();
    let rule = rule::<TwoFloat>(15).unwrap();
    for (x, &(hi, lo)) in rule.abscissa().iter().zip(table.extended_abscissa) {
        assert_eq!(x.hi(), hi);
        assert_eq!(x.lo(), lo);
    }
}

#[test]
fn test_on_demand_matches_decimal_table() {
    // Decimal<120> is too wide for the string tables and is computed on demand
    assert_eq!(<Decimal<120> as CustomNumeric>::CATEGORY, PrecisionCategory::OnDemand);
    let computed = rule::<Decimal<120>>(7).unwrap();
    let tabulated = rule::<Decimal<100>>(7).unwrap();
    let tol: Decimal<120> = "1e-95".parse().unwrap();

    for (c, t) in computed.abscissa().iter().zip(tabulated.abscissa()) {
        let t = Decimal::<120>::from_dbig(t.as_dbig().clone());
        assert!(CustomNumeric::abs(&(c.clone() - t)) < tol);
    }
    for (c, t) in computed.weights().iter().zip(tabulated.weights()) {
        let t = Decimal::<120>::from_dbig(t.as_dbig().clone());
        assert!(CustomNumeric::abs(&(c.clone() - t)) < tol);
    }
}
