use super::*;
use crate::decimal::Decimal;
use crate::tables;
use approx::assert_abs_diff_eq;
use twofloat::TwoFloat;

#[test]
fn test_legendre_low_orders() {
    let x = 0.3_f64;
    assert_eq!(legendre_p(0, &x), 1.0);
    assert_eq!(legendre_p(1, &x), x);
    assert_abs_diff_eq!(legendre_p(2, &x), 0.5 * (3.0 * x * x - 1.0), epsilon = 1e-15);
    assert_abs_diff_eq!(
        legendre_p(3, &x),
        0.5 * (5.0 * x * x * x - 3.0 * x),
        epsilon = 1e-15
    );
    assert_abs_diff_eq!(legendre_p_prime(2, &x), 3.0 * x, epsilon = 1e-15);
    assert_abs_diff_eq!(
        legendre_p_prime(3, &x),
        0.5 * (15.0 * x * x - 3.0),
        epsilon = 1e-15
    );
}

#[test]
fn test_legendre_at_boundaries() {
    for n in 0..12 {
        assert_abs_diff_eq!(legendre_p(n, &1.0_f64), 1.0, epsilon = 1e-14);
        let sign = if n % 2 == 0 { 1.0 } else { -1.0 };
        assert_abs_diff_eq!(legendre_p(n, &-1.0_f64), sign, epsilon = 1e-14);
        // P_n'(1) = n (n + 1) / 2
        let expected = (n * (n + 1)) as f64 / 2.0;
        assert_abs_diff_eq!(legendre_p_prime(n, &1.0_f64), expected, epsilon = 1e-10);
    }
}

#[test]
fn test_zeros_count_and_order() {
    for n in 1..=12 {
        let zeros = legendre_p_zeros::<f64>(n);
        assert_eq!(zeros.len(), n.div_ceil(2));
        if n % 2 == 1 {
            assert_eq!(zeros[0], 0.0);
        }
        for i in 1..zeros.len() {
            assert!(zeros[i] > zeros[i - 1]);
        }
        for z in &zeros {
            assert!(legendre_p(n, z).abs() < 1e-13, "P_{}({}) not zero", n, z);
        }
    }
}

#[test]
fn test_zeros_match_f64_tables() {
    for order in tables::TABULATED_ORDERS {
        let zeros = legendre_p_zeros::<f64>(order);
        let table = tables::lookup(order).unwrap();
        for (z, x) in zeros.iter().zip(table.native_abscissa) {
            assert_abs_diff_eq!(*z, *x, epsilon = 1e-15);
        }
    }
}

#[test]
fn test_zeros_twofloat_match_extended_table() {
    let zeros = legendre_p_zeros::<TwoFloat>(20);
    let table = tables::lookup(20).unwrap();
    for (z, &(hi, lo)) in zeros.iter().zip(table.extended_abscissa) {
        let diff = *z - TwoFloat::new_add(hi, lo);
        assert!(CustomNumeric::abs(&diff) < TwoFloat::from(1e-26));
    }
}

#[test]
fn test_zeros_decimal_match_decimal_table() {
    type D60 = Decimal<60>;
    let zeros = legendre_p_zeros::<D60>(7);
    let table = tables::lookup(7).unwrap();
    let tol: D60 = "1e-55".parse().unwrap();
    for (z, literal) in zeros.iter().zip(table.decimal_abscissa) {
        let expected: D60 = literal.parse().unwrap();
        let diff = CustomNumeric::abs(&(z.clone() - expected));
        assert!(diff < tol, "zero {} differs from {}", z, literal);
    }
}
