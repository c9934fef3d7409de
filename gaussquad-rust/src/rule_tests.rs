use super::*;
use approx::assert_abs_diff_eq;
use twofloat::TwoFloat;

#[test]
fn test_rule_constructor() {
    let rule = Rule::new(3, vec![0.0, 0.6_f64.sqrt()], vec![8.0 / 9.0, 5.0 / 9.0]);
    assert_eq!(rule.order(), 3);
    assert_eq!(rule.len(), 2);
    assert!(rule.has_center());
    assert!(rule.validate());
}

#[test]
#[should_panic(expected = "same length")]
fn test_rule_constructor_length_mismatch() {
    let _ = Rule::new(3, vec![0.0, 0.5], vec![1.0]);
}

#[test]
#[should_panic(expected = "non-negative nodes")]
fn test_rule_constructor_wrong_half_length() {
    let _ = Rule::new(4, vec![0.5], vec![1.0]);
}

#[test]
fn test_rule_compute_small_orders() {
    // Two-point rule: +-1/sqrt(3), weights 1
    let rule = Rule::<f64>::compute(2);
    assert_abs_diff_eq!(rule.abscissa()[0], 1.0 / 3.0_f64.sqrt(), epsilon = 1e-15);
    assert_abs_diff_eq!(rule.weights()[0], 1.0, epsilon = 1e-15);

    // Three-point rule: 0, +-sqrt(3/5), weights 8/9 and 5/9
    let rule = Rule::<f64>::compute(3);
    assert_eq!(rule.abscissa()[0], 0.0);
    assert_abs_diff_eq!(rule.abscissa()[1], 0.6_f64.sqrt(), epsilon = 1e-15);
    assert_abs_diff_eq!(rule.weights()[0], 8.0 / 9.0, epsilon = 1e-15);
    assert_abs_diff_eq!(rule.weights()[1], 5.0 / 9.0, epsilon = 1e-15);
}

#[test]
fn test_rule_compute_one_point() {
    let rule = Rule::<f64>::compute(1);
    assert_eq!(rule.abscissa(), &[0.0]);
    assert_abs_diff_eq!(rule.weights()[0], 2.0, epsilon = 1e-15);
    assert!(rule.validate());
}

#[test]
fn test_rule_compute_validates() {
    for order in 1..=40 {
        let rule = Rule::<f64>::compute(order);
        assert!(rule.validate(), "order {} failed validation", order);
        assert_abs_diff_eq!(rule.weight_sum(), 2.0, epsilon = 1e-13);
    }
}

#[test]
fn test_rule_nodes_even() {
    let rule = Rule::<f64>::compute(4);
    let (x, w) = rule.nodes();
    assert_eq!(x.len(), 4);
    assert_eq!(w.len(), 4);
    for i in 1..x.len() {
        assert!(x[i] > x[i - 1]);
    }
    assert_eq!(x[0], -x[3]);
    assert_eq!(x[1], -x[2]);
    assert_eq!(w[0], w[3]);
    assert_abs_diff_eq!(w.iter().sum::<f64>(), 2.0, epsilon = 1e-15);
}

#[test]
fn test_rule_nodes_odd() {
    let rule = Rule::<f64>::compute(5);
    let (x, w) = rule.nodes();
    assert_eq!(x.len(), 5);
    assert_eq!(x[2], 0.0);
    assert_eq!(w[2], rule.weights()[0]);
    for i in 1..x.len() {
        assert!(x[i] > x[i - 1]);
    }
}

#[test]
fn test_rule_validation_rejects_bad_rules() {
    // Unsorted abscissas
    let rule = Rule::new(4, vec![0.8, 0.3], vec![0.5, 0.5]);
    assert!(!rule.validate());

    // Nonzero center for odd order
    let rule = Rule::new(3, vec![0.1, 0.7], vec![0.9, 0.55]);
    assert!(!rule.validate());

    // Weights that do not sum to 2
    let rule = Rule::new(2, vec![0.5], vec![0.9]);
    assert!(!rule.validate());

    // Node outside [0, 1)
    let rule = Rule::new(2, vec![1.0], vec![1.0]);
    assert!(!rule.validate());
}

#[test]
fn test_rule_compute_twofloat_matches_extended_table() {
    for order in [7, 10, 30] {
        let rule = Rule::<TwoFloat>::compute(order);
        assert!(rule.validate(), "order {} failed validation", order);

        let sum_error = (rule.weight_sum() - TwoFloat::from(2.0)).abs();
        assert!(sum_error < TwoFloat::from(1e-29), "order {}: {:?}", order, sum_error);

        let table = crate::tables::lookup(order).unwrap();
        for (w, &(hi, lo)) in rule.weights().iter().zip(table.extended_weights) {
            let diff = (*w - TwoFloat::new_add(hi, lo)).abs();
            assert!(diff < TwoFloat::from(1e-28), "order {}: {:?}", order, diff);
        }
    }
}
