//! Gauss-Legendre quadrature for numerical integration
//!
//! The integral of f(x) over [-1, 1] is approximated by a weighted sum:
//!
//! sum(f(xi) * wi for (xi, wi) in zip(x, w))
//!
//! which is exact for polynomials of degree up to 2N - 1. Finite, semi-infinite
//! and infinite intervals are mapped onto [-1, 1] by a change of variables,
//! so every call costs exactly N evaluations of the integrand.
//!
//! Alongside the integral the evaluator accumulates the same weighted sum of
//! `|f|`, an L1 estimate that callers can use to judge cancellation.
//!
//! ```
//! use gaussquad_rust::GaussLegendre;
//!
//! let gauss = GaussLegendre::<f64, 7>::new();
//! let area = gauss.integrate_range(|x: f64| x * x, 0.0, 3.0).unwrap();
//! assert!((area - 9.0).abs() < 1e-12);
//! ```
//!
//! Integrands must return a real or complex floating point value:
//!
//! ```compile_fail
//! use gaussquad_rust::GaussLegendre;
//!
//! let truncated = GaussLegendre::<f64, 7>::new().integrate(|x: f64| x as i32);
//! ```
//!
//! and the order is checked when the evaluator type is instantiated:
//!
//! ```compile_fail
//! use gaussquad_rust::GaussLegendre;
//!
//! let empty = GaussLegendre::<f64, 0>::new();
//! ```

use crate::error::{GaussError, Result};
use crate::numeric::{CustomNumeric, IntegrandValue};
use crate::provider;
use crate::rule::Rule;

/// N-point Gauss-Legendre quadrature over scalar type `T`.
///
/// `N` must be one of 7, 10, 15, 20, 25, 30 unless the `arbitrary-order`
/// feature is enabled. The rule itself is shared process-wide, so creating an
/// evaluator is cheap after the first use of a given `(T, N)`.
#[derive(Debug)]
pub struct GaussLegendre<T: 'static, const N: usize> {
    rule: &'static Rule<T>,
}

impl<T: 'static, const N: usize> Clone for GaussLegendre<T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static, const N: usize> Copy for GaussLegendre<T, N> {}

impl<T: CustomNumeric, const N: usize> Default for GaussLegendre<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> GaussLegendre<T, N>
where
    T: CustomNumeric,
{
    const ORDER_CHECK: () = assert!(
        provider::is_supported_order(N),
        "Gauss-Legendre order must be one of 7, 10, 15, 20, 25, 30 (any order >= 1 with the `arbitrary-order` feature)"
    );

    /// Evaluator backed by the shared rule for `(T, N)`.
    pub fn new() -> Self {
        let () = Self::ORDER_CHECK;
        Self {
            rule: provider::cached_rule(N),
        }
    }

    /// Integrate `f` over `[a, b]` with a throwaway evaluator.
    pub fn quad<K, F>(f: F, a: T, b: T) -> Result<K>
    where
        F: Fn(T) -> K,
        K: IntegrandValue<T>,
    {
        Self::new().integrate_range(f, a, b)
    }

    /// The underlying half rule
    pub fn rule(&self) -> &'static Rule<T> {
        self.rule
    }

    /// Non-negative abscissas, ascending
    pub fn abscissa(&self) -> &'static [T] {
        self.rule.abscissa()
    }

    /// Weights matching [`GaussLegendre::abscissa`]
    pub fn weights(&self) -> &'static [T] {
        self.rule.weights()
    }

    /// Integrate `f` over the canonical interval [-1, 1].
    pub fn integrate<K, F>(&self, f: F) -> K
    where
        F: Fn(T) -> K,
        K: IntegrandValue<T>,
    {
        self.sum(&f).0
    }

    /// Integrate `f` over [-1, 1], also returning the L1 estimate of `|f|`.
    pub fn integrate_with_l1<K, F>(&self, f: F) -> (K, T)
    where
        F: Fn(T) -> K,
        K: IntegrandValue<T>,
    {
        self.sum(&f)
    }

    /// Integrate `f` over `[a, b]`.
    ///
    /// Either bound may be infinite: a bound at or beyond `T::max_value()`
    /// in magnitude is treated as infinity. Reversed bounds flip the sign,
    /// and `a == b` gives exactly zero.
    ///
    /// # Errors
    /// [`GaussError::InvalidDomain`] if a bound is NaN or the bounds do not
    /// describe an interval (for example `a = +inf`).
    pub fn integrate_range<K, F>(&self, f: F, a: T, b: T) -> Result<K>
    where
        F: Fn(T) -> K,
        K: IntegrandValue<T>,
    {
        self.transform(&f, a, b).map(|(q, _)| q)
    }

    /// Integrate `f` over `[a, b]`, also returning the L1 estimate of `|f|`.
    ///
    /// The L1 estimate is unaffected by the orientation of the bounds.
    pub fn integrate_range_with_l1<K, F>(&self, f: F, a: T, b: T) -> Result<(K, T)>
    where
        F: Fn(T) -> K,
        K: IntegrandValue<T>,
    {
        self.transform(&f, a, b)
    }

    /// Weighted sum over [-1, 1]; exactly N evaluations of `f`.
    fn sum<K: IntegrandValue<T>>(&self, f: &dyn Fn(T) -> K) -> (K, T) {
        let x = self.rule.abscissa();
        let w = self.rule.weights();

        // The center node of an odd rule is counted once
        let (mut result, start) = if self.rule.has_center() {
            (f(T::zero()).scaled(&w[0]), 1)
        } else {
            (K::additive_zero(), 0)
        };
        let mut l1 = result.magnitude();

        for (xi, wi) in x[start..].iter().zip(&w[start..]) {
            let fp = f(xi.clone());
            let fm = f(-xi.clone());
            l1 = l1 + (fp.magnitude() + fm.magnitude()) * wi.clone();
            result = result.accumulate(fp.accumulate(fm).scaled(wi));
        }

        (result, l1)
    }

    /// Map `[a, b]` onto [-1, 1] and sum.
    fn transform<K: IntegrandValue<T>>(&self, f: &dyn Fn(T) -> K, a: T, b: T) -> Result<(K, T)> {
        if a.is_nan() || b.is_nan() {
            return Err(GaussError::invalid_domain(&a, &b));
        }

        let one = T::one();
        let two = T::from_f64(2.0);
        let max = T::max_value();
        let lower_infinite = a <= -max.clone();
        let upper_infinite = b >= max;

        // (-inf, inf): x = t / (1 - t^2)
        if lower_infinite && upper_infinite {
            let u = |t: T| {
                let t_sq = t.clone() * t.clone();
                let inv = one.quotient(&(one.clone() - t_sq.clone()));
                let jacobian = (one.clone() + t_sq) * inv.clone() * inv.clone();
                f(t * inv).scaled(&jacobian)
            };
            return Ok(self.sum(&u));
        }

        // [a, inf): x = a + (1 - t) / (1 + t)
        if a.is_finite() && upper_infinite {
            let u = |t: T| {
                let z = one.quotient(&(t + one.clone()));
                let arg = two.clone() * z.clone() + a.clone() - one.clone();
                f(arg).scaled(&(z.clone() * z))
            };
            let (q, l1) = self.sum(&u);
            return Ok((q.scaled(&two), l1 * two));
        }

        // (-inf, b]: x = b - (1 - t) / (1 + t)
        if b.is_finite() && lower_infinite {
            let v = |t: T| {
                let z = one.quotient(&(t + one.clone()));
                let arg = two.clone() * z.clone() - one.clone();
                f(b.clone() - arg).scaled(&(z.clone() * z))
            };
            let (q, l1) = self.sum(&v);
            return Ok((q.scaled(&two), l1 * two));
        }

        if a.is_finite() && b.is_finite() {
            if a == b {
                return Ok((K::additive_zero(), T::zero()));
            }
            if b < a {
                let (q, l1) = self.transform(f, b, a)?;
                return Ok((q.negated(), l1));
            }

            let half = T::from_f64(0.5);
            let avg = (a.clone() + b.clone()) * half.clone();
            let scale = (b - a) * half;
            let u = |z: T| f(avg.clone() + scale.clone() * z);
            let (q, l1) = self.sum(&u);
            return Ok((q.scaled(&scale), l1 * scale));
        }

        Err(GaussError::invalid_domain(&a, &b))
    }
}

#[cfg(test)]
#[path = "gauss_tests.rs"]
mod tests;
