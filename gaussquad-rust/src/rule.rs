//! Symmetric Gauss-Legendre rules
//!
//! A rule of order N on [-1, 1] is symmetric about the origin, so only the
//! non-negative half is stored: `ceil(N/2)` abscissas ascending from zero and
//! their weights. For odd N the first abscissa is exactly zero and is counted
//! once; every other node stands for the pair `+x, -x`.

use crate::legendre::{legendre_p_prime, legendre_p_zeros};
use crate::numeric::CustomNumeric;

/// Positive half of an N-point Gauss-Legendre rule on [-1, 1].
#[derive(Debug, Clone)]
pub struct Rule<T> {
    order: usize,
    abscissa: Vec<T>,
    weights: Vec<T>,
}

impl<T> Rule<T>
where
    T: CustomNumeric,
{
    /// Create a rule from its half-abscissas and weights.
    ///
    /// # Panics
    /// Panics if the lengths differ from `ceil(order / 2)`.
    pub fn new(order: usize, abscissa: Vec<T>, weights: Vec<T>) -> Self {
        assert_eq!(
            abscissa.len(),
            weights.len(),
            "abscissa and weights must have the same length"
        );
        assert_eq!(
            abscissa.len(),
            order.div_ceil(2),
            "a rule of order {} has {} non-negative nodes",
            order,
            order.div_ceil(2)
        );
        Self {
            order,
            abscissa,
            weights,
        }
    }

    /// Compute the rule from the zeros of the Legendre polynomial of degree `order`.
    ///
    /// Weights are `2 / ((1 - x^2) P_n'(x)^2)`.
    pub fn compute(order: usize) -> Self {
        let abscissa: Vec<T> = legendre_p_zeros(order);
        let two = T::from_f64(2.0);
        let weights = abscissa
            .iter()
            .map(|x| {
                let p = legendre_p_prime(order, x);
                two.quotient(&((T::one() - x.clone() * x.clone()) * p.clone() * p))
            })
            .collect();
        Self::new(order, abscissa, weights)
    }

    /// Number of points N of the full rule
    pub fn order(&self) -> usize {
        self.order
    }

    /// Non-negative abscissas, ascending
    pub fn abscissa(&self) -> &[T] {
        &self.abscissa
    }

    /// Weights matching [`Rule::abscissa`]
    pub fn weights(&self) -> &[T] {
        &self.weights
    }

    /// Number of stored (half-rule) nodes
    pub fn len(&self) -> usize {
        self.abscissa.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abscissa.is_empty()
    }

    /// Whether the first node is the unpaired center
    pub fn has_center(&self) -> bool {
        self.order % 2 == 1
    }

    /// Sum of the weights of the full rule; 2 up to rounding.
    pub fn weight_sum(&self) -> T {
        let mut sum = T::zero();
        for (i, w) in self.weights.iter().enumerate() {
            if i == 0 && self.has_center() {
                sum = sum + w.clone();
            } else {
                sum = sum + w.clone() + w.clone();
            }
        }
        sum
    }

    /// Expand to the full N-point rule, points sorted ascending on [-1, 1].
    pub fn nodes(&self) -> (Vec<T>, Vec<T>) {
        let mut x = Vec::with_capacity(self.order);
        let mut w = Vec::with_capacity(self.order);

        let paired_start = usize::from(self.has_center());
        for i in (paired_start..self.len()).rev() {
            x.push(-self.abscissa[i].clone());
            w.push(self.weights[i].clone());
        }
        if self.has_center() {
            x.push(self.abscissa[0].clone());
            w.push(self.weights[0].clone());
        }
        for i in paired_start..self.len() {
            x.push(self.abscissa[i].clone());
            w.push(self.weights[i].clone());
        }

        (x, w)
    }

    /// Validate the rule for consistency.
    ///
    /// # Returns
    /// `true` if the rule is valid, `false` otherwise.
    pub fn validate(&self) -> bool {
        if self.order == 0 || self.abscissa.len() != self.order.div_ceil(2) {
            return false;
        }
        if self.abscissa.len() != self.weights.len() {
            return false;
        }

        // Center node is exactly zero for odd orders, positive otherwise
        let zero = T::zero();
        if self.has_center() {
            if self.abscissa[0] != zero {
                return false;
            }
        } else if self.abscissa[0] <= zero {
            return false;
        }

        // Check that points are sorted and inside [0, 1)
        for i in 1..self.abscissa.len() {
            if self.abscissa[i] <= self.abscissa[i - 1] {
                return false;
            }
        }
        if self.abscissa[self.abscissa.len() - 1] >= T::one() {
            return false;
        }

        if self.weights.iter().any(|w| *w <= zero) {
            return false;
        }

        // Full-rule weights integrate the constant 1 over [-1, 1]
        let tolerance = T::epsilon() * T::from_f64(4.0 * self.order as f64);
        (self.weight_sum() - T::from_f64(2.0)).abs() <= tolerance
    }
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
