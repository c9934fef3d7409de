//! Legendre polynomials and their zeros
//!
//! Just enough of the Legendre family to build Gauss-Legendre rules on
//! demand: the three-term recurrence for `P_n` and `P_n'`, and Newton
//! iteration for the non-negative zeros of `P_n`.

use crate::numeric::CustomNumeric;

/// Newton iterations allowed per root before giving up on further refinement
const MAX_NEWTON_ITERATIONS: usize = 100;

/// Compute Legendre polynomial P_n(x) and its derivative using recurrence relation.
pub fn legendre_p_and_derivative<T: CustomNumeric>(n: usize, x: &T) -> (T, T) {
    if n == 0 {
        return (T::one(), T::zero());
    }

    if n == 1 {
        return (x.clone(), T::one());
    }

    let mut p0 = T::one();
    let mut p1 = x.clone();
    let mut dp0 = T::zero();
    let mut dp1 = T::one();

    for k in 2..=n {
        let k_f = T::from_f64(k as f64);
        let k1_f = T::from_f64((k - 1) as f64);
        let two_k1 = T::from_f64((2 * k - 1) as f64);

        let p2 = (two_k1.clone() * x.clone() * p1.clone() - k1_f.clone() * p0).quotient(&k_f);
        let dp2 = (two_k1 * (p1.clone() + x.clone() * dp1.clone()) - k1_f * dp0).quotient(&k_f);

        p0 = p1;
        p1 = p2;
        dp0 = dp1;
        dp1 = dp2;
    }

    (p1, dp1)
}

/// Legendre polynomial P_n(x)
pub fn legendre_p<T: CustomNumeric>(n: usize, x: &T) -> T {
    legendre_p_and_derivative(n, x).0
}

/// Derivative P_n'(x)
pub fn legendre_p_prime<T: CustomNumeric>(n: usize, x: &T) -> T {
    legendre_p_and_derivative(n, x).1
}

/// Non-negative zeros of P_n in ascending order.
///
/// There are `ceil(n / 2)` of them; for odd `n` the first one is exactly zero.
/// Each root is seeded with the f64 estimate `cos(pi (i + 3/4) / (n + 1/2))`
/// and refined by Newton iteration in `T` until the step drops below
/// `epsilon * |x|`.
pub fn legendre_p_zeros<T: CustomNumeric>(n: usize) -> Vec<T> {
    let m = n.div_ceil(2);
    let mut zeros = Vec::with_capacity(m);
    let eps = T::epsilon();

    for i in 0..m {
        if n % 2 == 1 && i == m - 1 {
            zeros.push(T::zero());
            continue;
        }

        let guess = (std::f64::consts::PI * (i as f64 + 0.75) / (n as f64 + 0.5)).cos();
        let mut z = T::from_f64(guess);
        let mut iterations = 0;

        while iterations < MAX_NEWTON_ITERATIONS {
            iterations += 1;
            let (p, dp) = legendre_p_and_derivative(n, &z);
            let step = p.quotient(&dp);
            z = z - step.clone();
            if step.abs() <= eps.clone() * z.abs() {
                break;
            }
        }

        tracing::trace!(order = n, root = i, iterations, "refined Legendre zero");
        zeros.push(z);
    }

    zeros.reverse();
    zeros
}

#[cfg(test)]
#[path = "legendre_tests.rs"]
mod tests;
