//! Node/weight provider
//!
//! Hands out the shared, lazily built [`Rule`] for a scalar type and order.
//! Which source backs the rule is decided by the scalar's
//! [`PrecisionCategory`](crate::PrecisionCategory):
//!
//! | Category   | Source                                   |
//! |------------|------------------------------------------|
//! | `Native`   | f64 table, converted with `from_f64`     |
//! | `Extended` | `(hi, lo)` table, built with `from_hi_lo`|
//! | `Decimal`  | decimal string table, `parse_decimal`    |
//! | `OnDemand` | Legendre zeros computed on first use     |
//!
//! Orders without a table are computed on demand as well, but only when the
//! `arbitrary-order` feature allows them past [`is_supported_order`].

use crate::cache;
use crate::error::{GaussError, Result};
use crate::numeric::CustomNumeric;
use crate::precision::PrecisionCategory;
use crate::rule::Rule;
use crate::tables::{self, RuleTable};

/// Whether rules of `order` may be requested.
///
/// Without the `arbitrary-order` feature only the tabulated orders
/// {7, 10, 15, 20, 25, 30} are accepted; with it any order >= 1 is.
pub const fn is_supported_order(order: usize) -> bool {
    order > 0 && (cfg!(feature = "arbitrary-order") || tables::is_tabulated(order))
}

/// Shared rule of `order` for scalar type `T`.
///
/// # Errors
/// [`GaussError::UnsupportedOrder`] if `order` fails [`is_supported_order`].
pub fn rule<T: CustomNumeric>(order: usize) -> Result<&'static Rule<T>> {
    if !is_supported_order(order) {
        return Err(GaussError::UnsupportedOrder(order));
    }
    Ok(cached_rule(order))
}

/// Non-negative abscissas of the rule of `order`, ascending.
pub fn abscissa<T: CustomNumeric>(order: usize) -> Result<&'static [T]> {
    rule::<T>(order).map(|rule| rule.abscissa())
}

/// Weights of the rule of `order`, matching [`abscissa`].
pub fn weights<T: CustomNumeric>(order: usize) -> Result<&'static [T]> {
    rule::<T>(order).map(|rule| rule.weights())
}

/// Cached rule without the order check; callers validate `order` first.
pub(crate) fn cached_rule<T: CustomNumeric>(order: usize) -> &'static Rule<T> {
    cache::get_or_build(order, || build_rule::<T>(order))
}

fn build_rule<T: CustomNumeric>(order: usize) -> Rule<T> {
    let category = T::CATEGORY;
    let (rule, source) = match tables::lookup(order).and_then(|table| load_table(table, category)) {
        Some(rule) => (rule, "table"),
        None => (Rule::compute(order), "computed"),
    };
    tracing::debug!(
        order,
        ?category,
        nodes = rule.len(),
        source,
        "built Gauss-Legendre rule"
    );
    rule
}

fn load_table<T: CustomNumeric>(table: &RuleTable, category: PrecisionCategory) -> Option<Rule<T>> {
    let (abscissa, weights) = match category {
        PrecisionCategory::Native => (
            table.native_abscissa.iter().map(|&x| T::from_f64(x)).collect(),
            table.native_weights.iter().map(|&w| T::from_f64(w)).collect(),
        ),
        PrecisionCategory::Extended => (
            table
                .extended_abscissa
                .iter()
                .map(|&(hi, lo)| T::from_hi_lo(hi, lo))
                .collect(),
            table
                .extended_weights
                .iter()
                .map(|&(hi, lo)| T::from_hi_lo(hi, lo))
                .collect(),
        ),
        PrecisionCategory::Decimal => {
            let abscissa = parse_all::<T>(table.decimal_abscissa);
            let weights = parse_all::<T>(table.decimal_weights);
            match (abscissa, weights) {
                (Some(abscissa), Some(weights)) => (abscissa, weights),
                _ => {
                    tracing::warn!(
                        order = table.order,
                        scalar = std::any::type_name::<T>(),
                        "decimal table did not parse, computing rule instead"
                    );
                    return None;
                }
            }
        }
        PrecisionCategory::OnDemand => return None,
    };
    Some(Rule::new(table.order, abscissa, weights))
}

fn parse_all<T: CustomNumeric>(literals: &[&str]) -> Option<Vec<T>> {
    literals.iter().map(|literal| T::parse_decimal(literal)).collect()
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
