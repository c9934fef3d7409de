//! Process-wide rule cache
//!
//! Rules are keyed by `(TypeId of the scalar, order)`. The outer lock only
//! guards slot creation; each slot is a `OnceCell`, so a rule is built exactly
//! once even under concurrent first use, and readers never see a partially
//! built rule. Slots and rules are leaked on purpose: they live until process
//! exit and are handed out as `&'static`.

use once_cell::sync::{Lazy, OnceCell};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

type Slot = OnceCell<&'static (dyn Any + Send + Sync)>;

static RULE_CACHE: Lazy<RwLock<HashMap<(TypeId, usize), &'static Slot>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

fn slot(key: (TypeId, usize)) -> &'static Slot {
    let existing = RULE_CACHE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
        .copied();
    if let Some(slot) = existing {
        return slot;
    }

    let mut map = RULE_CACHE.write().unwrap_or_else(PoisonError::into_inner);
    *map.entry(key).or_insert_with(|| {
        let fresh: &'static Slot = Box::leak(Box::new(OnceCell::new()));
        fresh
    })
}

/// Fetch the value cached for `(V, order)`, building it with `build` on first use.
pub(crate) fn get_or_build<V, F>(order: usize, build: F) -> &'static V
where
    V: Any + Send + Sync,
    F: FnOnce() -> V,
{
    let entry = *slot((TypeId::of::<V>(), order)).get_or_init(|| {
        let built: &'static (dyn Any + Send + Sync) = Box::leak(Box::new(build()));
        built
    });

    match entry.downcast_ref::<V>() {
        Some(value) => value,
        // The key carries V's TypeId, so the stored value always has type V
        None => unreachable!("rule cache entry has mismatched type"),
    }
}

/// Number of cached entries (slots created so far)
pub fn cached_rule_count() -> usize {
    RULE_CACHE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .len()
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
