//! Grouping helpers used by the company queries.
//!
//! Both helpers keep groups in the order their keys were first seen.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use serde::Serialize;

/// Group items into a multimap keyed by `key`. Every item lands in exactly one group.
pub fn group_by<I, K, F>(items: I, mut key: F) -> IndexMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item) -> K,
{
    let mut groups: IndexMap<K, Vec<I::Item>> = IndexMap::new();
    for item in items {
        groups.entry(key(&item)).or_default().push(item);
    }
    groups
}

/// Group items by `key` while folding each group into an accumulator.
///
/// `zero` seeds a group the first time its key appears, `fold` then adds
/// each member to that group's accumulator.
pub fn aggregate_by<I, K, A, F, Z, G>(items: I, mut key: F, mut zero: Z, mut fold: G) -> IndexMap<K, A>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item) -> K,
    Z: FnMut() -> A,
    G: FnMut(&mut A, &I::Item),
{
    let mut totals: IndexMap<K, A> = IndexMap::new();
    for item in items {
        let total = totals.entry(key(&item)).or_insert_with(&mut zero);
        fold(total, &item);
    }
    totals
}

/// A price usable as a map key. Equality, hashing and ordering all follow
/// `f64::total_cmp`.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct PriceKey(f64);

impl PriceKey {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for PriceKey {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl PartialEq for PriceKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.total_cmp(&other.0) == Ordering::Equal
    }
}

impl Eq for PriceKey {}

impl Hash for PriceKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for PriceKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriceKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}
