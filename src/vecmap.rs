//! A wrapper around a sorted vector of pairs that backs [`Value::Map`][crate::Value::Map].
//!
//! Keys are kept in ascending order, so encoding a map writes its entries in key
//! order. Inserting an existing key replaces the old value.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use escode::prelude::*;
//!
//! // from a `BTreeMap`
//! let mut btmap = BTreeMap::new();
//! btmap.insert(Value::from("a"), Value::from(1));
//!
//! let bt_vm = ValueMap::from(btmap);
//!
//! // from a vector of pairs, the later duplicate wins
//! let vec_vm = ValueMap::from(vec![
//!     (Value::from("a"), Value::from(0)),
//!     (Value::from("a"), Value::from(1)),
//! ]);
//!
//! assert_eq!(bt_vm, vec_vm);
//! ```

use crate::Value;
use std::{
    collections::{BTreeMap, HashMap},
    hash::*,
    iter::FromIterator,
    slice::Iter,
    vec::IntoIter,
};

#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Hash, Debug, Default)]
/// A map implemented as a sorted [`Vec`] of pairs.
///
/// See also: [module level documentation](`crate::vecmap`).
pub struct VecMap<K: Ord, V>(Vec<(K, V)>);

/// The map type held by [`Value::Map`].
pub type ValueMap = VecMap<Value, Value>;

impl<K: Ord, V> VecMap<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self { VecMap(Vec::new()) }

    /// Creates an empty map with room for `cap` entries.
    pub fn with_capacity(cap: usize) -> Self { VecMap(Vec::with_capacity(cap)) }

    /// Inserts `value` under `key`, returning the value it replaced.
    ///
    /// # Example
    ///
    /// ```
    /// use escode::vecmap::VecMap;
    ///
    /// let mut vmap = VecMap::new();
    ///
    /// assert_eq!(vmap.insert(2, "two"), None);
    /// assert_eq!(vmap.insert(1, "one"), None);
    /// assert_eq!(vmap.insert(2, "deux"), Some("two"));
    ///
    /// assert_eq!(vmap.iter().map(|(k, _)| *k).collect::<Vec<_>>(), vec![1, 2]);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.0.binary_search_by(|(k, _)| k.cmp(&key)) {
            Ok(ix) => Some(std::mem::replace(&mut self.0[ix].1, value)),
            Err(ix) => {
                self.0.insert(ix, (key, value));
                None
            }
        }
    }

    /// Looks up the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.0
            .binary_search_by(|(k, _)| k.cmp(key))
            .ok()
            .map(|ix| &self.0[ix].1)
    }

    /// Returns length.
    pub fn len(&self) -> usize { self.0.len() }

    /// Indicates whether the [`VecMap`] is empty.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Returns an [`Iter`] of the key value pairs, in key order.
    pub fn iter(&self) -> Iter<(K, V)> { self.0.iter() }
}

impl<K: Ord + Hash, V> VecMap<K, V> {
    /// Consumes a [`VecMap`], producing a [`HashMap`] from the entries.
    pub fn into_hashmap<S: BuildHasher + Default>(self) -> HashMap<K, V, S> {
        self.into_iter().collect()
    }
}

impl<K: Ord, V> From<Vec<(K, V)>> for VecMap<K, V> {
    /// Sorts once, then keeps the last pair of each run of equal keys.
    fn from(mut v: Vec<(K, V)>) -> Self {
        // stable, so equal keys stay in arrival order
        v.sort_by(|(k1, _), (k2, _)| k1.cmp(k2));

        let mut out: Vec<(K, V)> = Vec::with_capacity(v.len());
        for (k, val) in v {
            match out.last_mut() {
                Some(last) if last.0 == k => *last = (k, val),
                _ => out.push((k, val)),
            }
        }
        VecMap(out)
    }
}

impl<K: Ord, V, S: BuildHasher> From<HashMap<K, V, S>> for VecMap<K, V> {
    fn from(hm: HashMap<K, V, S>) -> Self {
        let mut v: Vec<(K, V)> = hm.into_iter().collect();
        v.sort_unstable_by(|(k1, _), (k2, _)| k1.cmp(k2));
        VecMap(v)
    }
}

impl<K: Ord, V> From<BTreeMap<K, V>> for VecMap<K, V> {
    fn from(bt: BTreeMap<K, V>) -> Self { VecMap(bt.into_iter().collect()) }
}

impl<K: Ord, V> IntoIterator for VecMap<K, V> {
    type IntoIter = IntoIter<(K, V)>;
    type Item = (K, V);

    fn into_iter(self) -> IntoIter<(K, V)> { self.0.into_iter() }
}

impl<'a, K: Ord, V> IntoIterator for &'a VecMap<K, V> {
    type IntoIter = Iter<'a, (K, V)>;
    type Item = &'a (K, V);

    fn into_iter(self) -> Iter<'a, (K, V)> { self.0.iter() }
}

impl<K: Ord, V> FromIterator<(K, V)> for VecMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> VecMap<K, V> {
        VecMap::from(Vec::from_iter(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let vm: VecMap<u8, &str> = vec![(1, "a"), (0, "b"), (1, "c")].into_iter().collect();
        assert_eq!(vm.len(), 2);
        assert_eq!(vm.get(&1), Some(&"c"));
        assert_eq!(vm.get(&0), Some(&"b"));
        assert_eq!(vm.get(&2), None);
    }

    #[test]
    fn unsorted_pairs() {
        let pairs: Vec<(u32, u32)> = (0..10_000).rev().map(|i| (i % 5_000, i)).collect();
        let vm = VecMap::from(pairs);

        assert_eq!(vm.len(), 5_000);
        let keys: Vec<u32> = vm.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, (0..5_000).collect::<Vec<_>>());
        // 4_999 arrives first as 9_999, then again as 4_999
        assert_eq!(vm.get(&4_999), Some(&4_999));
        assert_eq!(vm.get(&0), Some(&0));
    }

    #[test]
    fn sorted_from_hashmap() {
        let mut hm = HashMap::new();
        for i in (0..50u32).rev() {
            hm.insert(i, i * 2);
        }
        let vm = VecMap::from(hm);
        let keys: Vec<u32> = vm.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, (0..50).collect::<Vec<_>>());

        let back: HashMap<u32, u32> = vm.into_hashmap();
        assert_eq!(back.get(&7), Some(&14));
    }
}
