//! Mutating helpers for maps that accumulate multiple values per key.
//!
//! A "multi-map" here is an ordinary `HashMap<K, Vec<V>>`. The helpers
//! maintain one invariant: a key is never present with an empty vector.
//! Absence of the key, not an empty vector, is what signals "no values",
//! so [`MultiMapExt::remove_value`] removes a key outright once its last
//! value is gone.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Extension trait for accumulating and pruning per-key value vectors on
/// `HashMap<K, Vec<V>>` (with any hasher, so `ahash` maps work too).
///
/// ```
/// use std::collections::HashMap;
/// use seqops::MultiMapExt;
///
/// let mut map: HashMap<&str, Vec<u32>> = HashMap::new();
/// map.append_value("vals", 1);
/// map.append_value("vals", 2);
/// assert_eq!(map["vals"], [1, 2]);
///
/// assert!(map.remove_value(&"vals", &1));
/// assert!(map.remove_value(&"vals", &2));
/// assert!(!map.contains_key("vals"));
/// ```
pub trait MultiMapExt<K, V> {
    /// Pushes `val` onto the key's vector, creating a one-element vector
    /// when the key is absent.
    fn append_value(&mut self, key: K, val: V);

    /// Like [`append_value`](MultiMapExt::append_value), but a no-op when
    /// an equal value is already present under the key.
    ///
    /// Returns `true` if the value was appended, including when the key was
    /// newly created.
    fn append_unique_value(&mut self, key: K, val: V) -> bool
    where
        V: PartialEq;

    /// Inserts `val` at the front of the key's vector, creating a
    /// one-element vector when the key is absent.
    fn prepend_value(&mut self, key: K, val: V);

    /// Removes the first value equal to `val` from the key's vector.
    ///
    /// When the vector becomes empty, the key itself is removed from the
    /// map. Returns `true` if a removal occurred, `false` when the key was
    /// absent or the value was not found.
    fn remove_value(&mut self, key: &K, val: &V) -> bool
    where
        V: PartialEq;
}

impl<K, V, S> MultiMapExt<K, V> for HashMap<K, Vec<V>, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn append_value(&mut self, key: K, val: V) {
        self.entry(key).or_default().push(val);
    }

    fn append_unique_value(&mut self, key: K, val: V) -> bool
    where
        V: PartialEq,
    {
        let vals = self.entry(key).or_default();
        if vals.contains(&val) {
            return false;
        }
        vals.push(val);
        true
    }

    fn prepend_value(&mut self, key: K, val: V) {
        self.entry(key).or_default().insert(0, val);
    }

    fn remove_value(&mut self, key: &K, val: &V) -> bool
    where
        V: PartialEq,
    {
        let Some(vals) = self.get_mut(key) else {
            return false;
        };
        let Some(idx) = vals.iter().position(|v| v == val) else {
            return false;
        };
        vals.remove(idx);
        if vals.is_empty() {
            self.remove(key);
        }
        true
    }
}

/// Get-or-create access for maps whose values have a natural empty state.
pub trait MapExt<K, V> {
    /// Returns a mutable handle to the value under `key`, inserting a
    /// default value first when the key is absent.
    ///
    /// Repeated calls with the same key keep returning the same entry, so
    /// this serves as an idempotent handle for nested accumulation targets.
    fn ensure(&mut self, key: K) -> &mut V
    where
        V: Default;
}

impl<K, V, S> MapExt<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn ensure(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.entry(key).or_default()
    }
}
