//! Index construction: group the elements of a sequence by an extracted key.

use std::hash::Hash;

use ahash::AHashMap;

use crate::multi_map::MultiMapExt;

/// Builds a key-to-elements index from `items`.
///
/// Every element is appended under the key produced by `key`, so elements
/// sharing a key are grouped in encounter order and every key in the
/// returned map holds at least one element. Empty input yields an empty
/// map.
///
/// ```
/// use seqops::build_index;
///
/// let index = build_index(["alpha", "beta", "avocado"], |s| s.as_bytes()[0]);
/// assert_eq!(index[&b'a'], ["alpha", "avocado"]);
/// assert_eq!(index[&b'b'], ["beta"]);
/// ```
pub fn build_index<T, K, I, F>(items: I, mut key: F) -> AHashMap<K, Vec<T>>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut index = AHashMap::new();
    for item in items {
        index.append_value(key(&item), item);
    }
    index
}

/// Builds a key-to-element index where the last element seen under each key
/// wins.
pub fn build_index_unique<T, K, I, F>(items: I, mut key: F) -> AHashMap<K, T>
where
    I: IntoIterator<Item = T>,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut index = AHashMap::new();
    for item in items {
        index.insert(key(&item), item);
    }
    index
}
