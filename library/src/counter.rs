use std::collections::hash_map::{Entry, HashMap};
use std::hash::{BuildHasher, Hash};

use rustc_hash::FxHashMap;

/// Multiset as key -> count. Absent keys count as zero.
pub type Counter<K> = FxHashMap<K, i64>;

/// Adds one to `key`'s count and returns the new count.
pub fn increment<K, S>(counts: &mut HashMap<K, i64, S>, key: K) -> i64
where
    K: Eq + Hash,
    S: BuildHasher,
{
    let count = counts.entry(key).or_insert(0);
    *count += 1;
    *count
}

/// Subtracts one from `key`'s count and returns the new count. A key whose
/// count drops to zero is removed.
pub fn decrement<K, S>(counts: &mut HashMap<K, i64, S>, key: K) -> i64
where
    K: Eq + Hash,
    S: BuildHasher,
{
    match counts.entry(key) {
        Entry::Occupied(mut entry) => {
            *entry.get_mut() -= 1;
            let count = *entry.get();
            if count == 0 {
                entry.remove();
            }
            count
        }
        Entry::Vacant(entry) => *entry.insert(-1),
    }
}
