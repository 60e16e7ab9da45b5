//! General-purpose helpers shared by the library and the CLI.

use std::collections::BTreeMap;

/// Groups `items` by the key `key_fn` returns for each of them.
///
/// Items keep their relative order inside each group, so partitioning a
/// sorted list yields sorted groups.
///
/// ```
/// use catapult_core::utils::partition;
///
/// let groups = partition(1..=10, |n| n % 3);
/// assert_eq!(groups[&0], vec![3, 6, 9]);
/// assert_eq!(groups[&1], vec![1, 4, 7, 10]);
/// ```
pub fn partition<I, K, F>(items: I, mut key_fn: F) -> BTreeMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Ord,
    F: FnMut(&I::Item) -> K,
{
    let mut groups: BTreeMap<K, Vec<I::Item>> = BTreeMap::new();
    for item in items {
        groups.entry(key_fn(&item)).or_default().push(item);
    }
    groups
}
