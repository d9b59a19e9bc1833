use indexmap::IndexMap;
use std::hash::Hash;

/// Partitions `items` by the key `key_fn` selects, keeping input order inside each group.
pub fn group_by_key<I, K>(
    items: I,
    mut key_fn: impl FnMut(&I::Item) -> K,
) -> IndexMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Eq + Hash,
{
    let mut out = IndexMap::<_, Vec<_>>::default();
    for item in items {
        out.entry(key_fn(&item)).or_default().push(item);
    }
    out
}
