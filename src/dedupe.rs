use std::collections::HashSet;
use std::hash::Hash;

/// Remove repeated elements from `items`, keeping the first occurrence of each.
///
/// ```rust
/// # use dagtree::dedupe::dedupe;
/// assert_eq!(dedupe(vec!['a', 'b', 'a', 'c', 'b']), vec!['a', 'b', 'c']);
/// ```
pub fn dedupe<T, I>(items: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|x| seen.insert(x.clone()))
        .collect()
}
