use std::collections::btree_map;
use std::collections::{BTreeMap, BTreeSet};

/// A map from each node to the set of nodes it has edges to.
///
/// Nodes referenced only as successors are *implicit leaves*. Structures built by this crate
/// (and [`crate::system::System`] in particular) always insert them as keys with an empty set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency<N>(pub BTreeMap<N, BTreeSet<N>>);

impl<N> Default for Adjacency<N> {
    fn default() -> Self {
        Adjacency(BTreeMap::new())
    }
}

impl<N: Ord + Clone> Adjacency<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `node` with no successors. Existing successors are kept.
    pub fn insert_node(&mut self, node: N) {
        self.0.entry(node).or_default();
    }

    /// Insert the edge `start → stop`, making both endpoints keys.
    pub fn insert_edge(&mut self, start: N, stop: N) {
        self.insert_node(stop.clone());
        self.0.entry(start).or_default().insert(stop);
    }

    pub fn successors(&self, node: &N) -> Option<&BTreeSet<N>> {
        self.0.get(node)
    }

    pub fn contains(&self, node: &N) -> bool {
        self.0.contains_key(node)
    }

    pub fn contains_edge(&self, start: &N, stop: &N) -> bool {
        self.0.get(start).is_some_and(|s| s.contains(stop))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.0.keys()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, N, BTreeSet<N>> {
        self.0.iter()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.0.values().map(BTreeSet::len).sum()
    }

    /// Every node mentioned anywhere, as a key or as a successor.
    pub fn all_nodes(&self) -> BTreeSet<N> {
        self.0
            .iter()
            .flat_map(|(k, vs)| std::iter::once(k).chain(vs.iter()))
            .cloned()
            .collect()
    }
}

impl<N: Ord, I: IntoIterator<Item = N>> FromIterator<(N, I)> for Adjacency<N> {
    fn from_iter<T: IntoIterator<Item = (N, I)>>(iter: T) -> Self {
        Adjacency(
            iter.into_iter()
                .map(|(k, vs)| (k, vs.into_iter().collect()))
                .collect(),
        )
    }
}

impl<N> IntoIterator for Adjacency<N> {
    type Item = (N, BTreeSet<N>);
    type IntoIter = btree_map::IntoIter<N, BTreeSet<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, N> IntoIterator for &'a Adjacency<N> {
    type Item = (&'a N, &'a BTreeSet<N>);
    type IntoIter = btree_map::Iter<'a, N, BTreeSet<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<N> From<BTreeMap<N, BTreeSet<N>>> for Adjacency<N> {
    fn from(map: BTreeMap<N, BTreeSet<N>>) -> Self {
        Adjacency(map)
    }
}
