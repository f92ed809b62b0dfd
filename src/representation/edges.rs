use crate::identity::Edge;

/// An ordered list of edges. Duplicates are allowed; they collapse when converted to an
/// [`crate::representation::Adjacency`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edges<N>(pub Vec<Edge<N>>);

impl<N> Default for Edges<N> {
    fn default() -> Self {
        Edges(vec![])
    }
}

impl<N> Edges<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, start: N, stop: N) {
        self.0.push(Edge { start, stop })
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edge<N>> {
        self.0.iter()
    }

    /// Sort edges lexicographically by `(start, stop)`.
    pub fn sorted(mut self) -> Self
    where
        N: Ord,
    {
        self.0.sort();
        self
    }
}

impl<N> FromIterator<Edge<N>> for Edges<N> {
    fn from_iter<T: IntoIterator<Item = Edge<N>>>(iter: T) -> Self {
        Edges(iter.into_iter().collect())
    }
}

impl<N> FromIterator<(N, N)> for Edges<N> {
    fn from_iter<T: IntoIterator<Item = (N, N)>>(iter: T) -> Self {
        Edges(iter.into_iter().map(Edge::from).collect())
    }
}

impl<N> IntoIterator for Edges<N> {
    type Item = Edge<N>;
    type IntoIter = std::vec::IntoIter<Edge<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, N> IntoIterator for &'a Edges<N> {
    type Item = &'a Edge<N>;
    type IntoIter = std::slice::Iter<'a, Edge<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
