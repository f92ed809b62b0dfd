use super::Selection;
use crate::error::{GraphError, GraphResult};
use crate::identity::GraphNode;
use crate::representation::source::close;
use crate::representation::{Adjacency, GraphSource, Representation};

use core::ops::Shr;
use std::collections::BTreeSet;
use tracing::trace;

/// A directed graph of nodes `N` intended to be acyclic.
///
/// # Invariants
///
/// Every node referenced as a successor is also a key of the adjacency map.
///
/// # Errors
///
/// Mutations report structural violations (self-loops, unknown nodes) as [`GraphError`]s.
/// There is no rollback: steps completed before the failing one stay applied. Take a
/// [`Clone`] first if a mutation must be atomic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct System<N> {
    adjacency: Adjacency<N>,
}

impl<N> Default for System<N> {
    fn default() -> Self {
        System {
            adjacency: Adjacency::default(),
        }
    }
}

impl<N: GraphNode> System<N> {
    /// The empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from any [`GraphSource`].
    pub fn try_from_source(source: impl Into<GraphSource<N>>) -> GraphResult<Self, N> {
        match source.into() {
            GraphSource::System(s) => Ok(s),
            other => Ok(System {
                adjacency: other.into_adjacency()?,
            }),
        }
    }

    pub fn adjacency(&self) -> &Adjacency<N> {
        &self.adjacency
    }

    pub fn into_adjacency(self) -> Adjacency<N> {
        self.adjacency
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.adjacency.nodes()
    }

    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.adjacency.contains(node)
    }

    pub fn contains_edge(&self, start: &N, stop: &N) -> bool {
        self.adjacency.contains_edge(start, stop)
    }

    pub fn successors(&self, node: &N) -> Option<&BTreeSet<N>> {
        self.adjacency.successors(node)
    }

    /// Nodes with an edge to `node`.
    pub fn predecessors(&self, node: &N) -> BTreeSet<N> {
        self.adjacency
            .iter()
            .filter(|(_, stops)| stops.contains(node))
            .map(|(start, _)| start.clone())
            .collect()
    }

    /// Nodes with no incoming edges.
    pub fn root(&self) -> BTreeSet<N> {
        let targets: BTreeSet<&N> = self.adjacency.iter().flat_map(|(_, s)| s).collect();
        self.nodes()
            .filter(|n| !targets.contains(n))
            .cloned()
            .collect()
    }

    /// Nodes with no outgoing edges.
    pub fn endpoint(&self) -> BTreeSet<N> {
        self.adjacency
            .iter()
            .filter(|(_, stops)| stops.is_empty())
            .map(|(n, _)| n.clone())
            .collect()
    }

    ////////////////////////////////////////
    // Mutation

    /// Insert `node` with no outgoing edges.
    ///
    /// If `node` is already present its outgoing edges are cleared; incoming edges are kept.
    pub fn add(&mut self, node: N) {
        trace!(node = ?node, "add node");
        self.adjacency.0.insert(node, BTreeSet::new());
    }

    /// Insert `node` with edges from each of `ancestors` and to each of `descendants`.
    ///
    /// `descendants` replaces any outgoing edges `node` already had.
    ///
    /// # Errors
    ///
    /// - [`GraphError::SelfLoop`] if `node` is among its own ancestors or descendants
    /// - [`GraphError::UnknownNode`] if an ancestor or descendant is not in the graph. Unknown
    ///   descendants are detected before anything changes; an unknown ancestor is detected
    ///   after `node` and the preceding ancestors' edges were added.
    pub fn add_with(&mut self, node: N, ancestors: &[N], descendants: &[N]) -> GraphResult<(), N> {
        if ancestors.contains(&node) || descendants.contains(&node) {
            return Err(GraphError::SelfLoop(node));
        }
        if let Some(unknown) = descendants.iter().find(|d| !self.contains(d)) {
            return Err(GraphError::UnknownNode(unknown.clone()));
        }

        trace!(node = ?node, ?ancestors, ?descendants, "add node");
        self.adjacency
            .0
            .insert(node.clone(), descendants.iter().cloned().collect());

        for ancestor in ancestors {
            self.adjacency
                .0
                .get_mut(ancestor)
                .ok_or_else(|| GraphError::UnknownNode(ancestor.clone()))?
                .insert(node.clone());
        }
        Ok(())
    }

    /// Add the edge `start → stop`, inserting either node if absent.
    /// Connecting an existing edge does nothing.
    ///
    /// # Errors
    ///
    /// [`GraphError::SelfLoop`] if `start == stop`.
    pub fn connect(&mut self, start: N, stop: N) -> GraphResult<(), N> {
        if start == stop {
            return Err(GraphError::SelfLoop(start));
        }
        trace!(start = ?start, stop = ?stop, "connect");
        self.adjacency.insert_edge(start, stop);
        Ok(())
    }

    /// Remove the edge `start → stop` if it exists.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownNode`] if `start` is not in the graph.
    pub fn disconnect(&mut self, start: &N, stop: &N) -> GraphResult<(), N> {
        let stops = self
            .adjacency
            .0
            .get_mut(start)
            .ok_or_else(|| GraphError::UnknownNode(start.clone()))?;
        trace!(start = ?start, stop = ?stop, "disconnect");
        stops.remove(stop);
        Ok(())
    }

    /// Remove `node` and every edge into or out of it.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownNode`] if `node` is not in the graph.
    pub fn delete(&mut self, node: &N) -> GraphResult<(), N> {
        if self.adjacency.0.remove(node).is_none() {
            return Err(GraphError::UnknownNode(node.clone()));
        }
        trace!(node = ?node, "delete node");
        for stops in self.adjacency.0.values_mut() {
            stops.remove(node);
        }
        Ok(())
    }

    ////////////////////////////////////////
    // Composition

    /// Merge `other` into this graph, key by key.
    ///
    /// A node with outgoing edges in `other` takes `other`'s edges: the sets are *replaced*, not
    /// unioned. A node which `other` names only as a successor keeps its own edges; it is added
    /// with no outgoing edges if this graph did not have it.
    ///
    /// Systems, edge lists and matrices have every node they mention as a key, so merging one
    /// of those resets each mentioned node, successor or not.
    ///
    /// ```rust
    /// # use dagtree::prelude::*;
    /// let mut s = System::new();
    /// s.connect("k", "n").unwrap();
    ///
    /// let mut t = System::new();
    /// t.connect("k", "m").unwrap();
    ///
    /// s.merge(t).unwrap();
    /// assert!(s.contains_edge(&"k", &"m"));
    /// assert!(!s.contains_edge(&"k", &"n"));
    /// ```
    ///
    /// # Errors
    ///
    /// [`GraphError::Matrix`] if `other` is an invalid [`crate::representation::Matrix`].
    pub fn merge(&mut self, other: impl Into<GraphSource<N>>) -> GraphResult<(), N> {
        let incoming = other.into().into_keyed()?;
        self.merge_keyed(incoming);
        Ok(())
    }

    fn merge_keyed(&mut self, incoming: Adjacency<N>) {
        trace!(nodes = incoming.len(), "merge");
        let referenced = incoming.all_nodes();
        self.adjacency.0.extend(incoming);
        for node in referenced {
            self.adjacency.insert_node(node);
        }
    }

    /// Merge `other`, then connect every endpoint this graph had before the merge to every root
    /// of `other`.
    ///
    /// Pairs naming the same node are already joined by the merge and are skipped.
    ///
    /// # Errors
    ///
    /// [`GraphError::Matrix`] if `other` is an invalid [`crate::representation::Matrix`].
    pub fn append(&mut self, other: impl Into<GraphSource<N>>) -> GraphResult<(), N> {
        let incoming = other.into().into_keyed()?;
        let endpoints = self.endpoint();
        let roots = Self::from_adjacency(incoming.clone()).root();
        trace!(?endpoints, ?roots, "append");

        self.merge_keyed(incoming);
        self.link(&endpoints, &roots)
    }

    /// Merge `other`, then connect every endpoint of `other` to every root this graph had
    /// before the merge.
    ///
    /// # Errors
    ///
    /// [`GraphError::Matrix`] if `other` is an invalid [`crate::representation::Matrix`].
    pub fn prepend(&mut self, other: impl Into<GraphSource<N>>) -> GraphResult<(), N> {
        let incoming = other.into().into_keyed()?;
        let roots = self.root();
        let endpoints = Self::from_adjacency(incoming.clone()).endpoint();
        trace!(?endpoints, ?roots, "prepend");

        self.merge_keyed(incoming);
        self.link(&endpoints, &roots)
    }

    fn link(&mut self, starts: &BTreeSet<N>, stops: &BTreeSet<N>) -> GraphResult<(), N> {
        for start in starts {
            for stop in stops.iter().filter(|s| *s != start) {
                self.connect(start.clone(), stop.clone())?;
            }
        }
        Ok(())
    }

    /// A copy of this graph restricted by `selection`. Edges touching a removed node are removed
    /// with it.
    ///
    /// # Errors
    ///
    /// [`GraphError::EmptySelection`] if `selection` has neither an include nor an exclude set.
    pub fn subset(&self, selection: &Selection<N>) -> GraphResult<Self, N> {
        if selection.is_empty() {
            return Err(GraphError::EmptySelection);
        }

        let adjacency = self
            .adjacency
            .iter()
            .filter(|(node, _)| selection.keeps(node))
            .map(|(node, stops)| {
                let stops: BTreeSet<N> =
                    stops.iter().filter(|s| selection.keeps(s)).cloned().collect();
                (node.clone(), stops)
            })
            .collect();

        Ok(System { adjacency })
    }
}

impl<N: GraphNode> Representation<N> for System<N> {
    /// Implicit leaves of `adjacency` become nodes with no outgoing edges.
    fn from_adjacency(adjacency: Adjacency<N>) -> Self {
        System {
            adjacency: close(adjacency),
        }
    }

    fn to_adjacency(&self) -> Adjacency<N> {
        self.adjacency.clone()
    }
}

/// `a >> b` is a copy of `a` with `b` appended.
impl<N: GraphNode> Shr<&System<N>> for &System<N> {
    type Output = GraphResult<System<N>, N>;

    fn shr(self, rhs: &System<N>) -> Self::Output {
        let mut result = self.clone();
        result.append(rhs.clone())?;
        Ok(result)
    }
}
