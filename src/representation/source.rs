use super::{Adjacency, Edges, Matrix};
use crate::convert::{edges_to_adjacency, matrix_to_adjacency};
use crate::error::MatrixError;
use crate::identity::GraphNode;
use crate::system::System;

/// Anything a [`System`] can be merged with, resolved once when the value is built.
#[derive(Debug, Clone)]
pub enum GraphSource<N> {
    System(System<N>),
    Adjacency(Adjacency<N>),
    Edges(Edges<N>),
    Matrix(Matrix<N>),
    /// Bare nodes, each with no outgoing edges.
    Nodes(Vec<N>),
}

impl<N: GraphNode> GraphSource<N> {
    /// Normalize to an [`Adjacency`] in which every referenced node is a key.
    pub fn into_adjacency(self) -> Result<Adjacency<N>, MatrixError> {
        Ok(close(self.into_keyed()?))
    }

    /// Normalize to an [`Adjacency`] whose keys are exactly the nodes this source gives
    /// successors for. An [`Adjacency`] source keeps its implicit leaves implicit; every other
    /// source already lists each node it mentions.
    pub(crate) fn into_keyed(self) -> Result<Adjacency<N>, MatrixError> {
        Ok(match self {
            GraphSource::System(s) => s.into_adjacency(),
            GraphSource::Adjacency(a) => a,
            GraphSource::Edges(e) => edges_to_adjacency(&e),
            GraphSource::Matrix(m) => matrix_to_adjacency(&m)?,
            GraphSource::Nodes(nodes) => {
                let mut a = Adjacency::new();
                nodes.into_iter().for_each(|n| a.insert_node(n));
                a
            }
        })
    }
}

/// Insert every implicit leaf of `adjacency` as a key with no successors.
pub(crate) fn close<N: GraphNode>(mut adjacency: Adjacency<N>) -> Adjacency<N> {
    for node in adjacency.all_nodes() {
        adjacency.insert_node(node);
    }
    adjacency
}

impl<N> From<System<N>> for GraphSource<N> {
    fn from(s: System<N>) -> Self {
        GraphSource::System(s)
    }
}

impl<N> From<Adjacency<N>> for GraphSource<N> {
    fn from(a: Adjacency<N>) -> Self {
        GraphSource::Adjacency(a)
    }
}

impl<N> From<Edges<N>> for GraphSource<N> {
    fn from(e: Edges<N>) -> Self {
        GraphSource::Edges(e)
    }
}

impl<N> From<Matrix<N>> for GraphSource<N> {
    fn from(m: Matrix<N>) -> Self {
        GraphSource::Matrix(m)
    }
}

impl<N> From<Vec<N>> for GraphSource<N> {
    fn from(nodes: Vec<N>) -> Self {
        GraphSource::Nodes(nodes)
    }
}
