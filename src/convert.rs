//! Pure conversions between graph representations.
//!
//! Every conversion is routed through [`Adjacency`]; the composite conversions
//! ([`edges_to_matrix`], [`matrix_to_edges`]) are written as such.
//!
//! Converting to an [`Adjacency`] and back preserves the edge set. Because [`Adjacency`] is
//! ordered, edge lists come out sorted by `(start, stop)` and matrix labels in node order, but
//! callers comparing representations should compare edge sets rather than positions.
use crate::error::MatrixError;
use crate::identity::{Edge, GraphNode};
use crate::representation::{Adjacency, Cell, Edges, Matrix, Pipeline, Pipelines};

use std::collections::BTreeMap;

/// Build an [`Adjacency`] from a list of edges. Both ends of every edge become keys; duplicate
/// edges collapse.
///
/// ```rust
/// # use dagtree::convert::*;
/// # use dagtree::representation::*;
/// let edges: Edges<&str> = [("a", "b"), ("a", "b"), ("b", "c")].into_iter().collect();
/// let adjacency = edges_to_adjacency(&edges);
/// assert_eq!(adjacency.len(), 3);
/// assert_eq!(adjacency.edge_count(), 2);
/// ```
pub fn edges_to_adjacency<N: GraphNode>(edges: &Edges<N>) -> Adjacency<N> {
    let mut adjacency = Adjacency::new();
    for Edge { start, stop } in edges {
        adjacency.insert_edge(start.clone(), stop.clone());
    }
    adjacency
}

/// Read the edges out of a [`Matrix`].
///
/// Every label becomes a key, including labels whose row is all zeros.
///
/// # Errors
///
/// Returns a [`MatrixError`] if the grid is not square, its size differs from the number of
/// labels, or a cell is neither zero nor one.
pub fn matrix_to_adjacency<N: GraphNode, C: Cell>(
    matrix: &Matrix<N, C>,
) -> Result<Adjacency<N>, MatrixError> {
    matrix.validate()?;

    let mut adjacency = Adjacency::new();
    for (i, start) in matrix.labels.iter().enumerate() {
        adjacency.insert_node(start.clone());
        for (j, stop) in matrix.labels.iter().enumerate() {
            if matrix.get(i, j) {
                adjacency.insert_edge(start.clone(), stop.clone());
            }
        }
    }
    Ok(adjacency)
}

/// Flatten an [`Adjacency`] into `(node, successor)` pairs.
pub fn adjacency_to_edges<N: GraphNode>(adjacency: &Adjacency<N>) -> Edges<N> {
    adjacency
        .iter()
        .flat_map(|(start, stops)| {
            stops
                .iter()
                .map(move |stop| Edge::new(start.clone(), stop.clone()))
        })
        .collect()
}

/// Lay out an [`Adjacency`] as a [`Matrix`].
///
/// Labels are every node mentioned by `adjacency` in node order; implicit leaves get a row of
/// zeros so that no edge is lost.
pub fn adjacency_to_matrix<N: GraphNode>(adjacency: &Adjacency<N>) -> Matrix<N> {
    layout_matrix(adjacency)
}

/// [`adjacency_to_matrix`] with any cell type.
pub(crate) fn layout_matrix<N: GraphNode, C: Cell>(adjacency: &Adjacency<N>) -> Matrix<N, C> {
    let labels: Vec<N> = adjacency.all_nodes().into_iter().collect();
    let index: BTreeMap<&N, usize> = labels.iter().enumerate().map(|(i, n)| (n, i)).collect();

    let mut matrix: Matrix<N, C> = Matrix::zeros(labels.clone());
    for (start, stops) in adjacency {
        let i = index[start];
        for stop in stops {
            matrix.set(i, index[stop]);
        }
    }
    matrix
}

/// Treat a sequence of nodes as a chain: each consecutive pair becomes an edge.
///
/// A single-node pipeline is one key with no successors; an empty one is the empty adjacency.
pub fn pipeline_to_adjacency<N: GraphNode>(pipeline: &Pipeline<N>) -> Adjacency<N> {
    let mut adjacency = Adjacency::new();
    pipeline
        .iter()
        .for_each(|n| adjacency.insert_node(n.clone()));
    for pair in pipeline.0.windows(2) {
        adjacency.insert_edge(pair[0].clone(), pair[1].clone());
    }
    adjacency
}

/// The union of the chain graphs of every pipeline. Shared nodes keep all their successors.
pub fn pipelines_to_adjacency<N: GraphNode>(pipelines: &Pipelines<N>) -> Adjacency<N> {
    let mut adjacency = Adjacency::new();
    for (_, pipeline) in pipelines.iter() {
        for (node, stops) in pipeline_to_adjacency(pipeline) {
            adjacency.0.entry(node).or_default().extend(stops);
        }
    }
    adjacency
}

pub fn edges_to_matrix<N: GraphNode>(edges: &Edges<N>) -> Matrix<N> {
    adjacency_to_matrix(&edges_to_adjacency(edges))
}

pub fn matrix_to_edges<N: GraphNode, C: Cell>(
    matrix: &Matrix<N, C>,
) -> Result<Edges<N>, MatrixError> {
    Ok(adjacency_to_edges(&matrix_to_adjacency(matrix)?))
}
