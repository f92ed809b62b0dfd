use super::{Adjacency, Cell, Edges, Matrix, Pipeline, Pipelines};
use crate::convert::*;
use crate::error::MatrixError;
use crate::identity::GraphNode;

/// A type which holds a directed graph in some layout.
///
/// Implementors supply the round-trip through [`Adjacency`]; every other constructor and view
/// is derived from the functions in [`crate::convert`].
///
/// The adjacency view is [`Representation::to_adjacency`] and always returns an owned copy.
/// [`crate::system::System`] also has an inherent `adjacency()` which borrows the map it holds.
pub trait Representation<N: GraphNode>: Sized {
    fn from_adjacency(adjacency: Adjacency<N>) -> Self;

    /// The adjacency view.
    fn to_adjacency(&self) -> Adjacency<N>;

    fn from_edges(edges: &Edges<N>) -> Self {
        Self::from_adjacency(edges_to_adjacency(edges))
    }

    /// # Errors
    ///
    /// Returns a [`MatrixError`] if `matrix` violates its invariants.
    fn from_matrix<C: Cell>(matrix: &Matrix<N, C>) -> Result<Self, MatrixError> {
        Ok(Self::from_adjacency(matrix_to_adjacency(matrix)?))
    }

    fn from_pipeline(pipeline: &Pipeline<N>) -> Self {
        Self::from_adjacency(pipeline_to_adjacency(pipeline))
    }

    fn from_pipelines(pipelines: &Pipelines<N>) -> Self {
        Self::from_adjacency(pipelines_to_adjacency(pipelines))
    }

    /// The edge-list view.
    fn edges(&self) -> Edges<N> {
        adjacency_to_edges(&self.to_adjacency())
    }

    /// The matrix view, with labels in node order.
    fn matrix(&self) -> Matrix<N> {
        adjacency_to_matrix(&self.to_adjacency())
    }
}

impl<N: GraphNode> Representation<N> for Adjacency<N> {
    fn from_adjacency(adjacency: Adjacency<N>) -> Self {
        adjacency
    }

    fn to_adjacency(&self) -> Adjacency<N> {
        self.clone()
    }
}

impl<N: GraphNode> Representation<N> for Edges<N> {
    fn from_adjacency(adjacency: Adjacency<N>) -> Self {
        adjacency_to_edges(&adjacency)
    }

    fn to_adjacency(&self) -> Adjacency<N> {
        edges_to_adjacency(self)
    }

    fn edges(&self) -> Edges<N> {
        self.clone()
    }
}

impl<N: GraphNode, C: Cell> Representation<N> for Matrix<N, C> {
    fn from_adjacency(adjacency: Adjacency<N>) -> Self {
        layout_matrix(&adjacency)
    }

    /// # Panics
    ///
    /// If the public fields were edited into an invalid matrix; check with
    /// [`Matrix::validate`] first, or use [`matrix_to_adjacency`] directly.
    fn to_adjacency(&self) -> Adjacency<N> {
        matrix_to_adjacency(self).expect("invalid matrix: validate before converting")
    }
}
