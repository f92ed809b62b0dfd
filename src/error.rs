//! Error types for graph and tree operations.
use crate::identity::Identity;
use thiserror::Error;

/// A [`crate::representation::Matrix`] whose grid and labels disagree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// The number of rows differs from the number of labels.
    #[error("matrix has {rows} rows but {labels} labels")]
    LabelMismatch { rows: usize, labels: usize },

    /// A row's length differs from the number of labels.
    #[error("matrix row {row} has length {len}, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A cell holds something other than 0 or 1.
    #[error("matrix cell ({row}, {column}) is neither 0 nor 1")]
    InvalidCell { row: usize, column: usize },
}

/// Errors raised by [`crate::system::System`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError<N> {
    /// `connect(x, x)`.
    #[error("cannot connect node {0:?} to itself")]
    SelfLoop(N),

    /// An operation referenced a node which is not in the graph.
    #[error("unknown node {0:?}")]
    UnknownNode(N),

    /// `subset` was called with neither an include nor an exclude set.
    #[error("subset requires an include or an exclude set")]
    EmptySelection,

    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Errors raised by [`crate::tree::Tree`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("parent {0:?} not found in tree")]
    UnknownParent(Identity),

    #[error("node {0:?} already exists in tree")]
    Duplicate(Identity),

    #[error("tree has no root")]
    NoRoot,

    #[error("tree has {n} roots: {0:?}", n = .0.len())]
    MultipleRoots(Vec<Identity>),

    /// Following parent links from this node never reaches a root.
    #[error("parent links of {0:?} form a cycle")]
    Cycle(Identity),

    /// `find_change` matched nothing.
    #[error("no node matched the predicate")]
    NoMatch,

    #[error("{0} is not supported")]
    Unsupported(&'static str),
}

pub type GraphResult<T, N> = Result<T, GraphError<N>>;
