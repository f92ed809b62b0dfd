use crate::error::MatrixError;
use num_traits::{One, Zero};

/// Numeric types usable as matrix cells: `0` means no edge, `1` means an edge.
pub trait Cell: Zero + One + PartialEq + Clone {}

impl<C: Zero + One + PartialEq + Clone> Cell for C {}

/// An adjacency matrix.
///
/// # Invariants
///
/// - `grid.len() == labels.len()`
/// - every row of `grid` has length `labels.len()`
/// - every cell is zero or one
///
/// `grid[i][j]` is one exactly when there is an edge `labels[i] → labels[j]`.
/// These are checked by [`Matrix::new`] and [`Matrix::validate`]; the fields are public so a
/// matrix read from elsewhere can be assembled directly and validated later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<N, C = u8> {
    pub grid: Vec<Vec<C>>,
    pub labels: Vec<N>,
}

impl<N, C: Cell> Matrix<N, C> {
    pub fn new(grid: Vec<Vec<C>>, labels: Vec<N>) -> Result<Self, MatrixError> {
        let m = Matrix { grid, labels };
        m.validate()?;
        Ok(m)
    }

    /// The `n×n` matrix of zeros over `labels`.
    pub fn zeros(labels: Vec<N>) -> Self {
        let n = labels.len();
        Matrix {
            grid: vec![vec![C::zero(); n]; n],
            labels,
        }
    }

    pub fn validate(&self) -> Result<(), MatrixError> {
        let n = self.labels.len();
        if self.grid.len() != n {
            return Err(MatrixError::LabelMismatch {
                rows: self.grid.len(),
                labels: n,
            });
        }

        let one = C::one();
        for (row, cells) in self.grid.iter().enumerate() {
            if cells.len() != n {
                return Err(MatrixError::NotSquare {
                    row,
                    len: cells.len(),
                    expected: n,
                });
            }
            if let Some(column) = cells.iter().position(|c| !c.is_zero() && *c != one) {
                return Err(MatrixError::InvalidCell { row, column });
            }
        }
        Ok(())
    }

    /// Number of labels (rows).
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// True if there is an edge from row `i` to column `j`. Out-of-range indices are `false`.
    pub fn get(&self, i: usize, j: usize) -> bool {
        self.grid
            .get(i)
            .and_then(|row| row.get(j))
            .is_some_and(|c| *c == C::one())
    }

    pub(crate) fn set(&mut self, i: usize, j: usize) {
        self.grid[i][j] = C::one();
    }
}
