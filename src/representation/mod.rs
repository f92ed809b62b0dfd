//! Three interchangeable layouts for a directed graph, plus linear pipelines.
//!
//! - [`Adjacency`]: node → set of successors
//! - [`Edges`]: flat list of `(start, stop)` pairs
//! - [`Matrix`]: square 0/1 grid with row/column labels
//!
//! All conversion goes through the functions in [`crate::convert`]; the [`Representation`]
//! trait only supplies the adjacency round-trip for each type.
pub mod adjacency;
pub mod edges;
pub mod matrix;
pub mod pipeline;
pub mod source;
pub mod traits;

pub use adjacency::*;
pub use edges::*;
pub use matrix::*;
pub use pipeline::*;
pub use source::*;
pub use traits::*;
