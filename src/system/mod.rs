//! A mutable directed acyclic graph held as an [`crate::representation::Adjacency`].
//!
//! ```rust
//! use dagtree::prelude::*;
//!
//! let mut s = System::new();
//! s.connect("fetch", "parse").unwrap();
//! s.connect("parse", "store").unwrap();
//! s.connect("fetch", "audit").unwrap();
//!
//! assert_eq!(s.root().into_iter().collect::<Vec<_>>(), vec!["fetch"]);
//! assert_eq!(
//!     s.paths(),
//!     vec![vec!["fetch", "audit"], vec!["fetch", "parse", "store"]]
//! );
//! ```
pub mod arrow;
pub mod selection;
pub mod walk;

pub use arrow::*;
pub use selection::*;
