//! # dagtree
//!
//! Directed acyclic graphs and ordered trees, for building and inspecting workflows.
//!
//! A graph can be written down in three interchangeable
//! [representations](crate::representation):
//!
//! ```text
//!   adjacency                 edges                   matrix
//!
//!   a → {b, d}                (a, b)                      a b c d e
//!   b → {}                    (a, d)                  a [ 0 1 0 1 0 ]
//!   c → {d}                   (c, d)                  b [ 0 0 0 0 0 ]
//!   d → {e}                   (d, e)                  c [ 0 0 0 1 0 ]
//!   e → {}                                            d [ 0 0 0 0 1 ]
//!                                                     e [ 0 0 0 0 0 ]
//! ```
//!
//! and [converted](crate::convert) between them without loss.
//! A [`System`](crate::system::System) holds the adjacency form and supports mutation,
//! composition (merge, append, prepend), subgraph extraction, and enumeration of every path from
//! a root to an endpoint. Those paths can be read off as linear
//! [pipelines](crate::representation::Pipeline): the order in which a consumer should run them.
//!
//! ```rust
//! use dagtree::prelude::*;
//!
//! let edges: Edges<&str> = [("a", "b"), ("c", "d"), ("a", "d"), ("d", "e")]
//!     .into_iter()
//!     .collect();
//! let system = System::from_edges(&edges);
//!
//! assert_eq!(system.root().into_iter().collect::<Vec<_>>(), ["a", "c"]);
//! assert_eq!(system.endpoint().into_iter().collect::<Vec<_>>(), ["b", "e"]);
//! assert_eq!(system.walk(&"a", &"e"), vec![vec!["a", "d", "e"]]);
//! ```
//!
//! A [`Tree`](crate::tree::Tree) is an independent hierarchy of named items with ordered
//! children and parent links, searched in depth-first order.
//!
//! Nodes are identified by value. Use plain names (`&str`, [`String`],
//! [`Identity`](crate::identity::Identity)) or wrap a payload in a
//! [`Node`](crate::identity::Node), which compares by name alone.

pub mod convert;
pub mod dedupe;
pub mod error;
pub mod identity;
pub mod representation;

pub mod system;
pub mod tree;

pub mod prelude {
    //! The types and traits needed to build and query graphs and trees.
    pub use crate::error::*;
    pub use crate::identity::{name_of, Edge, GraphNode, Identity, Named, Node};
    pub use crate::representation::*;
    pub use crate::system::{Selection, System};
    pub use crate::tree::{NodeIndex, Traversal, Tree, TreeNode};
}
