//! Ordered trees with parent links.
//!
//! A [`Tree`] is an arena of [`TreeNode`]s addressed by [`NodeIndex`]. Children are owned by the
//! arena and listed in insertion order by their parent; the parent link is an index, so there is
//! no ownership cycle.
//!
//! ```rust
//! use dagtree::tree::*;
//!
//! let mut tree = Tree::new_named("project", ());
//! tree.add_named("src", (), None).unwrap();
//! tree.add_named("lib.rs", (), Some("src")).unwrap();
//! tree.add_named("tests", (), None).unwrap();
//!
//! let names: Vec<&str> = tree
//!     .walk(tree.root().unwrap(), Traversal::DepthFirst)
//!     .unwrap()
//!     .into_iter()
//!     .map(|i| tree.node(i).name().as_str())
//!     .collect();
//! assert_eq!(names, vec!["project", "src", "lib.rs", "tests"]);
//! ```
pub mod arena;
pub mod search;

pub use arena::*;
pub use search::*;
