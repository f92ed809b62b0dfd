use crate::error::TreeError;
use crate::identity::{name_of, Identity, Named};
use crate::representation::Adjacency;

use std::collections::BTreeMap;
use tracing::trace;

/// Position of a node in a [`Tree`]'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(pub usize);

/// One node of a [`Tree`]: an item, its name, and its links.
#[derive(Debug, Clone)]
pub struct TreeNode<T> {
    name: Identity,
    pub item: T,
    parent: Option<NodeIndex>,
    children: Vec<NodeIndex>,
}

impl<T> TreeNode<T> {
    pub fn name(&self) -> &Identity {
        &self.name
    }

    pub fn parent(&self) -> Option<NodeIndex> {
        self.parent
    }

    pub fn children(&self) -> &[NodeIndex] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// An ordered tree of named items.
///
/// # Invariants
///
/// A well-formed tree has exactly one node without a parent. This is not enforced while the
/// tree is built (see [`Tree::from_links`]); it is checked whenever [`Tree::root`] is called.
/// Names are unique within a tree.
#[derive(Debug, Clone)]
pub struct Tree<T> {
    nodes: Vec<TreeNode<T>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Tree { nodes: vec![] }
    }
}

impl<T> Tree<T> {
    /// A tree with no nodes, hence no root.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A tree holding a single root node.
    pub fn new(item: T) -> Self
    where
        T: Named,
    {
        let name = name_of(&item, None);
        Self::new_named(name, item)
    }

    pub fn new_named(name: impl Into<Identity>, item: T) -> Self {
        Tree {
            nodes: vec![TreeNode {
                name: name.into(),
                item,
                parent: None,
                children: vec![],
            }],
        }
    }

    /// Build a tree from `(name, item, parent name)` triples.
    ///
    /// Children are ordered as they appear in `links`. Nodes with no parent name are roots;
    /// any number of them is accepted here and only reported by [`Tree::root`].
    ///
    /// # Errors
    ///
    /// - [`TreeError::Duplicate`] if a name appears twice
    /// - [`TreeError::UnknownParent`] if a parent name matches no node
    /// - [`TreeError::Cycle`] if parent links loop without reaching a root
    pub fn from_links<I, S>(links: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = (S, T, Option<S>)>,
        S: Into<Identity>,
    {
        let mut tree = Tree::empty();
        let mut index: BTreeMap<Identity, NodeIndex> = BTreeMap::new();
        let mut parents: Vec<Option<Identity>> = Vec::new();

        for (name, item, parent) in links {
            let name = name.into();
            let i = NodeIndex(tree.nodes.len());
            if index.insert(name.clone(), i).is_some() {
                return Err(TreeError::Duplicate(name));
            }
            parents.push(parent.map(Into::into));
            tree.nodes.push(TreeNode {
                name,
                item,
                parent: None,
                children: vec![],
            });
        }

        for (i, parent) in parents.into_iter().enumerate() {
            let Some(parent) = parent else { continue };
            let p = *index
                .get(&parent)
                .ok_or_else(|| TreeError::UnknownParent(parent.clone()))?;
            tree.nodes[i].parent = Some(p);
            tree.nodes[p.0].children.push(NodeIndex(i));
        }

        for i in 0..tree.nodes.len() {
            if tree.depth_checked(NodeIndex(i)).is_none() {
                return Err(TreeError::Cycle(tree.nodes[i].name.clone()));
            }
        }
        Ok(tree)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// # Panics
    ///
    /// If `index` does not belong to this tree.
    pub fn node(&self, index: NodeIndex) -> &TreeNode<T> {
        &self.nodes[index.0]
    }

    pub fn item_mut(&mut self, index: NodeIndex) -> &mut T {
        &mut self.nodes[index.0].item
    }

    pub fn name(&self, index: NodeIndex) -> &Identity {
        &self.nodes[index.0].name
    }

    pub fn parent(&self, index: NodeIndex) -> Option<NodeIndex> {
        self.nodes[index.0].parent
    }

    pub fn children(&self, index: NodeIndex) -> &[NodeIndex] {
        &self.nodes[index.0].children
    }

    pub fn is_leaf(&self, index: NodeIndex) -> bool {
        self.nodes[index.0].is_leaf()
    }

    pub fn is_root(&self, index: NodeIndex) -> bool {
        self.nodes[index.0].is_root()
    }

    /// Number of parent links between `index` and its root.
    pub fn depth(&self, index: NodeIndex) -> usize {
        self.depth_checked(index)
            .expect("parent links of a tree node form a cycle")
    }

    // Bounded by the arena size so a parent cycle terminates.
    fn depth_checked(&self, index: NodeIndex) -> Option<usize> {
        let mut depth = 0;
        let mut current = self.nodes[index.0].parent;
        while let Some(p) = current {
            depth += 1;
            if depth > self.nodes.len() {
                return None;
            }
            current = self.nodes[p.0].parent;
        }
        Some(depth)
    }

    /// Every node without a parent, in arena order.
    pub fn roots(&self) -> Vec<NodeIndex> {
        (0..self.nodes.len())
            .map(NodeIndex)
            .filter(|&i| self.is_root(i))
            .collect()
    }

    /// The unique node without a parent.
    ///
    /// # Errors
    ///
    /// [`TreeError::NoRoot`] or [`TreeError::MultipleRoots`] if the tree does not have exactly one
    /// parentless node.
    pub fn root(&self) -> Result<NodeIndex, TreeError> {
        match self.roots().as_slice() {
            [] => Err(TreeError::NoRoot),
            [root] => Ok(*root),
            many => Err(TreeError::MultipleRoots(
                many.iter().map(|&i| self.name(i).clone()).collect(),
            )),
        }
    }

    /// Attach `item`, named `name`, as the last child of `parent`, or of the root if `parent` is
    /// `None`. Adding to an empty tree with no parent creates the root.
    ///
    /// # Errors
    ///
    /// - [`TreeError::Duplicate`] if `name` is already in the tree
    /// - [`TreeError::UnknownParent`] if `parent` names no node
    /// - the errors of [`Tree::root`] if `parent` is `None` and the tree is not well formed
    pub fn add_named(
        &mut self,
        name: impl Into<Identity>,
        item: T,
        parent: Option<&str>,
    ) -> Result<NodeIndex, TreeError> {
        let name = name.into();
        if self.nodes.iter().any(|n| n.name == name) {
            return Err(TreeError::Duplicate(name));
        }

        let parent = match parent {
            Some(p) => Some(
                self.get(p)
                    .ok_or_else(|| TreeError::UnknownParent(Identity::from(p)))?,
            ),
            None if self.is_empty() => None,
            None => Some(self.root()?),
        };

        trace!(name = %name, parent = ?parent.map(|p| self.name(p)), "add tree node");
        let index = NodeIndex(self.nodes.len());
        self.nodes.push(TreeNode {
            name,
            item,
            parent,
            children: vec![],
        });
        if let Some(p) = parent {
            self.nodes[p.0].children.push(index);
        }
        Ok(index)
    }

    /// [`Tree::add_named`] with the name derived from `item`.
    pub fn add(&mut self, item: T, parent: Option<&str>) -> Result<NodeIndex, TreeError>
    where
        T: Named,
    {
        let name = name_of(&item, None);
        self.add_named(name, item, parent)
    }

    /// [`Tree::add`] each item in turn under the same parent.
    ///
    /// Items added before a failing one stay in the tree.
    pub fn add_all(
        &mut self,
        items: impl IntoIterator<Item = T>,
        parent: Option<&str>,
    ) -> Result<Vec<NodeIndex>, TreeError>
    where
        T: Named,
    {
        items
            .into_iter()
            .map(|item| self.add(item, parent))
            .collect()
    }

    /// Parent → children edges between node names. Leaves are keys with no successors.
    pub fn adjacency(&self) -> Adjacency<Identity> {
        self.nodes
            .iter()
            .map(|n| {
                let children: Vec<Identity> =
                    n.children.iter().map(|&c| self.name(c).clone()).collect();
                (n.name.clone(), children)
            })
            .collect()
    }
}
