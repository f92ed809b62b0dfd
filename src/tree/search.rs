use super::{NodeIndex, Tree, TreeNode};
use crate::error::TreeError;

/// Order in which [`Tree::walk`] visits nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Traversal {
    /// Pre-order: a node, then each child's subtree from left to right.
    #[default]
    DepthFirst,
    /// Level by level. Not supported yet; [`Tree::walk`] returns [`TreeError::Unsupported`].
    BreadthFirst,
}

impl<T> Tree<T> {
    /// Nodes of the subtree at `from`, in the order given by `traversal`.
    pub fn walk(&self, from: NodeIndex, traversal: Traversal) -> Result<Vec<NodeIndex>, TreeError> {
        match traversal {
            Traversal::DepthFirst => Ok(self.preorder(from)),
            Traversal::BreadthFirst => Err(TreeError::Unsupported("breadth-first traversal")),
        }
    }

    /// Pre-order enumeration of the subtree at `from`.
    pub fn preorder(&self, from: NodeIndex) -> Vec<NodeIndex> {
        let mut order = Vec::new();
        let mut stack = vec![from];
        while let Some(i) = stack.pop() {
            order.push(i);
            stack.extend(self.children(i).iter().rev());
        }
        order
    }

    /// Pre-order enumeration of the whole tree, one parentless node after another.
    ///
    /// This works for malformed trees too, so searches never depend on [`Tree::root`].
    pub fn nodes(&self) -> Vec<NodeIndex> {
        self.roots()
            .into_iter()
            .flat_map(|r| self.preorder(r))
            .collect()
    }

    /// Nodes below (and including) `from` which have no children.
    pub fn leaves(&self, from: NodeIndex) -> Vec<NodeIndex> {
        self.preorder(from)
            .into_iter()
            .filter(|&i| self.is_leaf(i))
            .collect()
    }

    /// Nodes below (and including) `from` which have children.
    pub fn branches(&self, from: NodeIndex) -> Vec<NodeIndex> {
        self.preorder(from)
            .into_iter()
            .filter(|&i| !self.is_leaf(i))
            .collect()
    }

    /// The node called `name`, if any.
    pub fn get(&self, name: &str) -> Option<NodeIndex> {
        self.find(|n| n.name().as_str() == name)
    }

    /// The first node in [`Tree::nodes`] order matching `predicate`.
    pub fn find<P>(&self, mut predicate: P) -> Option<NodeIndex>
    where
        P: FnMut(&TreeNode<T>) -> bool,
    {
        self.nodes().into_iter().find(|&i| predicate(self.node(i)))
    }

    /// Every node matching `predicate`, in [`Tree::nodes`] order.
    pub fn find_all<P>(&self, mut predicate: P) -> Vec<NodeIndex>
    where
        P: FnMut(&TreeNode<T>) -> bool,
    {
        self.nodes()
            .into_iter()
            .filter(|&i| predicate(self.node(i)))
            .collect()
    }

    /// Apply `mutator` to the item of every node matching `predicate`, returning how many
    /// were changed.
    ///
    /// Unlike [`Tree::find`], finding nothing is an error.
    ///
    /// # Errors
    ///
    /// [`TreeError::NoMatch`] if no node matches.
    pub fn find_change<P, M>(&mut self, predicate: P, mut mutator: M) -> Result<usize, TreeError>
    where
        P: FnMut(&TreeNode<T>) -> bool,
        M: FnMut(&mut T),
    {
        let found = self.find_all(predicate);
        if found.is_empty() {
            return Err(TreeError::NoMatch);
        }
        for &i in &found {
            mutator(self.item_mut(i));
        }
        Ok(found.len())
    }
}
