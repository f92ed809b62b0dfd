//! Path enumeration and orderings over a [`System`].
use super::System;
use crate::dedupe::dedupe;
use crate::identity::GraphNode;
use crate::representation::{Pipeline, Pipelines};

use std::collections::{BTreeMap, BTreeSet};

impl<N: GraphNode> System<N> {
    /// Every simple path (no repeated node) from `start` to `stop`.
    ///
    /// Paths are found by depth-first search in successor order, backtracking at dead ends.
    /// `walk(x, x)` is `[[x]]` for any node `x` in the graph. The result is empty when `start`
    /// is not in the graph or cannot reach `stop`.
    ///
    /// There is no bound on the number of paths; dense graphs can have exponentially many.
    pub fn walk(&self, start: &N, stop: &N) -> Vec<Vec<N>> {
        let mut found = Vec::new();
        if self.contains(start) {
            let mut path = vec![start.clone()];
            self.walk_from(start, stop, &mut path, &mut found);
        }
        found
    }

    fn walk_from(&self, node: &N, stop: &N, path: &mut Vec<N>, found: &mut Vec<Vec<N>>) {
        if node == stop {
            found.push(path.clone());
            return;
        }

        for next in self.successors(node).into_iter().flatten() {
            if path.contains(next) {
                continue;
            }
            path.push(next.clone());
            self.walk_from(next, stop, path, found);
            path.pop();
        }
    }

    /// Every path from a root to an endpoint, grouped by root and then by endpoint.
    pub fn paths(&self) -> Vec<Vec<N>> {
        let endpoints = self.endpoint();
        self.root()
            .iter()
            .flat_map(|r| endpoints.iter().flat_map(move |e| self.walk(r, e)))
            .collect()
    }

    /// All of [`System::paths`] concatenated into one sequence, keeping the first visit of each
    /// node.
    pub fn pipeline(&self) -> Pipeline<N> {
        Pipeline(dedupe(self.paths().into_iter().flatten()))
    }

    /// Each of [`System::paths`] as its own pipeline, named `pipeline_<i>`.
    pub fn pipelines(&self) -> Pipelines<N> {
        Pipelines::from_paths(self.paths())
    }

    /// Group nodes into layers: layer 0 holds the roots, and each node sits one layer below the
    /// last of its predecessors.
    ///
    /// Returns `None` if the graph has a cycle.
    pub fn layers(&self) -> Option<Vec<Vec<N>>> {
        let mut indegree: BTreeMap<&N, usize> = self.nodes().map(|n| (n, 0)).collect();
        for (_, stops) in self.adjacency() {
            for stop in stops {
                *indegree.entry(stop).or_default() += 1;
            }
        }

        // The frontier is every node whose predecessors have all been placed.
        let mut frontier: Vec<&N> = indegree
            .iter()
            .filter(|(_, d)| **d == 0)
            .map(|(n, _)| *n)
            .collect();

        let mut layers: Vec<Vec<N>> = Vec::new();
        let mut placed = 0;
        while !frontier.is_empty() {
            let mut next = BTreeSet::new();
            for node in &frontier {
                for stop in self.successors(node).into_iter().flatten() {
                    let d = indegree.entry(stop).or_default();
                    *d -= 1;
                    if *d == 0 {
                        next.insert(stop);
                    }
                }
            }
            placed += frontier.len();
            layers.push(frontier.into_iter().cloned().collect());
            frontier = next.into_iter().collect();
        }

        (placed == self.len()).then_some(layers)
    }

    /// A topological ordering of the nodes, or `None` if the graph has a cycle.
    pub fn topological_order(&self) -> Option<Vec<N>> {
        self.layers().map(|l| l.into_iter().flatten().collect())
    }

    /// True if there is no directed path from any node to itself.
    pub fn is_acyclic(&self) -> bool {
        self.layers().is_some()
    }
}
