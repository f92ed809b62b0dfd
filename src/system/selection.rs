use std::collections::BTreeSet;

/// Which nodes [`super::System::subset`] keeps.
///
/// `include` is a whitelist and is applied first; `exclude` is a blacklist applied to what
/// remains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<N> {
    pub include: Option<BTreeSet<N>>,
    pub exclude: Option<BTreeSet<N>>,
}

impl<N> Default for Selection<N> {
    fn default() -> Self {
        Selection {
            include: None,
            exclude: None,
        }
    }
}

impl<N: Ord> Selection<N> {
    pub fn new(include: Option<BTreeSet<N>>, exclude: Option<BTreeSet<N>>) -> Self {
        Selection { include, exclude }
    }

    pub fn include(nodes: impl IntoIterator<Item = N>) -> Self {
        Selection {
            include: Some(nodes.into_iter().collect()),
            exclude: None,
        }
    }

    pub fn exclude(nodes: impl IntoIterator<Item = N>) -> Self {
        Selection {
            include: None,
            exclude: Some(nodes.into_iter().collect()),
        }
    }

    pub fn and_exclude(mut self, nodes: impl IntoIterator<Item = N>) -> Self {
        self.exclude
            .get_or_insert_with(BTreeSet::new)
            .extend(nodes);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_none() && self.exclude.is_none()
    }

    pub fn keeps(&self, node: &N) -> bool {
        self.include.as_ref().map_or(true, |i| i.contains(node))
            && !self.exclude.as_ref().is_some_and(|e| e.contains(node))
    }
}
