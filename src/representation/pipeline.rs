/// A linear sequence of nodes: one path through a graph, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipeline<N>(pub Vec<N>);

impl<N> Default for Pipeline<N> {
    fn default() -> Self {
        Pipeline(vec![])
    }
}

impl<N> Pipeline<N> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, N> {
        self.0.iter()
    }
}

impl<N> FromIterator<N> for Pipeline<N> {
    fn from_iter<T: IntoIterator<Item = N>>(iter: T) -> Self {
        Pipeline(iter.into_iter().collect())
    }
}

impl<N> IntoIterator for Pipeline<N> {
    type Item = N;
    type IntoIter = std::vec::IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, N> IntoIterator for &'a Pipeline<N> {
    type Item = &'a N;
    type IntoIter = std::slice::Iter<'a, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// An ordered collection of named [`Pipeline`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pipelines<N> {
    entries: Vec<(String, Pipeline<N>)>,
}

impl<N> Default for Pipelines<N> {
    fn default() -> Self {
        Pipelines { entries: vec![] }
    }
}

impl<N> Pipelines<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name each path `pipeline_<i>` in the order given.
    pub fn from_paths(paths: impl IntoIterator<Item = Vec<N>>) -> Self {
        paths
            .into_iter()
            .enumerate()
            .map(|(i, path)| (format!("pipeline_{i}"), Pipeline(path)))
            .collect()
    }

    /// Append a pipeline, replacing any existing pipeline with the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, pipeline: Pipeline<N>) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = pipeline,
            None => self.entries.push((name, pipeline)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Pipeline<N>> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Pipeline<N>)> {
        self.entries.iter().map(|(n, p)| (n.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N, S: Into<String>> FromIterator<(S, Pipeline<N>)> for Pipelines<N> {
    fn from_iter<T: IntoIterator<Item = (S, Pipeline<N>)>>(iter: T) -> Self {
        let mut pipelines = Pipelines::new();
        for (name, p) in iter {
            pipelines.insert(name, p);
        }
        pipelines
    }
}
