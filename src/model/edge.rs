//! Directed regulatory edge and the ordered edge set.

/// A directed weighted edge `source → target`.
///
/// Gene names borrow from the [`GeneOrder`](super::GeneOrder) the edge was
/// extracted from. `weight` is the raw signed matrix entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge<'g> {
    pub source: &'g str,
    pub target: &'g str,
    pub weight: f64,
}

impl<'g> Edge<'g> {
    pub fn new(source: &'g str, target: &'g str, weight: f64) -> Self {
        Self { source, target, weight }
    }

    /// The ordered `(source, target)` key used for pair-list deduplication.
    pub fn pair(&self) -> (&'g str, &'g str) {
        (self.source, self.target)
    }
}

/// Edges in extraction order (target-major, source-minor). Never sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EdgeSet<'g> {
    edges: Vec<Edge<'g>>,
}

impl<'g> EdgeSet<'g> {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Edge<'g>> {
        self.edges.iter()
    }

    pub fn as_slice(&self) -> &[Edge<'g>] {
        &self.edges
    }
}

impl<'g> From<Vec<Edge<'g>>> for EdgeSet<'g> {
    fn from(edges: Vec<Edge<'g>>) -> Self {
        Self { edges }
    }
}

impl<'a, 'g> IntoIterator for &'a EdgeSet<'g> {
    type Item = &'a Edge<'g>;
    type IntoIter = std::slice::Iter<'a, Edge<'g>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

impl<'g> IntoIterator for EdgeSet<'g> {
    type Item = Edge<'g>;
    type IntoIter = std::vec::IntoIter<Edge<'g>>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}
