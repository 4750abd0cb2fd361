//! Adjacency representation of a simple undirected graph

use crate::subset::SubsetId;
use std::collections::BTreeSet;
use std::fmt;

/// Immutable undirected graph over the vertices `0..n`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    adjacency: Vec<BTreeSet<usize>>,
}

impl Graph {
    /// Create a graph with no edges
    pub fn empty(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            adjacency: vec![BTreeSet::new(); vertex_count],
        }
    }

    /// Build the adjacency sets from a list of undirected edges.
    ///
    /// Vertices must lie in `0..vertex_count`; an out-of-range endpoint is a
    /// caller error and panics. Repeated edges collapse into one.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::empty(vertex_count);
        for (u, v) in edges {
            graph.adjacency[u].insert(v);
            graph.adjacency[v].insert(u);
        }
        graph
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of distinct undirected edges
    pub fn edge_count(&self) -> usize {
        let endpoints: usize = self.adjacency.iter().map(BTreeSet::len).sum();
        let loops = (0..self.vertex_count).filter(|&v| self.is_adjacent(v, v)).count();
        (endpoints + loops) / 2
    }

    /// Neighbors of `v` in increasing order
    #[inline]
    pub fn neighbors(&self, v: usize) -> &BTreeSet<usize> {
        &self.adjacency[v]
    }

    #[inline]
    pub fn is_adjacent(&self, u: usize, v: usize) -> bool {
        self.adjacency[u].contains(&v)
    }

    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    /// Each edge once, as `(u, v)` with `u <= v`, in increasing order
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, neighbors)| neighbors.range(u..).map(move |&v| (u, v)))
            .collect()
    }

    /// Id of the subset holding every vertex
    pub fn universe(&self) -> SubsetId {
        SubsetId::full(self.vertex_count)
    }

    /// Number of vertices outside `infected` adjacent to `v`, and the last such one
    pub fn uninfected_neighbors(&self, v: usize, infected: SubsetId) -> (usize, Option<usize>) {
        let mut count = 0;
        let mut last = None;
        for &u in &self.adjacency[v] {
            if !infected.contains(u) {
                count += 1;
                last = Some(u);
            }
        }
        (count, last)
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, neighbors) in self.adjacency.iter().enumerate() {
            write!(f, "{:3} |", v)?;
            for u in neighbors {
                write!(f, " {}", u)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path3() -> Graph {
        Graph::from_edges(3, [(0, 1), (1, 2)])
    }

    #[test]
    fn test_graph_creation() {
        let graph = path3();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.degree(1), 2);
        assert_eq!(graph.degree(0), 1);
        assert!(graph.is_adjacent(0, 1));
        assert!(graph.is_adjacent(1, 0));
        assert!(!graph.is_adjacent(0, 2));
    }

    #[test]
    fn test_duplicate_edges_collapse() {
        let graph = Graph::from_edges(2, [(0, 1), (1, 0), (0, 1)]);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges(), vec![(0, 1)]);
    }

    #[test]
    fn test_edges_listing() {
        let cycle = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(cycle.edges(), vec![(0, 1), (0, 3), (1, 2), (2, 3)]);
    }

    #[test]
    fn test_uninfected_neighbors() {
        let graph = path3();
        let infected = SubsetId::from_vertices([0, 1]);
        assert_eq!(graph.uninfected_neighbors(1, infected), (1, Some(2)));
        assert_eq!(graph.uninfected_neighbors(0, infected), (0, None));

        let isolated = Graph::empty(2);
        assert_eq!(isolated.uninfected_neighbors(0, SubsetId::EMPTY), (0, None));
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_vertex_panics() {
        Graph::from_edges(2, [(0, 2)]);
    }

    #[test]
    fn test_display() {
        let rendered = path3().to_string();
        assert!(rendered.contains("  1 | 0 2"));
    }
}
