//! Reading and writing graph descriptions
//!
//! The text format is a stream of whitespace-separated integers: the vertex
//! count, the edge count, then one `u v` pair per edge (0-indexed).

use super::Graph;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use std::str::SplitWhitespace;
use thiserror::Error;

/// Errors produced while parsing a graph description
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphParseError {
    #[error("unexpected end of input while reading {0}")]
    MissingToken(&'static str),

    #[error("invalid {what} '{token}': expected a non-negative integer")]
    InvalidInteger { what: &'static str, token: String },

    #[error("edge {index} ({u}, {v}) references a vertex outside 0..{vertex_count}")]
    VertexOutOfRange {
        index: usize,
        u: usize,
        v: usize,
        vertex_count: usize,
    },

    #[error("graph has {vertex_count} vertices, more than the limit of {limit}")]
    TooManyVertices { vertex_count: usize, limit: usize },
}

struct Tokens<'a> {
    inner: SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn next_usize(&mut self, what: &'static str) -> Result<usize, GraphParseError> {
        let token = self.inner.next().ok_or(GraphParseError::MissingToken(what))?;
        token.parse().map_err(|_| GraphParseError::InvalidInteger {
            what,
            token: token.to_string(),
        })
    }
}

/// Parse a graph from its text description.
///
/// Anything after the last edge is ignored.
pub fn parse_graph_from_string(content: &str, max_vertices: usize) -> Result<Graph, GraphParseError> {
    let mut tokens = Tokens {
        inner: content.split_whitespace(),
    };

    let vertex_count = tokens.next_usize("vertex count")?;
    if vertex_count > max_vertices {
        return Err(GraphParseError::TooManyVertices {
            vertex_count,
            limit: max_vertices,
        });
    }

    let edge_count = tokens.next_usize("edge count")?;
    let mut edges = Vec::with_capacity(edge_count.min(vertex_count * vertex_count));

    for index in 0..edge_count {
        let u = tokens.next_usize("edge endpoint")?;
        let v = tokens.next_usize("edge endpoint")?;
        if u >= vertex_count || v >= vertex_count {
            return Err(GraphParseError::VertexOutOfRange {
                index,
                u,
                v,
                vertex_count,
            });
        }
        edges.push((u, v));
    }

    Ok(Graph::from_edges(vertex_count, edges))
}

/// Read a graph description from any reader (typically stdin)
pub fn read_graph<R: Read>(mut reader: R, max_vertices: usize) -> Result<Graph> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .context("Failed to read graph description")?;

    Ok(parse_graph_from_string(&content, max_vertices)?)
}

/// Load a graph from a text file
pub fn load_graph_from_file<P: AsRef<Path>>(path: P, max_vertices: usize) -> Result<Graph> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read graph file: {}", path.as_ref().display()))?;

    parse_graph_from_string(&content, max_vertices)
        .with_context(|| format!("Failed to parse graph from file: {}", path.as_ref().display()))
}

/// Convert a graph to its text description
pub fn graph_to_string(graph: &Graph) -> String {
    let edges = graph.edges();
    let mut result = format!("{}\n{}\n", graph.vertex_count(), edges.len());
    for (u, v) in edges {
        result.push_str(&format!("{} {}\n", u, v));
    }
    result
}

/// Save a graph to a text file
pub fn save_graph_to_file<P: AsRef<Path>>(graph: &Graph, path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, graph_to_string(graph))
        .with_context(|| format!("Failed to write graph to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Create example graph files
pub fn create_example_graphs<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let examples = [
        ("path3.txt", Graph::from_edges(3, [(0, 1), (1, 2)])),
        ("cycle4.txt", Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)])),
        ("empty2.txt", Graph::empty(2)),
        ("star4.txt", Graph::from_edges(4, [(0, 1), (0, 2), (0, 3)])),
        (
            "complete4.txt",
            Graph::from_edges(4, [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]),
        ),
    ];

    for (name, graph) in &examples {
        save_graph_to_file(graph, dir.join(name))
            .with_context(|| format!("Failed to write {}", name))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_graph_from_string() {
        let graph = parse_graph_from_string("3\n2\n0 1\n1 2\n", 20).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.is_adjacent(2, 1));
    }

    #[test]
    fn test_whitespace_is_free_form() {
        let graph = parse_graph_from_string("  4 2   0 1\n\n 2\t3 trailing", 20).unwrap();
        assert_eq!(graph.edges(), vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn test_graph_to_string() {
        let graph = Graph::from_edges(3, [(1, 2), (0, 1)]);
        assert_eq!(graph_to_string(&graph), "3\n2\n0 1\n1 2\n");
        assert_eq!(graph_to_string(&Graph::empty(0)), "0\n0\n");
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            parse_graph_from_string("", 20),
            Err(GraphParseError::MissingToken("vertex count"))
        );
        assert_eq!(
            parse_graph_from_string("3 2 0 1", 20),
            Err(GraphParseError::MissingToken("edge endpoint"))
        );
        assert!(matches!(
            parse_graph_from_string("3 x", 20),
            Err(GraphParseError::InvalidInteger { what: "edge count", .. })
        ));
        assert!(matches!(
            parse_graph_from_string("3 1 0 -1", 20),
            Err(GraphParseError::InvalidInteger { .. })
        ));
        assert_eq!(
            parse_graph_from_string("2 1 0 2", 20),
            Err(GraphParseError::VertexOutOfRange {
                index: 0,
                u: 0,
                v: 2,
                vertex_count: 2
            })
        );
        assert_eq!(
            parse_graph_from_string("30 0", 20),
            Err(GraphParseError::TooManyVertices {
                vertex_count: 30,
                limit: 20
            })
        );
    }

    #[test]
    fn test_read_graph_from_reader() {
        let input = "2\n1\n0 1\n".as_bytes();
        let graph = read_graph(input, 20).unwrap();
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("nested/graph.txt");

        let original = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        save_graph_to_file(&original, &file_path).unwrap();

        let loaded = load_graph_from_file(&file_path, 20).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_create_example_graphs() {
        let temp_dir = tempdir().unwrap();
        create_example_graphs(temp_dir.path()).unwrap();

        for name in ["path3.txt", "cycle4.txt", "empty2.txt", "star4.txt", "complete4.txt"] {
            assert!(temp_dir.path().join(name).exists(), "{} missing", name);
        }

        let cycle = load_graph_from_file(temp_dir.path().join("cycle4.txt"), 20).unwrap();
        assert_eq!(cycle.vertex_count(), 4);
        assert_eq!(cycle.edge_count(), 4);
    }
}
