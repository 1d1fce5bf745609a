//! Directed call graph built from deduplicated edge lists.
//!
//! A mapping-of-sets is all the traversal needs: adjacency from node name to
//! successor names, plus the set of every node mentioned by any edge. No
//! weights, labels, or metadata are attached to nodes or edges.

use std::collections::{BTreeMap, BTreeSet};

use crate::model::Edge;

/// Directed graph over symbol names.
///
/// Iteration order over nodes and successors is sorted, which keeps root
/// selection and traversal deterministic across runs.
#[derive(Debug, Clone, Default)]
pub struct CallGraph {
    adjacency: BTreeMap<String, BTreeSet<String>>,
    nodes: BTreeSet<String>,
}

impl CallGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from an edge list. Duplicate edges collapse.
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut graph = Self::new();
        for edge in edges {
            graph.add_edge(&edge.source, &edge.target);
        }
        graph
    }

    /// Insert one edge. Inserting the same edge twice is a no-op.
    pub fn add_edge(&mut self, source: &str, target: &str) {
        self.adjacency.entry(source.to_string()).or_default().insert(target.to_string());
        self.nodes.insert(source.to_string());
        self.nodes.insert(target.to_string());
    }

    /// All nodes mentioned by any edge, in sorted order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    /// Direct successors of `node`, in sorted order. A node with no outgoing
    /// edges (or one not in the graph) yields nothing.
    pub fn successors<'a>(&'a self, node: &str) -> impl Iterator<Item = &'a str> {
        self.adjacency.get(node).into_iter().flat_map(|set| set.iter().map(String::as_str))
    }

    pub fn contains(&self, node: &str) -> bool {
        self.nodes.contains(node)
    }

    /// Number of distinct nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
