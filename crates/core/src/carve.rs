//! Bounded per-root subgraph extraction.
//!
//! For each root candidate, a breadth-first traversal collects every node
//! within [`HOP_LIMIT`] hops of the root, subject to two rules: ignored
//! (lowercase-initial) symbols never enter the subgraph, and a non-root
//! `*Main` node is absorbed as a leaf but never expanded, so one entry
//! point's carving cannot wander into another subsystem's call tree.
//!
//! Hops count BFS tree depth from the root, not graph-theoretic shortest
//! path: a node first reached at some depth is never re-examined.

use std::collections::{BTreeSet, VecDeque};

use crate::graph::CallGraph;
use crate::model::{Edge, Subgraph};
use crate::symbols;

/// Maximum number of hops explored below a root.
pub const HOP_LIMIT: usize = 3;

/// All root candidates in graph iteration order: `main`, or `*Main`, minus
/// ignored symbols.
pub fn find_root_candidates(graph: &CallGraph) -> Vec<String> {
    graph.nodes().filter(|node| symbols::is_root_candidate(node)).map(str::to_string).collect()
}

/// Collect the nodes reachable from `root` within [`HOP_LIMIT`] hops.
///
/// Nodes first reached at depth [`HOP_LIMIT`] are included but not expanded.
pub fn collect_subgraph_nodes(graph: &CallGraph, root: &str) -> BTreeSet<String> {
    let mut visited = BTreeSet::new();
    let mut frontier = VecDeque::new();

    // The selector never hands over an ignored root, but check anyway.
    if !symbols::is_ignored(root) {
        visited.insert(root.to_string());
        frontier.push_back((root.to_string(), 0usize));
    }

    while let Some((node, depth)) = frontier.pop_front() {
        // A non-root `*Main` node stays a leaf; its call tree belongs to its
        // own subgraph.
        if node != root && node.ends_with(symbols::ENTRY_SUFFIX) {
            continue;
        }

        if depth < HOP_LIMIT {
            for succ in graph.successors(&node) {
                if symbols::is_ignored(succ) {
                    continue;
                }
                if visited.insert(succ.to_string()) {
                    frontier.push_back((succ.to_string(), depth + 1));
                }
            }
        }
    }

    visited
}

/// Retain the edges with both endpoints in `nodes`, minus the outgoing edges
/// of non-root `*Main` nodes. An absorbed entry point appears as a call
/// target only, never as a caller.
pub fn filter_subgraph_edges(edges: &[Edge], nodes: &BTreeSet<String>, root: &str) -> Vec<Edge> {
    edges
        .iter()
        .filter(|edge| nodes.contains(&edge.source) && nodes.contains(&edge.target))
        .filter(|edge| !(edge.source != root && edge.source.ends_with(symbols::ENTRY_SUFFIX)))
        .cloned()
        .collect()
}

/// Carve the subgraph for a single root.
pub fn carve(graph: &CallGraph, edges: &[Edge], root: &str) -> Subgraph {
    let nodes = collect_subgraph_nodes(graph, root);
    let edges = filter_subgraph_edges(edges, &nodes, root);
    Subgraph { root: root.to_string(), nodes, edges }
}

/// Carve one subgraph per root candidate. Empty when the graph has no
/// candidates; each carving uses a fresh visited set, so roots are
/// independent of each other.
pub fn carve_all(edges: &[Edge]) -> Vec<Subgraph> {
    let graph = CallGraph::from_edges(edges);
    find_root_candidates(&graph).iter().map(|root| carve(&graph, edges, root)).collect()
}
