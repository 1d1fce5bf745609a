//! Core data model (IR) for call-graph edges and carved subgraphs.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A directed call edge: `source` may invoke `target`, as observed in the
/// trace. Edges carry no weight, label, or metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self { source: source.into(), target: target.into() }
    }
}

/// A per-root subgraph: the nodes reachable from `root` under the bounded
/// traversal rules, plus the retained edges among them. Produced fresh per
/// invocation and written out; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subgraph {
    pub root: String,
    pub nodes: BTreeSet<String>,
    pub edges: Vec<Edge>,
}

impl Subgraph {
    /// Summary row for listings.
    pub fn summary(&self) -> RootSummary {
        RootSummary { root: self.root.clone(), nodes: self.nodes.len(), edges: self.edges.len() }
    }
}

/// Per-root-candidate counts reported by the `roots` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootSummary {
    pub root: String,
    pub nodes: usize,
    pub edges: usize,
}
