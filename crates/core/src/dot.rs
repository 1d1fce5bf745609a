//! DOT-ish graph description parsing and rendering.
//!
//! Only the quoted-arrow edge syntax matters to this toolset:
//!
//! ```text
//!     "caller" -> "callee";
//! ```
//!
//! Everything else in the input (digraph headers, attribute lines, comments)
//! is passed over without error. Names are taken verbatim between the first
//! pair of double quotes on each side of the arrow; there is no
//! escape-sequence handling.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::model::{Edge, Subgraph};

/// An edge line: optional leading whitespace, quoted endpoints around an
/// arrow, terminated by a semicolon. Trailing content is tolerated.
static EDGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\s*"([^"]+)"\s*->\s*"([^"]+)";"#).unwrap());

/// Error type for graph file I/O.
#[derive(Debug, Error)]
pub enum DotError {
    #[error("Failed to read graph file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write subgraph file {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Convenience result type for DOT I/O.
pub type DotResult<T> = Result<T, DotError>;

/// Parse one line; `None` when the line is not an edge line.
pub fn parse_edge_line(line: &str) -> Option<Edge> {
    let caps = EDGE_RE.captures(line)?;
    Some(Edge::new(&caps[1], &caps[2]))
}

/// Extract every edge from a graph description, in first-seen order.
///
/// Repeated edges collapse here, so every downstream stage works on a set of
/// edges rather than a multiset.
pub fn parse_edges(text: &str) -> Vec<Edge> {
    let mut seen = HashSet::new();
    let mut edges = Vec::new();
    for line in text.lines() {
        if let Some(edge) = parse_edge_line(line) {
            if seen.insert(edge.clone()) {
                edges.push(edge);
            }
        }
    }
    edges
}

/// Read a graph description file and extract its edges.
pub fn read_edges(path: &Path) -> DotResult<Vec<Edge>> {
    let text = fs::read_to_string(path)
        .map_err(|source| DotError::Read { path: path.to_path_buf(), source })?;
    Ok(parse_edges(&text))
}

/// Render a carved subgraph in the fixed output format: top-to-bottom
/// layout, box-shaped nodes, non-overlapping layout with curved connectors,
/// and the declared root.
pub fn render_subgraph(sub: &Subgraph) -> String {
    let mut out = String::from("digraph cflow {\n");
    out.push_str("    rankdir=TB;\n");
    out.push_str("    node [shape=box];\n");
    out.push_str("    overlap=false;\n");
    out.push_str("    splines=true;\n");
    out.push_str(&format!("    root=\"{}\";\n\n", sub.root));

    for edge in &sub.edges {
        out.push_str(&format!("    \"{}\" -> \"{}\";\n", edge.source, edge.target));
    }

    out.push_str("}\n");
    out
}

/// Write one `<root>.dot` artifact into `dir` and return its path.
pub fn write_subgraph(sub: &Subgraph, dir: &Path) -> DotResult<PathBuf> {
    let path = dir.join(format!("{}.dot", sub.root));
    fs::write(&path, render_subgraph(sub))
        .map_err(|source| DotError::Write { path: path.clone(), source })?;
    Ok(path)
}
