//! cflow trace parsing and DOT conversion.
//!
//! A cflow trace line carries a line number, indentation encoding the call
//! nesting depth (four spaces per level), and the function signature:
//!
//! ```text
//!      1 main: int (int argc, char *argv[]), <src/backend/main/main.c 71>
//!      2     pgwin32_install_crashdump_handler: <>
//!      3     startup_hacks: void (const char *progname), <src/backend/main/main.c 283>
//!      4         setvbuf: <>
//! ```
//!
//! The converter reconstructs caller/callee edges from the nesting and
//! renders them as a deduplicated DOT edge list.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::Edge;

/// Spaces of indentation per nesting level in cflow output.
const INDENT_WIDTH: usize = 4;

/// A trace line: leading whitespace, the line number, then the indented body.
static TRACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\d+)(.*)$").unwrap());

/// Parse one trace line into `(nesting_level, function_name)`.
///
/// `None` for lines without a leading line number or without a function
/// name. The name is everything before the first `:` (the rest is the
/// signature and source location); lines like `someFunc <>` have no `:` and
/// the whole body is the name.
pub fn parse_trace_line(line: &str) -> Option<(usize, String)> {
    let line = line.trim_end();
    if line.is_empty() {
        return None;
    }

    let caps = TRACE_RE.captures(line)?;
    let rest = &caps[2];

    let body = rest.trim_start();
    let indent = rest.len() - body.len();
    let level = indent / INDENT_WIDTH;

    let name = match body.split_once(':') {
        Some((name, _)) => name.trim(),
        None => body,
    };
    if name.is_empty() {
        return None;
    }

    Some((level, name.to_string()))
}

/// Reconstruct call edges from a whole trace using the nesting stack.
///
/// Duplicate calls collapse; first-seen order is preserved.
pub fn trace_to_edges(text: &str) -> Vec<Edge> {
    let mut edges = Vec::new();
    let mut seen = HashSet::new();
    let mut stack: Vec<(usize, String)> = Vec::new();

    for line in text.lines() {
        let (level, name) = match parse_trace_line(line) {
            Some(parsed) => parsed,
            None => continue,
        };

        // Unwind to the innermost frame shallower than this line.
        while stack.last().map_or(false, |(depth, _)| *depth >= level) {
            stack.pop();
        }

        if level > 0 {
            if let Some((_, caller)) = stack.last() {
                let edge = Edge::new(caller.clone(), name.clone());
                if seen.insert(edge.clone()) {
                    edges.push(edge);
                }
            }
        }

        stack.push((level, name));
    }

    edges
}

/// Render a trace's call edges as a DOT digraph (top-to-bottom, box nodes).
pub fn trace_to_dot(text: &str) -> String {
    let mut out = String::from("digraph cflow {\n");
    out.push_str("    rankdir=TB;\n");
    out.push_str("    node [shape=box];\n");

    for edge in trace_to_edges(text) {
        out.push_str(&format!("    \"{}\" -> \"{}\";\n", edge.source, edge.target));
    }

    out.push_str("}\n");
    out
}
