//! Library-symbol edge filtering for raw call-graph descriptions.
//!
//! Drops edge lines where either endpoint is an internal/library symbol
//! (lowercase-initial) or the assertion helper, keeps every edge touching
//! `main`, and moves the `main` edges to the front of the output. Non-edge
//! lines (headers, attribute lines) pass through untouched.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::symbols;

/// Edge pattern without the trailing-semicolon requirement; the filter also
/// matches edge lines carrying attribute suffixes.
static FILTER_EDGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^\s*"([^"]+)"\s*->\s*"([^"]+)""#).unwrap());

/// Assertion helper whose edges are always dropped.
const ASSERT_SYMBOL: &str = "Assert";

/// True when the line is an edge touching `main`. Such lines are always
/// kept and promoted to the front of the output.
fn touches_main(line: &str) -> bool {
    line.contains("->") && line.contains("\"main\"")
}

/// True when an edge line should be dropped: neither endpoint is `main`,
/// and either endpoint is an ignored symbol or the assertion helper.
fn should_remove(line: &str) -> bool {
    let caps = match FILTER_EDGE_RE.captures(line) {
        Some(caps) => caps,
        None => return false,
    };
    let (left, right) = (&caps[1], &caps[2]);

    if left == symbols::MAIN || right == symbols::MAIN {
        return false;
    }
    symbols::is_ignored(left)
        || symbols::is_ignored(right)
        || left == ASSERT_SYMBOL
        || right == ASSERT_SYMBOL
}

/// Filter a whole graph description. Edges touching `main` come first (in
/// input order), then every other surviving line in input order.
pub fn filter_graph(text: &str) -> String {
    let mut main_lines = Vec::new();
    let mut other_lines = Vec::new();

    for line in text.lines() {
        if touches_main(line) {
            main_lines.push(line);
        } else if !should_remove(line) {
            other_lines.push(line);
        }
    }

    let mut out = String::new();
    for line in main_lines.into_iter().chain(other_lines) {
        out.push_str(line);
        out.push('\n');
    }
    out
}
