use anyhow::Result;
use carver_core::filter;

use crate::commands::util::{emit_output, read_input};

/// Filter internal/library edges out of a graph description.
pub fn filter_command(graph: &str, output: Option<&str>) -> Result<()> {
    let text = read_input(graph)?;
    let filtered = filter::filter_graph(&text);
    emit_output(&filtered, output)
}
