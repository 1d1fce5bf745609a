use anyhow::Result;
use carver_core::cflow;

use crate::commands::util::{emit_output, read_input};

/// Convert a cflow trace file into a DOT edge list.
pub fn convert_command(trace: &str, output: Option<&str>) -> Result<()> {
    let text = read_input(trace)?;
    let dot = cflow::trace_to_dot(&text);
    emit_output(&dot, output)
}
