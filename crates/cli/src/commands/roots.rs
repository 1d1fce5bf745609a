use std::path::Path;

use anyhow::{Context, Result};
use carver_core::model::RootSummary;
use carver_core::{carve, dot};

/// List root candidates and their subgraph sizes without writing files.
pub fn roots_command(graph: &str, json: bool) -> Result<()> {
    let edges = dot::read_edges(Path::new(graph))?;
    let summaries: Vec<RootSummary> =
        carve::carve_all(&edges).iter().map(|sub| sub.summary()).collect();

    if json {
        let serialized = serde_json::to_string_pretty(&summaries)
            .context("Failed to serialize root summaries to JSON")?;
        println!("{}", serialized);
        return Ok(());
    }

    println!("Root candidates ({}):", summaries.len());
    if summaries.is_empty() {
        println!("  (none)");
        return Ok(());
    }

    for summary in summaries {
        println!("  - {} [nodes: {}, edges: {}]", summary.root, summary.nodes, summary.edges);
    }

    Ok(())
}
