use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use carver_core::{carve, dot};

/// Split a graph description into one `<ROOT>.dot` file per root candidate.
pub fn split_command(graph: &str, out_dir: &str) -> Result<()> {
    let edges = dot::read_edges(Path::new(graph))?;
    let subgraphs = carve::carve_all(&edges);

    // Not an error: a graph without entry points is a valid empty result.
    if subgraphs.is_empty() {
        println!("No root candidates found ('main' or '*Main'). Nothing to do.");
        return Ok(());
    }

    let out_dir = Path::new(out_dir);
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    for sub in &subgraphs {
        let path = dot::write_subgraph(sub, out_dir)
            .with_context(|| format!("Failed to write subgraph for root {}", sub.root))?;
        println!("Generated: {}", path.display());
    }

    Ok(())
}
